use egui::{Color32, Context, Id, LayerId, Order, Pos2, Vec2};
use rand::Rng;

const PARTICLE_COUNT: usize = 200;
const LIFE_SECONDS: f32 = 3.0;
const GRAVITY: f32 = 340.0;

struct Particle {
    pos: Pos2,
    vel: Vec2,
    color: Color32,
    radius: f32,
}

/// Celebration overlay for a passed exam: one burst from the lower middle
/// of the screen, painted above everything, gone after a few seconds.
pub struct Confetti {
    particles: Vec<Particle>,
    spawned_at: Option<f64>,
}

impl Confetti {
    pub fn burst(ctx: &Context) -> Self {
        let rect = ctx.screen_rect();
        let origin = Pos2::new(rect.center().x, rect.height() * 0.6);
        let palette = [
            Color32::from_rgb(250, 204, 21),
            Color32::from_rgb(59, 130, 246),
            Color32::from_rgb(34, 197, 94),
            Color32::from_rgb(239, 68, 68),
            Color32::from_rgb(168, 85, 247),
        ];
        let mut rng = rand::thread_rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                // upward cone, roughly a 70 degree spread
                let angle = -std::f32::consts::FRAC_PI_2 + rng.gen_range(-0.6..0.6);
                let speed = rng.gen_range(220.0..640.0);
                Particle {
                    pos: origin,
                    vel: Vec2::angled(angle) * speed,
                    color: palette[rng.gen_range(0..palette.len())],
                    radius: rng.gen_range(2.0..4.5),
                }
            })
            .collect();
        Self {
            particles,
            spawned_at: None,
        }
    }

    /// Advances and paints one frame. Returns `false` once spent, at which
    /// point the caller drops the burst.
    pub fn show(&mut self, ctx: &Context) -> bool {
        let now = ctx.input(|i| i.time);
        let start = *self.spawned_at.get_or_insert(now);
        let age = (now - start) as f32;
        if age > LIFE_SECONDS {
            return false;
        }
        let dt = ctx.input(|i| i.stable_dt).min(0.1);
        let fade = 1.0 - age / LIFE_SECONDS;
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("confetti")));
        for p in &mut self.particles {
            p.vel.y += GRAVITY * dt;
            p.pos += p.vel * dt;
            painter.circle_filled(p.pos, p.radius, p.color.gamma_multiply(fade));
        }
        ctx.request_repaint();
        true
    }
}
