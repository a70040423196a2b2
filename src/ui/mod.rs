pub mod confetti;
pub mod helpers;
pub mod layout;
pub mod views;

use eframe::{App, Frame};
use egui::Context;

use crate::app::QuizApp;
use crate::model::AppState;
use confetti::Confetti;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Exam clock, driven off the frame time. Leaving the quiz view
        // drops the tick anchor, so a stale frame cannot touch a newer
        // session.
        if self.timer_active() {
            self.advance_timer(ctx.input(|i| i.time));
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        } else {
            self.cancel_timer();
        }

        if self.state == AppState::Quiz {
            layout::quiz_top_panel(self, ctx);
        }
        layout::bottom_panel(self, ctx);

        // Dispatch by state to the view functions
        match self.state {
            AppState::Menu => views::menu::ui_menu(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }

        // A real-exam pass queues exactly one confetti burst
        if self.celebrate {
            self.confetti = Some(Confetti::burst(ctx));
            self.celebrate = false;
        }
        if let Some(confetti) = &mut self.confetti {
            if !confetti.show(ctx) {
                self.confetti = None;
            }
        }
    }
}
