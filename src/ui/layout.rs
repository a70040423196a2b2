use egui::{Button, Context, ProgressBar, Ui, Vec2, Visuals};

use crate::QuizApp;
use crate::ui::helpers::format_time;

/// Quiz header: position in the set, the exam clock, the exit button and
/// the progress bar.
pub fn quiz_top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("quiz_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some((number, total)) = app.question_number() {
                ui.label(format!("Question {number} of {total}"));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔙 Exit").clicked() {
                    app.back_to_menu();
                }
                if app.timer_active() {
                    let time_left = app.session.as_ref().map(|s| s.time_left()).unwrap_or(0);
                    ui.label(format!("⏰ {}", format_time(time_left)));
                }
            });
        });
        if let Some(session) = app.session.as_ref() {
            ui.add(ProgressBar::new(session.progress_fraction()).desired_height(8.0));
        }
        ui.add_space(4.0);
    });
}

/// Theme and narration toggles, always visible.
pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
            let mute_label = if app.stats.muted {
                "🔇 Narration off"
            } else {
                "🔊 Narration on"
            };
            if ui.button(mute_label).clicked() {
                app.toggle_mute();
            }
        });
    });
}

/// Two same-sized buttons on one centred row. Returns (left, right).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
        clicked_left = ui
            .add_sized([btn_w, 44.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 44.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}
