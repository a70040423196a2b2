use egui::{Align, CentralPanel, Color32, Context, Frame, RichText, ScrollArea, Stroke};

use crate::QuizApp;
use crate::data::unit_title;
use crate::model::{AppState, QuizMode};
use crate::ui::layout::two_button_row;

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(session) = app.session.as_ref() else {
        app.state = AppState::Menu;
        return;
    };
    let Some(outcome) = session.outcome().cloned() else {
        // a results view without an outcome means the session never ended
        app.state = AppState::Menu;
        return;
    };
    let mode = session.mode;
    let unit = session.unit;
    let real_exam = mode == QuizMode::RealExam;
    let missed = session.missed().to_vec();

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            let max_width = 720.0;
            let panel_width = ui.available_width().min(max_width);

            ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                ui.set_max_width(panel_width);
                ui.add_space(28.0);
                ui.heading(
                    RichText::new(if outcome.passed {
                        "🎉 Congratulations! You Passed!"
                    } else {
                        "Keep Practicing"
                    })
                    .size(28.0)
                    .strong(),
                );
                ui.add_space(12.0);
                ui.label(
                    RichText::new(format!("{} / {}", outcome.score, outcome.total))
                        .size(44.0)
                        .strong(),
                );
                ui.label(RichText::new(format!("{}% Correct", outcome.percentage)).size(22.0));
                if outcome.passed && real_exam {
                    ui.add_space(8.0);
                    ui.label(RichText::new("🏆").size(72.0));
                }

                if !missed.is_empty() {
                    ui.add_space(20.0);
                    ui.heading(format!("Questions to Review ({})", missed.len()));
                    ui.add_space(8.0);
                    for q in &missed {
                        Frame::default()
                            .stroke(Stroke::new(1.5, Color32::from_rgb(239, 68, 68)))
                            .inner_margin(egui::Margin::symmetric(12, 8))
                            .show(ui, |ui| {
                                ui.set_width(panel_width);
                                ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                                    ui.label(
                                        RichText::new(format!(
                                            "Unit {} — {}",
                                            q.unit,
                                            unit_title(q.unit)
                                        ))
                                        .weak(),
                                    );
                                    ui.label(RichText::new(&q.prompt).strong());
                                    ui.label(format!("Correct Answer: {}", q.correct_label()));
                                    ui.label(RichText::new(&q.explanation).weak());
                                });
                            });
                        ui.add_space(8.0);
                    }
                }

                ui.add_space(16.0);
                let (retry, back) =
                    two_button_row(ui, panel_width.min(560.0), "🔁 Try Again", "🔙 Back to Menu");
                if retry {
                    app.start_quiz(mode, unit);
                }
                if back {
                    app.back_to_menu();
                }
                ui.add_space(24.0);
            });
        });
    });
}
