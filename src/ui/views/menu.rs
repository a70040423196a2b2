use egui::{Align, Button, CentralPanel, Color32, Context, RichText, ScrollArea};

use crate::QuizApp;
use crate::model::QuizMode;
use crate::ui::layout::big_list_button;

pub fn ui_menu(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            let max_width = 760.0;
            let content_width = ui.available_width().min(max_width);

            ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                ui.add_space(24.0);
                ui.heading(
                    RichText::new("🚌 Minnesota School Bus (S) Endorsement Training 2026")
                        .size(26.0)
                        .strong(),
                );
                ui.add_space(6.0);
                ui.label("Free interactive practice • Real exam simulation • Progress tracking");
                ui.add_space(20.0);

                let btn_w = (content_width * 0.9).clamp(240.0, 560.0);
                let real = ui.add_sized(
                    [btn_w, 56.0],
                    Button::new(
                        RichText::new("🏆 Real Exam Mode\n20 random questions • 30 min timer • 16 to pass")
                            .size(15.0),
                    ),
                );
                ui.add_space(8.0);
                let full = ui.add_sized(
                    [btn_w, 56.0],
                    Button::new(RichText::new("📋 Full Practice Test\nUp to 50 questions, untimed").size(15.0)),
                );
                if real.clicked() {
                    app.start_quiz(QuizMode::RealExam, None);
                }
                if full.clicked() {
                    app.start_quiz(QuizMode::Full, None);
                }

                ui.add_space(24.0);
                ui.heading("Practice by Unit");
                ui.add_space(8.0);

                for card in app.unit_cards() {
                    let label = format!(
                        "{} Unit {} — {}\nProgress: {}% ({}/{})",
                        card.badge,
                        card.id,
                        card.title,
                        card.tally.percent(),
                        card.tally.correct,
                        card.tally.total,
                    );
                    if big_list_button(ui, label, btn_w, 52.0) {
                        app.start_quiz(QuizMode::Unit, Some(card.id));
                    }
                    ui.add_space(6.0);
                }

                ui.add_space(16.0);
                ui.label(format!(
                    "Exams Passed: {} | Total Correct Answers: {}",
                    app.stats.exams_passed, app.stats.total_correct
                ));

                if !app.message.is_empty() {
                    ui.add_space(10.0);
                    ui.label(RichText::new(&app.message).color(Color32::YELLOW).strong());
                }
                ui.add_space(24.0);
            });
        });
    });
}
