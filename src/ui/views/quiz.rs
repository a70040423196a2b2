use egui::{Align, Button, CentralPanel, Color32, Context, Frame, RichText, ScrollArea, Stroke, TextEdit};

use crate::QuizApp;
use crate::model::{Answer, AppState, QuestionBody};
use crate::ui::helpers::answer_button;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(session) = app.session.as_ref() else {
        // no live session behind the quiz view; fall back to the menu
        app.state = AppState::Menu;
        return;
    };
    let question = session.current_question().clone();
    let revealed = session.revealed();
    let selected = session.selected().cloned();
    let at_last = session.at_last();

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            let max_width = 720.0;
            let panel_width = (ui.available_width() * 0.97).min(max_width);

            ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                // shrinks symmetrically under the centred layout
                ui.set_max_width(panel_width);
                ui.add_space(20.0);
                ui.label(RichText::new(&question.prompt).size(20.0).strong());
                ui.add_space(18.0);

                match &question.body {
                    QuestionBody::TrueFalse { answer } => {
                        let half = (panel_width - 8.0) / 2.0;
                        ui.horizontal(|ui| {
                            ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
                            let clicked_true = answer_button(
                                ui,
                                "True",
                                half,
                                revealed,
                                *answer,
                                selected == Some(Answer::Bool(true)),
                            );
                            let clicked_false = answer_button(
                                ui,
                                "False",
                                half,
                                revealed,
                                !*answer,
                                selected == Some(Answer::Bool(false)),
                            );
                            if clicked_true {
                                app.submit_answer(Answer::Bool(true));
                            }
                            if clicked_false {
                                app.submit_answer(Answer::Bool(false));
                            }
                        });
                    }
                    QuestionBody::MultipleChoice { options, answer } => {
                        for option in options {
                            let is_selected =
                                matches!(&selected, Some(Answer::Text(t)) if t == option);
                            if answer_button(
                                ui,
                                option,
                                panel_width,
                                revealed,
                                option == answer,
                                is_selected,
                            ) {
                                app.submit_answer(Answer::Text(option.clone()));
                            }
                            ui.add_space(6.0);
                        }
                    }
                    QuestionBody::FillInBlank { .. } => {
                        ui.add(
                            TextEdit::singleline(&mut app.answer_input)
                                .desired_width(panel_width)
                                .hint_text("Type answer here")
                                .interactive(!revealed),
                        );
                        ui.add_space(10.0);
                        let can_submit = !revealed && !app.answer_input.trim().is_empty();
                        let submit = ui.add_enabled(
                            can_submit,
                            Button::new("Submit").min_size(egui::vec2(180.0, 40.0)),
                        );
                        if submit.clicked() {
                            let text = app.answer_input.clone();
                            app.submit_answer(Answer::Text(text));
                        }
                    }
                }

                if revealed {
                    let was_correct = selected
                        .as_ref()
                        .map(|a| question.grade(a))
                        .unwrap_or(false);
                    let accent = if was_correct {
                        Color32::from_rgb(34, 197, 94)
                    } else {
                        Color32::from_rgb(239, 68, 68)
                    };

                    ui.add_space(16.0);
                    Frame::default()
                        .stroke(Stroke::new(2.0, accent))
                        .inner_margin(egui::Margin::symmetric(14, 10))
                        .show(ui, |ui| {
                            ui.set_width(panel_width);
                            ui.label(
                                RichText::new(if was_correct { "✅ Correct!" } else { "❌ Incorrect" })
                                    .size(18.0)
                                    .strong()
                                    .color(accent),
                            );
                            ui.add_space(4.0);
                            ui.label(format!("Explanation: {}", question.explanation));
                            if let Some(source) = &question.source {
                                ui.label(RichText::new(format!("Source: {source}")).weak());
                            }
                        });

                    ui.add_space(12.0);
                    let next_label = if at_last {
                        "See Results ▶"
                    } else {
                        "Next Question ▶"
                    };
                    if ui
                        .add_sized([280.0_f32.min(panel_width), 44.0], Button::new(next_label))
                        .clicked()
                    {
                        app.next_question();
                    }
                }

                ui.add_space(24.0);
            });
        });
    });
}
