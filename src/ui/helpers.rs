// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

/// `m:ss`, the way the exam clock is printed.
pub fn format_time(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// One answer option. After the reveal the correct option turns green, a
/// wrong pick turns red, and every option stops reacting to clicks.
pub fn answer_button(
    ui: &mut Ui,
    label: &str,
    width: f32,
    revealed: bool,
    is_correct: bool,
    is_selected: bool,
) -> bool {
    let text = if revealed && is_correct {
        format!("✅ {label}")
    } else if revealed && is_selected {
        format!("❌ {label}")
    } else {
        label.to_string()
    };
    let mut button = Button::new(RichText::new(text).size(16.0)).min_size(Vec2::new(width, 44.0));
    if revealed {
        if is_correct {
            button = button.fill(Color32::from_rgb(22, 101, 52));
        } else if is_selected {
            button = button.fill(Color32::from_rgb(153, 27, 27));
        }
    }
    ui.add_enabled(!revealed, button).clicked()
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn exam_clock_prints_minutes_and_padded_seconds() {
        assert_eq!(format_time(1800), "30:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(0), "0:00");
    }
}
