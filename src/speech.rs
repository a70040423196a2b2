/// Fire-and-forget narration. Real speech only exists in the browser
/// build; the native build logs the line and moves on. Unavailable or
/// failing speech APIs are ignored: narration never blocks the quiz.
#[derive(Default)]
pub struct Narrator;

impl Narrator {
    pub fn speak(&self, text: &str, muted: bool) {
        if muted || text.is_empty() {
            return;
        }
        self.speak_impl(text);
    }

    #[cfg(target_arch = "wasm32")]
    fn speak_impl(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(synth) = window.speech_synthesis() else {
            return;
        };
        // drop whatever is still being read before starting the new line
        synth.cancel();
        if let Ok(utterance) = web_sys::SpeechSynthesisUtterance::new_with_text(text) {
            utterance.set_rate(0.9);
            synth.speak(&utterance);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn speak_impl(&self, text: &str) {
        log::debug!("narration: {text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muted_narration_is_a_no_op() {
        // nothing observable to assert natively beyond "does not panic"
        Narrator.speak("Starting unit practice. Good luck!", true);
        Narrator.speak("", false);
        Narrator.speak("Question text", false);
    }
}
