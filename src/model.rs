use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    Unit,
    Full,
    RealExam,
}

impl QuizMode {
    /// How many questions this mode draws from the candidate pool.
    /// Unit practice runs the entire unit pool, uncapped.
    pub fn cap(self, pool_size: usize) -> usize {
        match self {
            QuizMode::RealExam => pool_size.min(20),
            QuizMode::Full => pool_size.min(50),
            QuizMode::Unit => pool_size,
        }
    }

    /// Progress bucket key for sessions without a unit filter.
    pub fn slug(self) -> &'static str {
        match self {
            QuizMode::Unit => "unit",
            QuizMode::Full => "full",
            QuizMode::RealExam => "real",
        }
    }

    pub fn intro_line(self) -> &'static str {
        match self {
            QuizMode::Unit => "Starting unit practice. Good luck!",
            QuizMode::Full => "Starting full practice. Good luck!",
            QuizMode::RealExam => "Starting real exam mode. Good luck!",
        }
    }
}

/// One record of the static question bank.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub unit: u32,
    pub prompt: String,
    #[serde(flatten)]
    pub body: QuestionBody,
    pub explanation: String,
    #[serde(default)]
    pub source: Option<String>,
}

/// Per-kind payload. The `kind` tag selects the grading rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionBody {
    TrueFalse { answer: bool },
    MultipleChoice { options: Vec<String>, answer: String },
    FillInBlank { answer: String },
}

/// A value submitted from the quiz view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Answer {
    Bool(bool),
    Text(String),
}

impl Question {
    /// Applies the grading rule for this question's kind. A submission of
    /// the wrong shape for the kind is simply incorrect.
    pub fn grade(&self, answer: &Answer) -> bool {
        match (&self.body, answer) {
            (QuestionBody::TrueFalse { answer: correct }, Answer::Bool(given)) => given == correct,
            (QuestionBody::MultipleChoice { answer: correct, .. }, Answer::Text(given)) => {
                given == correct
            }
            (QuestionBody::FillInBlank { answer: correct }, Answer::Text(given)) => {
                given.trim().to_lowercase() == correct.trim().to_lowercase()
            }
            _ => false,
        }
    }

    /// The correct answer as shown in the review list.
    pub fn correct_label(&self) -> String {
        match &self.body {
            QuestionBody::TrueFalse { answer } => {
                if *answer { "True" } else { "False" }.to_string()
            }
            QuestionBody::MultipleChoice { answer, .. } => answer.clone(),
            QuestionBody::FillInBlank { answer } => answer.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Menu,
    Quiz,
    Results,
}
