use serde::{Deserialize, Serialize};

use super::RevealState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::Hidden,
        }
    }

    /// Advances the reveal state machine one step and returns the text to
    /// display, if any. A clue already showing its answer stays put and
    /// produces no text; the activation is an ignored input, not an error.
    pub fn reveal(&mut self) -> Option<&str> {
        match self.showing {
            RevealState::Hidden => {
                self.showing = RevealState::Question;
                Some(&self.question)
            }
            RevealState::Question => {
                self.showing = RevealState::Answer;
                Some(&self.answer)
            }
            RevealState::Answer => None,
        }
    }
}
