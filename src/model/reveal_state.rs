use serde::{Deserialize, Serialize};

/// Per-clue reveal progress. Only ever advances Hidden -> Question -> Answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub fn is_terminal(&self) -> bool {
        *self == RevealState::Answer
    }
}
