use std::fmt::Display;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{NUM_CATEGORIES, NUM_CLUES};
use crate::error::GameError;

/// Position of one clue on the board: `(category column, clue row)`, both
/// zero-based. The UI boundary carries this as the string `"<cat>-<clue>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellAddress {
    pub category: usize,
    pub clue: usize,
}

impl CellAddress {
    pub fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

impl Display for CellAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

fn parse_index(part: &str) -> Option<usize> {
    // strict decimal: no signs, no whitespace
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for CellAddress {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidAddress(s.to_string());

        let (category, clue) = s.split('-').collect_tuple().ok_or_else(invalid)?;
        let category = parse_index(category).ok_or_else(invalid)?;
        let clue = parse_index(clue).ok_or_else(invalid)?;

        if category >= NUM_CATEGORIES || clue >= NUM_CLUES {
            return Err(invalid());
        }

        Ok(CellAddress { category, clue })
    }
}
