use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Category, CellAddress, Clue, RevealState};
use crate::error::{GameError, Result};

pub const NUM_CATEGORIES: usize = 6;
pub const NUM_CLUES: usize = 5;

/// One game's full grid: exactly `NUM_CATEGORIES` categories of exactly
/// `NUM_CLUES` clues. Built fresh per game start; the previous board is
/// simply dropped by whoever owned it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub categories: Vec<Category>,
    pub game_id: Uuid,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            game_id: Uuid::new_v4(),
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.title.clone()).collect()
    }

    /// All cell addresses in render order: row by row, left to right,
    /// matching the original table layout.
    pub fn addresses(&self) -> Vec<CellAddress> {
        let mut addresses = Vec::with_capacity(NUM_CATEGORIES * NUM_CLUES);
        for clue in 0..NUM_CLUES {
            for category in 0..NUM_CATEGORIES {
                addresses.push(CellAddress::new(category, clue));
            }
        }
        addresses
    }

    pub fn cell(&self, address: &CellAddress) -> Result<&Clue> {
        self.categories
            .get(address.category)
            .and_then(|category| category.clues.get(address.clue))
            .ok_or_else(|| GameError::InvalidAddress(address.to_string()))
    }

    pub fn cell_mut(&mut self, address: &CellAddress) -> Result<&mut Clue> {
        self.categories
            .get_mut(address.category)
            .and_then(|category| category.clues.get_mut(address.clue))
            .ok_or_else(|| GameError::InvalidAddress(address.to_string()))
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output = String::new();
        output.push('\n');

        for category in &self.categories {
            output.push_str(&format!("{:<24}|", category.title));
        }
        output.push('\n');
        output.push_str(&"-".repeat(self.categories.len() * 25));
        output.push('\n');

        for clue in 0..NUM_CLUES {
            for category in &self.categories {
                let marker = match category.clues.get(clue).map(|c| c.showing) {
                    Some(RevealState::Hidden) => "?",
                    Some(RevealState::Question) => "Q",
                    Some(RevealState::Answer) => "A",
                    None => "!",
                };
                output.push_str(&format!("{:<24}|", marker));
            }
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}
