use log::trace;

use crate::error::Result;
use crate::model::{Board, CellAddress, CellUpdate};

/// Routes one cell activation from the UI boundary into the addressed
/// clue's state machine. `raw_id` is the serialized address attached to the
/// rendered cell (`"<category>-<clue>"`).
///
/// `Ok(Some(update))` carries the text the view should show, `Ok(None)`
/// means the activation was a defined no-op (cell already fully revealed).
/// A malformed or out-of-range id fails `InvalidAddress` and leaves every
/// cell untouched.
pub fn handle_cell_activation(board: &mut Board, raw_id: &str) -> Result<Option<CellUpdate>> {
    let address: CellAddress = raw_id.parse()?;
    activate_cell(board, address)
}

/// Typed counterpart of [`handle_cell_activation`]; still bounds-checks the
/// address against the board.
pub fn activate_cell(board: &mut Board, address: CellAddress) -> Result<Option<CellUpdate>> {
    let clue = board.cell_mut(&address)?;
    let update = clue.reveal().map(|text| CellUpdate {
        address,
        text: text.to_string(),
    });
    let showing = clue.showing;
    trace!(
        target: "input_router",
        "activated {}: now {:?}, update {}",
        address,
        showing,
        if update.is_some() { "emitted" } else { "suppressed" }
    );
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::model::{Category, Clue, RevealState, NUM_CATEGORIES, NUM_CLUES};

    fn test_board() -> Board {
        let categories = (0..NUM_CATEGORIES)
            .map(|c| {
                Category::new(
                    format!("Category {}", c),
                    (0..NUM_CLUES)
                        .map(|q| Clue::new(format!("q{}-{}", c, q), format!("a{}-{}", c, q)))
                        .collect(),
                )
            })
            .collect();
        Board::new(categories)
    }

    #[test]
    fn test_activation_sequence_for_one_cell() {
        let mut board = test_board();

        let update = handle_cell_activation(&mut board, "2-3").unwrap().unwrap();
        assert_eq!(update.address, CellAddress::new(2, 3));
        assert_eq!(update.text, "q2-3");
        assert_eq!(
            board.cell(&CellAddress::new(2, 3)).unwrap().showing,
            RevealState::Question
        );

        let update = handle_cell_activation(&mut board, "2-3").unwrap().unwrap();
        assert_eq!(update.text, "a2-3");
        assert_eq!(
            board.cell(&CellAddress::new(2, 3)).unwrap().showing,
            RevealState::Answer
        );

        // third activation is a no-op, state stays terminal
        assert_eq!(handle_cell_activation(&mut board, "2-3").unwrap(), None);
        assert_eq!(
            board.cell(&CellAddress::new(2, 3)).unwrap().showing,
            RevealState::Answer
        );
    }

    #[test]
    fn test_activation_touches_only_the_addressed_cell() {
        let mut board = test_board();
        handle_cell_activation(&mut board, "2-3").unwrap();

        for category in 0..NUM_CATEGORIES {
            for clue in 0..NUM_CLUES {
                let address = CellAddress::new(category, clue);
                let expected = if (category, clue) == (2, 3) {
                    RevealState::Question
                } else {
                    RevealState::Hidden
                };
                assert_eq!(board.cell(&address).unwrap().showing, expected);
            }
        }
    }

    #[test]
    fn test_invalid_address_leaves_board_playable() {
        let mut board = test_board();
        assert_eq!(
            handle_cell_activation(&mut board, "six-five"),
            Err(GameError::InvalidAddress("six-five".to_string()))
        );

        // the failed activation changed nothing; a valid one still works
        let update = handle_cell_activation(&mut board, "0-0").unwrap().unwrap();
        assert_eq!(update.text, "q0-0");
    }
}
