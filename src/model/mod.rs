mod board;
mod category;
mod cell_address;
mod cell_update;
mod clue;
mod reveal_state;

pub use board::{Board, NUM_CATEGORIES, NUM_CLUES};
pub use category::Category;
pub use cell_address::CellAddress;
pub use cell_update::CellUpdate;
pub use clue::Clue;
pub use reveal_state::RevealState;
