pub mod board_builder;
pub mod input_router;
pub mod session;

pub use board_builder::{BoardBuilder, DEFAULT_POOL_SIZE};
pub use input_router::{activate_cell, handle_cell_activation};
pub use session::{GameSession, PLACEHOLDER};
