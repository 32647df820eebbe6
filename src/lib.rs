pub mod error;
pub mod game;
pub mod model;
pub mod source;
pub mod view;
