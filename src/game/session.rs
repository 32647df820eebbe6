use log::{info, warn};

use super::board_builder::BoardBuilder;
use super::input_router;
use crate::error::{GameError, Result};
use crate::model::Board;
use crate::source::DataSource;
use crate::view::ViewSink;

/// The cell text shown before any reveal, as on the original board.
pub const PLACEHOLDER: &str = "?";

/// Owns the single current board and drives the view. Starting a game
/// replaces the whole board; a failed start leaves the previous board (and
/// its rendered state) untouched. Callers are expected to serialize
/// `start_game` calls; this session never interleaves two builds.
pub struct GameSession<S: DataSource, V: ViewSink> {
    builder: BoardBuilder<S>,
    view: V,
    board: Option<Board>,
}

impl<S: DataSource, V: ViewSink> GameSession<S, V> {
    pub fn new(builder: BoardBuilder<S>, view: V) -> Self {
        Self {
            builder,
            view,
            board: None,
        }
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Builds a fresh board and renders it. The board is only swapped in
    /// and rendered once fully assembled; nothing partial ever reaches the
    /// view.
    pub async fn start_game(&mut self) -> Result<()> {
        let board = match self.builder.build_board().await {
            Ok(board) => board,
            Err(err) => {
                warn!(target: "session", "game start failed: {}", err);
                return Err(err);
            }
        };

        info!(target: "session", "starting game {}", board.game_id);
        self.view.render_header(&board.titles());
        self.view.render_board(&board.addresses(), PLACEHOLDER);
        self.board = Some(board);
        Ok(())
    }

    /// Routes one activation from the UI and forwards any produced cell
    /// update to the view. A no-op activation renders nothing.
    pub fn activate_cell(&mut self, raw_id: &str) -> Result<()> {
        let board = self
            .board
            .as_mut()
            .ok_or_else(|| GameError::InvalidAddress(raw_id.to_string()))?;

        if let Some(update) = input_router::handle_cell_activation(board, raw_id)? {
            self.view.set_cell_text(&update.address, &update.text);
        }
        Ok(())
    }
}
