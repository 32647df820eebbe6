use super::CellAddress;

/// Render command produced by routing a cell activation: set the addressed
/// cell's text. An activation that produces no update (already-revealed
/// answer) yields no command at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub address: CellAddress,
    pub text: String,
}
