use crate::model::{CellAddress, NUM_CATEGORIES};

/// Render target the game drives. Implementations are synchronous and
/// infallible from the game's perspective; whatever a real frontend does
/// about rendering failures is its own business.
pub trait ViewSink {
    /// One title per category, in board order.
    fn render_header(&mut self, titles: &[String]);

    /// Fresh grid of cells, every one showing `placeholder`. Addresses
    /// arrive in render order (row by row).
    fn render_board(&mut self, addresses: &[CellAddress], placeholder: &str);

    /// Replace one cell's text.
    fn set_cell_text(&mut self, address: &CellAddress, text: &str);
}

/// Stdout sink used by the demo binary.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl ViewSink for ConsoleView {
    fn render_header(&mut self, titles: &[String]) {
        println!("{}", titles.join(" | "));
    }

    fn render_board(&mut self, addresses: &[CellAddress], placeholder: &str) {
        for row in addresses.chunks(NUM_CATEGORIES) {
            let cells: Vec<String> = row
                .iter()
                .map(|address| format!("[{} {}]", address, placeholder))
                .collect();
            println!("{}", cells.join(" "));
        }
    }

    fn set_cell_text(&mut self, address: &CellAddress, text: &str) {
        println!("[{}] {}", address, text);
    }
}
