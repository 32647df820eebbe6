use std::io::{self, BufRead, Write};

use futures::executor::block_on;

use triviaboard::game::{BoardBuilder, GameSession};
use triviaboard::source::SampleDataSource;
use triviaboard::view::ConsoleView;

fn init_logging() {
    env_logger::init();
}

/// Plays the trivia board in the terminal against the canned sample
/// catalog. Click a cell by typing its address ("2-3"), `new` restarts,
/// `quit` exits.
fn main() {
    init_logging();

    let builder = BoardBuilder::new(SampleDataSource::new());
    let mut session = GameSession::new(builder, ConsoleView);

    if let Err(err) = block_on(session.start_game()) {
        eprintln!("could not start game: {}", err);
        std::process::exit(1);
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match line.trim() {
            "" => continue,
            "quit" => break,
            "new" => {
                if let Err(err) = block_on(session.start_game()) {
                    eprintln!("could not start game: {}", err);
                }
            }
            raw_id => {
                if let Err(err) = session.activate_cell(raw_id) {
                    eprintln!("{}", err);
                }
            }
        }
    }
}
