//! Terminal Twenty-One.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{StdInput, StdOutput, TwentyOneGame};

fn main() -> ExitCode {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut game = TwentyOneGame::with_seed(StdInput, StdOutput, seed);
    match game.start() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("game error: {err}");
            ExitCode::FAILURE
        }
    }
}
