//! Line-based input and output capabilities.
//!
//! The engine never touches stdin or stdout directly; it talks to these
//! traits so tests can script a whole match.

use std::io::{self, Write};

/// A blocking line-based input provider.
pub trait Input {
    /// Shows `prompt` and blocks until a line is available, returning
    /// it trimmed of surrounding whitespace.
    fn ask(&mut self, prompt: &str) -> String;
}

/// A line-based output sink.
pub trait Output {
    /// Emits one line of text.
    fn line(&mut self, text: &str);
}

/// [`Input`] over stdin.
///
/// The prompt is written without a trailing newline and flushed before
/// reading. A read error degrades to an empty answer, which the
/// engine's prompt loops reject like any other invalid token.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdInput;

impl Input for StdInput {
    fn ask(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return String::new();
        }
        answer.trim().to_string()
    }
}

/// [`Output`] over stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdOutput;

impl Output for StdOutput {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}
