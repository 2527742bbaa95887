//! Live adapter for the `Prompter` port reading from stdin.

use std::io::{self, BufRead, Write};

use crate::ports::prompt::Prompter;

/// Prompter that writes to stderr and reads a line from stdin.
///
/// Prompts go to stderr so piped stdout stays machine-readable.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&self, prompt: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        eprint!("{prompt} ");
        io::stderr().flush().map_err(|e| format!("failed to flush prompt: {e}"))?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| format!("failed to read input: {e}"))?;
        if read == 0 {
            return Err("input closed before an answer was given".into());
        }
        Ok(line.trim().to_string())
    }
}
