//! Line input shared by the interactive commands

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line
///
/// Returns `None` at end of input.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed or the input cannot be read.
pub fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// True for a yes-like answer
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}
