//! Yes/no confirmation on an interactive stream

use std::io::{self, BufRead, Write};

/// Returns true if `answer` confirms, i.e. is `y` or `yes` in any case
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Write `question` and read one line of answer.
///
/// End of input counts as a refusal.
pub fn ask_confirmation<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(writer, "{}", question)?;
    writer.flush()?;

    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}
