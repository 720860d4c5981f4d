//! User prompt functions for interactive CLI input.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use crate::error::SessionError;

/// Print `prompt` without a newline and read one line back.
///
/// Only the line terminator is removed; surrounding whitespace is kept.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, SessionError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SessionError::InputClosed);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

/// Parse an age as a base-10 integer.
///
/// Accepts surrounding whitespace, a leading sign and single underscores
/// between digits. Values past the `i64` range saturate.
pub fn parse_age(text: &str) -> Result<i64, SessionError> {
    let invalid = |reason: &str| SessionError::InvalidAge {
        input: text.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty input"));
    }

    let (negative, body) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == '_') {
        return Err(invalid("not a number"));
    }
    if body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return Err(invalid("misplaced digit separator"));
    }

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    let signed = if negative { format!("-{}", digits) } else { digits };

    match signed.parse::<i64>() {
        Ok(age) => Ok(age),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(invalid(&e.to_string())),
        },
    }
}
