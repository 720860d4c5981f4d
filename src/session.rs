//! The interactive session: greeting, name, counting, fruits, age, farewell.
//!
//! Every step writes to a caller-supplied writer so the whole transcript can
//! be captured in memory.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::cli::{parse_age, prompt_line};
use crate::error::SessionError;
use crate::models::{AgeBracket, FRUITS};
use crate::utils::capitalize_first;

pub const GREETING: &str = "Hello! Let's try some basic Python features.";
pub const NAME_PROMPT: &str = "Please enter your name: ";
pub const AGE_PROMPT: &str = "\nPlease enter your age: ";
pub const FAREWELL: &str = "Thanks for trying this basic program! Goodbye!";

/// Run one session from greeting to farewell.
///
/// An unparseable age ends the session early and the farewell is not printed.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), SessionError> {
    debug!("session started");

    greet(output)?;

    let name = prompt_line(input, output, NAME_PROMPT)?;
    welcome(output, &name)?;

    count(output)?;
    list_fruits(output)?;

    let age_text = prompt_line(input, output, AGE_PROMPT)?;
    let age = parse_age(&age_text).inspect_err(|e| warn!(error = %e, "age rejected"))?;
    let bracket = AgeBracket::from_age(age);
    debug!(age, ?bracket, "age classified");
    writeln!(output, "{}", bracket.message())?;

    farewell(output)?;
    output.flush()?;

    debug!("session finished");
    Ok(())
}

fn greet<W: Write>(output: &mut W) -> Result<(), SessionError> {
    writeln!(output, "{}", GREETING)?;
    Ok(())
}

/// Empty name means guest; anything else is echoed verbatim.
pub fn welcome_line(name: &str) -> String {
    if name.is_empty() {
        "Welcome, guest!".to_string()
    } else {
        format!("Welcome, {}!", name)
    }
}

fn welcome<W: Write>(output: &mut W, name: &str) -> Result<(), SessionError> {
    debug!(guest = name.is_empty(), "name read");
    writeln!(output, "{}", welcome_line(name))?;
    Ok(())
}

fn count<W: Write>(output: &mut W) -> Result<(), SessionError> {
    writeln!(output)?;
    writeln!(output, "Counting from 1 to 5:")?;
    for number in 1..=5 {
        writeln!(output, "{}", number)?;
    }
    Ok(())
}

fn list_fruits<W: Write>(output: &mut W) -> Result<(), SessionError> {
    writeln!(output)?;
    writeln!(output, "My favorite fruits:")?;
    for fruit in FRUITS {
        writeln!(output, "{}", capitalize_first(fruit))?;
    }
    Ok(())
}

fn farewell<W: Write>(output: &mut W) -> Result<(), SessionError> {
    writeln!(output)?;
    writeln!(output, "{}", FAREWELL)?;
    Ok(())
}
