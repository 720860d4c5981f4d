//! CLI argument parsing and user prompts.

mod args;
mod prompts;

pub use args::{parse_args, print_usage, CliCommand, VERSION};
pub use prompts::{parse_age, prompt_line};
