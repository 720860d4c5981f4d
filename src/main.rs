use std::io;

use anyhow::{Context, Result};

mod cli;
mod error;
mod logging;
mod models;
mod session;
mod utils;

use cli::CliCommand;

fn main() -> Result<()> {
    logging::init_tracing();

    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            cli::print_usage();
            return Err(e).context("failed to parse arguments");
        }
    };

    match command {
        CliCommand::Help => cli::print_usage(),
        CliCommand::Version => println!("basics-tour {}", cli::VERSION),
        CliCommand::Run => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout().lock();
            session::run(&mut input, &mut output)?;
        }
    }

    Ok(())
}
