//! CLI argument parsing.

use std::io;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the binary was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    Run,
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Basics Tour - Interactive walkthrough of branching and loops");
    eprintln!();
    eprintln!("Usage: basics-tour [OPTIONS]");
    eprintln!();
    eprintln!("Prompts for a name and an age on standard input.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG               Log filter for stderr diagnostics (default: warn)");
}

/// Parse CLI arguments (without the program name)
pub fn parse_args<I>(args: I) -> io::Result<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let mut command = CliCommand::Run;

    for arg in args {
        if arg == "-h" || arg == "--help" {
            return Ok(CliCommand::Help);
        } else if arg == "-V" || arg == "--version" {
            command = CliCommand::Version;
        } else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_empty_runs() {
        assert_eq!(parse_args(args(&[])).unwrap(), CliCommand::Run);
    }

    #[test]
    fn test_parse_args_help() {
        assert_eq!(parse_args(args(&["-h"])).unwrap(), CliCommand::Help);
        assert_eq!(parse_args(args(&["--help"])).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_parse_args_version() {
        assert_eq!(parse_args(args(&["-V"])).unwrap(), CliCommand::Version);
        assert_eq!(parse_args(args(&["--version"])).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_args_help_wins_over_version() {
        assert_eq!(parse_args(args(&["-V", "-h"])).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_parse_args_unknown() {
        let err = parse_args(args(&["--name", "Sam"])).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("--name"));
    }
}
