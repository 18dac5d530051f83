//! Command-line argument parsing.
//!
//! Only the global options are parsed by `clap`; the remaining words are kept
//! verbatim and classified by [`cher_core::commands::classify`].

use clap::builder::FalseyValueParser;
use clap::Parser;

/// Command-line arguments for the cher CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cher_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cher", "add", "go", "rust"]);
/// assert_eq!(args.arguments, vec!["add", "go", "rust"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "cher", version, about = "Compose .editorconfig files from per-language snippets")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Root directory holding the language directories and settings.
    ///
    /// If not provided, defaults to `Cher` inside the user configuration directory.
    #[arg(long, short = 'c', env = "CHER_CONFIG_DIR")]
    pub config_dir: Option<String>,

    /// Print the received arguments and parsed commands before running.
    #[arg(long, short = 'd', env = "CHER_DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// The command followed by its arguments, e.g. `add go rust`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub arguments: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["cher"]);

        assert!(args.config_dir.is_none());
        assert!(args.arguments.is_empty());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["cher", "-c", "/custom/Cher", "-d", "list"]);

        assert_eq!(args.config_dir, Some("/custom/Cher".to_string()));
        assert!(args.debug);
        assert_eq!(args.arguments, vec!["list"]);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from(["cher", "--config-dir", "/custom/Cher", "--debug", "init"]);

        assert_eq!(args.config_dir, Some("/custom/Cher".to_string()));
        assert!(args.debug);
        assert_eq!(args.arguments, vec!["init"]);
    }

    #[test]
    fn test_args_keep_command_words_verbatim() {
        let args = Args::parse_from(["cher", "add", "go", "help", "-x"]);
        assert_eq!(args.arguments, vec!["add", "go", "help", "-x"]);
    }

    #[test]
    fn test_args_short_command_aliases() {
        let args = Args::parse_from(["cher", "h"]);
        assert_eq!(args.arguments, vec!["h"]);
    }
}
