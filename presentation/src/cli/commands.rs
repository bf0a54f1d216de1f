//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for prompt-companion
#[derive(Parser, Debug)]
#[command(name = "prompt-companion")]
#[command(
    author,
    version,
    about = "Compare a default and a custom system prompt side by side"
)]
#[command(long_about = r#"
Prompt Companion sends every message you type to the same model twice:
once under a fixed default system prompt and once under the system prompt
you enter at startup. Both replies are shown next to each other.

Commands inside the session:
  /help    Show list of available commands
  /reset   Reset the conversation history
  /save    Save the conversation history to a file
  /quit    Quit the chat session

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./companion.toml    Project-level config (or ./.companion.toml)
3. ~/.config/prompt-companion/config.toml   Global config

The API key is read from OPENROUTER_API_KEY (a .env file is honored).
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_is_the_normal_run() {
        let cli = Cli::try_parse_from(["prompt-companion"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
        assert!(!cli.no_config);
        assert!(!cli.show_config);
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["prompt-companion", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_config_flags() {
        let cli = Cli::try_parse_from([
            "prompt-companion",
            "--config",
            "custom.toml",
            "--show-config",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.show_config);
    }

    #[test]
    fn test_positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["prompt-companion", "hello"]).is_err());
    }
}
