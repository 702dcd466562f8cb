use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chess-set", version, about = "Chess set placement and notation console")]
pub struct Cli {
    /// YAML configuration file, takes precedence over CHESS_SET_CONFIG_PATH.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw the start position, play the configured moves and draw after each.
    Demo,
    /// Enter moves interactively, as "<color> <from> <to>".
    Play,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_subcommands() {
        let cli = Cli::try_parse_from(["chess-set", "demo"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Demo)));
        assert!(cli.config.is_none());

        let cli = Cli::try_parse_from(["chess-set", "--config", "set.yaml", "play"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Play)));
        assert_eq!(cli.config, Some(PathBuf::from("set.yaml")));

        let cli = Cli::try_parse_from(["chess-set"]).unwrap();
        assert!(cli.command.is_none());
    }
}
