use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "chess-standings backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Parse a tournament spreadsheet and print the result as JSON
    Parse {
        /// Spreadsheet file (xlsx, xls, ods or csv)
        file: PathBuf,
    },
    /// Parse a tournament spreadsheet and store it in the database
    Import {
        /// Spreadsheet file (xlsx, xls, ods or csv)
        file: PathBuf,
    },
    /// Print the cross-tournament ranking
    Rankings {
        /// Maximum number of players (defaults to 50)
        #[arg(short, long)]
        limit: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults_port() {
        let cli = Cli::try_parse_from(["chess_standings", "serve"]).unwrap();

        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }

    #[test]
    fn test_rankings_keeps_raw_limit() {
        let cli = Cli::try_parse_from(["chess_standings", "rankings", "--limit", "abc", "--json"]).unwrap();

        assert_eq!(
            cli.command,
            Command::Rankings {
                limit: Some("abc".to_string()),
                json: true
            }
        );
    }
}
