//! CLI argument parsing for ranq
//!
//! Global flags: --items, --format, --quiet, --verbose, --log-level,
//! --log-json. Item collections and priority orders are per-invocation
//! inputs; nothing is persisted between runs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use ranq_core::format::OutputFormat;
use ranq_core::rule::RuleKind;

/// Ranq - priority-ordered search ranking CLI
#[derive(Parser, Debug)]
#[command(name = "ranq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON file holding the item collection (built-in samples if omitted)
    #[arg(long, global = true, env = "RANQ_ITEMS")]
    pub items: Option<PathBuf>,

    /// Output format (human, json, or records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing and ranking detail
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank items against a query under the current priority order
    Rank {
        /// Query string
        query: String,

        /// Override the priority order (repeat per rule, highest first)
        #[arg(long, value_parser = parse_rule_kind, action = clap::ArgAction::Append)]
        priority: Vec<RuleKind>,

        /// Maximum number of results to print
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Inspect or reorder the priority list
    Priorities {
        #[command(subcommand)]
        command: PriorityCommands,
    },

    /// Print the item collection
    Items,
}

#[derive(Subcommand, Debug)]
pub enum PriorityCommands {
    /// Print the effective priority order
    List {
        /// Override the priority order (repeat per rule, highest first)
        #[arg(long, value_parser = parse_rule_kind, action = clap::ArgAction::Append)]
        priority: Vec<RuleKind>,
    },

    /// Move one rule from its current index to a target index
    Move {
        /// Index of the rule to move (0-based)
        from: usize,

        /// Target index after the move (0-based)
        to: usize,

        /// Override the priority order before moving
        #[arg(long, value_parser = parse_rule_kind, action = clap::ArgAction::Append)]
        priority: Vec<RuleKind>,
    },
}

/// Parse a rule kind from string, rejecting typos with the valid set
fn parse_rule_kind(s: &str) -> Result<RuleKind, String> {
    s.parse::<RuleKind>().map_err(|e| e.to_string())
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        let result = Cli::try_parse_from(["ranq", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_rank() {
        let cli = Cli::try_parse_from(["ranq", "rank", "react"]).unwrap();
        if let Some(Commands::Rank { query, .. }) = cli.command {
            assert_eq!(query, "react");
        } else {
            panic!("Expected Rank command");
        }
    }

    #[test]
    fn test_parse_rank_with_priorities() {
        let cli = Cli::try_parse_from([
            "ranq",
            "rank",
            "react",
            "--priority",
            "tag-match",
            "--priority",
            "exact-name",
        ])
        .unwrap();
        if let Some(Commands::Rank { priority, .. }) = cli.command {
            assert_eq!(priority, vec![RuleKind::TagMatch, RuleKind::ExactName]);
        } else {
            panic!("Expected Rank command");
        }
    }

    #[test]
    fn test_parse_rank_rejects_unknown_kind() {
        let result = Cli::try_parse_from(["ranq", "rank", "react", "--priority", "regex-match"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_priorities_move() {
        let cli = Cli::try_parse_from(["ranq", "priorities", "move", "2", "0"]).unwrap();
        if let Some(Commands::Priorities {
            command: PriorityCommands::Move { from, to, .. },
        }) = cli.command
        {
            assert_eq!((from, to), (2, 0));
        } else {
            panic!("Expected Priorities Move command");
        }
    }

    #[test]
    fn test_parse_move_rejects_negative_index() {
        let result = Cli::try_parse_from(["ranq", "priorities", "move", "--", "-1", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::try_parse_from(["ranq", "--format", "json", "items"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
