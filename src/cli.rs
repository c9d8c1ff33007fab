//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - top-level CLI arguments
//! - [`Command`] - the `senders`, `search`, and `show` subcommands
//! - [`OutputFormat`] - how tables are printed
//!
//! # Example
//!
//! ```rust
//! use chatlens::cli::{Args, Command};
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatlens", "search", "_chat.txt", "hello"]);
//! assert!(matches!(args.command, Command::Search { .. }));
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::output::TableFormat;

/// Parse bracketed chat log exports, count messages per sender,
/// and search messages by keyword.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens senders _chat.txt
    chatlens senders _chat.txt --svg senders.svg
    chatlens search _chat.txt hello
    chatlens search _chat.txt 'see you' --format csv
    chatlens show _chat.txt --no-split")]
pub struct Args {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do with the loaded chat log.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count messages per sender and draw a bar chart
    #[command(alias = "dist")]
    Senders {
        /// Path to the chat log
        input: String,

        /// Also write the chart as SVG to this path
        #[arg(long, value_name = "PATH")]
        svg: Option<String>,

        /// Width of the longest text bar (1-1000)
        #[arg(
            short,
            long,
            default_value_t = 40,
            value_parser = clap::value_parser!(u16).range(1..=1000)
        )]
        width: u16,

        /// Print the counts as JSON instead of a chart
        #[arg(long)]
        json: bool,
    },

    /// List messages whose content contains a word
    #[command(alias = "grep")]
    Search {
        /// Path to the chat log
        input: String,

        /// Word or phrase to look for
        word: String,

        /// Treat WORD as a regular expression
        #[arg(long)]
        pattern: bool,

        /// Match case exactly
        #[arg(short = 'c', long)]
        case_sensitive: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Print only the number of matching messages
        #[arg(long)]
        count: bool,
    },

    /// Print the parsed table
    Show {
        /// Path to the chat log
        input: String,

        /// Keep the combined Timestamp column
        #[arg(long)]
        no_split: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format options.
///
/// - [`Text`](OutputFormat::Text) - aligned columns for reading in a terminal
/// - [`Csv`](OutputFormat::Csv) - semicolon-delimited, for spreadsheets
/// - [`Json`](OutputFormat::Json) - array of row objects, for scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain text (default)
    #[default]
    Text,

    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of rows
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for TableFormat {
    fn from(format: OutputFormat) -> TableFormat {
        match format {
            OutputFormat::Text => TableFormat::Text,
            OutputFormat::Csv => TableFormat::Csv,
            OutputFormat::Json => TableFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_senders() {
        let args = Args::parse_from(["chatlens", "senders", "chat.txt", "--svg", "out.svg"]);
        match args.command {
            Command::Senders {
                input,
                svg,
                width,
                json,
            } => {
                assert_eq!(input, "chat.txt");
                assert_eq!(svg.as_deref(), Some("out.svg"));
                assert_eq!(width, 40);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_flags() {
        let args = Args::parse_from([
            "chatlens", "-v", "grep", "chat.txt", "a.b", "--pattern", "-c", "-f", "json",
        ]);
        assert!(args.verbose);
        match args.command {
            Command::Search {
                word,
                pattern,
                case_sensitive,
                format,
                count,
                ..
            } => {
                assert_eq!(word, "a.b");
                assert!(pattern);
                assert!(case_sensitive);
                assert_eq!(format, OutputFormat::Json);
                assert!(!count);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_show_defaults() {
        let args = Args::parse_from(["chatlens", "show", "chat.txt"]);
        match args.command {
            Command::Show { no_split, format, .. } => {
                assert!(!no_split);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Args::try_parse_from(["chatlens"]).is_err());
    }

    #[test]
    fn test_width_out_of_range_is_error() {
        assert!(Args::try_parse_from(["chatlens", "senders", "chat.txt", "-w", "0"]).is_err());
        assert!(Args::try_parse_from(["chatlens", "senders", "chat.txt", "-w", "1001"]).is_err());
        assert!(
            Args::try_parse_from([
                "chatlens",
                "senders",
                "chat.txt",
                "--width",
                "18446744073709551615",
            ])
            .is_err()
        );
    }

    #[test]
    fn test_unknown_format_is_error() {
        assert!(Args::try_parse_from(["chatlens", "show", "chat.txt", "-f", "xml"]).is_err());
    }

    #[test]
    fn test_format_display_and_serde() {
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        let json = serde_json::to_string(&OutputFormat::Csv).unwrap();
        assert_eq!(json, "\"csv\"");
    }

    #[test]
    fn test_into_table_format() {
        assert_eq!(TableFormat::from(OutputFormat::Csv), TableFormat::Csv);
        assert_eq!(TableFormat::from(OutputFormat::Text), TableFormat::Text);
    }
}
