//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::io::{self, Write};
use std::process;

use clap::Parser as ClapParser;
use log::{debug, info};

use chatlens::chart::BarChart;
use chatlens::cli::{Args, Command, OutputFormat};
use chatlens::config::{ChartConfig, MatchMode, SearchConfig};
use chatlens::core::{render, search_with, sender_distribution};
use chatlens::report::report_sender_distribution_to;
use chatlens::{ChatlensError, load};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<(), ChatlensError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Senders {
            input,
            svg,
            width,
            json,
        } => {
            let table = load(&input, true)?;
            let config = ChartConfig::new().with_width(usize::from(width));

            if json {
                let distribution = sender_distribution(&table);
                writeln!(out, "{}", serde_json::to_string_pretty(&distribution)?)?;
                if let Some(path) = svg {
                    BarChart::from_distribution(&distribution, &config).write_svg(&path)?;
                    info!("Chart written to {}", path);
                }
                return Ok(());
            }

            let distribution = report_sender_distribution_to(&mut out, &table, &config)?;
            if let Some(path) = svg {
                BarChart::from_distribution(&distribution, &config).write_svg(&path)?;
                info!("Chart written to {}", path);
            }
        }

        Command::Search {
            input,
            word,
            pattern,
            case_sensitive,
            format,
            count,
        } => {
            let table = load(&input, true)?;
            let mode = if pattern {
                MatchMode::Pattern
            } else {
                MatchMode::Literal
            };
            let config = SearchConfig::new()
                .with_mode(mode)
                .with_case_sensitive(case_sensitive);

            let hits = search_with(&word, &table, &config)?;
            if count {
                writeln!(out, "{}", hits.len())?;
            } else {
                write_table(&mut out, &hits, format)?;
            }
        }

        Command::Show {
            input,
            no_split,
            format,
        } => {
            let table = load(&input, !no_split)?;
            write_table(&mut out, &table, format)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn write_table<W: Write>(
    out: &mut W,
    table: &chatlens::ChatTable,
    format: OutputFormat,
) -> Result<(), ChatlensError> {
    debug!("Rendering {} rows as {}", table.len(), format);
    let rendered = render(table, format.into())?;
    out.write_all(rendered.as_bytes())?;
    if !rendered.is_empty() && !rendered.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
