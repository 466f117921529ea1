//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::ConfigOverrides;
use crate::search::{SearchState, NO_RESULTS_MESSAGE};

#[derive(Debug, Parser)]
#[command(
    name = "cocktails",
    version,
    about = "Search a public cocktail recipe catalog from the terminal"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Override the catalog endpoint root
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Override the request timeout, in seconds
    #[arg(
        long,
        value_name = "SECS",
        global = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub timeout: Option<u32>,

    /// Override the log filter (e.g. "debug" or "cocktails=trace")
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Search once, print the matches and exit
    Search {
        /// Name to look for; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print the matches as a JSON array
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout,
            log_level: self.log_level.clone(),
        }
    }
}

/// What a one-shot search ended in, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchReport {
    /// Formatted matches for stdout.
    Results(String),
    /// Nothing matched. Not a failure.
    NoResults,
    /// User-facing error line for stderr.
    Failed(String),
}

impl SearchReport {
    pub fn from_state(state: &SearchState, json: bool) -> Result<Self, serde_json::Error> {
        match &state.error {
            Some(message) if message == NO_RESULTS_MESSAGE => Ok(SearchReport::NoResults),
            Some(message) => Ok(SearchReport::Failed(message.clone())),
            None if json => Ok(SearchReport::Results(serde_json::to_string_pretty(
                &state.items,
            )?)),
            None => Ok(SearchReport::Results(
                state
                    .items
                    .iter()
                    .map(|item| format!("{}\t{}\t{}", item.id, item.name, item.thumbnail_url))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )),
        }
    }
}
