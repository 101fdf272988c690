//! Command-line arguments for the quote CLI.
//!
//! This module defines the CLI interface using `clap`. See `main` for
//! end-to-end usage.
use clap::{Parser, Subcommand};
use quote_core::sync::{Resolution, SYNC_INTERVAL_SECS};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory where the quote list and sync state are persisted.
    #[clap(long, default_value = "quotes_data")]
    pub data_dir: String,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one random quote, honoring the remembered category filter.
    Show {
        /// Restrict the pick to one category and remember the choice.
        /// Pass `all` to clear the remembered filter.
        #[clap(long)]
        category: Option<String>,
    },
    /// Add a new quote to the local list.
    Add {
        /// Quote text.
        #[clap(long)]
        text: String,
        /// Category to file the quote under.
        #[clap(long)]
        category: String,
    },
    /// Print the stored quotes.
    List {
        /// Only print quotes in this category.
        #[clap(long)]
        category: Option<String>,
    },
    /// Print the known categories in first-seen order.
    Categories,
    /// Write the quote list to a JSON file.
    Export {
        /// Destination file.
        #[clap(long, default_value = "quotes.json")]
        output: String,
    },
    /// Merge quotes from a JSON file into the local list.
    Import {
        /// Path to a JSON file holding an array of quotes.
        #[clap(long)]
        path: String,
    },
    /// Fetch the remote list once and reconcile it with the local list.
    Sync {
        /// URL serving the remote quote list as a JSON array.
        #[clap(long)]
        server_url: String,
    },
    /// Apply a resolution to the pending sync conflict.
    Resolve {
        /// `accept-remote` adopts the snapshot captured at sync time,
        /// `keep-local` discards it.
        #[clap(long, value_enum)]
        apply: Resolution,
    },
    /// Send the local quote list to the remote source.
    Push {
        /// URL accepting the quote list as a JSON array via POST.
        #[clap(long)]
        server_url: String,
    },
    /// Show the store size, categories and any pending conflict.
    Status,
    /// Periodically fetch and reconcile until interrupted.
    Watch {
        /// URL serving the remote quote list as a JSON array.
        #[clap(long)]
        server_url: String,

        /// Seconds between sync cycles.
        #[clap(long, default_value_t = SYNC_INTERVAL_SECS)]
        interval_secs: u64,
    },
}
