//! Quote CLI — a command-line client that keeps a durable list of quotes,
//! prints random ones, and synchronizes the list with a remote HTTP source
//! with manual conflict resolution. The list is loaded from the data
//! directory at startup and saved back after every mutation.
//!
//! Usage examples (CLI):
//! ```bash
//! quote_cli add --text "Stay hungry" --category Life
//! quote_cli show --category Life
//! quote_cli sync --server-url http://192.168.0.10:3000/quotes
//! quote_cli resolve --apply keep-local
//! quote_cli watch --server-url http://192.168.0.10:3000/quotes
//! ```
#![warn(missing_docs)]
mod args;
mod watch;

use crate::args::{Args, Command};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::{info, warn};
use quote_core::remote::{HttpRemote, RemoteSource};
use quote_core::storage::{FileStorage, Storage};
use quote_core::store::QuoteStore;
use quote_core::sync::{SyncReport, SyncService};
use quote_core::{Quote, QuoteError};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let storage = FileStorage::open(normalize_path(&args.data_dir))?;
    let mut store = QuoteStore::load(storage)?;

    match args.command {
        Command::Show { category } => show(&mut store, category.as_deref())?,
        Command::Add { text, category } => {
            let quote = store.add(&text, &category)?;
            info!("Added quote in category '{}'.", quote.category);
            print_quote(&quote);
        }
        Command::List { category } => list(&store, category.as_deref()),
        Command::Categories => {
            for category in store.categories() {
                println!("{category}");
            }
        }
        Command::Export { output } => {
            let path = normalize_path(&output);
            fs::write(&path, store.export_json()?)?;
            info!("Exported {} quotes to {}", store.quotes().len(), path.display());
        }
        Command::Import { path } => {
            let path = normalize_path(&path);
            if !is_file_exist(&path) {
                return Err(QuoteError::Format(format!(
                    "import file not found: {}",
                    path.display()
                )));
            }
            let raw = fs::read_to_string(&path)?;
            let count = store.import_json(&raw)?;
            info!("Imported {count} quotes.");
        }
        Command::Sync { server_url } => {
            let remote = HttpRemote::new(server_url);
            let report = SyncService::new(&mut store).run_cycle(&remote)?;
            report_sync(&report);
        }
        Command::Resolve { apply } => {
            let report = SyncService::new(&mut store).resolve(apply)?;
            info!(
                "Resolved with {}: {} quotes kept.",
                report.resolution, report.total
            );
        }
        Command::Push { server_url } => {
            let remote = HttpRemote::new(server_url);
            remote.push_quotes(store.quotes())?;
            info!("Pushed {} quotes to the remote source.", store.quotes().len());
        }
        Command::Status => status(&store)?,
        Command::Watch {
            server_url,
            interval_secs,
        } => {
            let remote = HttpRemote::new(server_url);
            watch::run(&mut store, &remote, Duration::from_secs(interval_secs))?;
        }
    }

    Ok(())
}

/// Prints one random quote, applying and remembering the category filter.
fn show<S: Storage>(store: &mut QuoteStore<S>, category: Option<&str>) -> Result<(), QuoteError> {
    if let Some(category) = category {
        store.set_selected_category(category)?;
    }
    let filter = store.selected_category()?;
    match store.pick_random(filter.as_deref()) {
        Some(quote) => print_quote(quote),
        None => println!("No quotes available in this category."),
    }
    Ok(())
}

/// Prints the stored quotes, optionally restricted to one category.
fn list<S: Storage>(store: &QuoteStore<S>, category: Option<&str>) {
    let mut shown = 0;
    for quote in store.quotes() {
        if let Some(wanted) = category {
            if quote.category != wanted {
                continue;
            }
        }
        print_quote(quote);
        shown += 1;
    }
    if shown == 0 {
        println!("No quotes available in this category.");
    }
}

/// Prints the store size, categories, and any pending conflict.
fn status<S: Storage>(store: &QuoteStore<S>) -> Result<(), QuoteError> {
    println!(
        "{} quotes in {} categories",
        store.quotes().len(),
        store.categories().len()
    );
    if let Some(filter) = store.selected_category()? {
        println!("Active category filter: {filter}");
    }
    match store.pending()? {
        Some(pending) => {
            let fetched = DateTime::<Utc>::from_timestamp_millis(pending.fetched_at_ms as i64)
                .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| pending.fetched_at_ms.to_string());
            println!("Pending sync conflict (fetched {fetched}):");
            print_section("Server-only quotes", &pending.server_only);
            print_section("Local-only quotes", &pending.local_only);
        }
        None => println!("No pending sync conflict."),
    }
    Ok(())
}

/// Prints the outcome of a sync cycle.
pub(crate) fn report_sync(report: &SyncReport) {
    match report {
        SyncReport::InSync => info!("Local quotes already match the remote source."),
        SyncReport::AutoMerged { total } => {
            info!("Data synced from server (no conflicts): {total} quotes.");
        }
        SyncReport::Conflict {
            server_only,
            local_only,
        } => {
            warn!(
                "Sync detected changes: {} quote(s) from server and {} local-only quote(s).",
                server_only.len(),
                local_only.len()
            );
            print_section("Server-only quotes", server_only);
            print_section("Local-only quotes", local_only);
            info!("Run `quote_cli resolve --apply accept-remote` or `--apply keep-local` to resolve.");
        }
    }
}

fn print_section(title: &str, quotes: &[Quote]) {
    println!("{} ({})", title, quotes.len());
    if quotes.is_empty() {
        println!("  None");
        return;
    }
    for quote in quotes {
        println!("  \"{}\" - {}", quote.text, quote.category);
    }
}

fn print_quote(quote: &Quote) {
    println!("\"{}\"", quote.text);
    println!("  - {}", quote.category);
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
