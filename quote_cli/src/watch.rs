//! Periodic fetch-and-reconcile loop.
//!
//! Runs one sync cycle immediately, then repeats on a fixed interval until
//! Ctrl+C. The loop multiplexes a tick channel and a shutdown channel; a
//! failed cycle (network error, bad payload) is logged and skipped, leaving
//! the store untouched, and a conflict recorded by one tick may be replaced
//! by a newer snapshot on the next.
use crossbeam_channel::{select, tick, unbounded};
use log::{error, info};
use quote_core::remote::RemoteSource;
use quote_core::storage::Storage;
use quote_core::store::QuoteStore;
use quote_core::sync::SyncService;
use quote_core::QuoteError;
use std::time::Duration;

/// Runs the watch loop until Ctrl+C is received.
pub fn run<S: Storage>(
    store: &mut QuoteStore<S>,
    remote: &dyn RemoteSource,
    interval: Duration,
) -> Result<(), QuoteError> {
    let (shutdown_tx, shutdown_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down watch loop...");
        let _ = shutdown_tx.send(());
    })
    .expect("Error setting Ctrl+C handler");

    info!(
        "Watching the remote source every {}s. Press Ctrl+C to exit.",
        interval.as_secs()
    );

    run_once(store, remote);
    let ticker = tick(interval);
    loop {
        select! {
            recv(ticker) -> _ => run_once(store, remote),
            recv(shutdown_rx) -> _ => break,
        }
    }

    info!("Watch loop stopping...");
    Ok(())
}

fn run_once<S: Storage>(store: &mut QuoteStore<S>, remote: &dyn RemoteSource) {
    match SyncService::new(store).run_cycle(remote) {
        Ok(report) => crate::report_sync(&report),
        Err(e) => error!("Sync failed: {e}"),
    }
}
