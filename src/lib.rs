#![doc(test(attr(deny(warnings))))]

//! Pocket Ledger records earnings and expenses, keeps a running balance, and
//! suggests expense reductions whenever spending drifts past a budget target.

pub mod charts;
pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod recommend;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("pocket_ledger=info".parse().unwrap());
        fmt().with_env_filter(filter).init();

        tracing::info!("Pocket Ledger tracing initialized.");
    });
}
