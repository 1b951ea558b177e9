#![doc(test(attr(deny(warnings))))]

//! Store Client is a terminal front-end for the store inventory backend:
//! warehouse stock, sales, expense items, charges and the profit reports
//! built on top of them.

pub mod api;
pub mod app;
pub mod auth;
pub mod cli;
pub mod errors;
pub mod format;
pub mod managers;
pub mod reports;
pub mod utils;
pub mod view;

pub use app::{App, Section};
pub use errors::{ApiError, StoreError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Store client tracing initialized.");
    });
}
