//! REST client for the store backend.

mod client;
mod resources;

pub use client::StoreApi;
pub use resources::Ack;
