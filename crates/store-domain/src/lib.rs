//! store-domain
//!
//! Records exchanged with the store backend (warehouse items, sales, charges,
//! expense items, users, reports) plus the response envelope.
//! No I/O, no CLI. Only data types and the traits shared by views.

pub mod charge;
pub mod common;
pub mod envelope;
pub mod expense_item;
pub mod report;
pub mod sale;
pub mod user;
pub mod warehouse;

pub use charge::*;
pub use common::*;
pub use envelope::*;
pub use expense_item::*;
pub use report::*;
pub use sale::*;
pub use user::*;
pub use warehouse::*;
