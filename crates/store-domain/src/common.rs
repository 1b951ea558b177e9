//! Shared identifiers and traits for backend records.

use rust_decimal::Decimal;

/// Backend-assigned primary key.
pub type RecordId = i64;

/// Exposes the backend identifier of a record.
pub trait Identifiable {
    fn id(&self) -> RecordId;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving money amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

/// Converts an entity into a user-facing label for pickers.
pub trait Displayable {
    fn display_label(&self) -> String;
}
