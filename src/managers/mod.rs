//! Resource managers: one backend collection each, behind a shared
//! `load / create / delete` contract that always ends with a fresh table.

mod charges;
mod expense_items;
mod sales;
mod warehouses;

pub use charges::ChargesManager;
pub use expense_items::ExpenseItemsManager;
pub use sales::SalesManager;
pub use warehouses::WarehousesManager;

use async_trait::async_trait;
use rust_decimal::Decimal;
use store_domain::RecordId;

use crate::{
    errors::{Result, StoreError},
    view::Table,
};

#[async_trait]
pub trait ResourceManager: Send + Sync {
    type Draft: Send + 'static;

    /// Section title shown above the table.
    fn title(&self) -> &'static str;

    /// Fetches the collection and builds its table.
    async fn load(&self) -> Result<Table>;

    /// Submits a new record, then reloads.
    async fn create(&self, draft: Self::Draft) -> Result<Table>;

    /// Deletes by id, then reloads. Confirmation is the caller's job.
    async fn delete(&self, id: RecordId) -> Result<Table>;
}

pub(crate) fn ensure_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn ensure_id(field: &str, id: RecordId) -> Result<()> {
    if id <= 0 {
        return Err(StoreError::InvalidInput(format!(
            "{field} must be a positive id"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_at_least(field: &str, value: i64, min: i64) -> Result<()> {
    if value < min {
        return Err(StoreError::InvalidInput(format!(
            "{field} must be at least {min}"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(StoreError::InvalidInput(format!(
            "{field} must not be negative"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_guards_match_form_constraints() {
        assert!(ensure_name("name", "  ").is_err());
        assert!(ensure_name("name", "Chair").is_ok());
        assert!(ensure_id("item", 0).is_err());
        assert!(ensure_at_least("quantity", 0, 1).is_err());
        assert!(ensure_at_least("quantity", 0, 0).is_ok());
        assert!(ensure_non_negative("amount", Decimal::new(-1, 2)).is_err());
        assert!(ensure_non_negative("amount", Decimal::ZERO).is_ok());
    }
}
