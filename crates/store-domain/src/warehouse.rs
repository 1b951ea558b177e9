//! Warehouse stock items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// A stock item kept in the warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warehouse {
    pub id: RecordId,
    pub name: String,
    pub quantity: i64,
    /// Unit price.
    pub amount: Decimal,
}

impl Identifiable for Warehouse {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for Warehouse {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Warehouse {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Displayable for Warehouse {
    fn display_label(&self) -> String {
        format!("{} (in stock: {})", self.name, self.quantity)
    }
}

/// Body for creating or updating a warehouse item.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WarehouseDraft {
    pub name: String,
    pub quantity: i64,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
}

impl WarehouseDraft {
    pub fn new(name: impl Into<String>, quantity: i64, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            amount,
        }
    }
}

impl From<&Warehouse> for WarehouseDraft {
    fn from(item: &Warehouse) -> Self {
        Self::new(item.name.clone(), item.quantity, item.amount)
    }
}
