//! Sales of warehouse items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// A recorded sale. The backend computes `amount` from the item price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: RecordId,
    pub warehouse_id: RecordId,
    pub quantity: i64,
    pub amount: Decimal,
    pub sale_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

impl Identifiable for Sale {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Amounted for Sale {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Body for registering a sale.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SaleDraft {
    pub warehouse_id: RecordId,
    pub quantity: i64,
}

impl SaleDraft {
    pub fn new(warehouse_id: RecordId, quantity: i64) -> Self {
        Self {
            warehouse_id,
            quantity,
        }
    }
}
