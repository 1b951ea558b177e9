//! Charges booked against expense items.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Charge {
    pub id: RecordId,
    pub expense_item_id: RecordId,
    pub amount: Decimal,
    pub charge_date: DateTime<Utc>,
}

impl Identifiable for Charge {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Amounted for Charge {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Body for booking a charge. The backend stamps the date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChargeDraft {
    pub expense_item_id: RecordId,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
}

impl ChargeDraft {
    pub fn new(expense_item_id: RecordId, amount: Decimal) -> Self {
        Self {
            expense_item_id,
            amount,
        }
    }
}
