//! Read-only report payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::RecordId;

/// Revenue minus expenses for one calendar month. Missing figures read as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfitReport {
    #[serde(default)]
    pub profit: Decimal,
    #[serde(default, alias = "total_revenue")]
    pub revenue: Decimal,
    #[serde(default, alias = "total_expenses")]
    pub expenses: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub revenue: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_sold: Option<i64>,
}

impl TopProduct {
    /// Average unit price, known only when the backend reports units sold.
    pub fn average_price(&self) -> Option<Decimal> {
        match self.quantity_sold {
            Some(sold) if sold > 0 => Some(self.revenue / Decimal::from(sold)),
            Some(_) => Some(Decimal::ZERO),
            None => None,
        }
    }
}

/// The top-products endpoint answers either with a bare list or `{ "products": [...] }`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TopProductsPayload {
    List(Vec<TopProduct>),
    Wrapped {
        #[serde(default)]
        products: Vec<TopProduct>,
    },
}

impl Default for TopProductsPayload {
    fn default() -> Self {
        TopProductsPayload::List(Vec::new())
    }
}

impl TopProductsPayload {
    pub fn into_products(self) -> Vec<TopProduct> {
        match self {
            TopProductsPayload::List(products) | TopProductsPayload::Wrapped { products } => {
                products
            }
        }
    }
}
