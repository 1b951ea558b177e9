//! Expense items (cost categories referenced by charges).

use serde::{Deserialize, Serialize};

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseItem {
    pub id: RecordId,
    pub name: String,
}

impl Identifiable for ExpenseItem {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for ExpenseItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for ExpenseItem {
    fn display_label(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExpenseItemDraft {
    pub name: String,
}

impl ExpenseItemDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
