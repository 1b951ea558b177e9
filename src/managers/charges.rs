use std::sync::Arc;

use async_trait::async_trait;
use store_domain::{Charge, ChargeDraft, RecordId};
use tracing::info;

use super::{ensure_id, ensure_non_negative, ResourceManager};
use crate::{
    api::StoreApi,
    errors::Result,
    format::DisplayFormat,
    view::{NameLookup, Table, TableColumn},
};

/// Charges joined with expense item names.
pub struct ChargesManager {
    api: Arc<StoreApi>,
    format: DisplayFormat,
}

impl ChargesManager {
    pub fn new(api: Arc<StoreApi>, format: DisplayFormat) -> Self {
        Self { api, format }
    }

    fn render(&self, charges: &[Charge], lookup: &NameLookup) -> Table {
        let mut table = Table::new(
            Some(self.title()),
            vec![
                TableColumn::new("ID", 6),
                TableColumn::new("Expense item", 28),
                TableColumn::new("Amount", 14),
                TableColumn::new("Date", 12),
            ],
        )
        .with_empty_message("No charges recorded");

        for charge in charges {
            table.add_row(vec![
                charge.id.to_string(),
                lookup.label(charge.expense_item_id),
                self.format.currency(charge.amount),
                self.format.date(charge.charge_date),
            ]);
        }
        table
    }
}

#[async_trait]
impl ResourceManager for ChargesManager {
    type Draft = ChargeDraft;

    fn title(&self) -> &'static str {
        "Charges"
    }

    async fn load(&self) -> Result<Table> {
        let (charges, items) =
            tokio::try_join!(self.api.list_charges(), self.api.list_expense_items())?;
        let lookup = NameLookup::build(&items, "Expense item");
        Ok(self.render(&charges, &lookup))
    }

    async fn create(&self, draft: ChargeDraft) -> Result<Table> {
        ensure_id("expense item", draft.expense_item_id)?;
        ensure_non_negative("amount", draft.amount)?;
        self.api.create_charge(&draft).await?;
        info!(expense_item = draft.expense_item_id, amount = %draft.amount, "charge created");
        self.load().await
    }

    async fn delete(&self, id: RecordId) -> Result<Table> {
        self.api.delete_charge(id).await?;
        info!(id, "charge deleted");
        self.load().await
    }
}
