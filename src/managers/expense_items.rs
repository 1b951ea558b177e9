use std::sync::Arc;

use async_trait::async_trait;
use store_domain::{ExpenseItem, ExpenseItemDraft, RecordId};
use tracing::info;

use super::{ensure_name, ResourceManager};
use crate::{
    api::StoreApi,
    errors::Result,
    view::{Table, TableColumn},
};

pub struct ExpenseItemsManager {
    api: Arc<StoreApi>,
}

impl ExpenseItemsManager {
    pub fn new(api: Arc<StoreApi>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<ExpenseItem>> {
        Ok(self.api.list_expense_items().await?)
    }

    fn render(&self, items: &[ExpenseItem]) -> Table {
        let mut table = Table::new(
            Some(self.title()),
            vec![TableColumn::new("ID", 6), TableColumn::new("Name", 32)],
        )
        .with_empty_message("No expense items defined");

        for item in items {
            table.add_row(vec![item.id.to_string(), item.name.clone()]);
        }
        table
    }
}

#[async_trait]
impl ResourceManager for ExpenseItemsManager {
    type Draft = ExpenseItemDraft;

    fn title(&self) -> &'static str {
        "Expense items"
    }

    async fn load(&self) -> Result<Table> {
        let items = self.api.list_expense_items().await?;
        Ok(self.render(&items))
    }

    async fn create(&self, draft: ExpenseItemDraft) -> Result<Table> {
        ensure_name("name", &draft.name)?;
        self.api.create_expense_item(&draft).await?;
        info!(name = %draft.name, "expense item created");
        self.load().await
    }

    /// The backend refuses items still referenced by charges; its message is passed through.
    async fn delete(&self, id: RecordId) -> Result<Table> {
        self.api.delete_expense_item(id).await?;
        info!(id, "expense item deleted");
        self.load().await
    }
}
