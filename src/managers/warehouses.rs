use std::sync::Arc;

use async_trait::async_trait;
use store_domain::{RecordId, Warehouse, WarehouseDraft};
use tracing::info;

use super::{ensure_at_least, ensure_name, ensure_non_negative, ResourceManager};
use crate::{
    api::StoreApi,
    errors::Result,
    format::DisplayFormat,
    view::{DetailView, Table, TableColumn},
};

pub struct WarehousesManager {
    api: Arc<StoreApi>,
    format: DisplayFormat,
}

impl WarehousesManager {
    pub fn new(api: Arc<StoreApi>, format: DisplayFormat) -> Self {
        Self { api, format }
    }

    /// Raw records, used to fill pickers in other forms.
    pub async fn list(&self) -> Result<Vec<Warehouse>> {
        Ok(self.api.list_warehouses().await?)
    }

    pub async fn get(&self, id: RecordId) -> Result<Warehouse> {
        Ok(self.api.get_warehouse(id).await?)
    }

    pub async fn show(&self, id: RecordId) -> Result<DetailView> {
        let item = self.get(id).await?;
        Ok(DetailView::new(format!("Item #{}", item.id))
            .field("Name", item.name.clone())
            .field("Quantity", item.quantity.to_string())
            .field("Price", self.format.currency(item.amount)))
    }

    /// Replaces an item (edit form), then reloads.
    pub async fn update(&self, id: RecordId, draft: WarehouseDraft) -> Result<Table> {
        validate(&draft)?;
        self.api.update_warehouse(id, &draft).await?;
        info!(id, name = %draft.name, "warehouse item updated");
        self.load().await
    }

    fn render(&self, items: &[Warehouse]) -> Table {
        let mut table = Table::new(
            Some(self.title()),
            vec![
                TableColumn::new("ID", 6),
                TableColumn::new("Name", 28),
                TableColumn::new("Quantity", 10),
                TableColumn::new("Price", 12),
            ],
        )
        .with_empty_message("No items in the warehouse");

        for item in items {
            table.add_row(vec![
                item.id.to_string(),
                item.name.clone(),
                item.quantity.to_string(),
                self.format.amount(item.amount),
            ]);
        }
        table
    }
}

fn validate(draft: &WarehouseDraft) -> Result<()> {
    ensure_name("name", &draft.name)?;
    ensure_at_least("quantity", draft.quantity, 0)?;
    ensure_non_negative("price", draft.amount)
}

#[async_trait]
impl ResourceManager for WarehousesManager {
    type Draft = WarehouseDraft;

    fn title(&self) -> &'static str {
        "Warehouse"
    }

    async fn load(&self) -> Result<Table> {
        let items = self.api.list_warehouses().await?;
        Ok(self.render(&items))
    }

    async fn create(&self, draft: WarehouseDraft) -> Result<Table> {
        validate(&draft)?;
        self.api.create_warehouse(&draft).await?;
        info!(name = %draft.name, "warehouse item created");
        self.load().await
    }

    async fn delete(&self, id: RecordId) -> Result<Table> {
        self.api.delete_warehouse(id).await?;
        info!(id, "warehouse item deleted");
        self.load().await
    }
}
