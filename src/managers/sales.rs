use std::sync::Arc;

use async_trait::async_trait;
use store_domain::{RecordId, Sale, SaleDraft, Warehouse};
use tracing::{info, warn};

use super::{ensure_at_least, ensure_id, ResourceManager};
use crate::{
    api::StoreApi,
    errors::{Result, StoreError},
    format::DisplayFormat,
    view::{NameLookup, Table, TableColumn},
};

/// Sales joined with warehouse names.
pub struct SalesManager {
    api: Arc<StoreApi>,
    format: DisplayFormat,
    check_stock: bool,
}

impl SalesManager {
    pub fn new(api: Arc<StoreApi>, format: DisplayFormat) -> Self {
        Self {
            api,
            format,
            check_stock: true,
        }
    }

    /// Toggles the pre-submit stock check. The backend enforces stock regardless.
    pub fn with_stock_check(mut self, enabled: bool) -> Self {
        self.check_stock = enabled;
        self
    }

    pub fn checks_stock(&self) -> bool {
        self.check_stock
    }

    async fn guard_stock(&self, draft: &SaleDraft) -> Result<()> {
        let items = self.api.list_warehouses().await?;
        check_available(&items, draft)
    }

    fn render(&self, sales: &[Sale], lookup: &NameLookup) -> Table {
        let mut table = Table::new(
            Some(self.title()),
            vec![
                TableColumn::new("ID", 6),
                TableColumn::new("Item", 28),
                TableColumn::new("Quantity", 10),
                TableColumn::new("Amount", 14),
                TableColumn::new("Date", 12),
            ],
        )
        .with_empty_message("No sales recorded");

        for sale in sales {
            let item = sale
                .product_name
                .clone()
                .unwrap_or_else(|| lookup.label(sale.warehouse_id));
            table.add_row(vec![
                sale.id.to_string(),
                item,
                sale.quantity.to_string(),
                self.format.currency(sale.amount),
                self.format.date(sale.sale_date),
            ]);
        }
        table
    }
}

/// Rejects a draft asking for more units than the item currently holds.
/// Unknown items pass through so the backend can answer for them.
pub(crate) fn check_available(items: &[Warehouse], draft: &SaleDraft) -> Result<()> {
    let Some(item) = items.iter().find(|item| item.id == draft.warehouse_id) else {
        return Ok(());
    };
    if draft.quantity > item.quantity {
        warn!(
            item = item.id,
            requested = draft.quantity,
            available = item.quantity,
            "sale rejected before submission"
        );
        return Err(StoreError::InvalidInput(format!(
            "not enough stock for `{}`: requested {}, available {}",
            item.name, draft.quantity, item.quantity
        )));
    }
    Ok(())
}

#[async_trait]
impl ResourceManager for SalesManager {
    type Draft = SaleDraft;

    fn title(&self) -> &'static str {
        "Sales"
    }

    async fn load(&self) -> Result<Table> {
        let (sales, items) =
            tokio::try_join!(self.api.list_sales(), self.api.list_warehouses())?;
        let lookup = NameLookup::build(&items, "Item");
        Ok(self.render(&sales, &lookup))
    }

    async fn create(&self, draft: SaleDraft) -> Result<Table> {
        ensure_id("item", draft.warehouse_id)?;
        ensure_at_least("quantity", draft.quantity, 1)?;
        if self.check_stock {
            self.guard_stock(&draft).await?;
        }
        self.api.create_sale(&draft).await?;
        info!(
            item = draft.warehouse_id,
            quantity = draft.quantity,
            "sale created"
        );
        self.load().await
    }

    /// The backend restocks the item; the reload re-reads both collections.
    async fn delete(&self, id: RecordId) -> Result<Table> {
        self.api.delete_sale(id).await?;
        info!(id, "sale deleted");
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(id: RecordId, quantity: i64) -> Warehouse {
        Warehouse {
            id,
            name: format!("Item {id}"),
            quantity,
            amount: Decimal::ONE,
        }
    }

    #[test]
    fn allows_selling_the_whole_stock() {
        let items = vec![item(1, 3)];
        assert!(check_available(&items, &SaleDraft::new(1, 3)).is_ok());
    }

    #[test]
    fn rejects_more_than_available() {
        let items = vec![item(1, 3)];
        let err = check_available(&items, &SaleDraft::new(1, 4)).unwrap_err();
        assert!(err.to_string().contains("available 3"));
    }

    #[test]
    fn unknown_items_are_left_to_the_backend() {
        assert!(check_available(&[], &SaleDraft::new(7, 100)).is_ok());
    }
}
