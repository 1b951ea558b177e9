//! One-line wrappers over [`StoreApi::request`] for every backend endpoint.

use chrono::NaiveDate;
use serde_json::Value;
use store_domain::{
    Charge, ChargeDraft, Credentials, Envelope, ExpenseItem, ExpenseItemDraft, LoginResponse,
    ProfitReport, RecordId, Sale, SaleDraft, TopProduct, TopProductsPayload, User, Warehouse,
    WarehouseDraft,
};

use super::StoreApi;
use crate::errors::ApiError;

/// Reply of a write call. Any 2xx JSON body counts as done; callers reload
/// the list rather than read the echoed record.
pub type Ack = Value;

impl StoreApi {
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.post("/auth/login", credentials).await
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        let envelope: Envelope<User> = self.get("/auth/profile").await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Malformed("profile response has no data".into()))
    }

    pub async fn list_warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        Ok(self
            .get::<Envelope<Vec<Warehouse>>>("/warehouses")
            .await?
            .into_data_or_default())
    }

    pub async fn get_warehouse(&self, id: RecordId) -> Result<Warehouse, ApiError> {
        let envelope: Envelope<Warehouse> = self.get(&format!("/warehouses/{id}")).await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Malformed(format!("warehouse {id} response has no data")))
    }

    pub async fn create_warehouse(&self, draft: &WarehouseDraft) -> Result<Ack, ApiError> {
        self.post("/warehouses", draft).await
    }

    pub async fn update_warehouse(
        &self,
        id: RecordId,
        draft: &WarehouseDraft,
    ) -> Result<Ack, ApiError> {
        self.put(&format!("/warehouses/{id}"), draft).await
    }

    pub async fn delete_warehouse(&self, id: RecordId) -> Result<Ack, ApiError> {
        self.delete(&format!("/warehouses/{id}")).await
    }

    pub async fn list_sales(&self) -> Result<Vec<Sale>, ApiError> {
        Ok(self
            .get::<Envelope<Vec<Sale>>>("/sales")
            .await?
            .into_data_or_default())
    }

    pub async fn create_sale(&self, draft: &SaleDraft) -> Result<Ack, ApiError> {
        self.post("/sales", draft).await
    }

    pub async fn delete_sale(&self, id: RecordId) -> Result<Ack, ApiError> {
        self.delete(&format!("/sales/{id}")).await
    }

    pub async fn list_charges(&self) -> Result<Vec<Charge>, ApiError> {
        Ok(self
            .get::<Envelope<Vec<Charge>>>("/charges")
            .await?
            .into_data_or_default())
    }

    pub async fn create_charge(&self, draft: &ChargeDraft) -> Result<Ack, ApiError> {
        self.post("/charges", draft).await
    }

    pub async fn delete_charge(&self, id: RecordId) -> Result<Ack, ApiError> {
        self.delete(&format!("/charges/{id}")).await
    }

    pub async fn list_expense_items(&self) -> Result<Vec<ExpenseItem>, ApiError> {
        Ok(self
            .get::<Envelope<Vec<ExpenseItem>>>("/expense-items")
            .await?
            .into_data_or_default())
    }

    pub async fn create_expense_item(&self, draft: &ExpenseItemDraft) -> Result<Ack, ApiError> {
        self.post("/expense-items", draft).await
    }

    pub async fn delete_expense_item(&self, id: RecordId) -> Result<Ack, ApiError> {
        self.delete(&format!("/expense-items/{id}")).await
    }

    pub async fn profit_report(&self, year: i32, month: u32) -> Result<ProfitReport, ApiError> {
        Ok(self
            .get::<Envelope<ProfitReport>>(&format!("/reports/profit?month={month}&year={year}"))
            .await?
            .into_data_or_default())
    }

    pub async fn top_products(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TopProduct>, ApiError> {
        let endpoint = format!(
            "/reports/top-products?start_date={}&end_date={}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );
        Ok(self
            .get::<Envelope<TopProductsPayload>>(&endpoint)
            .await?
            .into_data_or_default()
            .into_products())
    }
}
