//! Read-only report views. Figures are shown as the backend computed them.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use store_domain::{ProfitReport, TopProduct};

use crate::{
    api::StoreApi,
    errors::{Result, StoreError},
    format::DisplayFormat,
    view::{DetailView, Table, TableColumn},
};

pub struct ReportsManager {
    api: Arc<StoreApi>,
    format: DisplayFormat,
}

impl ReportsManager {
    pub fn new(api: Arc<StoreApi>, format: DisplayFormat) -> Self {
        Self { api, format }
    }

    pub async fn profit(&self, year: i32, month: u32) -> Result<DetailView> {
        if !(1..=12).contains(&month) {
            return Err(StoreError::InvalidInput(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        let report = self.api.profit_report(year, month).await?;
        Ok(self.profit_view(year, month, &report))
    }

    pub async fn top_products(&self, start: NaiveDate, end: NaiveDate) -> Result<Table> {
        if end < start {
            return Err(StoreError::InvalidInput(format!(
                "end date {end} is before start date {start}"
            )));
        }
        let products = self.api.top_products(start, end).await?;
        Ok(self.top_products_view(start, end, &products))
    }

    pub fn profit_view(&self, year: i32, month: u32, report: &ProfitReport) -> DetailView {
        DetailView::new("Profit report")
            .field("Period", self.format.period(year, month))
            .field("Profit", self.format.currency(report.profit))
            .field("Revenue", self.format.currency(report.revenue))
            .field("Expenses", self.format.currency(report.expenses))
    }

    pub fn top_products_view(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        products: &[TopProduct],
    ) -> Table {
        let mut table = Table::new(
            Some("Top products by revenue"),
            vec![
                TableColumn::new("#", 4),
                TableColumn::new("Item", 28),
                TableColumn::new("Revenue", 14),
                TableColumn::new("Sold", 8),
                TableColumn::new("Avg price", 14),
            ],
        )
        .with_empty_message("No data for the selected period. Try another date range.");

        for (index, product) in products.iter().enumerate() {
            let sold = product
                .quantity_sold
                .map(|sold| sold.to_string())
                .unwrap_or_else(|| "-".into());
            let average = product
                .average_price()
                .map(|price| self.format.currency(price))
                .unwrap_or_else(|| "-".into());
            table.add_row(vec![
                (index + 1).to_string(),
                product.name.clone(),
                self.format.currency(product.revenue),
                sold,
                average,
            ]);
        }

        table.add_footer(format!(
            "Period: {} - {}",
            self.format.naive_date(start),
            self.format.naive_date(end)
        ));
        if !products.is_empty() {
            table.add_footer(format!("Products in report: {}", products.len()));
        }
        table
    }
}

/// Parses `YYYY-MM` into (year, month).
pub fn parse_year_month(value: &str) -> Result<(i32, u32)> {
    let invalid = || StoreError::InvalidInput(format!("expected YYYY-MM, got `{value}`"));
    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| StoreError::InvalidInput(format!("expected YYYY-MM-DD, got `{value}`")))
}

/// (year, month) of `today`, the default profit period.
pub fn current_period(today: NaiveDate) -> (i32, u32) {
    (today.year(), today.month())
}
