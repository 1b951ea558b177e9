mod common;

use common::{api_for, endpoint, failure, mount_get, ok};
use rust_decimal::Decimal;
use serde_json::json;
use store_client::{
    format::DisplayFormat,
    managers::{
        ChargesManager, ExpenseItemsManager, ResourceManager, SalesManager, WarehousesManager,
    },
    StoreError,
};
use store_domain::{ChargeDraft, ExpenseItemDraft, SaleDraft, WarehouseDraft};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn chair(quantity: i64) -> serde_json::Value {
    json!({ "id": 1, "name": "Chair", "quantity": quantity, "amount": 10.5 })
}

#[tokio::test]
async fn created_item_shows_quantity_and_price() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("/warehouses")))
        .and(body_json(json!({ "name": "Chair", "quantity": 5, "amount": 10.5 })))
        .respond_with(ok(chair(5)))
        .expect(1)
        .mount(&server)
        .await;
    mount_get(&server, "/warehouses", ok(json!([chair(5)]))).await;

    let manager = WarehousesManager::new(api_for(&server), DisplayFormat::default());
    let table = manager
        .create(WarehouseDraft::new("Chair", 5, Decimal::new(1050, 2)))
        .await
        .unwrap();

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.cell(0, "Name"), Some("Chair"));
    assert_eq!(table.cell(0, "Quantity"), Some("5"));
    assert_eq!(table.cell(0, "Price"), Some("10.50"));
}

#[tokio::test]
async fn invalid_item_is_rejected_before_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let manager = WarehousesManager::new(api_for(&server), DisplayFormat::default());
    let blank = manager
        .create(WarehouseDraft::new("  ", 1, Decimal::ONE))
        .await;
    assert!(matches!(blank, Err(StoreError::InvalidInput(_))));

    let negative = manager
        .create(WarehouseDraft::new("Desk", -1, Decimal::ONE))
        .await;
    assert!(matches!(negative, Err(StoreError::InvalidInput(_))));
}

#[tokio::test]
async fn empty_warehouse_uses_empty_message() {
    let server = MockServer::start().await;
    mount_get(&server, "/warehouses", ok(json!([]))).await;

    let manager = WarehousesManager::new(api_for(&server), DisplayFormat::default());
    let table = manager.load().await.unwrap();
    assert!(table.is_empty());
    assert_eq!(
        table.empty_message.as_deref(),
        Some("No items in the warehouse")
    );
}

#[tokio::test]
async fn item_update_puts_the_draft() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(endpoint("/warehouses/1")))
        .and(body_json(json!({ "name": "Chair", "quantity": 7, "amount": 12.0 })))
        .respond_with(ok(chair(7)))
        .expect(1)
        .mount(&server)
        .await;
    mount_get(&server, "/warehouses", ok(json!([chair(7)]))).await;

    let manager = WarehousesManager::new(api_for(&server), DisplayFormat::default());
    let table = manager
        .update(1, WarehouseDraft::new("Chair", 7, Decimal::new(12, 0)))
        .await
        .unwrap();
    assert_eq!(table.cell(0, "Quantity"), Some("7"));
}

#[tokio::test]
async fn overselling_is_rejected_before_submission() {
    let server = MockServer::start().await;
    mount_get(&server, "/warehouses", ok(json!([chair(3)]))).await;
    Mock::given(method("POST"))
        .and(path(endpoint("/sales")))
        .respond_with(ok(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let manager = SalesManager::new(api_for(&server), DisplayFormat::default());
    let err = manager.create(SaleDraft::new(1, 4)).await.unwrap_err();
    assert!(err.to_string().contains("available 3"));
}

#[tokio::test]
async fn server_stock_error_passes_through_without_client_check() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("/sales")))
        .and(body_json(json!({ "warehouse_id": 1, "quantity": 4 })))
        .respond_with(failure(400, "insufficient stock"))
        .expect(1)
        .mount(&server)
        .await;

    let manager =
        SalesManager::new(api_for(&server), DisplayFormat::default()).with_stock_check(false);
    let err = manager.create(SaleDraft::new(1, 4)).await.unwrap_err();
    assert_eq!(err.to_string(), "insufficient stock");
}

#[tokio::test]
async fn sale_rows_join_item_names() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/sales",
        ok(json!([
            { "id": 4, "warehouse_id": 1, "quantity": 2, "amount": 21, "sale_date": "2024-01-15T09:30:00Z" },
            { "id": 5, "warehouse_id": 9, "quantity": 1, "amount": 5, "sale_date": "2024-01-16T09:30:00Z" }
        ])),
    )
    .await;
    mount_get(&server, "/warehouses", ok(json!([chair(3)]))).await;

    let manager = SalesManager::new(api_for(&server), DisplayFormat::default());
    let table = manager.load().await.unwrap();

    assert_eq!(table.cell(0, "Item"), Some("Chair"));
    assert_eq!(table.cell(0, "Amount"), Some("21.00 ₽"));
    assert_eq!(table.cell(0, "Date"), Some("15.01.2024"));
    assert_eq!(table.cell(1, "Item"), Some("Item #9"));
}

#[tokio::test]
async fn deleting_a_sale_refetches_sales_and_stock() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(endpoint("/sales/7")))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(endpoint("/sales")))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(endpoint("/warehouses")))
        .respond_with(ok(json!([chair(5)])))
        .expect(1)
        .mount(&server)
        .await;

    let manager = SalesManager::new(api_for(&server), DisplayFormat::default());
    let table = manager.delete(7).await.unwrap();
    assert!(table.is_empty());
}

#[tokio::test]
async fn joined_fetch_failure_aborts_the_render() {
    let server = MockServer::start().await;
    mount_get(&server, "/sales", ok(json!([]))).await;
    mount_get(&server, "/warehouses", failure(500, "database unavailable")).await;

    let manager = SalesManager::new(api_for(&server), DisplayFormat::default());
    let err = manager.load().await.unwrap_err();
    assert_eq!(err.to_string(), "database unavailable");
}

#[tokio::test]
async fn charge_rows_show_expense_item_names() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/charges",
        ok(json!([
            { "id": 1, "expense_item_id": 2, "amount": 1500, "charge_date": "2024-03-01T12:00:00Z" },
            { "id": 2, "expense_item_id": 8, "amount": 99.99, "charge_date": "2024-03-02T12:00:00Z" }
        ])),
    )
    .await;
    mount_get(&server, "/expense-items", ok(json!([{ "id": 2, "name": "Rent" }]))).await;

    let manager = ChargesManager::new(api_for(&server), DisplayFormat::default());
    let table = manager.load().await.unwrap();

    assert_eq!(table.cell(0, "Expense item"), Some("Rent"));
    assert_eq!(table.cell(0, "Amount"), Some("1500.00 ₽"));
    assert_eq!(table.cell(1, "Expense item"), Some("Expense item #8"));
    assert_eq!(table.cell(1, "Amount"), Some("99.99 ₽"));
}

#[tokio::test]
async fn charge_create_posts_amount_as_number() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("/charges")))
        .and(body_json(json!({ "expense_item_id": 2, "amount": 250.5 })))
        .respond_with(ok(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    mount_get(&server, "/charges", ok(json!([]))).await;
    mount_get(&server, "/expense-items", ok(json!([]))).await;

    let manager = ChargesManager::new(api_for(&server), DisplayFormat::default());
    manager
        .create(ChargeDraft::new(2, Decimal::new(2505, 1)))
        .await
        .unwrap();
}

#[tokio::test]
async fn expense_item_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("/expense-items")))
        .and(body_json(json!({ "name": "Rent" })))
        .respond_with(ok(json!({ "id": 2, "name": "Rent" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(endpoint("/expense-items/2")))
        .respond_with(failure(409, "expense item is referenced by charges"))
        .mount(&server)
        .await;
    mount_get(&server, "/expense-items", ok(json!([{ "id": 2, "name": "Rent" }]))).await;

    let manager = ExpenseItemsManager::new(api_for(&server));
    let table = manager.create(ExpenseItemDraft::new("Rent")).await.unwrap();
    assert_eq!(table.cell(0, "Name"), Some("Rent"));

    let err = manager.delete(2).await.unwrap_err();
    assert_eq!(err.to_string(), "expense item is referenced by charges");
}

#[tokio::test]
async fn partial_create_replies_still_reload_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("/warehouses")))
        .respond_with(ok(json!({ "id": 3 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(endpoint("/sales")))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    mount_get(&server, "/warehouses", ok(json!([chair(5)]))).await;
    mount_get(&server, "/sales", ok(json!([]))).await;

    let warehouses = WarehousesManager::new(api_for(&server), DisplayFormat::default());
    let table = warehouses
        .create(WarehouseDraft::new("Chair", 5, Decimal::new(1050, 2)))
        .await
        .unwrap();
    assert_eq!(table.cell(0, "Name"), Some("Chair"));

    let sales = SalesManager::new(api_for(&server), DisplayFormat::default());
    assert!(sales.create(SaleDraft::new(1, 2)).await.unwrap().is_empty());
}
