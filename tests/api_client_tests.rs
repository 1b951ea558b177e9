mod common;

use common::{api_for, endpoint, failure, ok};
use rust_decimal::Decimal;
use serde_json::json;
use store_client::api::StoreApi;
use store_client::errors::{ApiError, GENERIC_API_ERROR};
use store_domain::WarehouseDraft;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

#[tokio::test]
async fn sends_bearer_token_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/warehouses")))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.set_token(Some("abc".into()));
    let items = api.list_warehouses().await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn omits_authorization_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/warehouses")))
        .and(|request: &Request| !request.headers.contains_key("authorization"))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server).list_warehouses().await.unwrap();
}

#[tokio::test]
async fn missing_data_reads_as_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/sales")))
        .respond_with(ok(json!(null)))
        .mount(&server)
        .await;

    assert!(api_for(&server).list_sales().await.unwrap().is_empty());
}

#[tokio::test]
async fn posts_json_drafts_with_numeric_amounts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(endpoint("/warehouses")))
        .and(header("content-type", "application/json"))
        .and(body_json(
            json!({ "name": "Chair", "quantity": 5, "amount": 10.5 }),
        ))
        .respond_with(ok(
            json!({ "id": 1, "name": "Chair", "quantity": 5, "amount": 10.5 }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let draft = WarehouseDraft::new("Chair", 5, Decimal::new(1050, 2));
    let created = api_for(&server).create_warehouse(&draft).await.unwrap();
    assert_eq!(created["data"]["amount"], json!(10.5));
}

#[tokio::test]
async fn surfaces_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(endpoint("/expense-items/2")))
        .respond_with(failure(409, "expense item is referenced by charges"))
        .mount(&server)
        .await;

    let err = api_for(&server).delete_expense_item(2).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.to_string(), "expense item is referenced by charges");
}

#[tokio::test]
async fn falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/sales")))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).list_sales().await.unwrap_err();
    assert_eq!(err.to_string(), GENERIC_API_ERROR);
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn unauthorized_is_recognised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/auth/profile")))
        .respond_with(failure(401, "invalid token"))
        .mount(&server)
        .await;

    let err = api_for(&server).profile().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "invalid token");
}

#[tokio::test]
async fn rejects_malformed_success_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoint("/charges")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = api_for(&server).list_charges().await.unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let api = StoreApi::new("http://127.0.0.1:9/api/v1");
    let err = api.list_warehouses().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
}
