#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use store_client::api::StoreApi;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const API_PREFIX: &str = "/api/v1";

pub fn api_for(server: &MockServer) -> Arc<StoreApi> {
    Arc::new(StoreApi::new(base_url(server)))
}

pub fn base_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), API_PREFIX)
}

pub fn endpoint(suffix: &str) -> String {
    format!("{API_PREFIX}{suffix}")
}

pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": data }))
}

pub fn failure(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "success": false, "error": message }))
}

pub fn admin() -> Value {
    json!({ "id": 1, "username": "admin", "role": "admin" })
}

pub async fn mount_get(server: &MockServer, suffix: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(endpoint(suffix)))
        .respond_with(response)
        .mount(server)
        .await;
}
