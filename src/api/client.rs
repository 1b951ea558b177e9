//! The single request primitive every resource call goes through.

use std::sync::RwLock;

use reqwest::{header::CONTENT_TYPE, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{ApiError, GENERIC_API_ERROR};

/// HTTP client bound to one versioned REST base path.
///
/// The bearer token is the only state shared between requests; it is read
/// on every call so a login or logout takes effect immediately.
#[derive(Debug)]
pub struct StoreApi {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl StoreApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            token: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Sends one request to `{base}{endpoint}` and decodes the JSON reply.
    ///
    /// The body is parsed as JSON whatever the status. A non-success status
    /// becomes [`ApiError::Status`] carrying the server's `error` field, or
    /// [`GENERIC_API_ERROR`] when there is none.
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, endpoint, "sending API request");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let parsed = parse_body(&text);

        if !status.is_success() {
            let message = parsed
                .as_ref()
                .ok()
                .and_then(|value| value.get("error"))
                .and_then(Value::as_str)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or(GENERIC_API_ERROR)
                .to_string();
            warn!(%method, endpoint, status = status.as_u16(), %message, "API request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let value = parsed.map_err(|err| ApiError::Malformed(err.to_string()))?;
        serde_json::from_value(value).map_err(|err| ApiError::Malformed(err.to_string()))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, endpoint, None).await
    }

    pub(crate) async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub(crate) async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::DELETE, endpoint, None).await
    }
}

fn parse_body(text: &str) -> Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(text)
}
