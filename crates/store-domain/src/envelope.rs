//! The `{ success, data | error, message }` wrapper around backend responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Payload, or the type's empty value when the backend omitted `data`.
    pub fn into_data_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_yields_empty_list() {
        let envelope: Envelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":true}"#).expect("envelope json");
        assert!(envelope.success);
        assert!(envelope.into_data_or_default().is_empty());
    }

    #[test]
    fn failure_envelope_keeps_error() {
        let envelope: Envelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":false,"error":"not found"}"#).unwrap();
        assert_eq!(envelope.error.as_deref(), Some("not found"));
    }
}
