use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    super::request::DEFAULT_ENDPOINT.to_string()
}

/// Processor for dispatching payment operations against the MercadoPago API:
/// ```json
/// {
///     "mercadopago": {
///         "label": "charge_customer",
///         "credentials": "/etc/mercadopago.json",
///         "operation": "createPayment",
///         "continue_on_fail": true
///     }
/// }
/// ```
#[derive(PartialEq, Clone, Debug, Deserialize, Serialize)]
pub struct Processor {
    /// Optional human-readable label for identifying this processor configuration.
    pub label: Option<String>,
    /// Path to the credentials file holding the MercadoPago access token.
    pub credentials: String,
    /// Operation to run. Read once per run and applied to every item.
    pub operation: String,
    /// Base URL of the MercadoPago API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Convert per-item failures into `{error}` records instead of aborting the run.
    #[serde(default)]
    pub continue_on_fail: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_defaults_to_production_api() {
        let config: Processor = serde_json::from_str(
            r#"{
                "credentials": "/etc/mercadopago.json",
                "operation": "getPayment"
            }"#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "https://api.mercadopago.com");
        assert!(!config.continue_on_fail);
        assert_eq!(config.label, None);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config: Processor = serde_json::from_str(
            r#"{
                "label": "charge_customer",
                "credentials": "/etc/mercadopago.json",
                "operation": "createPayment",
                "endpoint": "http://127.0.0.1:8080",
                "continue_on_fail": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.label.as_deref(), Some("charge_customer"));
        assert_eq!(config.endpoint, "http://127.0.0.1:8080");
        assert!(config.continue_on_fail);
    }
}
