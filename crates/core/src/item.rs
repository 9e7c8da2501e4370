use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required item field was absent.
    #[error("missing required parameter '{0}'")]
    MissingParameter(String),
    /// An item field was present but did not deserialize to the expected type.
    #[error("parameter '{0}' has an unexpected type")]
    InvalidParameter(String, #[source] serde_json::Error),
}

/// One unit of data flowing through a pipeline.
///
/// Items are JSON records handed over by the engine; connectors read the
/// fields they need through [`Item::parameter`] and never mutate the payload.
#[derive(PartialEq, Clone, Debug, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Item {
    json: Value,
}

impl Item {
    pub fn new(json: Value) -> Item {
        Item { json }
    }

    /// Reads a required parameter from the item payload.
    pub fn parameter<T: DeserializeOwned>(&self, name: &str) -> Result<T, Error> {
        let value = self
            .json
            .get(name)
            .ok_or_else(|| Error::MissingParameter(name.to_string()))?;
        serde_json::from_value(value.clone())
            .map_err(|e| Error::InvalidParameter(name.to_string(), e))
    }

    /// Reads an optional parameter, falling back to `default` when absent.
    pub fn parameter_or<T: DeserializeOwned>(&self, name: &str, default: T) -> Result<T, Error> {
        match self.json.get(name) {
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| Error::InvalidParameter(name.to_string(), e)),
            None => Ok(default),
        }
    }
}

/// The result of processing a single item.
///
/// Either a decoded response body tagged with the index of the item it
/// originated from, or an `{"error": ...}` record carrying no provenance.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct Output {
    pub json: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_item: Option<usize>,
}

impl Output {
    pub fn data(json: Value, source_item: usize) -> Output {
        Output {
            json,
            source_item: Some(source_item),
        }
    }

    pub fn error(message: String) -> Output {
        Output {
            json: json!({ "error": message }),
            source_item: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_reads_typed_value() {
        let item = Item::new(json!({ "paymentId": "123", "amount": 100 }));
        let payment_id: String = item.parameter("paymentId").unwrap();
        let amount: f64 = item.parameter("amount").unwrap();
        assert_eq!(payment_id, "123");
        assert_eq!(amount, 100.0);
    }

    #[test]
    fn parameter_fails_on_missing_field() {
        let item = Item::new(json!({}));
        let err = item.parameter::<String>("paymentId").unwrap_err();
        assert_eq!(err.to_string(), "missing required parameter 'paymentId'");
    }

    #[test]
    fn parameter_fails_on_wrong_type() {
        let item = Item::new(json!({ "amount": "lots" }));
        let err = item.parameter::<f64>("amount").unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_, _)));
    }

    #[test]
    fn parameter_or_falls_back_when_absent() {
        let item = Item::new(json!({}));
        let value: String = item
            .parameter_or("paymentMethodId", "pix".to_string())
            .unwrap();
        assert_eq!(value, "pix");
    }

    #[test]
    fn error_output_carries_no_provenance() {
        let output = Output::error("boom".to_string());
        assert_eq!(output.json, json!({ "error": "boom" }));
        assert_eq!(output.source_item, None);
    }
}
