use chrono::Utc;
use payflow_core::item::Item;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Production API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.mercadopago.com";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The run-level operation selector does not name a supported operation.
    #[error("Operação '{0}' não é suportada.")]
    UnsupportedOperation(String),
    #[error(transparent)]
    ItemParameter(#[from] payflow_core::item::Error),
    /// An item field deserialized but failed schema validation.
    #[error("parameter '{0}' {1}")]
    InvalidParameter(&'static str, &'static str),
    #[error("There was an error serializing the request body.")]
    SerializeBody(#[source] serde_json::Error),
}

/// Operations supported by the MercadoPago connector.
#[derive(PartialEq, Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[allow(non_camel_case_types)]
pub enum Operation {
    /// Defaults to creating a new payment.
    #[default]
    createPayment,
    getPayment,
    cancelPayment,
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Operation, Error> {
        match s {
            "createPayment" => Ok(Operation::createPayment),
            "getPayment" => Ok(Operation::getPayment),
            "cancelPayment" => Ok(Operation::cancelPayment),
            other => Err(Error::UnsupportedOperation(other.to_string())),
        }
    }
}

/// Payment methods accepted by the payments endpoint.
#[derive(PartialEq, Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[allow(non_camel_case_types)]
pub enum PaymentMethod {
    /// Defaults to instant payment.
    #[default]
    pix,
    credit_card,
    bolbradesco,
}

/// Statuses a payment can be moved to through this connector.
#[derive(PartialEq, Clone, Copy, Debug, Deserialize, Serialize)]
#[allow(non_camel_case_types)]
pub enum PaymentStatus {
    cancelled,
}

/// Payer identification as the payments endpoint expects it.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct Payer {
    pub email: String,
}

/// Request body for `POST /v1/payments`.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct CreatePaymentRequest {
    pub transaction_amount: serde_json::Number,
    pub description: String,
    pub payment_method_id: PaymentMethod,
    pub payer: Payer,
}

/// Request body for `PUT /v1/payments/{id}`.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct CancelPaymentRequest {
    pub status: PaymentStatus,
}

/// A fully-assembled API request, ready to be issued by the processor.
///
/// Built fresh for every item and discarded after the call.
#[derive(PartialEq, Clone, Debug)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    /// Set on payment creation only. Millisecond epoch, stringified.
    pub idempotency_key: Option<String>,
    pub body: Option<Value>,
}

/// Builds the request for `operation` from the fields of a single item.
///
/// The selector is matched before any network interaction, so an unknown
/// operation never produces an outbound call.
pub fn build(endpoint: &str, operation: &str, item: &Item) -> Result<RequestSpec, Error> {
    match operation.parse::<Operation>()? {
        Operation::createPayment => {
            let amount: serde_json::Number = item.parameter("amount")?;
            if amount.as_f64().map_or(true, |v| v <= 0.0) {
                return Err(Error::InvalidParameter("amount", "must be a positive number"));
            }
            let description: String = item.parameter("description")?;
            if description.is_empty() {
                return Err(Error::InvalidParameter("description", "must not be empty"));
            }
            let email: String = item.parameter("email")?;
            let payment_method_id = item.parameter_or("paymentMethodId", PaymentMethod::default())?;

            let body = CreatePaymentRequest {
                transaction_amount: amount,
                description,
                payment_method_id,
                payer: Payer { email },
            };

            Ok(RequestSpec {
                method: Method::POST,
                url: format!("{}/v1/payments", endpoint),
                idempotency_key: Some(Utc::now().timestamp_millis().to_string()),
                body: Some(serde_json::to_value(body).map_err(Error::SerializeBody)?),
            })
        }
        Operation::getPayment => {
            let payment_id = required_payment_id(item)?;

            Ok(RequestSpec {
                method: Method::GET,
                url: format!("{}/v1/payments/{}", endpoint, payment_id),
                idempotency_key: None,
                body: None,
            })
        }
        Operation::cancelPayment => {
            let payment_id = required_payment_id(item)?;
            let body = CancelPaymentRequest {
                status: PaymentStatus::cancelled,
            };

            Ok(RequestSpec {
                method: Method::PUT,
                url: format!("{}/v1/payments/{}", endpoint, payment_id),
                idempotency_key: None,
                body: Some(serde_json::to_value(body).map_err(Error::SerializeBody)?),
            })
        }
    }
}

fn required_payment_id(item: &Item) -> Result<String, Error> {
    let payment_id: String = item.parameter("paymentId")?;
    if payment_id.is_empty() {
        return Err(Error::InvalidParameter("paymentId", "must not be empty"));
    }
    Ok(payment_id)
}
