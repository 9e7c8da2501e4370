//! MercadoPago payment connector for payflow pipelines.
//!
//! Dispatches create/retrieve/cancel operations against the MercadoPago
//! payments API, issuing exactly one HTTP request per workflow item and
//! emitting one output per item in input order.

/// Configuration structures for the MercadoPago processor.
pub mod config;
/// Per-item dispatch over the MercadoPago API.
pub mod processor;
/// Typed request construction for each payment operation.
pub mod request;
