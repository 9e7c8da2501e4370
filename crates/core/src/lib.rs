//! Core data model shared by payflow connectors.
//!
//! Defines the workflow item/output types that connectors exchange with the
//! engine and the credential entries they authenticate with.

/// API credential loading.
pub mod credential;
/// Workflow items and per-item outputs.
pub mod item;
