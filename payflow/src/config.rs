use serde::{Deserialize, Serialize};

/// Processors available to a flow.
#[derive(PartialEq, Clone, Debug, Deserialize, Serialize)]
#[allow(non_camel_case_types)]
pub enum Processor {
    mercadopago(payflow_mercadopago::config::Processor),
}

/// A single flow definition: where the items come from and the processor
/// that runs over them.
#[derive(PartialEq, Clone, Debug, Deserialize, Serialize)]
pub struct Flow {
    /// Path to a JSON file holding the input items (an array of objects).
    pub items: String,
    pub processor: Processor,
}

#[derive(PartialEq, Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub flow: Flow,
}
