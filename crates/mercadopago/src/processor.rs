use payflow_core::{
    credential::Credential,
    item::{Item, Output},
};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{event, warn, Level};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] super::request::Error),
    #[error("There was an error sending the request to the MercadoPago API.")]
    Transport(#[source] reqwest::Error),
    #[error("There was an error decoding the MercadoPago API response.")]
    DecodeResponse(#[source] reqwest::Error),
    #[error("There was an error building the HTTP client.")]
    HttpClient(#[source] reqwest::Error),
    /// An expected attribute or configuration value was missing.
    #[error("missing required attribute")]
    MissingRequiredAttribute(String),
}

/// Issues one MercadoPago API call per workflow item, strictly in input order.
///
/// Items never overlap: each request runs to completion before the next item
/// starts, and the only state shared across items is the read-only credential
/// and the output list.
pub struct Processor {
    config: super::config::Processor,
    credential: Credential,
    client: reqwest::Client,
}

impl Processor {
    /// Processes `items` sequentially, producing exactly one output per item.
    ///
    /// With `continue_on_fail` enabled a failed item becomes an `{error}`
    /// record and the run moves on; otherwise the first failure aborts the
    /// run and the remaining items are not processed.
    pub async fn process(&self, items: &[Item]) -> Result<Vec<Output>, Error> {
        let mut outputs = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            match self.process_item(item).await {
                Ok(json) => {
                    event!(
                        Level::INFO,
                        operation = %self.config.operation,
                        item = i,
                        "item processed"
                    );
                    outputs.push(Output::data(json, i));
                }
                Err(e) if self.config.continue_on_fail => {
                    warn!(item = i, error = %e, "item failed, continuing");
                    outputs.push(Output::error(e.to_string()));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(outputs)
    }

    async fn process_item(&self, item: &Item) -> Result<Value, Error> {
        let spec = super::request::build(&self.config.endpoint, &self.config.operation, item)?;

        let mut request = self
            .client
            .request(spec.method, &spec.url)
            .bearer_auth(&self.credential.access_token)
            .header(CONTENT_TYPE, "application/json");
        if let Some(key) = &spec.idempotency_key {
            request = request.header("X-Idempotency-Key", key);
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(Error::Transport)?
            .error_for_status()
            .map_err(Error::Transport)?;

        response.json().await.map_err(Error::DecodeResponse)
    }
}

/// A builder of the MercadoPago processor.
#[derive(Default)]
pub struct ProcessorBuilder {
    config: Option<super::config::Processor>,
    credential: Option<Credential>,
}

impl ProcessorBuilder {
    /// Creates a new instance of a ProcessorBuilder.
    pub fn new() -> ProcessorBuilder {
        ProcessorBuilder {
            ..Default::default()
        }
    }

    pub fn config(mut self, config: super::config::Processor) -> Self {
        self.config = Some(config);
        self
    }

    pub fn credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn build(self) -> Result<Processor, Error> {
        let client = reqwest::ClientBuilder::new()
            .build()
            .map_err(Error::HttpClient)?;

        Ok(Processor {
            config: self
                .config
                .ok_or_else(|| Error::MissingRequiredAttribute("config".to_string()))?,
            credential: self
                .credential
                .ok_or_else(|| Error::MissingRequiredAttribute("credential".to_string()))?,
            client,
        })
    }
}
