use payflow_core::{credential::Credential, item::Item};
use payflow_mercadopago::processor::ProcessorBuilder;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot open/read the file at path {1}")]
    OpenFile(#[source] std::io::Error, PathBuf),
    #[error("Cannot parse config file")]
    ParseConfig(#[source] serde_json::Error),
    #[error("Cannot parse items file")]
    ParseItems(#[source] serde_json::Error),
    #[error("Cannot load credentials")]
    Credential(#[source] payflow_core::credential::Error),
    #[error("There was an error with the MercadoPago processor.")]
    MercadoPagoProcessor(#[source] payflow_mercadopago::processor::Error),
    #[error("There was an error serializing flow output.")]
    SerializeOutput(#[source] serde_json::Error),
}

pub struct Flow {
    config: super::config::Config,
}

impl Flow {
    /// Loads a flow definition from a JSON config file.
    pub async fn from_file(path: &Path) -> Result<Flow, Error> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::OpenFile(e, path.to_path_buf()))?;
        let config = serde_json::from_str(&raw).map_err(Error::ParseConfig)?;
        Ok(Flow { config })
    }

    /// Runs the flow: items in, one processor pass, outputs on stdout.
    pub async fn run(self) -> Result<(), Error> {
        let items_path = PathBuf::from(&self.config.flow.items);
        let raw = tokio::fs::read_to_string(&items_path)
            .await
            .map_err(|e| Error::OpenFile(e, items_path))?;
        let items: Vec<Item> = serde_json::from_str(&raw).map_err(Error::ParseItems)?;
        info!(items = items.len(), "flow started");

        match self.config.flow.processor {
            super::config::Processor::mercadopago(config) => {
                let credential = Credential::from_file(Path::new(&config.credentials))
                    .await
                    .map_err(Error::Credential)?;

                let outputs = ProcessorBuilder::new()
                    .config(config)
                    .credential(credential)
                    .build()
                    .map_err(Error::MercadoPagoProcessor)?
                    .process(&items)
                    .await
                    .map_err(Error::MercadoPagoProcessor)?;

                info!(outputs = outputs.len(), "flow finished");
                let out =
                    serde_json::to_string_pretty(&outputs).map_err(Error::SerializeOutput)?;
                println!("{}", out);
            }
        }

        Ok(())
    }
}
