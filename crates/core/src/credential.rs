use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Cannot open/read the credentials file at path {1}")]
    OpenFile(#[source] std::io::Error, PathBuf),
    #[error("Cannot parse the credentials file")]
    ParseCredential(#[source] serde_json::Error),
}

/// An API credential entry as stored in the credential file.
///
/// The token is owned by the engine for the duration of a run and is never
/// written back or logged.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub access_token: String,
}

impl Credential {
    /// Reads a credential from a JSON file of the shape `{"accessToken": "..."}`.
    pub async fn from_file(path: &Path) -> Result<Credential, Error> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::OpenFile(e, path.to_path_buf()))?;
        serde_json::from_str(&raw).map_err(Error::ParseCredential)
    }
}
