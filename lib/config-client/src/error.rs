use thiserror::Error;

use crate::http_client::{self, StatusCode};

#[derive(Debug, Error)]
pub enum ConfigClientError {
    #[error("Neither port nor secure port is set, don't know how to reach the configuration server")]
    NoEndpointConfigured,
    #[error("Transport error: `{0}`")]
    Transport(#[from] http_client::Error),
    #[error("Unexpected response code {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("Decode error: `{0}`")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Required key `{key}` does not exist")]
pub struct KeyNotFoundError {
    pub key: String,
}

#[derive(Debug, Error)]
pub enum ConfigParsingError {
    #[error("Config parsing error: `{0}`")]
    GeneralParsingError(String),
}
