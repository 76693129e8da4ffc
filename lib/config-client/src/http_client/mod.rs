//! HTTP transport used to reach the configuration server.

pub mod reqwest_client;

use std::collections::HashMap;
use std::fmt::Display;

use itertools::Itertools;
use thiserror::Error;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Plain GET with transport defaults. The whole body is buffered.
    async fn get(&self, url: &str) -> Result<Response, Error>;
}

pub type Headers = HashMap<String, String>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StatusCode(pub u16);

#[derive(Debug)]
pub struct Response {
    pub body: Vec<u8>,
    pub headers: Headers,
    pub status: StatusCode,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("Other HTTP client error: {0}")]
    Other(String),
}

/// Runs a GET on `client`, tracing the outcome.
pub async fn get(client: &dyn HttpClient, url: &str) -> Result<Response, Error> {
    client
        .get(url)
        .await
        .map(Response::log_success)
        .map_err(|error| error.log_error(url))
}

impl Error {
    fn log_error(self, url: &str) -> Self {
        tracing::error!(%url, error = %self, "GET failed");

        self
    }
}

impl Response {
    /// Body as text, invalid UTF-8 sequences replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    fn log_success(self) -> Self {
        tracing::debug!(url = %self.url, status = %self.status, "GET");

        let trace_response = format!(
            "\nResponse\nStatus: {}\nHeaders:\n{}\nBody:\n{}\n",
            self.status,
            format_headers(&self.headers),
            self.body_text()
        );
        tracing::trace!(%trace_response);

        self
    }
}

impl StatusCode {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn format_headers(headers: &Headers) -> String {
    if headers.is_empty() {
        return "<None>".to_string();
    }

    headers
        .iter()
        .sorted()
        .map(|(name, value)| format!("{name}: {value}"))
        .join("\n")
}
