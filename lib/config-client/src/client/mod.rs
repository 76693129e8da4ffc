use std::sync::Arc;

use strum::Display;

use crate::config::ClientConfig;
use crate::error::ConfigClientError;
use crate::http_client::{self, HttpClient};
use crate::http_client::reqwest_client::ReqwestClient;
use crate::model::Configuration;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Endpoint {
    pub scheme: Scheme,
    pub port: u16,
}

/// Client for a remote configuration server serving documents at
/// `{scheme}://{host}:{port}/{name}/{profile}`.
///
/// Holds no per-request state. Clones share the same transport.
#[derive(Clone)]
pub struct ConfigurationClient {
    http_client: Arc<dyn HttpClient>,
    host: String,
    port: Option<u16>,
    secure_port: Option<u16>,
}

impl ConfigurationClient {
    /// Client using the default [`ReqwestClient`] transport.
    pub fn new(host: impl Into<String>, port: Option<u16>, secure_port: Option<u16>) -> Self {
        Self::with_http_client(
            host,
            port,
            secure_port,
            Arc::new(ReqwestClient::default()),
        )
    }

    pub fn with_http_client(
        host: impl Into<String>,
        port: Option<u16>,
        secure_port: Option<u16>,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            http_client,
            host: host.into(),
            port,
            secure_port,
        }
    }

    /// Builds a client from loaded settings. Ports set to `0` count as unset.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigClientError> {
        let http_client = ReqwestClient::with_accept_invalid_certs(config.accept_invalid_certs)?;

        Ok(Self::with_http_client(
            config.host.clone(),
            config.port.filter(|port| *port > 0),
            config.secure_port.filter(|port| *port > 0),
            Arc::new(http_client),
        ))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The secure port takes precedence over the plaintext one.
    pub fn endpoint(&self) -> Result<Endpoint, ConfigClientError> {
        match (self.secure_port, self.port) {
            (Some(port), _) if port > 0 => Ok(Endpoint {
                scheme: Scheme::Https,
                port,
            }),
            (_, Some(port)) if port > 0 => Ok(Endpoint {
                scheme: Scheme::Http,
                port,
            }),
            _ => Err(ConfigClientError::NoEndpointConfigured),
        }
    }

    /// `name` and `profile` are inserted as given, without escaping.
    pub fn configuration_url(
        &self,
        name: &str,
        profile: &str,
    ) -> Result<String, ConfigClientError> {
        let Endpoint { scheme, port } = self.endpoint()?;

        Ok(format!("{scheme}://{}:{port}/{name}/{profile}", self.host))
    }

    /// Fetches the configuration document for `name` and `profile`.
    ///
    /// Performs a single GET and buffers the whole response body before
    /// decoding it. Nothing is retried.
    pub async fn fetch_configuration(
        &self,
        name: &str,
        profile: &str,
    ) -> Result<Configuration, ConfigClientError> {
        let url = self.configuration_url(name, profile)?;
        tracing::debug!(%url, "Fetching configuration");

        let response = http_client::get(self.http_client.as_ref(), &url).await?;

        if !response.status.is_success() {
            return Err(ConfigClientError::UnexpectedStatus {
                status: response.status,
                body: response.body_text(),
            });
        }

        tracing::trace!(body = %response.body_text(), "Configuration body");

        Ok(serde_json::from_slice(&response.body)?)
    }
}

impl std::fmt::Debug for ConfigurationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationClient")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure_port", &self.secure_port)
            .finish_non_exhaustive()
    }
}
