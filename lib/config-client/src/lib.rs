//! Client for a remote configuration server.
//!
//! [`ConfigurationClient::fetch_configuration`] requests
//! `{scheme}://{host}:{port}/{name}/{profile}` and decodes the JSON body into a
//! [`Configuration`], whose property sources are queried in precedence order.

pub mod client;
pub mod config;
pub mod error;
pub mod http_client;
pub mod model;

pub use client::{ConfigurationClient, Endpoint, Scheme};
pub use config::ClientConfig;
pub use error::{ConfigClientError, ConfigParsingError, KeyNotFoundError};
pub use model::{Configuration, PropertySource, PropertyValue};
