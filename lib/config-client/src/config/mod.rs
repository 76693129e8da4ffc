use std::path::Path;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
#[cfg(any(feature = "config_json", feature = "config_yaml"))]
use figment::providers::{Data, Format};
use serde::{Deserialize, Serialize};

use crate::error::ConfigParsingError;

/// Prefix of environment variables merged over file and string inputs.
pub const ENV_PREFIX: &str = "CONFIG_CLIENT_";

/// Connection settings for [`crate::ConfigurationClient`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub host: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub secure_port: Option<u16>,
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl ClientConfig {
    /// Picks the format from the file extension.
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let inputs = files
            .iter()
            .map(|path| input_for_file(path.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Self::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        Self::parse(configs.into_iter().map(InputFormat::yaml_str))
    }

    /// Later inputs override earlier ones; environment variables come last.
    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(false));
        }

        figment
            .extract::<ClientConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))
    }
}

fn input_for_file(path: &Path) -> Result<InputFormat, ConfigParsingError> {
    let extension = path.extension().and_then(|ext| ext.to_str());

    match extension {
        #[cfg(feature = "config_yaml")]
        Some("yml" | "yaml") => Ok(InputFormat::yaml_file(path)),
        #[cfg(feature = "config_json")]
        Some("json") => Ok(InputFormat::json_file(path)),
        _ => Err(ConfigParsingError::GeneralParsingError(format!(
            "Unsupported file or missing file extension: {:?}",
            path.to_str()
        ))),
    }
}

#[cfg(test)]
mod test;
