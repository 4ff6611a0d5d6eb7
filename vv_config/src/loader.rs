use crate::error::ConfigError;
use crate::store::VendorConfigSet;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    SoongVariables,
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// `*.variables` is the JSON document written by the build host.
    pub fn from_extension(extension: &str) -> Result<Self, ConfigError> {
        match extension.to_lowercase().as_str() {
            "variables" => Ok(Format::SoongVariables),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        Self::from_extension(path.extension().and_then(|s| s.to_str()).unwrap_or(""))
    }

    fn name(self) -> &'static str {
        match self {
            Format::SoongVariables => "variables",
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }
}

/// Parses vendor configuration text in the format named by `extension`.
///
/// Supported extensions: `json`, `variables`, `yaml`, `yml`, `toml`.
pub fn parse_content(content: &str, extension: &str) -> Result<VendorConfigSet, ConfigError> {
    let format = Format::from_extension(extension)?;
    let parse_err = |message: String| ConfigError::Parse { format: format.name(), message };

    let value: Value = match format {
        Format::SoongVariables | Format::Json => {
            serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))?
        }
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?,
        Format::Toml => {
            let toml_val: toml::Value = toml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
            serde_json::to_value(toml_val).map_err(|e| parse_err(e.to_string()))?
        }
    };

    match format {
        Format::SoongVariables => VendorConfigSet::from_soong_variables(value),
        _ => VendorConfigSet::from_value(value),
    }
}

/// Reads and parses one vendor configuration file, picking the format from
/// its extension.
pub fn load_file(path: &Path) -> Result<VendorConfigSet, ConfigError> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let set = parse_content(&content, format.name())?;
    debug!(
        "Loaded vendor configuration from {:?}: {} namespace(s)",
        path,
        set.namespaces().count()
    );
    Ok(set)
}
