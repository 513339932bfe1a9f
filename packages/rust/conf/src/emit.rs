//! Emission of the resolved configuration.
//!
//! The external documentation toolchain consumes the resolved values as a
//! plain document; JSON and TOML renderings are supported.

use serde::{Deserialize, Serialize};

use crate::error::{DocsmithError, Result};
use crate::model::ResolvedConfig;

/// Output format for the resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitFormat {
    Json,
    Toml,
}

/// Render a resolved configuration in the requested format.
pub fn emit(config: &ResolvedConfig, format: EmitFormat) -> Result<String> {
    match format {
        EmitFormat::Json => {
            serde_json::to_string_pretty(config).map_err(|e| DocsmithError::Emit(e.to_string()))
        }
        EmitFormat::Toml => {
            toml::to_string_pretty(config).map_err(|e| DocsmithError::Emit(e.to_string()))
        }
    }
}
