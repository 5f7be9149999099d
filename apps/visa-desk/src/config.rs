//! Desk configuration loaded from TOML
//!
//! Every section is optional; a missing file or section falls back to the
//! defaults the consulting office uses.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Region / visa type the agent is working on
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Region {
    #[default]
    Schengen,
    Amerika,
    Asya,
    #[serde(rename = "Diğer", alias = "Diger")]
    Diger,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Schengen => "Schengen",
            Region::Amerika => "Amerika",
            Region::Asya => "Asya",
            Region::Diger => "Diğer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub offers: OfferConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Figures quoted in the sales-opportunity panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfferConfig {
    pub insurance_coverage: String,
    pub insurance_earning: String,
    pub reservation_fee: String,
}

impl Default for OfferConfig {
    fn default() -> Self {
        Self {
            insurance_coverage: "30.000€".to_string(),
            insurance_earning: "15€".to_string(),
            reservation_fee: "200 TL".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the analysis as JSON instead of panels
    pub json: bool,
}

impl DeskConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_with_fallback(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "Using default config");
                Self::default()
            }
        }
    }
}
