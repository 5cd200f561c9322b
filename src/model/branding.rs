use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::help::strip_script_wrapper;

/// Optional look-and-feel overrides, consumed once at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    #[serde(default)]
    pub logo: Option<String>,

    #[serde(default)]
    pub favicon: Option<String>,

    #[serde(default)]
    pub background_color: Option<String>,

    #[serde(default)]
    pub header_color: Option<String>,
}

impl Branding {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(strip_script_wrapper(raw)).context("parse branding")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read branding {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("load branding {}", path.display()))
    }
}
