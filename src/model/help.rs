use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};

use super::CommandSpec;

/// Repository selector key (`""`, `org` or `org/repo`) to plugin names.
pub type ApplicabilityTable = BTreeMap<String, Vec<String>>;

/// Everything the plugin help view knows about. Built once before the view
/// starts and never mutated afterwards.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HelpDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub all_repos: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_plugins: ApplicabilityTable,

    #[serde(default, deserialize_with = "null_as_default")]
    pub repo_external_plugins: ApplicabilityTable,

    #[serde(default, deserialize_with = "null_as_default")]
    pub plugin_help: BTreeMap<String, PluginDetail>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub external_plugin_help: BTreeMap<String, PluginDetail>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,

    /// Per repository selector key; the global config lives under `""`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,

    // `None` (absent or null) keeps the plugin out of the command table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<CommandSpec>>,
}

impl HelpDocument {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let body = strip_script_wrapper(raw);
        serde_json::from_str(body).context("parse plugin help document")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read plugin help {}", path.display()))?;
        let doc = Self::from_json_str(&raw)
            .with_context(|| format!("load plugin help {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            repos = doc.all_repos.len(),
            plugins = doc.plugin_help.len(),
            external_plugins = doc.external_plugin_help.len(),
            "loaded plugin help document"
        );
        Ok(doc)
    }

    /// `AllRepos` in display order.
    pub fn sorted_repos(&self) -> Vec<String> {
        self.all_repos
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn plugin(&self, name: &str, is_external: bool) -> Option<&PluginDetail> {
        if is_external {
            self.external_plugin_help.get(name)
        } else {
            self.plugin_help.get(name)
        }
    }
}

/// Go encodes nil slices and maps as `null`.
pub(super) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts the deck's script form (`var allHelp = {...};`) as well as bare JSON.
pub(super) fn strip_script_wrapper(raw: &str) -> &str {
    let trimmed = raw.trim();
    let body = match trimmed.find('{') {
        Some(start) if !trimmed.starts_with('{') && trimmed[..start].contains('=') => {
            &trimmed[start..]
        }
        _ => trimmed,
    };
    body.strip_suffix(';').unwrap_or(body).trim_end()
}
