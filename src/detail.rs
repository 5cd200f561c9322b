use serde::Serialize;

use crate::model::PluginDetail;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DialogSection {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DialogView {
    pub title: String,
    pub sections: Vec<DialogSection>,
}

/// Modal detail panel for one plugin. While open it owns all input.
#[derive(Clone, Debug, Default)]
pub struct DetailDialog {
    content: Option<DialogView>,
}

impl DetailDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn present(&mut self, repo: &str, plugin_name: &str, detail: &PluginDetail) {
        let view = dialog_view(repo, plugin_name, detail);
        tracing::debug!(
            plugin = plugin_name,
            repo = repo,
            sections = view.sections.len(),
            "presenting plugin detail"
        );
        self.content = Some(view);
    }

    pub fn dismiss(&mut self) {
        self.content = None;
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn view(&self) -> Option<&DialogView> {
        self.content.as_ref()
    }
}

/// Config is looked up under the exact selector key only; there is no org
/// or global fallback.
pub fn dialog_view(repo: &str, plugin_name: &str, detail: &PluginDetail) -> DialogView {
    let mut sections = Vec::new();

    if let Some(desc) = detail.description.as_deref().filter(|d| !d.is_empty()) {
        sections.push(DialogSection {
            title: "Description".to_string(),
            body: desc.to_string(),
        });
    }

    if let Some(events) = detail.events.as_ref().filter(|e| !e.is_empty()) {
        let mut events = events.clone();
        events.sort();
        sections.push(DialogSection {
            title: "Events handled".to_string(),
            body: format!("[{}]", events.join(", ")),
        });
    }

    if let Some(cfg) = detail
        .config
        .as_ref()
        .and_then(|c| c.get(repo))
        .filter(|c| !c.is_empty())
    {
        let title = if repo.is_empty() {
            "Configuration(global)".to_string()
        } else {
            format!("Configuration({})", repo)
        };
        sections.push(DialogSection {
            title,
            body: cfg.clone(),
        });
    }

    DialogView {
        title: plugin_name.to_string(),
        sections,
    }
}

#[cfg(test)]
#[path = "tests/detail_tests.rs"]
mod tests;
