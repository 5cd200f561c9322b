//! Turns the resolved plugins into command table rows.

use serde::Serialize;

use crate::model::{CellText, CommandSpec, PluginDetail};
use crate::resolve::ResolvedPlugin;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "rows", rename_all = "snake_case")]
pub enum TableView {
    /// Nothing applies; the table is not shown at all.
    Hidden,
    Visible(Vec<RowDescriptor>),
}

impl TableView {
    pub fn rows(&self) -> &[RowDescriptor] {
        match self {
            TableView::Hidden => &[],
            TableView::Visible(rows) => rows,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, TableView::Hidden)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowDescriptor {
    pub index: usize,
    pub markers: Vec<StatusMarker>,
    pub usage: Cell,
    pub examples: Cell,
    pub description: Cell,
    pub who_can_use: Cell,
    pub plugin: PluginRef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Featured,
    External,
}

impl MarkerKind {
    pub fn icon(self) -> &'static str {
        match self {
            MarkerKind::Featured => "stars",
            MarkerKind::External => "link",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            MarkerKind::Featured => "Featured command",
            MarkerKind::External => "External plugin",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusMarker {
    pub kind: MarkerKind,
    /// Unique per row, e.g. `icon-stars-3`.
    pub id: String,
    pub tooltip: &'static str,
}

impl StatusMarker {
    fn new(kind: MarkerKind, index: usize) -> Self {
        Self {
            kind,
            id: format!("icon-{}-{}", kind.icon(), index),
            tooltip: kind.tooltip(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub style: &'static str,
    pub wrap: bool,
    pub content: CellContent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum CellContent {
    Block(String),
    List(Vec<String>),
}

impl Cell {
    fn new(text: &CellText, style: &'static str, wrap: bool) -> Self {
        let content = match text {
            CellText::Single(s) => CellContent::Block(s.clone()),
            CellText::List(items) => CellContent::List(items.clone()),
        };
        Self {
            style,
            wrap,
            content,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match &self.content {
            CellContent::Block(s) => s.lines().map(str::to_string).collect(),
            CellContent::List(items) => items.iter().map(|i| format!("• {}", i)).collect(),
        }
    }
}

/// Identifies the plugin a row opens in the detail dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PluginRef {
    pub name: String,
    pub is_external: bool,
}

/// Flatten every plugin's commands, featured ones first. Ties keep their
/// input order.
pub fn sorted_commands<'p, 'a>(
    plugins: &'p [ResolvedPlugin<'a>],
) -> Vec<(&'p ResolvedPlugin<'a>, &'a CommandSpec)> {
    let mut flat = Vec::new();
    for plugin in plugins {
        let detail: &'a PluginDetail = plugin.detail;
        for command in detail.commands.iter().flatten() {
            flat.push((plugin, command));
        }
    }
    flat.sort_by_key(|(_, command)| !command.featured);
    flat
}

pub fn build(repo: &str, plugins: &[ResolvedPlugin<'_>]) -> TableView {
    if plugins.is_empty() {
        return TableView::Hidden;
    }

    let rows: Vec<RowDescriptor> = sorted_commands(plugins)
        .into_iter()
        .enumerate()
        .map(|(index, (plugin, command))| build_row(index, plugin, command))
        .collect();

    if rows.is_empty() {
        tracing::debug!(repo = %repo, "applicable plugins list no commands");
        return TableView::Hidden;
    }
    TableView::Visible(rows)
}

fn build_row(index: usize, plugin: &ResolvedPlugin<'_>, command: &CommandSpec) -> RowDescriptor {
    let mut markers = Vec::new();
    if command.featured {
        markers.push(StatusMarker::new(MarkerKind::Featured, index));
    }
    if plugin.is_external {
        markers.push(StatusMarker::new(MarkerKind::External, index));
    }

    RowDescriptor {
        index,
        markers,
        usage: Cell::new(&command.usage, "command-usage", true),
        examples: Cell::new(&command.examples, "command-examples", false),
        description: Cell::new(&command.description, "command-desc-text", true),
        who_can_use: Cell::new(&command.who_can_use, "command-desc-text", true),
        plugin: PluginRef {
            name: plugin.name.to_string(),
            is_external: plugin.is_external,
        },
    }
}

#[cfg(test)]
#[path = "tests/table_tests.rs"]
mod tests;
