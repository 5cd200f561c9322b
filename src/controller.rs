use serde::Serialize;

use crate::address::Address;
use crate::detail::DetailDialog;
use crate::model::{Branding, HelpDocument};
use crate::resolve::applicable_plugins;
use crate::selector::RepoSelector;
use crate::table::{self, TableView};

/// Page chrome after the branding pass. `None` keeps the built-in look.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Chrome {
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub background_color: Option<String>,
    pub header_color: Option<String>,
}

impl Chrome {
    pub fn apply(&mut self, branding: &Branding) {
        if let Some(logo) = &branding.logo {
            self.logo = Some(logo.clone());
        }
        if let Some(favicon) = &branding.favicon {
            self.favicon = Some(favicon.clone());
        }
        if let Some(bg) = &branding.background_color {
            self.background_color = Some(bg.clone());
        }
        if let Some(header) = &branding.header_color {
            self.header_color = Some(header.clone());
        }
    }
}

/// The command table for `repo`, computed from the document alone.
pub fn render_table(doc: &HelpDocument, repo: &str) -> TableView {
    let plugins = applicable_plugins(doc, repo);
    table::build(repo, &plugins)
}

/// Wires the selector, resolver, table builder and detail dialog together.
/// Every triggering event ends in a full rebuild of the table.
pub struct ViewController<A: Address> {
    doc: HelpDocument,
    address: A,
    selector: RepoSelector,
    dialog: DetailDialog,
    table: TableView,
    chrome: Chrome,
}

impl<A: Address> ViewController<A> {
    pub fn new(doc: HelpDocument, address: A) -> Self {
        Self {
            doc,
            address,
            selector: RepoSelector::new(),
            dialog: DetailDialog::new(),
            table: TableView::Hidden,
            chrome: Chrome::default(),
        }
    }

    pub fn load(&mut self, branding: Option<&Branding>) {
        if let Some(branding) = branding {
            self.chrome.apply(branding);
        }
        self.selector.restore_from_address(self.address.search());
        self.selector.populate_options(self.doc.sorted_repos());
        self.redraw();
    }

    pub fn redraw(&mut self) {
        let repo = self.selector.current_selection().to_string();
        self.selector.publish_selection(&mut self.address);
        self.selector.populate_options(self.doc.sorted_repos());

        self.table = render_table(&self.doc, &repo);
        tracing::debug!(
            repo = %repo,
            rows = self.table.rows().len(),
            hidden = self.table.is_hidden(),
            "redrew command table"
        );
    }

    /// Returns false for repos that are not options; nothing is redrawn then.
    pub fn select(&mut self, repo: &str) -> bool {
        if !self.selector.select(repo) {
            return false;
        }
        self.redraw();
        true
    }

    pub fn select_next(&mut self) {
        self.selector.select_next();
        self.redraw();
    }

    pub fn select_prev(&mut self) {
        self.selector.select_prev();
        self.redraw();
    }

    /// Opens the detail dialog for the plugin owning row `row`.
    pub fn open_detail(&mut self, row: usize) -> bool {
        let Some(plugin) = self.table.rows().get(row).map(|r| r.plugin.clone()) else {
            return false;
        };
        let Some(detail) = self.doc.plugin(&plugin.name, plugin.is_external) else {
            return false;
        };
        self.dialog
            .present(self.selector.current_selection(), &plugin.name, detail);
        true
    }

    pub fn close_detail(&mut self) {
        self.dialog.dismiss();
    }

    pub fn current_repo(&self) -> &str {
        self.selector.current_selection()
    }

    pub fn document(&self) -> &HelpDocument {
        &self.doc
    }

    pub fn address(&self) -> &A {
        &self.address
    }

    pub fn selector(&self) -> &RepoSelector {
        &self.selector
    }

    pub fn dialog(&self) -> &DetailDialog {
        &self.dialog
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
