use crate::address::{self, Address};

pub const ALL_REPOS_LABEL: &str = "All repositories";

/// The repository drop-down. Option 0 is always "all repositories"; the
/// remaining options are the known repos in ascending order.
#[derive(Clone, Debug, Default)]
pub struct RepoSelector {
    options: Vec<String>,
    selected: String,
}

impl RepoSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// `""` while "all repositories" is active.
    pub fn current_selection(&self) -> &str {
        &self.selected
    }

    /// Repos in display order, without the leading "all repositories" option.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// 0 for "all repositories", otherwise 1 + position in `options()`.
    pub fn selected_index(&self) -> usize {
        if self.selected.is_empty() {
            return 0;
        }
        self.options
            .iter()
            .position(|o| *o == self.selected)
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    pub fn option_label(&self, index: usize) -> &str {
        match index {
            0 => ALL_REPOS_LABEL,
            i => self.options.get(i - 1).map(String::as_str).unwrap_or(""),
        }
    }

    /// Pre-select the repo named by the `repo` query parameter, if any. An
    /// unknown repo is dropped by the next `populate_options`.
    pub fn restore_from_address(&mut self, search: &str) {
        if let Some(repo) = address::query_param(search, "repo") {
            tracing::debug!(repo = %repo, "restoring repo selection from address");
            self.selected = repo;
        }
    }

    pub fn populate_options<I, S>(&mut self, repos: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options: Vec<String> = repos.into_iter().map(Into::into).collect();
        options.sort();
        options.dedup();
        self.options = options;

        if !self.selected.is_empty() && !self.options.contains(&self.selected) {
            tracing::debug!(repo = %self.selected, "selected repo is not an option; showing all");
            self.selected.clear();
        }
    }

    /// Returns false (and keeps the current selection) for unknown repos.
    pub fn select(&mut self, repo: &str) -> bool {
        if !repo.is_empty() && !self.options.iter().any(|o| o == repo) {
            return false;
        }
        self.selected = repo.to_string();
        true
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        match index {
            0 => {
                self.selected.clear();
                true
            }
            i => match self.options.get(i - 1) {
                Some(repo) => {
                    self.selected = repo.clone();
                    true
                }
                None => false,
            },
        }
    }

    pub fn select_next(&mut self) {
        let count = self.options.len() + 1;
        self.select_index((self.selected_index() + 1) % count);
    }

    pub fn select_prev(&mut self) {
        let count = self.options.len() + 1;
        self.select_index((self.selected_index() + count - 1) % count);
    }

    /// Reflect the selection into the address without growing history.
    pub fn publish_selection(&self, addr: &mut dyn Address) {
        let next = address::page_address(&self.selected);
        addr.replace_state(&next);
    }
}

#[cfg(test)]
#[path = "tests/selector_tests.rs"]
mod tests;
