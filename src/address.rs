//! The navigable address the view state is reflected into.

pub const PAGE_PATH: &str = "/plugin-help.html";

/// A location whose current entry can be read and replaced in place.
pub trait Address {
    /// Query string of the current entry, including the leading `?`, or empty.
    fn search(&self) -> &str;

    /// Replace the current entry. Never grows history.
    fn replace_state(&mut self, path_and_query: &str);

    fn history_len(&self) -> usize;
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry {
    path: String,
    search: String,
}

impl Entry {
    fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (path, search) = match raw.find('?') {
            Some(i) => (&raw[..i], &raw[i..]),
            None => (raw, ""),
        };
        let path = if path.is_empty() { PAGE_PATH } else { path };
        Self {
            path: path.to_string(),
            search: search.to_string(),
        }
    }
}

/// In-process history. The last entry is the current address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryAddress {
    entries: Vec<Entry>,
    replacements: usize,
}

impl Default for MemoryAddress {
    fn default() -> Self {
        Self::parse(PAGE_PATH)
    }
}

impl MemoryAddress {
    pub fn parse(raw: &str) -> Self {
        Self {
            entries: vec![Entry::parse(raw)],
            replacements: 0,
        }
    }

    /// Navigate to a new entry, growing history.
    pub fn push_state(&mut self, path_and_query: &str) {
        self.entries.push(Entry::parse(path_and_query));
    }

    /// Number of `replace_state` calls so far.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    fn current(&self) -> &Entry {
        // `entries` is never empty: it starts with one entry and only grows.
        &self.entries[self.entries.len() - 1]
    }

    pub fn path(&self) -> &str {
        &self.current().path
    }

    pub fn href(&self) -> String {
        let cur = self.current();
        format!("{}{}", cur.path, cur.search)
    }
}

impl Address for MemoryAddress {
    fn search(&self) -> &str {
        &self.current().search
    }

    fn replace_state(&mut self, path_and_query: &str) {
        let next = Entry::parse(path_and_query);
        match self.entries.last_mut() {
            Some(cur) => *cur = next,
            None => self.entries.push(next),
        }
        self.replacements += 1;
    }

    fn history_len(&self) -> usize {
        self.entries.len()
    }
}

/// Value of `name` in `search`. Like the deck's lookup the value ends at the
/// first `&` or `/`, `+` means space, and percent escapes are decoded.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let mut rest = search;
    while let Some(i) = rest.find(['?', '&']) {
        rest = &rest[i + 1..];
        let Some(value) = rest
            .strip_prefix(name)
            .and_then(|after| after.strip_prefix('='))
        else {
            continue;
        };
        let end = value.find(['&', '/']).unwrap_or(value.len());
        let raw = value[..end].replace('+', " ");
        return match urlencoding::decode(&raw) {
            Ok(decoded) => Some(decoded.into_owned()),
            Err(err) => {
                tracing::debug!(param = name, error = %err, "undecodable query parameter");
                None
            }
        };
    }
    None
}

/// Page address for a repository selection; `""` clears the query.
pub fn page_address(repo: &str) -> String {
    if repo.is_empty() {
        PAGE_PATH.to_string()
    } else {
        format!("{}?repo={}", PAGE_PATH, urlencoding::encode(repo))
    }
}

#[cfg(test)]
#[path = "tests/address_tests.rs"]
mod tests;
