use crate::model::{ApplicabilityTable, HelpDocument, PluginDetail};

/// Plugin names from `table` that apply to `repo_sel`, deduplicated and
/// sorted.
///
/// `""` reads only the global tier. Anything else merges the org tier with
/// the exact-key tier, but only when an exact-key entry exists; an org entry
/// on its own never qualifies.
pub fn resolve(repo_sel: &str, table: &ApplicabilityTable) -> Vec<String> {
    let mut plugins: Vec<String> = if repo_sel.is_empty() {
        table.get("").cloned().unwrap_or_default()
    } else {
        let org = repo_sel.split('/').next().unwrap_or(repo_sel);
        let Some(exact) = table.get(repo_sel) else {
            return Vec::new();
        };
        let mut merged = table.get(org).cloned().unwrap_or_default();
        for name in exact {
            if !merged.contains(name) {
                merged.push(name.clone());
            }
        }
        merged
    };
    plugins.sort();
    plugins.dedup();
    plugins
}

/// A plugin that applies to the current selection, tagged with its tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedPlugin<'a> {
    pub name: &'a str,
    pub is_external: bool,
    pub detail: &'a PluginDetail,
}

/// Both tiers resolved for `repo`: built-in plugins first, then external
/// ones. Only plugins with a detail record that lists commands are kept. A
/// name present in both tiers yields two entries.
pub fn applicable_plugins<'a>(doc: &'a HelpDocument, repo: &str) -> Vec<ResolvedPlugin<'a>> {
    let mut out = Vec::new();
    collect_tier(&mut out, repo, &doc.repo_plugins, doc, false);
    collect_tier(&mut out, repo, &doc.repo_external_plugins, doc, true);
    out
}

fn collect_tier<'a>(
    out: &mut Vec<ResolvedPlugin<'a>>,
    repo: &str,
    table: &ApplicabilityTable,
    doc: &'a HelpDocument,
    is_external: bool,
) {
    for name in resolve(repo, table) {
        let Some((name, detail)) = (if is_external {
            doc.external_plugin_help.get_key_value(name.as_str())
        } else {
            doc.plugin_help.get_key_value(name.as_str())
        }) else {
            continue;
        };
        if detail.commands.is_none() {
            continue;
        }
        out.push(ResolvedPlugin {
            name,
            is_external,
            detail,
        });
    }
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
