use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result};

#[allow(dead_code)]
pub const HELP_DOC: &str = r#"{
  "AllRepos": ["kubernetes/test-infra", "kubernetes", "istio/istio"],
  "RepoPlugins": {
    "": ["cat"],
    "kubernetes": ["lgtm"],
    "kubernetes/test-infra": ["approve", "lgtm"]
  },
  "RepoExternalPlugins": {
    "kubernetes/test-infra": ["needs-rebase", "approve"]
  },
  "PluginHelp": {
    "cat": {
      "Description": "Adds cat pictures",
      "Events": ["pull_request", "issue_comment"],
      "Config": {"": "cats: enabled"},
      "Commands": [
        {"Usage": "/meow", "Examples": ["/meow", "/meowvie"], "Description": "Adds a cat", "WhoCanUse": "Anyone", "Featured": false}
      ]
    },
    "lgtm": {
      "Description": "Marks a PR as looks good",
      "Commands": [
        {"Usage": "/lgtm [cancel]", "Examples": ["/lgtm"], "Description": "Adds the lgtm label", "WhoCanUse": "Collaborators", "Featured": false}
      ]
    },
    "approve": {
      "Description": "Approves PRs",
      "Config": {"kubernetes/test-infra": "owners files required"},
      "Commands": [
        {"Usage": "/approve [no-issue|cancel]", "Examples": ["/approve"], "Description": "Approves a PR", "WhoCanUse": "Approvers", "Featured": true}
      ]
    }
  },
  "ExternalPluginHelp": {
    "needs-rebase": {
      "Description": "Labels PRs that need a rebase",
      "Commands": [
        {"Usage": "/needs-rebase", "Examples": "/needs-rebase", "Description": "Checks mergeability", "WhoCanUse": "Anyone", "Featured": false}
      ]
    },
    "approve": {
      "Description": "Out of tree approvals",
      "Commands": [
        {"Usage": "/approve-ext", "Examples": [], "Description": "External approve", "WhoCanUse": "Anyone", "Featured": false}
      ]
    }
  }
}"#;

pub struct HelpFile {
    _dir: tempfile::TempDir,
    pub path: PathBuf,
}

pub fn write_help_file() -> Result<HelpFile> {
    let dir = tempfile::tempdir().context("create tempdir")?;
    let path = dir.path().join("plugin-help.json");
    std::fs::write(&path, HELP_DOC).context("write plugin help")?;
    Ok(HelpFile { _dir: dir, path })
}

#[allow(dead_code)]
pub fn run_plugin_help(args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_plugin-help"))
        .args(args)
        .output()
        .with_context(|| format!("run plugin-help {:?}", args))?;

    if !out.status.success() {
        anyhow::bail!(
            "plugin-help {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}
