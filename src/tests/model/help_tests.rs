use super::help::strip_script_wrapper;
use super::*;

const DOC: &str = r#"{
  "AllRepos": ["kubernetes/test-infra", "kubernetes", "kubernetes/test-infra"],
  "RepoPlugins": {"": ["cat"], "kubernetes": ["lgtm"]},
  "RepoExternalPlugins": {"kubernetes/test-infra": ["needs-rebase"]},
  "PluginHelp": {
    "cat": {
      "Description": "Meow",
      "Events": ["issue_comment"],
      "Config": {"": "cats: yes"},
      "Commands": [
        {"Usage": "/meow", "Examples": ["/meow", "/meowvie"], "Description": "Adds a cat", "WhoCanUse": "Anyone", "Featured": true}
      ]
    },
    "lgtm": {"Description": "Looks good", "Commands": null}
  },
  "ExternalPluginHelp": {
    "needs-rebase": {}
  }
}"#;

#[test]
fn parses_wire_field_names() {
    let doc = HelpDocument::from_json_str(DOC).unwrap();
    assert_eq!(doc.repo_plugins[""], vec!["cat".to_string()]);
    assert_eq!(doc.repo_external_plugins.len(), 1);

    let cat = &doc.plugin_help["cat"];
    assert_eq!(cat.description.as_deref(), Some("Meow"));
    let commands = cat.commands.as_ref().unwrap();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].usage, CellText::from("/meow"));
    assert_eq!(commands[0].examples, CellText::from(vec!["/meow", "/meowvie"]));
    assert_eq!(commands[0].who_can_use, CellText::from("Anyone"));
    assert!(commands[0].featured);
}

#[test]
fn absent_and_null_commands_are_none() {
    let doc = HelpDocument::from_json_str(DOC).unwrap();
    assert!(doc.plugin_help["lgtm"].commands.is_none());
    assert!(doc.external_plugin_help["needs-rebase"].commands.is_none());
    assert!(doc.external_plugin_help["needs-rebase"].events.is_none());
}

#[test]
fn sorted_repos_dedups_and_sorts() {
    let doc = HelpDocument::from_json_str(DOC).unwrap();
    assert_eq!(
        doc.sorted_repos(),
        vec!["kubernetes".to_string(), "kubernetes/test-infra".to_string()]
    );
}

#[test]
fn plugin_lookup_respects_tier() {
    let doc = HelpDocument::from_json_str(DOC).unwrap();
    assert!(doc.plugin("cat", false).is_some());
    assert!(doc.plugin("cat", true).is_none());
    assert!(doc.plugin("needs-rebase", true).is_some());
}

#[test]
fn script_wrapper_is_stripped() {
    assert_eq!(strip_script_wrapper("var allHelp = {\"a\": 1};\n"), "{\"a\": 1}");
    assert_eq!(strip_script_wrapper("  {\"a\": 1}  "), "{\"a\": 1}");

    let wrapped = format!("var allHelp = {};", DOC);
    let doc = HelpDocument::from_json_str(&wrapped).unwrap();
    assert_eq!(doc.all_repos.len(), 3);
}

#[test]
fn empty_document_defaults_every_field() {
    let doc = HelpDocument::from_json_str("{}").unwrap();
    assert!(doc.all_repos.is_empty());
    assert!(doc.plugin_help.is_empty());
}

#[test]
fn branding_fields_are_optional() {
    let b = Branding::from_json_str(r##"{"logo": "/logo.png", "header_color": "#00ff00"}"##).unwrap();
    assert_eq!(b.logo.as_deref(), Some("/logo.png"));
    assert_eq!(b.header_color.as_deref(), Some("#00ff00"));
    assert!(b.favicon.is_none());
    assert!(b.background_color.is_none());
}

#[test]
fn go_nulls_read_as_empty() {
    let raw = r#"{
      "AllRepos": null,
      "RepoPlugins": null,
      "PluginHelp": {
        "hold": {"Events": null, "Commands": [{"Usage": "/hold", "Examples": null, "WhoCanUse": null}]}
      }
    }"#;
    let doc = HelpDocument::from_json_str(raw).unwrap();
    assert!(doc.all_repos.is_empty());
    assert!(doc.repo_plugins.is_empty());
    let hold = &doc.plugin_help["hold"];
    assert!(hold.events.is_none());
    let commands = hold.commands.as_ref().unwrap();
    assert!(commands[0].examples.is_empty());
    assert!(commands[0].who_can_use.is_empty());
    assert!(!commands[0].featured);
}
