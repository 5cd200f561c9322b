use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::event_loop::handle_key;
use super::*;
use crate::model::HelpDocument;

const DOC: &str = r#"{
  "AllRepos": ["org/repo"],
  "RepoPlugins": {"": ["hold"], "org/repo": ["hold", "size"]},
  "PluginHelp": {
    "hold": {
      "Description": "Holds PRs",
      "Commands": [{"Usage": "/hold", "Featured": true}]
    },
    "size": {"Commands": [{"Usage": "/size"}, {"Usage": "/size xl"}]}
  }
}"#;

fn app() -> App {
    let doc = HelpDocument::from_json_str(DOC).unwrap();
    let mut view = ViewController::new(doc, MemoryAddress::default());
    view.load(None);
    App::new(view)
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn arrows_move_within_rows() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    assert_eq!(app.view.current_repo(), "org/repo");
    assert_eq!(app.row_count(), 3);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected_row, 2);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected_row, 1);
}

#[test]
fn changing_repo_resets_row() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.view.current_repo(), "");
    assert_eq!(app.selected_row, 0);
    assert_eq!(app.view.address().href(), "/plugin-help.html");
}

#[test]
fn dialog_captures_keys_until_closed() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert!(app.view.dialog().is_open());

    // Repo navigation is ignored while the dialog is open.
    press(&mut app, KeyCode::Right);
    assert_eq!(app.view.current_repo(), "");

    press(&mut app, KeyCode::Esc);
    assert!(!app.view.dialog().is_open());
    assert!(!app.quit);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.quit);
}
