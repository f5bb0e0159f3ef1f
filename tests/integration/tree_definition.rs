use std::fs;

use deskterm::error::{ApiError, TreeError};
use deskterm::tooling::cli::{CliContext, Commands};
use deskterm::tree::FsTree;
use tempfile::TempDir;

const YAML_TREE: &str = r#"
nodes:
  - title: projects
    children:
      - title: readme.txt
        content: hello
      - title: links.txt
        content:
          items: [one, two]
  - title: motd.txt
    content:
      spans:
        - text: "hi "
        - text: there
          tone: teal
          bold: true
"#;

#[test]
fn yaml_definition_builds_in_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree.yaml");
    fs::write(&path, YAML_TREE).unwrap();

    let tree = FsTree::load(Some(path.as_path())).unwrap();
    let titles: Vec<&str> = tree.root().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["projects", "motd.txt"]);
    let projects = &tree.root()[0];
    assert!(projects.is_directory());
    assert_eq!(projects.children().len(), 2);
    assert_eq!(tree.node_count(), 4);
}

#[test]
fn duplicate_titles_rejected_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree.json");
    fs::write(
        &path,
        r#"{"nodes": [{"title": "a.txt", "content": "1"}, {"title": "a.txt", "content": "2"}]}"#,
    )
    .unwrap();

    let err = FsTree::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, TreeError::DuplicateTitle { .. }));
}

#[test]
fn missing_definition_is_read_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent.toml");
    let err = FsTree::load(Some(missing.as_path())).unwrap_err();
    assert!(matches!(err, TreeError::Read { ref path, .. } if path == &missing));
}

#[test]
fn misspelled_key_in_file_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree.json");
    fs::write(&path, r#"{"nodes": [{"title": "notes.txt", "contents": "x"}]}"#).unwrap();

    let err = FsTree::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, TreeError::Parse(_)));
}

#[test]
fn cli_context_uses_fs_override() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("tree.yaml");
    fs::write(&path, YAML_TREE).unwrap();

    let context = CliContext::new(None, Some(path)).unwrap();
    let output = context
        .execute(&Commands::Run {
            lines: vec!["cd projects".to_string(), "cat links.txt".to_string()],
            script: None,
            format: "text".to_string(),
        })
        .unwrap();
    assert!(output.contains("\u{2022} one"));
    assert!(output.contains("\u{2022} two"));
}

#[test]
fn cli_context_reads_config_file() {
    let temp = TempDir::new().unwrap();
    let tree_path = temp.path().join("tree.yaml");
    fs::write(&tree_path, YAML_TREE).unwrap();
    let config_path = temp.path().join("deskterm.toml");
    fs::write(
        &config_path,
        format!(
            "[terminal]\nuser = \"guest\"\nhost = \"box\"\n\n[filesystem]\ndefinition = {:?}\n",
            tree_path.display().to_string()
        ),
    )
    .unwrap();

    let context = CliContext::new(Some(config_path.as_path()), None).unwrap();
    let output = context
        .execute(&Commands::Run {
            lines: vec!["ls".to_string()],
            script: None,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let entries = parsed["entries"].as_array().unwrap();
    assert_eq!(entries[0]["user"], "guest");
    assert_eq!(entries[0]["host"], "box");
    assert_eq!(entries[0]["input"], "ls");
    let listing = entries[1]["output"]["value"].as_array().unwrap();
    assert_eq!(listing[0]["title"], "projects");
    assert_eq!(listing[0]["kind"], "directory");
}

#[test]
fn bad_config_path_is_config_error() {
    let temp = TempDir::new().unwrap();
    let result = CliContext::new(Some(temp.path().join("nope.toml").as_path()), None);
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}
