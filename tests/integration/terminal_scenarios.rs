use std::sync::Arc;

use deskterm::config::TerminalConfig;
use deskterm::error::CommandError;
use deskterm::interpreter::{EntryKind, Output};
use deskterm::session::{Block, Session, Submission};
use deskterm::tree::{Content, FsTree, NodeSpec, TreeBuilder};

fn projects_tree() -> Arc<FsTree> {
    Arc::new(
        TreeBuilder::new()
            .node(NodeSpec::dir(
                "projects",
                vec![NodeSpec::file("readme.txt", "hello")],
            ))
            .build()
            .unwrap(),
    )
}

fn result_of(submission: &Submission) -> Option<&Output> {
    submission.entries.iter().find_map(|entry| match &entry.block {
        Block::Output { output } => Some(output),
        Block::Prompt(_) => None,
    })
}

fn listed_titles(submission: &Submission) -> Vec<String> {
    match result_of(submission) {
        Some(Output::Listing(entries)) => entries.iter().map(|e| e.title.clone()).collect(),
        other => panic!("expected listing, got {other:?}"),
    }
}

#[test]
fn projects_readme_walkthrough() {
    let mut session = Session::new(projects_tree(), &TerminalConfig::default());

    let ls = session.submit_line("ls");
    assert_eq!(listed_titles(&ls), vec!["projects"]);
    match result_of(&ls) {
        Some(Output::Listing(entries)) => assert_eq!(entries[0].kind, EntryKind::Directory),
        other => panic!("expected listing, got {other:?}"),
    }

    let cd = session.submit_line("cd projects");
    assert!(result_of(&cd).is_none());
    assert_eq!(session.path().segments(), ["projects".to_string()]);

    let ls = session.submit_line("ls");
    assert_eq!(listed_titles(&ls), vec!["readme.txt"]);

    let cat = session.submit_line("cat readme.txt");
    assert_eq!(
        result_of(&cat),
        Some(&Output::Content(Content::Plain("hello".to_string())))
    );

    session.submit_line("cd ..");
    assert!(session.path().is_root());

    let cat = session.submit_line("cat readme.txt");
    assert_eq!(
        result_of(&cat),
        Some(&Output::Error(CommandError::FileNotFound(
            "readme.txt".to_string()
        )))
    );
}

#[test]
fn unknown_command_reports_and_keeps_path() {
    let mut session = Session::new(projects_tree(), &TerminalConfig::default());
    session.submit_line("cd projects");

    let submission = session.submit_line("foobar");
    assert_eq!(
        result_of(&submission),
        Some(&Output::Error(CommandError::CommandNotFound(
            "foobar".to_string()
        )))
    );
    assert_eq!(
        CommandError::CommandNotFound("foobar".to_string()).to_string(),
        "zsh: command not found: foobar"
    );
    assert_eq!(session.display_path(), "~/projects");
}

#[test]
fn cd_into_missing_names_the_argument() {
    let mut session = Session::new(projects_tree(), &TerminalConfig::default());
    let submission = session.submit_line("cd nowhere");
    assert_eq!(
        result_of(&submission),
        Some(&Output::Error(CommandError::PathNotFound(
            "nowhere".to_string()
        )))
    );
    assert!(session.path().is_root());
}

#[test]
fn clear_then_command_leaves_no_earlier_blocks() {
    let mut session = Session::new(projects_tree(), &TerminalConfig::default());
    session.submit_line("help");
    session.submit_line("ls");
    let cleared = session.submit_line("clear");
    let first_after_clear = cleared.entries[0].id;

    for line in ["ls", "cd projects", "foobar", ""] {
        let mut session = Session::new(projects_tree(), &TerminalConfig::default());
        session.submit_line("help");
        session.submit_line("clear");
        let submission = session.submit_line(line);

        // The frozen echo of `line` plus the result (if any) and the next prompt
        let after_echo = session.log().len() - 1;
        assert!(
            (1..=2).contains(&after_echo),
            "{line:?} left {after_echo} blocks after its echo"
        );
        assert!(session
            .log()
            .entries()
            .iter()
            .all(|entry| !matches!(&entry.block, Block::Output { output: Output::Help(_) })));
        assert_eq!(submission.entries.len(), session.log().len());
    }

    assert!(session.log().entries().iter().all(|e| e.id >= first_after_clear));
}

#[test]
fn every_submission_ends_with_an_editable_prompt() {
    let mut session = Session::new(projects_tree(), &TerminalConfig::default());
    for line in ["help", "ls", "cd projects", "cat nope", "clear", "", "cd", "x y z"] {
        let submission = session.submit_line(line);
        let last = submission.entries.last().unwrap();
        assert!(last.block.as_prompt().map(|p| p.is_editable()).unwrap_or(false));
        assert!(session.prompt().is_some());
    }
}

#[test]
fn strict_mode_rejects_extra_arguments() {
    let config = TerminalConfig {
        strict_arguments: true,
        ..TerminalConfig::default()
    };
    let mut session = Session::new(projects_tree(), &config);
    let submission = session.submit_line("cd projects now");
    assert!(matches!(
        result_of(&submission),
        Some(Output::Error(CommandError::UnsupportedSyntax(_)))
    ));
    assert!(session.path().is_root());
}
