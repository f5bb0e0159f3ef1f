use std::sync::Arc;

use deskterm::config::TerminalConfig;
use deskterm::error::CommandError;
use deskterm::interpreter::Output;
use deskterm::session::{Block, Session};
use deskterm::tree::{FsTree, NodeSpec, TreeBuilder};
use proptest::prelude::*;

/// Three levels of `docs`/`src` directories; `docs` repeats at every level.
fn nested_tree() -> Arc<FsTree> {
    fn level(depth: usize) -> Vec<NodeSpec> {
        let mut nodes = vec![NodeSpec::file(format!("level{depth}.txt"), "text")];
        if depth < 3 {
            nodes.push(NodeSpec::dir("docs", level(depth + 1)));
            nodes.push(NodeSpec::dir("src", level(depth + 1)));
        }
        nodes
    }
    let mut builder = TreeBuilder::new();
    for spec in level(0) {
        builder = builder.node(spec);
    }
    Arc::new(builder.build().unwrap())
}

fn command_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("cd docs".to_string()),
        Just("cd src".to_string()),
        Just("cd ..".to_string()),
        Just("cd .".to_string()),
        Just("cd missing".to_string()),
        Just("ls".to_string()),
        Just("cat level1.txt".to_string()),
        Just("help".to_string()),
        Just("clear".to_string()),
        Just("bogus".to_string()),
        Just(String::new()),
    ]
}

fn error_of(session: &mut Session, line: &str) -> Option<CommandError> {
    session
        .submit_line(line)
        .entries
        .into_iter()
        .find_map(|entry| match entry.block {
            Block::Output {
                output: Output::Error(err),
            } => Some(err),
            _ => None,
        })
}

proptest! {
    #[test]
    fn cd_up_at_root_is_idempotent(times in 1usize..8) {
        let mut session = Session::new(nested_tree(), &TerminalConfig::default());
        for _ in 0..times {
            prop_assert_eq!(error_of(&mut session, "cd .."), None);
            prop_assert!(session.path().is_root());
        }
    }

    #[test]
    fn root_reset_from_any_path(
        history in proptest::collection::vec(command_strategy(), 0..20),
        reset in prop_oneof![Just("cd"), Just("cd ~"), Just("cd    ")],
    ) {
        let mut session = Session::new(nested_tree(), &TerminalConfig::default());
        for line in &history {
            session.submit_line(line);
        }
        prop_assert_eq!(error_of(&mut session, reset), None);
        prop_assert!(session.path().is_root());
        prop_assert_eq!(session.display_path(), "~");
    }

    #[test]
    fn cat_directory_is_file_not_found(
        history in proptest::collection::vec(command_strategy(), 0..20),
    ) {
        let mut session = Session::new(nested_tree(), &TerminalConfig::default());
        for line in &history {
            session.submit_line(line);
        }
        if session.path().depth() < 3 {
            prop_assert_eq!(
                error_of(&mut session, "cat docs"),
                Some(CommandError::FileNotFound("docs".to_string()))
            );
        }
    }

    #[test]
    fn entry_ids_strictly_increase(
        history in proptest::collection::vec(command_strategy(), 1..30),
    ) {
        let mut session = Session::new(nested_tree(), &TerminalConfig::default());
        let mut last_seen = None;
        for line in &history {
            for entry in session.submit_line(line).entries {
                if entry.block.as_prompt().map(|p| !p.is_editable()).unwrap_or(false) {
                    // The frozen echo keeps the id it had as the live prompt
                    continue;
                }
                if let Some(previous) = last_seen {
                    prop_assert!(entry.id > previous);
                }
                last_seen = Some(entry.id);
            }
            let ids: Vec<_> = session.log().entries().iter().map(|e| e.id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn ls_lists_exactly_the_current_directory(
        history in proptest::collection::vec(command_strategy(), 0..20),
    ) {
        let mut session = Session::new(nested_tree(), &TerminalConfig::default());
        for line in &history {
            session.submit_line(line);
        }
        let expected: Vec<String> = session
            .current_children()
            .iter()
            .map(|node| node.title.clone())
            .collect();
        let listed: Vec<String> = session
            .submit_line("ls")
            .entries
            .into_iter()
            .find_map(|entry| match entry.block {
                Block::Output { output: Output::Listing(entries) } => {
                    Some(entries.into_iter().map(|e| e.title).collect())
                }
                _ => None,
            })
            .unwrap_or_default();
        prop_assert_eq!(&listed, &expected);

        let depth = session.path().depth();
        let mut titles = listed.clone();
        titles.sort();
        titles.dedup();
        prop_assert_eq!(titles.len(), listed.len());
        let level_file = format!("level{}.txt", depth);
        prop_assert!(listed.contains(&level_file));
    }
}
