use clap::{CommandFactory, Parser};
use deskterm::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["deskterm", "repl"],
        vec!["deskterm", "repl", "--no-color"],
        vec!["deskterm", "run", "ls"],
        vec!["deskterm", "run", "cd projects", "ls", "--format", "json"],
        vec!["deskterm", "run", "--script", "session.txt"],
        vec!["deskterm", "tree"],
        vec!["deskterm", "tree", "--format", "json"],
        vec!["deskterm", "--fs", "tree.yaml", "repl"],
        vec!["deskterm", "repl", "--config", "deskterm.toml", "--log-level", "debug"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn run_requires_lines_or_script() {
    assert!(Cli::try_parse_from(["deskterm", "run"]).is_err());
    assert!(Cli::try_parse_from(["deskterm", "run", "ls", "--script", "s.txt"]).is_err());
}

#[test]
fn run_keeps_lines_in_order() {
    let cli = Cli::try_parse_from(["deskterm", "run", "cd projects", "ls"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::Run {
            lines: vec!["cd projects".to_string(), "ls".to_string()],
            script: None,
            format: "text".to_string(),
        }
    );
}

#[test]
fn logging_flags_override_config() {
    let cli = Cli::try_parse_from([
        "deskterm",
        "tree",
        "--log-level",
        "trace",
        "--log-output",
        "stderr",
    ])
    .unwrap();
    let mut config = deskterm::config::DesktermConfig::default();
    cli.apply_logging_overrides(&mut config);
    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.logging.output, "stderr");
    assert_eq!(config.logging.format, "text");
}

#[test]
fn help_lists_subcommands() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();
    for token in ["repl", "run", "tree", "--fs", "--config"] {
        assert!(output.contains(token), "help should mention {token}");
    }
}
