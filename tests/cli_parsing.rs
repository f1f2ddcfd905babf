//! Command-line argument parsing.

use agent_config::cli::{Cli, Commands};
use agent_config::infrastructure::logging::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_show() {
    let cli = Cli::try_parse_from(["agent-config", "show", "--reveal-license-key"]).unwrap();

    match cli.command {
        Commands::Show(args) => assert!(args.reveal_license_key),
        _ => panic!("Wrong command"),
    }
    assert!(!cli.json);
    assert_eq!(cli.log_format, LogFormat::Pretty);
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from([
        "agent-config",
        "features",
        "--json",
        "--manifest",
        "config/newrelic.yaml",
        "--log-format",
        "json",
    ])
    .unwrap();

    assert!(matches!(cli.command, Commands::Features));
    assert!(cli.json);
    assert_eq!(cli.manifest, Some(PathBuf::from("config/newrelic.yaml")));
    assert_eq!(cli.log_format, LogFormat::Json);
}

#[test]
fn test_parse_check_runtime() {
    let cli = Cli::try_parse_from([
        "agent-config",
        "check-runtime",
        "--runtime-version",
        "9.3",
        "--capability",
        "persistent_term",
        "--has",
        "persistent_term,atomics",
    ])
    .unwrap();

    match cli.command {
        Commands::CheckRuntime(args) => {
            assert_eq!(args.runtime_version.as_deref(), Some("9.3"));
            assert_eq!(args.minimum, "1.83");
            assert_eq!(args.capability.as_deref(), Some("persistent_term"));
            assert_eq!(args.has, vec!["persistent_term", "atomics"]);
        }
        _ => panic!("Wrong command"),
    }
}

#[test]
fn test_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["agent-config", "deploy"]).is_err());
}
