//! End-to-end command tests through `execute`, without spawning the binary.

use clap::Parser;

use banker_cli::run::{EXIT_DEADLOCK, EXIT_SAFE};
use banker_cli::{execute, Cli};
use banker_core::config::BankerConfig;

const CLASSIC: &[&str] = &[
    "--processes",
    "0 1 2 3 4",
    "--resources",
    "0 1 2",
    "--allocation",
    "0 1 0, 2 0 0, 3 0 2, 2 1 1, 0 0 2",
    "--max-need",
    "7 5 3, 3 2 2, 9 0 2, 2 2 2, 4 3 3",
];

fn cli(command: &str, extra: &[&str]) -> Cli {
    let mut args = vec!["banker", command];
    args.extend_from_slice(CLASSIC);
    args.extend_from_slice(extra);
    Cli::try_parse_from(args).unwrap()
}

/// Config as `main` would resolve it, minus files and environment.
fn config_for(cli: &Cli) -> BankerConfig {
    let mut config = BankerConfig::default();
    let o = cli.overrides();
    config.output.format = o.format;
    config.output.separator = o.separator;
    config.output.show_trace = o.show_trace;
    config.checker.record_trace = o.record_trace;
    config.checker.verbose_trace = o.verbose_trace;
    config.input.strict_need = o.strict_need;
    config
}

#[test]
fn safe_text_report() {
    let cli = cli("check", &["--available", "3 3 2"]);
    let outcome = execute(&cli, &config_for(&cli)).unwrap();

    assert_eq!(outcome.exit_code, EXIT_SAFE);
    assert!(outcome.stdout.starts_with("The system is in a SAFE state!"));
    assert!(outcome.stdout.contains("Process P1 can execute"));
    assert!(outcome
        .stdout
        .contains("Safe sequence: P1 ➡ P3 ➡ P0 ➡ P2 ➡ P4"));
}

#[test]
fn deadlock_text_report_exit_code() {
    let cli = cli("check", &["--available", "0 0 0", "--no-trace"]);
    let outcome = execute(&cli, &config_for(&cli)).unwrap();

    assert_eq!(outcome.exit_code, EXIT_DEADLOCK);
    assert!(outcome.stdout.starts_with("The system is in a DEADLOCK state!"));
    assert!(!outcome.stdout.contains("calculation steps"));
    assert!(outcome
        .stdout
        .contains("No safe sequence exists. Blocked: P0, P1, P2, P3, P4"));
}

#[test]
fn json_report_with_custom_separator() {
    let cli = cli(
        "check",
        &["--available", "3 3 2", "--format", "json", "--separator", " -> "],
    );
    let outcome = execute(&cli, &config_for(&cli)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();

    assert_eq!(value["safe"], true);
    assert_eq!(value["deadlocked"], false);
    assert_eq!(value["order"], serde_json::json!([1, 3, 0, 2, 4]));
    assert_eq!(value["sequence"], "P1 -> P3 -> P0 -> P2 -> P4");
    assert_eq!(value["trace"][0]["kind"], "completed");
    assert_eq!(value["graph"]["edges"].as_array().unwrap().len(), 20);
}

#[test]
fn malformed_input_is_an_error_not_a_verdict() {
    let cli = cli("check", &["--available", "3 3"]);
    let err = execute(&cli, &config_for(&cli)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("invalid input"));
    assert!(message.contains("available has 2 entries, expected 3"));
}

#[test]
fn dot_file_is_written_alongside_check() {
    let dir = tempfile::TempDir::new().unwrap();
    let dot_path = dir.path().join("rag.dot");
    let dot_arg = dot_path.to_str().unwrap().to_string();
    let cli = cli("check", &["--available", "3 3 2", "--dot", &dot_arg]);
    execute(&cli, &config_for(&cli)).unwrap();

    let dot = std::fs::read_to_string(&dot_path).unwrap();
    assert!(dot.starts_with("digraph {"));
}

#[test]
fn graph_command_prints_dot() {
    let cli = cli("graph", &["--available", "3 3 2"]);
    let outcome = execute(&cli, &config_for(&cli)).unwrap();
    assert!(outcome.stdout.contains("label = \"P4\""));
}

#[test]
fn snapshot_file_input() {
    let path = test_fixtures::fixture_path("golden/safety/partial_progress_deadlock.json");
    let cli = Cli::try_parse_from([
        "banker",
        "check",
        "--snapshot",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let outcome = execute(&cli, &config_for(&cli)).unwrap();
    assert_eq!(outcome.exit_code, EXIT_DEADLOCK);
    assert!(outcome.stdout.contains("Blocked: P1, P2"));
}

#[test]
fn overrides_reflect_flags() {
    let cli = Cli::try_parse_from([
        "banker",
        "--config",
        "custom.toml",
        "check",
        "--verbose-trace",
        "--lenient-need",
    ])
    .unwrap();
    let o = cli.overrides();
    assert_eq!(o.config_path.unwrap().to_str(), Some("custom.toml"));
    assert_eq!(o.verbose_trace, Some(true));
    assert_eq!(o.strict_need, Some(false));
    assert_eq!(o.show_trace, None);
    assert_eq!(o.record_trace, None);
}

#[test]
fn no_trace_turns_off_recording_and_printing() {
    let cli = cli("check", &["--available", "3 3 2", "--no-trace", "--format", "json"]);
    let o = cli.overrides();
    assert_eq!(o.record_trace, Some(false));
    assert_eq!(o.show_trace, Some(false));

    let config = config_for(&cli);
    assert!(!config.checker.effective_record_trace());
    let outcome = execute(&cli, &config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
    assert_eq!(value["safe"], true);
    assert!(value.get("trace").is_none());
}

#[test]
fn config_command_prints_toml() {
    let cli = Cli::try_parse_from(["banker", "config"]).unwrap();
    let mut config = BankerConfig::default();
    config.output.separator = Some(" | ".to_string());
    let outcome = execute(&cli, &config).unwrap();
    assert!(outcome.stdout.contains("separator = \" | \""));
}

#[test]
fn processes_without_resources_are_all_safe() {
    let cli = Cli::try_parse_from(["banker", "check", "--processes", "0 1 2"]).unwrap();
    let outcome = execute(&cli, &config_for(&cli)).unwrap();
    assert_eq!(outcome.exit_code, EXIT_SAFE);
    assert!(outcome.stdout.contains("Safe sequence: P0 ➡ P1 ➡ P2"));
}
