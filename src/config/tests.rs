use std::collections::HashMap;
use std::fs;

use super::*;
use crate::task::Filter;
use crate::testutil::with_temp_cwd;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.files_store, ".tickoff/storage.json");
    assert_eq!(config.files_log, ".tickoff/tickoff.log");
    assert_eq!(config.log_max_lines, 1000);
    assert_eq!(config.ui_filter, Filter::All);
    assert!(config.ui_confirm_delete);
    assert!(!config.ephemeral);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[files]
store = "data/todo.json"
log = "logs/todo.log"

[log]
max_lines = 50

[ui]
filter = "active"
confirm_delete = false
"#;
    let config = Config::parse_toml(toml).unwrap();
    assert_eq!(config.files_store, "data/todo.json");
    assert_eq!(config.files_log, "logs/todo.log");
    assert_eq!(config.log_max_lines, 50);
    assert_eq!(config.ui_filter, Filter::Active);
    assert!(!config.ui_confirm_delete);
}

#[test]
fn test_config_parse_toml_partial_keeps_defaults() {
    let config = Config::parse_toml("[ui]\nfilter = \"completed\"\n").unwrap();
    assert_eq!(config.ui_filter, Filter::Completed);
    assert_eq!(config.files_store, DEFAULT_STORE_PATH);
}

#[test]
fn test_config_parse_toml_ignores_unknown_keys() {
    let config = Config::parse_toml("[extra]\nkey = 1\n\n[files]\nstore = \"x.json\"\n").unwrap();
    assert_eq!(config.files_store, "x.json");
}

#[test]
fn test_config_parse_toml_invalid_filter() {
    let err = Config::parse_toml("[ui]\nfilter = \"someday\"\n").unwrap_err();
    assert!(err.to_string().contains("ui.filter"));
}

#[test]
fn test_config_parse_toml_syntax_error() {
    assert!(matches!(
        Config::parse_toml("[files\nstore = "),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_default_toml_round_trips() {
    let config = Config::parse_toml(&Config::default_toml()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_apply_env() {
    let mut config = Config::default();
    env::apply_env(
        &mut config,
        vars(&[
            ("TICKOFF_STORE", "env.json"),
            ("TICKOFF_LOG", "env.log"),
            ("TICKOFF_LOG_MAX_LINES", "20"),
            ("TICKOFF_FILTER", "completed"),
            ("TICKOFF_CONFIRM_DELETE", "0"),
            ("TICKOFF_EPHEMERAL", "true"),
        ]),
    );
    assert_eq!(config.files_store, "env.json");
    assert_eq!(config.files_log, "env.log");
    assert_eq!(config.log_max_lines, 20);
    assert_eq!(config.ui_filter, Filter::Completed);
    assert!(!config.ui_confirm_delete);
    assert!(config.ephemeral);
}

#[test]
fn test_apply_env_ignores_bad_values() {
    let mut config = Config::default();
    env::apply_env(
        &mut config,
        vars(&[("TICKOFF_LOG_MAX_LINES", "lots"), ("TICKOFF_FILTER", "nope")]),
    );
    assert_eq!(config.log_max_lines, 1000);
    assert_eq!(config.ui_filter, Filter::All);
}

#[test]
fn test_parse_args_no_command() {
    let cli = parse_args(["tickoff"]).unwrap();
    assert_eq!(cli.command, None);
    assert!(!cli.ephemeral);
}

#[test]
fn test_parse_args_add_joins_words() {
    let cli = parse_args(["tickoff", "add", "Buy", "milk"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Command::Add {
            text: vec!["Buy".to_string(), "milk".to_string()]
        })
    );
}

#[test]
fn test_parse_args_add_requires_text() {
    assert!(parse_args(["tickoff", "add"]).is_err());
}

#[test]
fn test_parse_args_rm_yes() {
    let cli = parse_args(["tickoff", "rm", "42", "--yes"]).unwrap();
    assert_eq!(cli.command, Some(Command::Rm { id: 42, yes: true }));
}

#[test]
fn test_parse_args_global_flags_after_command() {
    let cli = parse_args([
        "tickoff",
        "list",
        "--filter",
        "active",
        "--store",
        "s.json",
        "--ephemeral",
    ])
    .unwrap();
    assert_eq!(cli.command, Some(Command::List));
    assert_eq!(cli.filter, Some(Filter::Active));
    assert_eq!(cli.store_file.as_deref(), Some("s.json"));
    assert!(cli.ephemeral);
}

#[test]
fn test_parse_args_bad_filter() {
    assert!(parse_args(["tickoff", "--filter", "later"]).is_err());
}

#[test]
fn test_parse_args_bad_id() {
    assert!(parse_args(["tickoff", "done", "abc"]).is_err());
}

#[test]
fn test_config_apply_cli() {
    let cli = parse_args(["tickoff", "--log-file", "cli.log", "-f", "completed"]).unwrap();
    let mut config = Config::default();
    config.apply_cli(&cli);
    assert_eq!(config.files_log, "cli.log");
    assert_eq!(config.ui_filter, Filter::Completed);
    assert_eq!(config.files_store, DEFAULT_STORE_PATH);
}

#[test]
fn test_config_load_reads_local_file_with_cli_precedence() {
    with_temp_cwd(|| {
        fs::write(
            CONFIG_FILE,
            "[files]\nstore = \"file.json\"\nlog = \"file.log\"\n",
        )
        .unwrap();
        let cli = parse_args(["tickoff", "--store", "cli.json"]).unwrap();
        let config = Config::load(&cli).unwrap();
        assert_eq!(config.files_store, "cli.json");
        assert_eq!(config.files_log, "file.log");
    });
}

#[test]
fn test_config_load_missing_explicit_file() {
    with_temp_cwd(|| {
        let cli = parse_args(["tickoff", "-c", "nowhere.toml"]).unwrap();
        assert!(matches!(Config::load(&cli), Err(ConfigError::Io(_))));
    });
}
