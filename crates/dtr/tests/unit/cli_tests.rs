//! CLI Tests

use clap::Parser;
use dtr::cli::{Cli, Command, LookupTarget, execute, import_shells, load_config};
use dtr::domain::ports::RegistryStorage;
use dtr::{ShellDescriptor, init_registries};
use dtr::infrastructure::AppConfig;
use dtr::infrastructure::config::EventsConfig;
use tempfile::TempDir;

fn quiet_config() -> AppConfig {
    AppConfig {
        events: EventsConfig {
            sink: "null".to_string(),
            ..EventsConfig::default()
        },
        ..AppConfig::default()
    }
}

async fn run(command: Command, config: AppConfig) -> anyhow::Result<String> {
    let mut out = Vec::new();
    execute(command, config, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_parse_lookup() {
    let cli = Cli::try_parse_from(["dtr", "--config", "dtr.toml", "lookup", "shell", "urn:a"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("dtr.toml")));
    assert_eq!(
        cli.command,
        Command::Lookup {
            target: LookupTarget::Shell,
            id: "urn:a".to_string()
        }
    );
}

#[test]
fn test_import_limit_defaults_to_page_limit() {
    let cli = Cli::try_parse_from(["dtr", "import", "shells.json"]).unwrap();
    match cli.command {
        Command::Import { limit, .. } => assert_eq!(limit, 100),
        other => panic!("Expected import, got {other:?}"),
    }
    assert!(Cli::try_parse_from(["dtr", "lookup", "aas", "x"]).is_err());
}

#[tokio::test]
async fn test_providers_lists_builtin_entries() {
    let output = run(Command::Providers, quiet_config()).await.unwrap();
    assert!(output.contains("Shell storages:"));
    assert!(output.contains("memory"));
    assert!(output.contains("broadcast"));
}

#[tokio::test]
async fn test_config_prints_toml() {
    let output = run(Command::Config, AppConfig::default()).await.unwrap();
    assert!(output.contains("[events]"));
    assert!(output.contains("backend = \"memory\""));
}

#[tokio::test]
async fn test_import_prints_first_page() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("shells.json");
    std::fs::write(
        &file,
        r#"[{"id": "urn:c"}, {"id": "urn:a", "idShort": "a"}, {"id": "urn:b"}]"#,
    )
    .unwrap();

    let output = run(Command::Import { file, limit: 2 }, quiet_config())
        .await
        .unwrap();

    assert!(output.contains("Imported 3 shell descriptors"));
    let listed: Vec<&str> = output
        .lines()
        .filter_map(|line| line.strip_prefix("  "))
        .collect();
    assert_eq!(listed, vec!["urn:a", "urn:b"]);
    assert!(output.contains("after 'urn:b'"));
}

#[tokio::test]
async fn test_import_rejects_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("dupes.json");
    std::fs::write(&file, r#"[{"id": "urn:a"}, {"id": "urn:a"}]"#).unwrap();

    let err = run(Command::Import { file, limit: 10 }, quiet_config())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("urn:a"));
}

#[tokio::test]
async fn test_failed_import_still_shuts_down_dispatch() {
    let context = init_registries(quiet_config()).await.unwrap();
    let descriptors = vec![
        ShellDescriptor::new("urn:a"),
        ShellDescriptor::new("urn:b"),
        ShellDescriptor::new("urn:a"),
    ];

    let err = import_shells(&context, descriptors, 10).await.unwrap_err();
    assert!(err.to_string().contains("urn:a"));
    assert_eq!(context.dropped_events(), 0);

    // the queue is closed, so further events are dropped
    context
        .shell_storage()
        .insert(ShellDescriptor::new("urn:c"))
        .await
        .unwrap();
    assert_eq!(context.dropped_events(), 1);
}

#[tokio::test]
async fn test_lookup_without_peer_reports_missing() {
    let err = run(
        Command::Lookup {
            target: LookupTarget::Submodel,
            id: "urn:missing".to_string(),
        },
        quiet_config(),
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("urn:missing"));
}

#[test]
fn test_load_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dtr.toml");
    std::fs::write(&path, "[events]\nsink = \"null\"\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.events.sink, "null");
}
