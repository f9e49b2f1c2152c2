use std::path::PathBuf;

use serde_json::json;
use syndx_server::config::{
    AdvisoryConfig, CURRENT_VERSION, SyndxConfig, load_config_from, migrate, save_config_to,
};

fn temp_config_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("syndx-config-{}", uuid::Uuid::new_v4()))
        .join("config.json")
}

#[test]
fn unversioned_config_is_stamped_without_reshaping() {
    let hand_written = json!({
        "bind_addr": "127.0.0.1:9000",
        "advisory": {
            "enabled": true,
            "region": "eu-west-1",
            "model_id": "eu.anthropic.claude-sonnet-4-20250514-v1:0",
            "timeout_secs": 10
        },
        "created_at": "2025-01-01T00:00:00Z"
    });

    let migrated = migrate(hand_written.clone(), 0).unwrap();
    assert_eq!(migrated["config_version"], CURRENT_VERSION);
    assert_eq!(migrated["advisory"], hand_written["advisory"]);

    let config: SyndxConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.bind_addr, "127.0.0.1:9000");
    assert_eq!(config.advisory.region, "eu-west-1");
    assert_eq!(config.advisory.timeout_secs, 10);
    assert!(config.case_log_path.is_none());
}

#[test]
fn current_version_passes_through_unchanged() {
    let current = json!({"config_version": CURRENT_VERSION, "created_at": "2025-01-01T00:00:00Z"});
    assert_eq!(migrate(current.clone(), CURRENT_VERSION).unwrap(), current);
}

#[test]
fn newer_versions_are_rejected() {
    assert!(migrate(json!({"config_version": 99}), 99).is_err());
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(json!(["not", "an", "object"]), 0).is_err());
}

#[test]
fn save_then_load_round_trips_and_stamps_version() {
    let path = temp_config_path();
    let config = SyndxConfig {
        config_version: 0,
        bind_addr: "127.0.0.1:8081".to_string(),
        case_log_path: Some(PathBuf::from("/var/lib/syndx/cases.jsonl")),
        advisory: AdvisoryConfig {
            enabled: true,
            timeout_secs: 5,
            ..AdvisoryConfig::default()
        },
        created_at: jiff::Timestamp::now(),
    };

    save_config_to(&config, &path).unwrap();
    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.bind_addr, "127.0.0.1:8081");
    assert_eq!(loaded.advisory.timeout().as_secs(), 5);
    assert!(loaded.advisory.enabled);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn minimal_file_loads_with_defaults() {
    let path = temp_config_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"created_at": "2025-01-01T00:00:00Z"}"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert!(!config.advisory.enabled);
    assert_eq!(config.advisory.region, "us-east-1");
    assert_eq!(config.advisory.timeout_secs, 15);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
