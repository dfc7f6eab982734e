use std::io;
use std::sync::{Arc, Mutex};

use medic_cli::config::{
    load_config_from, migrate, save_config_to, LogFormat, MedicConfig, CURRENT_VERSION,
};
use medic_cli::logging;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn v0_config_gains_show_indicators() {
    let json = serde_json::json!({ "log_format": "json" });
    let migrated = migrate(json, 0).unwrap();
    assert_eq!(migrated["show_indicators"], true);
    assert_eq!(migrated["config_version"], 1);

    let config: MedicConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn v0_migration_keeps_existing_choice() {
    let json = serde_json::json!({ "show_indicators": false });
    let migrated = migrate(json, 0).unwrap();
    assert_eq!(migrated["show_indicators"], false);
}

#[test]
fn newer_config_is_rejected() {
    let json = serde_json::json!({ "config_version": CURRENT_VERSION + 1 });
    assert!(migrate(json, CURRENT_VERSION + 1).is_err());
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(serde_json::json!([1, 2]), 0).is_err());
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = MedicConfig {
        config_version: 0,
        overlay_path: Some("/srv/medic/local.json".into()),
        ..MedicConfig::default()
    };

    let path = save_config_to(dir.path(), &config).unwrap();
    assert!(!dir.path().join("config.json.tmp").exists());

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.overlay_path, config.overlay_path);
    assert!(loaded.show_indicators);
}

#[test]
fn unversioned_file_on_disk_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"log_format": "pretty"}"#).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert!(loaded.show_indicators);
    assert_eq!(loaded.note_template, None);
}

#[test]
fn migration_logs_reach_the_startup_subscriber() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"log_format": "json"}"#).unwrap();

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = logging::subscriber(LogFormat::Pretty, EnvFilter::new("info"), move || {
        writer.clone()
    });
    let config = tracing::subscriber::with_default(subscriber, || load_config_from(&path)).unwrap();
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.show_indicators);

    let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("migrated config v0"), "logs were: {logs}");
}
