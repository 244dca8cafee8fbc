// Integration tests for configuration loading
//
// These tests cover the credential check, the initial participant list and
// loading settings from a config file.

use anyhow::Result;
use minutegem::config::{
    parse_initial_participants, MALFORMED_PARTICIPANTS_NOTICE, MISSING_API_KEY_MESSAGE,
};
use minutegem::{Config, Participant};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_malformed_participants_degrade_to_empty_with_warning() {
    let initial = parse_initial_participants(Some("[{\"name\": \"A\""));

    assert!(initial.participants.is_empty());
    assert_eq!(initial.notice.as_deref(), Some(MALFORMED_PARTICIPANTS_NOTICE));
}

#[test]
fn test_wrong_shape_participants_degrade_to_empty() {
    let initial = parse_initial_participants(Some(r#"{"name":"A"}"#));

    assert!(initial.participants.is_empty());
    assert!(initial.notice.is_some());
}

#[test]
fn test_valid_participants_are_parsed() {
    let initial = parse_initial_participants(Some(
        r#"[{"name":"Aさん","role":"役割","remark":"備考"},{"name":"Bさん"}]"#,
    ));

    assert!(initial.notice.is_none());
    assert_eq!(
        initial.participants,
        vec![
            Participant::new("Aさん", "役割", "備考"),
            Participant::new("Bさん", "", ""),
        ]
    );
}

#[test]
fn test_absent_participants_is_empty_without_warning() {
    let initial = parse_initial_participants(None);
    assert!(initial.participants.is_empty());
    assert!(initial.notice.is_none());

    let initial = parse_initial_participants(Some(""));
    assert!(initial.participants.is_empty());
    assert!(initial.notice.is_none());
}

#[test]
fn test_missing_api_key_is_fatal() -> Result<()> {
    let cfg = Config::from_toml("")?;

    let err = cfg.api_key().unwrap_err();
    assert_eq!(err.to_string(), MISSING_API_KEY_MESSAGE);

    Ok(())
}

#[test]
fn test_empty_api_key_is_fatal() -> Result<()> {
    let cfg = Config::from_toml("gemini_api_key = \"\"")?;
    assert!(cfg.api_key().is_err());
    Ok(())
}

#[test]
fn test_defaults_apply_when_sections_missing() -> Result<()> {
    let cfg = Config::from_toml("gemini_api_key = \"k\"")?;

    assert_eq!(cfg.api_key()?, "k");
    assert_eq!(cfg.service.name, "minutegem");
    assert_eq!(cfg.service.http.port, 8501);
    assert_eq!(cfg.generation.model, "gemini-2.0-pro-exp-02-05");
    assert_eq!(
        cfg.generation.api_base,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert_eq!(cfg.generation.timeout_secs, 120);
    assert_eq!(cfg.static_dir, "static");

    Ok(())
}

#[test]
fn test_load_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("minutegem.toml");
    fs::write(
        &path,
        r#"
participants = '[{"name":"田中","role":"書記"}]'

[service]
name = "minutes-test"

[service.http]
bind = "0.0.0.0"
port = 9000

[generation]
model = "gemini-1.5-flash"
timeout_secs = 30
"#,
    )?;

    let cfg = Config::load(path.to_str().unwrap())?;

    assert_eq!(cfg.service.name, "minutes-test");
    assert_eq!(cfg.service.http.bind, "0.0.0.0");
    assert_eq!(cfg.service.http.port, 9000);
    assert_eq!(cfg.generation.model, "gemini-1.5-flash");
    assert_eq!(cfg.generation.timeout_secs, 30);

    // PARTICIPANTS from the environment would override the file value
    if std::env::var("PARTICIPANTS").is_err() {
        let initial = cfg.initial_participants();
        assert_eq!(
            initial.participants,
            vec![Participant::new("田中", "書記", "")]
        );
    }

    Ok(())
}

#[test]
fn test_load_without_file_uses_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("does-not-exist");

    let cfg = Config::load(path.to_str().unwrap())?;
    assert_eq!(cfg.generation.model, "gemini-2.0-pro-exp-02-05");

    Ok(())
}

#[test]
fn test_prefixed_environment_overrides_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("minutegem.toml");
    fs::write(&path, "static_dir = \"from-file\"\n")?;

    std::env::set_var("MINUTEGEM_STATIC_DIR", "from-env");
    std::env::set_var("MINUTEGEM_GENERATION__API_BASE", "http://localhost:9999/v1beta");
    let cfg = Config::load(path.to_str().unwrap());
    std::env::remove_var("MINUTEGEM_STATIC_DIR");
    std::env::remove_var("MINUTEGEM_GENERATION__API_BASE");
    let cfg = cfg?;

    assert_eq!(cfg.static_dir, "from-env");
    assert_eq!(cfg.generation.api_base, "http://localhost:9999/v1beta");

    Ok(())
}
