use std::fs;
use std::path::PathBuf;

use gamelift_core::config::{Config, ConfigError, Profile};
use tempfile::TempDir;

/// Returns true if running as root (euid == 0). Used to skip permission tests.
#[cfg(unix)]
fn is_root() -> bool {
    std::process::Command::new("id")
        .arg("-u")
        .output()
        .ok()
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim() == "0")
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// 1. Missing config directory / nonexistent path
// ---------------------------------------------------------------------------

#[test]
fn load_from_nonexistent_path_returns_default_config() {
    let path = PathBuf::from("/tmp/gameliftctl-test-nonexistent/does/not/exist/config.toml");
    assert!(!path.exists());

    let config = Config::load_from_path(&path).expect("missing path should load as default");

    assert!(config.profiles.is_empty());
    assert!(config.default_profile.is_none());
}

// ---------------------------------------------------------------------------
// 2. Empty config file
// ---------------------------------------------------------------------------

#[test]
fn load_empty_config_file_returns_default_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    let config = Config::load_from_path(&config_path).expect("empty file should parse as default");

    assert!(config.profiles.is_empty());
    assert!(matches!(
        config.resolve_profile(None),
        Err(ConfigError::NoProfiles { .. })
    ));
}

// ---------------------------------------------------------------------------
// 3. Corrupt / invalid TOML
// ---------------------------------------------------------------------------

#[test]
fn load_corrupt_toml_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[[[broken").unwrap();

    let err = Config::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
    assert!(
        err.to_string().contains("parse"),
        "error should mention parsing: {err}"
    );
}

// ---------------------------------------------------------------------------
// 4. Wrongly typed field
// ---------------------------------------------------------------------------

#[test]
fn load_profile_with_wrong_port_type_returns_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let content = r#"
[profiles.local]
use_local = true
local_port = "not-a-port"
"#;
    fs::write(&config_path, content).unwrap();

    let result = Config::load_from_path(&config_path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

// ---------------------------------------------------------------------------
// 5. Config with unknown / extra fields
// ---------------------------------------------------------------------------

#[test]
fn load_config_with_unknown_fields_ignores_them() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");

    let content = r#"
unknown_top_level_key = "hello"

[profiles.dev]
use_local = true
totally_unknown_field = true
"#;
    fs::write(&config_path, content).unwrap();

    let config =
        Config::load_from_path(&config_path).expect("unknown fields should be silently ignored");

    assert_eq!(config.profiles.get("dev"), Some(&Profile::local(9080)));
}

// ---------------------------------------------------------------------------
// 6. Save / load round trip through a nested directory
// ---------------------------------------------------------------------------

#[test]
fn save_creates_parent_directories_and_reloads() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("nested").join("deeper").join("config.toml");

    let mut config = Config::default();
    config.set_profile("prod".to_string(), Profile::regional("eu-west-1"));
    config.set_profile("local".to_string(), Profile::local(7777));
    config.default_profile = Some("prod".to_string());
    config.save_to_path(&config_path).unwrap();

    let loaded = Config::load_from_path(&config_path).unwrap();
    assert_eq!(loaded.default_profile.as_deref(), Some("prod"));
    assert_eq!(loaded.resolve_profile(None).unwrap().region, "eu-west-1");
    assert_eq!(
        loaded.resolve_profile(Some("local")).unwrap(),
        &Profile::local(7777)
    );
}

// ---------------------------------------------------------------------------
// 7. Environment variable expansion on load
// ---------------------------------------------------------------------------

#[test]
#[serial_test::serial]
fn load_expands_environment_variables() {
    unsafe {
        std::env::set_var("GAMELIFT_EDGE_TEST_PORT", "9191");
        std::env::remove_var("GAMELIFT_EDGE_TEST_REGION");
    }

    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    let content = r#"
[profiles.local]
use_local = true
local_port = ${GAMELIFT_EDGE_TEST_PORT}

[profiles.cloud]
region = "${GAMELIFT_EDGE_TEST_REGION:-ca-central-1}"
"#;
    fs::write(&config_path, content).unwrap();

    let config = Config::load_from_path(&config_path).unwrap();
    assert_eq!(config.profiles["local"].local_port, 9191);
    assert_eq!(config.profiles["cloud"].region, "ca-central-1");

    unsafe {
        std::env::remove_var("GAMELIFT_EDGE_TEST_PORT");
    }
}

// ---------------------------------------------------------------------------
// 8. Validation of loaded profiles
// ---------------------------------------------------------------------------

#[test]
fn loaded_profile_with_zero_timeout_fails_validation() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[profiles.bad]
timeout_secs = 0
"#,
    )
    .unwrap();

    let config = Config::load_from_path(&config_path).unwrap();
    let err = config.resolve_profile(Some("bad")).unwrap().validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "timeout_secs"));
}

// ---------------------------------------------------------------------------
// 9. Permission errors (unix only)
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[test]
fn load_unreadable_file_returns_clear_error() {
    use std::os::unix::fs::PermissionsExt;

    // Permissions are not enforced for root
    if is_root() {
        eprintln!("skipping test: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "# valid toml").unwrap();
    fs::set_permissions(&config_path, fs::Permissions::from_mode(0o000)).unwrap();

    let err = Config::load_from_path(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::LoadError { .. }));

    // Restore permissions so TempDir cleanup can remove the file
    fs::set_permissions(&config_path, fs::Permissions::from_mode(0o644)).unwrap();
}

#[cfg(unix)]
#[test]
fn save_to_readonly_directory_returns_clear_error() {
    use std::os::unix::fs::PermissionsExt;

    if is_root() {
        eprintln!("skipping test: running as root");
        return;
    }

    let dir = TempDir::new().unwrap();
    let readonly_dir = dir.path().join("readonly");
    fs::create_dir(&readonly_dir).unwrap();
    fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o444)).unwrap();

    let err = Config::default()
        .save_to_path(&readonly_dir.join("config.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::SaveError { .. }));

    fs::set_permissions(&readonly_dir, fs::Permissions::from_mode(0o755)).unwrap();
}
