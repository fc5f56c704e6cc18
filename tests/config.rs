use pretty_assertions::assert_eq;
use serial_test::serial;
use std::io::Write;
use taskdeck::config::Config;
use taskdeck::ui::Route;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:8081");
    assert_eq!(config.session.directory, "");
    assert_eq!(config.ui.start_route, "/projects");
    assert!(!config.ui.mouse_enabled);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
    assert_eq!(config.start_route(), Route::Projects);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    config.api.base_url = "not a url".to_string();
    assert!(config.validate().is_err());
    config.api.base_url = "ftp://example.com".to_string();
    assert!(config.validate().is_err());
    config.api.base_url = "https://tasks.example.com".to_string();
    assert!(config.validate().is_ok());

    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
    config.logging.level = "debug".to_string();

    config.ui.start_route = "/nowhere".to_string();
    assert!(config.validate().is_err());
    config.ui.start_route = "/".to_string();
    assert!(config.validate().is_ok());
    config.ui.start_route = "/projects/3/tasks".to_string();
    assert!(config.validate().is_ok());
    assert_eq!(config.start_route(), Route::ProjectTasks(3));
}

#[test]
fn test_partial_config_deserialization() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[api]\nbase_url = \"http://tasks.local:9000\"\n\n[logging]\nlevel = \"warn\"").unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.api.base_url, "http://tasks.local:9000");
    assert_eq!(config.logging.level, "warn");
    // Untouched tables keep their defaults
    assert!(!config.logging.enabled);
    assert_eq!(config.ui.start_route, "/projects");
}

#[test]
fn test_invalid_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"shout\"").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[api\nbase_url = ").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());
}

#[test]
fn test_generate_default_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# taskdeck configuration"));
    let generated = content.lines().nth(1).unwrap();
    let stamp = generated.strip_prefix("# Generated on ").unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").is_ok());
    assert!(content.contains("base_url = \"http://localhost:8081\""));

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.ui.start_route, "/projects");
}

#[test]
fn test_session_dir_override() {
    let mut config = Config::default();
    config.session.directory = "/tmp/taskdeck-session".to_string();
    assert_eq!(
        config.session_dir().unwrap(),
        std::path::PathBuf::from("/tmp/taskdeck-session")
    );
}

/// Sets `TASKDECK_API_URL` for the lifetime of the guard.
struct ApiUrlEnv;

impl ApiUrlEnv {
    fn set(url: &str) -> Self {
        std::env::set_var(taskdeck::constants::API_URL_ENV, url);
        Self
    }
}

impl Drop for ApiUrlEnv {
    fn drop(&mut self) {
        std::env::remove_var(taskdeck::constants::API_URL_ENV);
    }
}

#[test]
#[serial]
fn test_env_overrides_explicit_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[api]\nbase_url = \"http://file.local:1\"").unwrap();

    let _env = ApiUrlEnv::set("http://env.local:2");
    let config = Config::load_from(Some(file.path())).unwrap();
    assert_eq!(config.api.base_url, "http://env.local:2");

    // Reading the file alone leaves the environment out.
    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.api.base_url, "http://file.local:1");
}

#[test]
#[serial]
fn test_env_overrides_discovered_config() {
    let _env = ApiUrlEnv::set("http://env.local:2");
    let config = Config::load().unwrap();
    assert_eq!(config.api.base_url, "http://env.local:2");
}

#[test]
#[serial]
fn test_invalid_env_url_is_rejected() {
    let _env = ApiUrlEnv::set("ftp://env.local");
    assert!(Config::load().is_err());
}

#[test]
#[serial]
fn test_without_env_file_value_is_kept() {
    std::env::remove_var(taskdeck::constants::API_URL_ENV);
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[api]\nbase_url = \"http://file.local:1\"").unwrap();

    let config = Config::load_from(Some(file.path())).unwrap();
    assert_eq!(config.api.base_url, "http://file.local:1");
}
