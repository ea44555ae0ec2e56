use configuration::error::ConfigError;
use configuration::{FailurePolicy, Settings, SortKey, load_settings};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

fn load_valid(path: &str) -> Result<Settings, ConfigError> {
    let settings = load_settings(Some(path))?;
    settings.validate()?;
    Ok(settings)
}

/// Sets `LEADERBOARD_*` variables for the duration of a test and removes them on drop.
struct EnvVars(Vec<&'static str>);

impl EnvVars {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (key, value) in vars {
            unsafe {
                std::env::set_var(key, value);
            }
        }
        Self(vars.iter().map(|(key, _)| *key).collect())
    }
}

impl Drop for EnvVars {
    fn drop(&mut self) {
        for key in &self.0 {
            unsafe {
                std::env::remove_var(key);
            }
        }
    }
}

#[test]
#[serial]
fn reads_the_original_json_layout() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "cf_handles.json", r#"{ "CF_HANDLES": "tourist  petr  " }"#);

    let settings = load_valid(&path).unwrap();

    assert_eq!(settings.handles(), vec!["tourist", "petr"]);
    assert_eq!(settings.report.output_file, "leaderboard.csv");
    assert_eq!(settings.run.failure_policy, FailurePolicy::FailFast);
}

#[test]
#[serial]
fn reads_a_toml_file_with_every_section() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "leaderboard.toml",
        r#"
cf_handles = ["tourist", "jiangly"]

[api]
base_url = "http://localhost:9999/api"

[report]
output_file = "ranking.csv"
sort_by = "rating"

[run]
max_concurrency = 4
failure_policy = "isolate"

[logging]
level = "debug"
"#,
    );

    let settings = load_valid(&path).unwrap();

    assert_eq!(settings.handles(), vec!["tourist", "jiangly"]);
    assert_eq!(settings.api.base_url, "http://localhost:9999/api");
    assert_eq!(settings.report.output_file, "ranking.csv");
    assert_eq!(settings.report.sort_by, SortKey::Rating);
    assert_eq!(settings.run.max_concurrency, 4);
    assert_eq!(settings.run.failure_policy, FailurePolicy::Isolate);
    assert_eq!(settings.logging.level, "debug");
}

#[test]
#[serial]
fn empty_handles_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "cf_handles.json", r#"{ "CF_HANDLES": "" }"#);

    let err = load_valid(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
}

#[test]
#[serial]
fn explicit_missing_file_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let err = load_settings(Some(&missing.to_string_lossy())).unwrap_err();
    assert!(matches!(err, ConfigError::LoadError(_)));
}

#[test]
#[serial]
fn loading_does_not_require_handles() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "leaderboard.toml", "[report]\noutput_file = \"out.csv\"\n");

    let settings = load_settings(Some(&path)).unwrap();

    assert!(settings.handles().is_empty());
    assert_eq!(settings.report.output_file, "out.csv");
    assert!(settings.validate().is_err());
}

#[test]
#[serial]
fn env_handles_override_the_original_json_key() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "cf_handles.json", r#"{ "CF_HANDLES": "tourist petr" }"#);
    let _env = EnvVars::set(&[("LEADERBOARD_CF_HANDLES", "jiangly")]);

    let settings = load_valid(&path).unwrap();

    assert_eq!(settings.handles(), vec!["jiangly"]);
}

#[test]
#[serial]
fn env_handles_fill_in_when_the_file_has_none() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "leaderboard.toml", "[run]\nmax_concurrency = 2\n");
    let _env = EnvVars::set(&[("LEADERBOARD_CF_HANDLES", "tourist  Benq")]);

    let settings = load_valid(&path).unwrap();

    assert_eq!(settings.handles(), vec!["tourist", "Benq"]);
    assert_eq!(settings.run.max_concurrency, 2);
}

#[test]
#[serial]
fn lowercase_file_key_wins_over_the_original_one() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "cf_handles.json",
        r#"{ "CF_HANDLES": "tourist", "cf_handles": ["petr"] }"#,
    );

    let settings = load_valid(&path).unwrap();

    assert_eq!(settings.handles(), vec!["petr"]);
}

#[test]
#[serial]
fn nested_env_keys_override_file_sections() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "leaderboard.toml",
        r#"
cf_handles = "tourist"

[api]
base_url = "https://codeforces.com/api"

[run]
max_concurrency = 1
"#,
    );
    let _env = EnvVars::set(&[
        ("LEADERBOARD_API__BASE_URL", "http://127.0.0.1:8080/api"),
        ("LEADERBOARD_RUN__MAX_CONCURRENCY", "3"),
    ]);

    let settings = load_valid(&path).unwrap();

    assert_eq!(settings.api.base_url, "http://127.0.0.1:8080/api");
    assert_eq!(settings.run.max_concurrency, 3);
    assert_eq!(settings.handles(), vec!["tourist"]);
}

#[test]
#[serial]
fn env_vars_are_gone_after_the_override_tests() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "cf_handles.json", r#"{ "CF_HANDLES": "tourist petr" }"#);

    let settings = load_valid(&path).unwrap();

    assert_eq!(settings.handles(), vec!["tourist", "petr"]);
    assert_eq!(settings.run.max_concurrency, 1);
}
