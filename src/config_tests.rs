//! Tests for config

use super::*;
use proptest::prelude::*;
use std::io::Write;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_missing_file_returns_defaults_silently() {
    let dir = TempDir::new().unwrap();

    let result = load_config_from(&dir.path().join("absent.toml"));

    assert!(result.warning.is_none());
    assert_eq!(result.config.server.url, types::DEFAULT_SERVER_URL);
}

#[test]
fn test_valid_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server]\nurl = \"http://example.test\"\n");

    let result = load_config_from(&path);

    assert!(result.warning.is_none());
    assert_eq!(result.config.server.url, "http://example.test");
}

#[test]
fn test_malformed_file_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server\nurl = \"http://example.test\"");

    let result = load_config_from(&path);

    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Invalid config:"), "{}", warning);
    assert_eq!(result.config.server.url, types::DEFAULT_SERVER_URL);
}

#[test]
fn test_unreadable_path_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();

    // A directory exists but cannot be read as a file
    let result = load_config_from(dir.path());

    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Failed to read config: IO error:"), "{}", warning);
}

#[test]
fn test_config_path_ends_with_remedit() {
    let path = get_config_path();
    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("remedit/config.toml") || path_str.ends_with("remedit\\config.toml"),
        "unexpected config path: {}",
        path_str
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn prop_malformed_toml_fallback(
        malformed in prop::sample::select(vec![
            "[search\nrerender_delay_ms = 100",
            "[search]\nrerender_delay_ms = fast",
            "[search]\n rerender_delay_ms",
            "search]\nrerender_delay_ms = 100",
            "[server]\nurl = \"http://x",
            "[theme]\nmode = \"blue\"",
        ])
    ) {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, malformed);

        let result = load_config_from(&path);

        prop_assert!(result.warning.is_some());
        prop_assert_eq!(result.config.search.rerender_delay_ms, 100);
        prop_assert_eq!(result.config.theme.mode, crate::theme::ThemeMode::Dark);
    }
}
