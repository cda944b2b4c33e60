//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Overlay file values onto `AppConfig::default()` / 将文件值覆盖到默认配置上
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No business rules / 禁止业务规则**
//!
//! Defaults live on `AppConfig::default()` in the core crate; this module only
//! overlays whatever facts the file states.

use anyhow::Context;
use std::path::PathBuf;
use wd_core::config::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Missing keys keep their `AppConfig::default()` values; present keys are
/// taken as-is, without validation.
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    Ok(config_from_toml(&toml_value))
}

fn config_from_toml(toml_value: &toml::Value) -> AppConfig {
    let mut config = AppConfig::default();

    if let Some(value) = toml_value
        .get("api")
        .and_then(|a| a.get("base_url"))
        .and_then(|v| v.as_str())
    {
        config.api.base_url = value.to_string();
    }
    if let Some(value) = toml_value
        .get("api")
        .and_then(|a| a.get("timeout_secs"))
        .and_then(|v| v.as_integer())
    {
        config.api.timeout_secs = value as u64;
    }
    if let Some(value) = toml_value
        .get("state")
        .and_then(|s| s.get("dir"))
        .and_then(|v| v.as_str())
    {
        config.state.dir = Some(PathBuf::from(value));
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Test that valid TOML is parsed correctly
    /// 测试有效 TOML 被正确解析
    #[test]
    fn load_config_reads_valid_toml() {
        let toml_content = r#"
            [api]
            base_url = "https://monitor.internal:8443"
            timeout_secs = 10

            [state]
            dir = "/var/lib/watchdeck"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.api.base_url, "https://monitor.internal:8443");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(
            config.state.dir,
            Some(PathBuf::from("/var/lib/watchdeck"))
        );
    }

    /// Test that missing keys fall back to defaults
    /// 测试缺失的键回退到默认值
    #[test]
    fn load_config_keeps_defaults_for_missing_keys() {
        let toml_content = r#"
            [api]
            timeout_secs = 5
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 5);
        assert!(config.state.dir.is_none());
    }

    /// Test that non-existent files return IO error
    /// 测试不存在的文件返回 IO 错误
    #[test]
    fn load_config_returns_io_error_on_file_not_found() {
        let non_existent_path = PathBuf::from("/this/path/does/not/exist/watchdeck.toml");

        let result = load_config(non_existent_path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string().to_lowercase();
        assert!(
            err_msg.contains("failed to read"),
            "Expected IO error message, got: {err_msg}"
        );
    }

    #[test]
    fn load_config_rejects_malformed_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"api = [unclosed").unwrap();

        let result = load_config(temp_file.path().to_path_buf());

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config as TOML"));
    }
}
