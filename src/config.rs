//! Configuration file support for sbom-model.
//!
//! Provides YAML-based configuration through `sbom-model.config.yml` files,
//! and the merge of file values with command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::document_model::codec::{RecordKind, UnknownFields};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-model.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub kind: Option<RecordKind>,
    pub unknown_fields: Option<UnknownFields>,
    pub pretty: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML and known values (kind: member|metadata|service, unknown_fields: ignore|deny, format: json|markdown).",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Settings after merging CLI flags over the config file over defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub kind: Option<RecordKind>,
    pub unknown_fields: Option<UnknownFields>,
    pub pretty: bool,
}

/// Values given on the command line; `None`/`false` means "not given".
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub kind: Option<RecordKind>,
    pub deny_unknown: bool,
    pub pretty: bool,
}

impl Settings {
    pub fn resolve(
        cli: CliOverrides,
        config: Option<&ConfigFile>,
        default_format: OutputFormat,
    ) -> Self {
        let unknown_fields = if cli.deny_unknown {
            Some(UnknownFields::Deny)
        } else {
            config.and_then(|c| c.unknown_fields)
        };

        Self {
            format: cli
                .format
                .or_else(|| config.and_then(|c| c.format))
                .unwrap_or(default_format),
            kind: cli.kind.or_else(|| config.and_then(|c| c.kind)),
            unknown_fields,
            pretty: cli.pretty || config.and_then(|c| c.pretty).unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
format: md
kind: service
unknown_fields: deny
pretty: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.format, Some(OutputFormat::Markdown));
        assert_eq!(config.kind, Some(RecordKind::Service));
        assert_eq!(config.unknown_fields, Some(UnknownFields::Deny));
        assert_eq!(config.pretty, Some(true));
        assert!(config.unknown.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "kind: metadata\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.kind, Some(RecordKind::Metadata));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_invalid_value() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "kind: widget\n").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        assert!(load_config_from_path(&config_path).is_err());
    }

    #[test]
    fn test_unknown_fields_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "pretty: false\ncolour: blue\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown.len(), 1);
        assert!(config.unknown.contains_key("colour"));
    }

    #[test]
    fn test_settings_defaults_without_config() {
        let settings = Settings::resolve(CliOverrides::default(), None, OutputFormat::Markdown);
        assert_eq!(
            settings,
            Settings {
                format: OutputFormat::Markdown,
                kind: None,
                unknown_fields: None,
                pretty: false,
            }
        );
    }

    #[test]
    fn test_settings_config_fills_gaps() {
        let config = ConfigFile {
            format: Some(OutputFormat::Json),
            kind: Some(RecordKind::Service),
            unknown_fields: Some(UnknownFields::Deny),
            pretty: Some(true),
            ..Default::default()
        };
        let settings =
            Settings::resolve(CliOverrides::default(), Some(&config), OutputFormat::Markdown);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.kind, Some(RecordKind::Service));
        assert_eq!(settings.unknown_fields, Some(UnknownFields::Deny));
        assert!(settings.pretty);
    }

    #[test]
    fn test_settings_cli_wins_over_config() {
        let config = ConfigFile {
            format: Some(OutputFormat::Json),
            kind: Some(RecordKind::Service),
            ..Default::default()
        };
        let cli = CliOverrides {
            format: Some(OutputFormat::Markdown),
            kind: Some(RecordKind::Member),
            deny_unknown: true,
            pretty: false,
        };
        let settings = Settings::resolve(cli, Some(&config), OutputFormat::Json);
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.kind, Some(RecordKind::Member));
        assert_eq!(settings.unknown_fields, Some(UnknownFields::Deny));
    }
}
