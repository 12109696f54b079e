//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.intcalc.toml` in the working directory
//! 4. `~/.config/intcalc/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::constants;
use crate::env::Env;
use crate::models::OutputFormat;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub log: LogConfig,
}

/// Result rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Emit ANSI colors in terminal output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Terminal,
            color: true,
        }
    }
}

/// Diagnostic logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, e.g. `warn` or `intcalc=debug`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// One config file as written on disk: only the keys it actually sets.
///
/// Layers are applied key by key, so a later file can restore a value an
/// earlier one changed, defaults included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    output: OutputLayer,
    log: LogLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct OutputLayer {
    format: Option<OutputFormat>,
    color: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct LogLayer {
    level: Option<String>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `.intcalc.toml` from `local_dir`, then
    /// applies environment variable overrides. CLI flags are applied by the
    /// caller on the returned value.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        let local = local_dir.map(|dir| dir.join(constants::CONFIG_FILENAME));
        Self::load_layers(global.as_deref(), local.as_deref(), env)
    }

    /// Layer explicit config file paths (either may be absent on disk).
    pub fn load_layers(
        global: Option<&Path>,
        local: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                debug!(path = %path.display(), "loading config layer");
                let layer = Self::load_file(path)?;
                config.merge(layer);
            }
        }

        config.apply_env_vars(env);
        Ok(config)
    }

    /// Load a config layer from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Apply every key the layer sets.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(format) = layer.output.format {
            self.output.format = format;
        }
        if let Some(color) = layer.output.color {
            self.output.color = color;
        }
        if let Some(level) = layer.log.level {
            self.log.level = level;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(constants::ENV_FORMAT) {
            match val.parse::<OutputFormat>() {
                Ok(format) => self.output.format = format,
                Err(_) => eprintln!("Warning: ignoring invalid {} value: {val}", constants::ENV_FORMAT),
            }
        }

        if let Some(val) = env.get(constants::ENV_LOG) {
            self.log.level = val;
        }

        match env.flag(constants::ENV_COLOR) {
            Some(Ok(color)) => self.output.color = color,
            Some(Err(val)) => {
                eprintln!("Warning: ignoring invalid {} value: {val}", constants::ENV_COLOR)
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Terminal);
        assert!(config.output.color);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[output]
format = "json"
color = false

[log]
level = "debug"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.color);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[log]\nlevel = \"info\"\n").unwrap();
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn merge_applies_every_set_key() {
        let mut base = Config::default();
        let layer: ConfigLayer =
            toml::from_str("[output]\nformat = \"json\"\ncolor = false\n[log]\nlevel = \"trace\"\n")
                .unwrap();

        base.merge(layer);

        assert_eq!(base.output.format, OutputFormat::Json);
        assert!(!base.output.color);
        assert_eq!(base.log.level, "trace");
    }

    #[test]
    fn merge_keeps_base_for_unset_keys() {
        let mut base = Config::default();
        base.output.format = OutputFormat::Json;
        base.log.level = "debug".to_string();

        base.merge(ConfigLayer::default());

        assert_eq!(base.output.format, OutputFormat::Json);
        assert_eq!(base.log.level, "debug");
    }

    #[test]
    fn local_layer_can_restore_defaults_set_away_globally() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        std::fs::write(
            &global,
            "[output]\nformat = \"json\"\ncolor = false\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();
        std::fs::write(
            &local,
            "[output]\nformat = \"terminal\"\ncolor = true\n[log]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let config = Config::load_layers(Some(&global), Some(&local), &no_env()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn error_message_leaves_cause_to_source_chain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        let cause = std::error::Error::source(&err).expect("parse error kept as source");
        assert!(err.to_string().ends_with("bad.toml"));
        assert!(!err.to_string().contains(&cause.to_string()));
    }

    #[test]
    fn load_file_not_found() {
        let err = Config::load_file(Path::new("/tmp/intcalc_not_exist_config.toml")).unwrap_err();
        assert!(err.to_string().contains("read"));
    }

    #[test]
    fn local_layer_overrides_global() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        std::fs::write(&global, "[output]\nformat = \"json\"\n[log]\nlevel = \"info\"\n").unwrap();
        std::fs::write(&local, "[log]\nlevel = \"debug\"\n").unwrap();

        let config = Config::load_layers(Some(&global), Some(&local), &no_env()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn missing_layers_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_layers(
            Some(&dir.path().join("nope.toml")),
            Some(&dir.path().join(".intcalc.toml")),
            &no_env(),
        )
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_reads_local_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".intcalc.toml"),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn env_vars_override_files() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("local.toml");
        std::fs::write(&local, "[output]\nformat = \"json\"\n").unwrap();

        let env = Env::mock([
            ("INTCALC_FORMAT", "terminal"),
            ("INTCALC_LOG", "trace"),
            ("INTCALC_COLOR", "off"),
        ]);
        let config = Config::load_layers(None, Some(&local), &env).unwrap();
        assert_eq!(config.output.format, OutputFormat::Terminal);
        assert_eq!(config.log.level, "trace");
        assert!(!config.output.color);
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let env = Env::mock([("INTCALC_FORMAT", "xml"), ("INTCALC_COLOR", "sometimes")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn global_config_path_mentions_app_dir() {
        if let Some(p) = Config::global_config_path() {
            assert!(p.to_string_lossy().contains("intcalc"));
        }
    }
}
