use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use super::diagnostics::{format_diagnostics, Diagnostic, Error, LoadError, ValidationError};
use super::partial::PartialConfig;

#[derive(Debug, Default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub presence: PresenceConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Rendered diagnostics for every error found
    #[error("{0}")]
    Invalid(String),
}

// LogLevel needs Deserialize because it's used in PartialLoggingConfig with toml::Spanned
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: LogLevel,

    /// Per-target levels, e.g. `"homeflow::api" = "debug"`
    pub overrides: HashMap<String, LogLevel>,
}

impl LoggingConfig {
    fn override_directive(target: &str, level: LogLevel) -> Result<Directive, String> {
        format!("{}={}", target, LevelFilter::from(level))
            .parse()
            .map_err(|e| format!("invalid log target '{}': {}", target, e))
    }

    /// Build the subscriber filter. Invalid targets are rejected by
    /// [`Config::validate`] and skipped here.
    pub fn env_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::default().add_directive(LevelFilter::from(self.level).into());
        for (target, level) in &self.overrides {
            if let Ok(directive) = Self::override_directive(target, *level) {
                filter = filter.add_directive(directive);
            }
        }
        filter
    }
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub listen: String,
    pub port: u16,

    /// Directory served under `/assets`. A relative path in a config file
    /// is taken relative to that file.
    pub assets_dir: PathBuf,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1".to_string(),
            port: 8080,
            assets_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PresenceConfig {
    pub interval_secs: u64,

    /// First hour (inclusive) the user counts as away
    pub away_from: u32,

    /// Last hour (inclusive) the user counts as away
    pub away_until: u32,

    /// Arrival time shown while away, `HH:MM`
    pub arrival: String,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            interval_secs: 5,
            away_from: 9,
            away_until: 17,
            arrival: "18:30".to_string(),
        }
    }
}

impl PresenceConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub step_interval_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 2000,
        }
    }
}

impl DemoConfig {
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}

impl Config {
    /// Load configuration from TOML files, following their imports.
    ///
    /// Returns the config along with any warnings. All merge and validation
    /// errors are reported together in [`ConfigError::Invalid`].
    pub fn from_files(paths: &[PathBuf]) -> Result<(Self, Vec<Diagnostic>), ConfigError> {
        let configs = PartialConfig::load_with_imports(paths)?;
        let (partial, diagnostics) = PartialConfig::merge(configs);
        Self::from_partial(partial, diagnostics)
    }

    /// Fill defaults for anything unset and validate the result
    pub fn from_partial(
        partial: PartialConfig,
        mut diagnostics: Vec<Diagnostic>,
    ) -> Result<(Self, Vec<Diagnostic>), ConfigError> {
        let mut config = Config::default();

        if let Some(logging) = partial.logging {
            if let Some(level) = logging.level {
                config.logging.level = level.into_inner();
            }
            config.logging.overrides = logging
                .overrides
                .map(|hm| hm.into_iter().map(|(k, v)| (k, v.into_inner())).collect())
                .unwrap_or_default();
        }

        if let Some(http) = partial.http {
            if let Some(listen) = http.listen {
                config.http.listen = listen.into_inner();
            }
            if let Some(port) = http.port {
                config.http.port = port.into_inner();
            }
            if let Some(assets_dir) = http.assets_dir {
                let base = partial
                    .origins
                    .get("http.assets_dir")
                    .and_then(|origin| origin.file_path.parent());
                config.http.assets_dir = match base {
                    Some(base) => base.join(assets_dir.into_inner()),
                    None => assets_dir.into_inner(),
                };
            }
        }

        if let Some(presence) = partial.presence {
            if let Some(interval_secs) = presence.interval_secs {
                config.presence.interval_secs = interval_secs.into_inner();
            }
            if let Some(away_from) = presence.away_from {
                config.presence.away_from = away_from.into_inner();
            }
            if let Some(away_until) = presence.away_until {
                config.presence.away_until = away_until.into_inner();
            }
            if let Some(arrival) = presence.arrival {
                config.presence.arrival = arrival.into_inner();
            }
        }

        if let Some(demo) = partial.demo {
            if let Some(step_interval_ms) = demo.step_interval_ms {
                config.demo.step_interval_ms = step_interval_ms.into_inner();
            }
        }

        diagnostics.extend(config.validate().into_iter().map(|mut e| {
            e.origin = partial.origins.get(&e.field_path).cloned();
            Diagnostic::Error(Error::Validation(e))
        }));

        if diagnostics.iter().any(|d| d.is_error()) {
            Err(ConfigError::Invalid(format_diagnostics(&diagnostics)))
        } else {
            Ok((config, diagnostics))
        }
    }

    /// Check every field, returning all problems found
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut check = |ok: bool, field_path: &str, message: String| {
            if !ok {
                errors.push(ValidationError {
                    field_path: field_path.to_string(),
                    message,
                    origin: None,
                });
            }
        };

        for (target, level) in &self.logging.overrides {
            let parsed = LoggingConfig::override_directive(target, *level);
            let message = parsed.as_ref().err().cloned().unwrap_or_default();
            check(
                parsed.is_ok(),
                &format!("logging.overrides.{}", target),
                message,
            );
        }

        check(
            self.http.port != 0,
            "http.port",
            "port must be non-zero".to_string(),
        );
        check(
            self.presence.interval_secs > 0,
            "presence.interval_secs",
            "interval must be at least one second".to_string(),
        );
        check(
            self.presence.away_from <= 23,
            "presence.away_from",
            format!("hour {} is out of range 0-23", self.presence.away_from),
        );
        check(
            self.presence.away_until <= 23,
            "presence.away_until",
            format!("hour {} is out of range 0-23", self.presence.away_until),
        );
        check(
            self.presence.away_from <= self.presence.away_until,
            "presence.away_until",
            format!(
                "away window ends ({}) before it starts ({})",
                self.presence.away_until, self.presence.away_from
            ),
        );
        check(
            chrono::NaiveTime::parse_from_str(&self.presence.arrival, "%H:%M").is_ok(),
            "presence.arrival",
            format!("'{}' is not a HH:MM time", self.presence.arrival),
        );
        check(
            self.demo.step_interval_ms > 0,
            "demo.step_interval_ms",
            "step interval must be non-zero".to_string(),
        );

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.presence.interval(), Duration::from_secs(5));
        assert_eq!(config.demo.step_interval(), Duration::from_secs(2));
    }

    #[test]
    fn test_example_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("homeflow.toml");
        let (config, diagnostics) = Config::from_files(&[path]).unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(config.presence.arrival, "18:30");
        assert_eq!(config.logging.overrides["tower_http"], LogLevel::Debug);
        assert!(config.http.assets_dir.join("homeflow.css").is_file());
    }

    #[test]
    fn test_default_assets_dir_ignores_cwd() {
        let config = Config::default();
        assert!(config.http.assets_dir.is_absolute());
        assert!(config.http.assets_dir.join("homeflow.css").is_file());
    }

    #[test]
    fn test_assets_dir_relative_to_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = write(
            temp_dir.path(),
            "conf/http.toml",
            "[http]\nassets_dir = \"static\"\n",
        );
        let absolute = write(
            temp_dir.path(),
            "abs.toml",
            "[http]\nassets_dir = \"/srv/homeflow\"\n",
        );

        let (config, _) = Config::from_files(&[nested]).unwrap();
        assert_eq!(
            config.http.assets_dir,
            temp_dir.path().join("conf").join("static")
        );

        let (config, _) = Config::from_files(&[absolute]).unwrap();
        assert_eq!(config.http.assets_dir, PathBuf::from("/srv/homeflow"));
    }

    #[test]
    fn test_merge_non_overlapping_configs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base_path = write(
            temp_dir.path(),
            "base.toml",
            r#"
[logging]
level = "info"

[http]
port = 9000
"#,
        );
        let extra_path = write(
            temp_dir.path(),
            "extra.toml",
            r#"
[logging.overrides]
"homeflow::api" = "debug"

[presence]
away_from = 8
"#,
        );

        let result = Config::from_files(&[base_path, extra_path]);
        assert!(result.is_ok(), "Config loading failed: {:?}", result.err());

        let (config, diagnostics) = result.unwrap();
        assert_eq!(diagnostics.len(), 0, "Expected no diagnostics");
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(
            config.logging.overrides.get("homeflow::api"),
            Some(&LogLevel::Debug)
        );
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.listen, "127.0.0.1");
        assert_eq!(config.presence.away_from, 8);
        assert_eq!(config.presence.away_until, 17);
    }

    #[test]
    fn test_conflict_detection() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base_path = write(temp_dir.path(), "base.toml", "[http]\nport = 8000\n");
        let conflict_path = write(temp_dir.path(), "conflict.toml", "[http]\nport = 8001\n");

        let result = Config::from_files(&[base_path, conflict_path]);
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Merge conflict"));
        assert!(err_msg.contains("http.port"));
    }

    #[test]
    fn test_multiple_conflicts_reported() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base_path = write(
            temp_dir.path(),
            "base.toml",
            r#"
[logging]
level = "info"

[logging.overrides]
"target1" = "trace"

[demo]
step_interval_ms = 1000
"#,
        );
        let conflict_path = write(
            temp_dir.path(),
            "conflict.toml",
            r#"
[logging]
level = "debug"

[logging.overrides]
"target1" = "error"

[demo]
step_interval_ms = 500
"#,
        );

        let err_msg = Config::from_files(&[base_path, conflict_path])
            .unwrap_err()
            .to_string();
        assert!(err_msg.contains("logging.level"));
        assert!(err_msg.contains("logging.overrides.target1"));
        assert!(err_msg.contains("demo.step_interval_ms"));
    }

    #[test]
    fn test_relative_import_paths() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "configs/base.toml",
            "[presence]\narrival = \"19:00\"\n",
        );
        let main_path = write(
            temp_dir.path(),
            "main.toml",
            "imports = [\"configs/base.toml\"]\n\n[http]\nlisten = \"0.0.0.0\"\n",
        );

        let (config, diagnostics) = Config::from_files(&[main_path]).unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(config.presence.arrival, "19:00");
        assert_eq!(config.http.listen, "0.0.0.0");
    }

    #[test]
    fn test_import_cycle_detection() {
        let temp_dir = tempfile::tempdir().unwrap();
        let a_path = write(temp_dir.path(), "a.toml", "imports = [\"b.toml\"]\n");
        write(temp_dir.path(), "b.toml", "imports = [\"a.toml\"]\n");

        let result = Config::from_files(&[a_path]);
        assert!(matches!(
            result,
            Err(ConfigError::Load(LoadError::ImportCycle { .. }))
        ));
    }

    #[test]
    fn test_empty_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let empty_path = write(temp_dir.path(), "empty.toml", "");

        let (config, diagnostics) = Config::from_files(&[empty_path]).unwrap();
        assert_eq!(diagnostics.len(), 1, "Expected 1 warning for empty config");
        assert!(diagnostics[0].is_warning());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_validation_points_at_source() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write(
            temp_dir.path(),
            "bad.toml",
            "[presence]\naway_from = 18\naway_until = 9\narrival = \"late\"\n",
        );

        let err_msg = Config::from_files(&[path]).unwrap_err().to_string();
        assert!(err_msg.contains("presence.away_until"));
        assert!(err_msg.contains("before it starts"));
        assert!(err_msg.contains("'late' is not a HH:MM time"));
        assert!(err_msg.contains("bad.toml"));
    }

    #[test]
    fn test_validate_collects_every_error() {
        let mut config = Config::default();
        config.http.port = 0;
        config.presence.interval_secs = 0;
        config.presence.away_from = 24;
        config.demo.step_interval_ms = 0;

        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field_path).collect();
        insta::assert_snapshot!(
            fields.join(","),
            @"http.port,presence.interval_secs,presence.away_from,presence.away_until,demo.step_interval_ms"
        );
    }

    #[test]
    fn test_missing_file_error() {
        let missing_path = PathBuf::from("/nonexistent/config.toml");

        let err_msg = Config::from_files(&[missing_path]).unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read"));
        assert!(err_msg.contains("/nonexistent/config.toml"));
    }

    #[test]
    fn test_env_filter_includes_overrides() {
        let mut config = LoggingConfig::default();
        config
            .overrides
            .insert("homeflow::api".to_string(), LogLevel::Debug);

        let rendered = config.env_filter().to_string().to_lowercase();
        assert!(rendered.contains("homeflow::api=debug"));
        assert!(rendered.contains("info"));
    }
}
