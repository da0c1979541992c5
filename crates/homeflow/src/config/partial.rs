use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::diagnostics::{
    Diagnostic, Error, FieldOrigin, LoadError, MergeError, SourceInfo, Warning,
};
use super::LogLevel;

/// One config file as written, every field optional.
#[derive(Debug, Default, Deserialize)]
pub struct PartialConfig {
    #[serde(default)]
    pub imports: Vec<String>,

    pub logging: Option<PartialLoggingConfig>,
    pub http: Option<PartialHttpConfig>,
    pub presence: Option<PartialPresenceConfig>,
    pub demo: Option<PartialDemoConfig>,

    /// Source information for error reporting (not serialized)
    #[serde(skip)]
    pub source: Option<SourceInfo>,

    /// Which file set each field, keyed by dotted path. Filled by merge.
    #[serde(skip)]
    pub origins: HashMap<String, FieldOrigin>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialLoggingConfig {
    pub level: Option<toml::Spanned<LogLevel>>,
    pub overrides: Option<HashMap<String, toml::Spanned<LogLevel>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialHttpConfig {
    pub listen: Option<toml::Spanned<String>>,
    pub port: Option<toml::Spanned<u16>>,
    pub assets_dir: Option<toml::Spanned<PathBuf>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialPresenceConfig {
    pub interval_secs: Option<toml::Spanned<u64>>,
    pub away_from: Option<toml::Spanned<u32>>,
    pub away_until: Option<toml::Spanned<u32>>,
    pub arrival: Option<toml::Spanned<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialDemoConfig {
    pub step_interval_ms: Option<toml::Spanned<u64>>,
}

/// First-wins field merging with conflict collection.
struct Merger {
    origins: HashMap<String, FieldOrigin>,
    diagnostics: Vec<Diagnostic>,
}

impl Merger {
    fn field<T>(
        &mut self,
        path: &str,
        slot: &mut Option<toml::Spanned<T>>,
        incoming: Option<toml::Spanned<T>>,
        source: &SourceInfo,
    ) {
        let Some(value) = incoming else {
            return;
        };

        let origin = FieldOrigin {
            file_path: source.file_path.clone(),
            span: value.span(),
            content: source.content.clone(),
        };

        if let Some(prev) = self.origins.get(path) {
            self.diagnostics.push(Diagnostic::Error(Error::Merge(MergeError {
                field_path: path.to_string(),
                message: format!("'{}' defined in multiple config files", path),
                conflicts: vec![prev.clone(), origin],
            })));
        } else {
            *slot = Some(value);
            self.origins.insert(path.to_string(), origin);
        }
    }
}

impl PartialConfig {
    /// Load a single config file without processing imports
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            error: e,
        })?;

        let mut config: PartialConfig = toml::from_str(&content).map_err(|e| LoadError::Parse {
            path: path.to_path_buf(),
            error: e,
        })?;

        config.source = Some(SourceInfo {
            file_path: path.to_path_buf(),
            content,
        });

        Ok(config)
    }

    /// Load config files with import resolution
    ///
    /// Returns every loaded file in order: imports first, then the file that
    /// imported them.
    pub fn load_with_imports(paths: &[PathBuf]) -> Result<Vec<Self>, LoadError> {
        let mut visited = HashSet::new();
        let mut all_configs = Vec::new();

        for path in paths {
            Self::load_recursive(path, &mut visited, &mut all_configs)?;
        }

        Ok(all_configs)
    }

    fn load_recursive(
        path: &Path,
        visited: &mut HashSet<PathBuf>,
        configs: &mut Vec<Self>,
    ) -> Result<(), LoadError> {
        let canonical_path = path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf());

        if visited.contains(&canonical_path) {
            return Err(LoadError::ImportCycle {
                path: canonical_path.clone(),
                cycle: visited.iter().cloned().collect(),
            });
        }

        visited.insert(canonical_path.clone());

        let config = Self::from_file(path)?;

        for import_path in &config.imports {
            let import_path_buf = PathBuf::from(import_path);

            // Relative imports resolve from the importing file's directory
            let resolved_path = if import_path_buf.is_absolute() {
                import_path_buf
            } else {
                let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
                parent_dir.join(import_path_buf)
            };

            Self::load_recursive(&resolved_path, visited, configs)?;
        }

        configs.push(config);

        // Sibling branches may import the same file
        visited.remove(&canonical_path);

        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.logging.is_none()
            && self.http.is_none()
            && self.presence.is_none()
            && self.demo.is_none()
            && self.imports.is_empty()
    }

    /// Merge multiple partial configs together
    ///
    /// The first occurrence of a field wins. Every later occurrence is
    /// reported as a merge error, and merging carries on so all conflicts
    /// surface at once.
    pub fn merge<I>(configs: I) -> (Self, Vec<Diagnostic>)
    where
        I: IntoIterator<Item = Self>,
    {
        let mut result = PartialConfig::default();
        let mut imports = Vec::new();
        let mut merger = Merger {
            origins: HashMap::new(),
            diagnostics: Vec::new(),
        };

        for config in configs {
            imports.extend(config.imports.clone());

            let source = config.source.clone().unwrap_or_else(|| SourceInfo {
                file_path: PathBuf::from("<unknown>"),
                content: String::new(),
            });

            if config.is_empty() {
                merger.diagnostics.push(Diagnostic::Warning(Warning::EmptyConfig {
                    file_path: source.file_path.clone(),
                }));
            }

            if let Some(logging) = config.logging {
                let dst = result.logging.get_or_insert_with(Default::default);
                merger.field("logging.level", &mut dst.level, logging.level, &source);

                for (key, value) in logging.overrides.unwrap_or_default() {
                    let mut slot = None;
                    merger.field(
                        &format!("logging.overrides.{}", key),
                        &mut slot,
                        Some(value),
                        &source,
                    );
                    if let Some(value) = slot {
                        dst.overrides
                            .get_or_insert_with(HashMap::new)
                            .insert(key, value);
                    }
                }
            }

            if let Some(http) = config.http {
                let dst = result.http.get_or_insert_with(Default::default);
                merger.field("http.listen", &mut dst.listen, http.listen, &source);
                merger.field("http.port", &mut dst.port, http.port, &source);
                merger.field("http.assets_dir", &mut dst.assets_dir, http.assets_dir, &source);
            }

            if let Some(presence) = config.presence {
                let dst = result.presence.get_or_insert_with(Default::default);
                merger.field(
                    "presence.interval_secs",
                    &mut dst.interval_secs,
                    presence.interval_secs,
                    &source,
                );
                merger.field("presence.away_from", &mut dst.away_from, presence.away_from, &source);
                merger.field(
                    "presence.away_until",
                    &mut dst.away_until,
                    presence.away_until,
                    &source,
                );
                merger.field("presence.arrival", &mut dst.arrival, presence.arrival, &source);
            }

            if let Some(demo) = config.demo {
                let dst = result.demo.get_or_insert_with(Default::default);
                merger.field(
                    "demo.step_interval_ms",
                    &mut dst.step_interval_ms,
                    demo.step_interval_ms,
                    &source,
                );
            }
        }

        result.imports = imports;
        result.origins = merger.origins;

        (result, merger.diagnostics)
    }
}
