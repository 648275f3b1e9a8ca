//! # Configuration
//!
//! Optional TOML configuration for the binary.
//!
//! ```toml
//! strict_references = false
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [store]
//! backend = "json"          # json | redb | memory
//! path = "data/documents.json"  # default depends on the backend
//!
//! [[criteria]]
//! code = "C1"
//! name = "Curricular Aspects"
//! items = ["Curriculum plan & syllabus", "Value-added courses proof"]
//! ```
//!
//! Every section is optional. Without `[[criteria]]` the built-in NAAC
//! checklist is used. CLI flags override the file.

use accreditrack_core::{AccreditError, Checklist, Criterion, DocumentRegistry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum configuration file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

// =============================================================================
// STORE BACKEND
// =============================================================================

/// Default store location for the JSON backend.
pub const DEFAULT_JSON_PATH: &str = "data/documents.json";

/// Default store location for the redb backend.
pub const DEFAULT_REDB_PATH: &str = "data/documents.redb";

/// Where document records live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Volatile, lost on exit.
    Memory,
    /// Pretty-printed JSON array on disk.
    #[default]
    Json,
    /// redb embedded database.
    Redb,
}

impl Backend {
    /// Lowercase name as used on the command line and in TOML.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Json => "json",
            Self::Redb => "redb",
        }
    }

    /// Store location used when none is configured. `None` for memory.
    #[must_use]
    pub fn default_path(&self) -> Option<&'static Path> {
        match self {
            Self::Memory => None,
            Self::Json => Some(Path::new(DEFAULT_JSON_PATH)),
            Self::Redb => Some(Path::new(DEFAULT_REDB_PATH)),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// `[store]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub backend: Backend,
    /// Explicit store location; the backend's default when unset.
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Store location for the configured backend. `None` for memory.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        match self.backend {
            Backend::Memory => None,
            backend => self
                .path
                .clone()
                .or_else(|| backend.default_path().map(Path::to_path_buf)),
        }
    }
}

/// One `[[criteria]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriterionConfig {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

// =============================================================================
// APP CONFIG
// =============================================================================

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Reject uploads whose criterion code or item is not in the checklist.
    pub strict_references: bool,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub criteria: Vec<CriterionConfig>,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, AccreditError> {
        toml::from_str(text).map_err(|e| AccreditError::ConfigError(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, AccreditError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            AccreditError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(AccreditError::ConfigError(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            AccreditError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, AccreditError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// The configured catalog, or the NAAC checklist when none is configured.
    pub fn checklist(&self) -> Result<Checklist, AccreditError> {
        if self.criteria.is_empty() {
            return Ok(Checklist::naac());
        }
        let criteria = self
            .criteria
            .iter()
            .map(|c| Criterion::new(c.code.clone(), c.name.clone(), c.items.iter().cloned()))
            .collect();
        Checklist::new(criteria)
    }

    /// Open the configured store and wrap it in a registry.
    pub fn open_registry(&self) -> Result<DocumentRegistry, AccreditError> {
        let registry = match (self.store.backend, self.store.resolved_path()) {
            (Backend::Json, Some(path)) => DocumentRegistry::with_json_file(&path)?,
            (Backend::Redb, Some(path)) => DocumentRegistry::with_redb(&path)?,
            _ => DocumentRegistry::in_memory(),
        };

        if self.strict_references {
            Ok(registry.with_reference_check(self.checklist()?))
        } else {
            Ok(registry)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use accreditrack_core::NewDocument;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").expect("parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.store.backend, Backend::Json);
        assert!(!config.strict_references);
    }

    #[test]
    fn parses_full_file() {
        let text = r#"
            strict_references = true

            [server]
            host = "0.0.0.0"
            port = 8080

            [store]
            backend = "redb"
            path = "/var/lib/accreditrack/documents.redb"

            [[criteria]]
            code = "K1"
            name = "Governance"
            items = ["Charter", "Minutes"]
        "#;

        let config = AppConfig::from_toml_str(text).expect("parse");
        assert!(config.strict_references);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.backend, Backend::Redb);

        let checklist = config.checklist().expect("checklist");
        assert_eq!(checklist.list_criteria().len(), 1);
        assert_eq!(checklist.required_item_count(), 2);
    }

    #[test]
    fn unknown_key_is_config_error() {
        let err = AppConfig::from_toml_str("colour = \"blue\"").expect_err("unknown key");
        assert!(matches!(err, AccreditError::ConfigError(_)));
    }

    #[test]
    fn unknown_backend_is_config_error() {
        let err = AppConfig::from_toml_str("[store]\nbackend = \"sqlite\"").expect_err("backend");
        assert!(matches!(err, AccreditError::ConfigError(_)));
    }

    #[test]
    fn duplicate_codes_rejected() {
        let text = r#"
            [[criteria]]
            code = "C1"
            name = "A"
            [[criteria]]
            code = "C1"
            name = "B"
        "#;
        let config = AppConfig::from_toml_str(text).expect("parse");
        assert!(matches!(
            config.checklist(),
            Err(AccreditError::ConfigError(_))
        ));
    }

    #[test]
    fn no_criteria_means_naac() {
        let checklist = AppConfig::default().checklist().expect("checklist");
        assert_eq!(checklist, Checklist::naac());
    }

    #[test]
    fn strict_registry_rejects_unknown_item() {
        let config = AppConfig {
            strict_references: true,
            store: StoreConfig {
                backend: Backend::Memory,
                path: None,
            },
            ..AppConfig::default()
        };
        let mut registry = config.open_registry().expect("open");
        assert!(registry.checks_references());

        let result = registry.create(NewDocument::new("Doc", "C1", "Not an item"));
        assert!(matches!(result, Err(AccreditError::ValidationError(_))));
    }

    #[test]
    fn default_path_follows_backend() {
        let mut store = StoreConfig::default();
        assert_eq!(store.resolved_path(), Some(PathBuf::from(DEFAULT_JSON_PATH)));

        store.backend = Backend::Redb;
        assert_eq!(store.resolved_path(), Some(PathBuf::from(DEFAULT_REDB_PATH)));

        store.backend = Backend::Memory;
        assert_eq!(store.resolved_path(), None);
    }

    #[test]
    fn explicit_path_wins() {
        let config =
            AppConfig::from_toml_str("[store]\nbackend = \"redb\"\npath = \"/srv/docs.db\"")
                .expect("parse");
        assert_eq!(
            config.store.resolved_path(),
            Some(PathBuf::from("/srv/docs.db"))
        );
    }

    #[test]
    fn redb_opens_beside_existing_json_store() {
        let temp = tempfile::tempdir().expect("temp dir");
        let json_path = temp.path().join("data").join("documents.json");
        let json = AppConfig {
            store: StoreConfig {
                backend: Backend::Json,
                path: Some(json_path.clone()),
            },
            ..AppConfig::default()
        };
        json.open_registry().expect("json store");
        assert!(json_path.exists());

        let redb_path = json_path.with_extension("redb");
        let redb = AppConfig {
            store: StoreConfig {
                backend: Backend::Redb,
                path: Some(redb_path.clone()),
            },
            ..AppConfig::default()
        };
        let registry = redb.open_registry().expect("redb store");
        assert_eq!(registry.backend_name(), "redb");
        assert!(redb_path.exists());
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let temp = tempfile::tempdir().expect("temp dir");
        let err = AppConfig::load(&temp.path().join("absent.toml")).expect_err("missing");
        assert!(matches!(err, AccreditError::IoError(_)));
    }
}
