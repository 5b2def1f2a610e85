//! Locale routing and config loading.
//!
//! One JSON logic file per supported locale. `ConfigStore` owns an explicit
//! in-memory cache so repeated loads of the same locale parse once; the
//! cache is plain owned state with a `clear` for test isolation, never
//! implicit module-level persistence.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use assess_model::AssessmentConfig;
use thiserror::Error;
use tracing::debug;

/// Locale to logic file routing table.
pub const LOGIC_FILES: &[(&str, &str)] = &[
    ("en_US", "logic_en_US.json"),
    ("es_AR", "logic_es_AR.json"),
    ("es_MX", "logic_es_MX.json"),
    ("pt_BR", "logic_pt_BR.json"),
];

/// Returns the logic file name for a locale, `None` when unsupported.
pub fn logic_file_name(locale: &str) -> Option<&'static str> {
    LOGIC_FILES
        .iter()
        .find(|(candidate, _)| *candidate == locale)
        .map(|(_, file)| *file)
}

/// Locales with a configured logic file, in routing-table order.
pub fn supported_locales() -> impl Iterator<Item = &'static str> {
    LOGIC_FILES.iter().map(|(locale, _)| *locale)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No logic file configured for locale: {0}")]
    UnknownLocale(String),
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loader with an owned per-locale cache.
///
/// Configs are handed out as `Arc` so cached copies stay immutable and
/// cheap to share across runs.
#[derive(Debug, Default)]
pub struct ConfigStore {
    base_dir: PathBuf,
    cache: BTreeMap<String, Arc<AssessmentConfig>>,
}

impl ConfigStore {
    /// Create a store reading logic files from `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            cache: BTreeMap::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Load the config for a locale, reading and parsing at most once per
    /// store lifetime.
    pub fn load(&mut self, locale: &str) -> Result<Arc<AssessmentConfig>, ConfigError> {
        if let Some(config) = self.cache.get(locale) {
            debug!(locale, "config cache hit");
            return Ok(Arc::clone(config));
        }
        let file = logic_file_name(locale)
            .ok_or_else(|| ConfigError::UnknownLocale(locale.to_string()))?;
        let path = self.base_dir.join(file);
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: AssessmentConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        debug!(locale, path = %path.display(), "loaded config");
        let config = Arc::new(config);
        self.cache.insert(locale.to_string(), Arc::clone(&config));
        Ok(config)
    }

    /// Drop every cached config so the next load re-reads from disk.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of locales currently cached.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{
      "meta": { "market": "US", "assessment_id": "demo", "version": "1", "language": "en" },
      "questions": [ { "id": "age", "type": "number", "label": "Age", "required": true } ],
      "variable_mapping": { "is_senior": { "from_question": "age", "type": "number" } },
      "rules": { "vaccines": [] },
      "messages": {}
    }"#;

    fn store_with_en_us(contents: &str) -> (TempDir, ConfigStore) {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logic_en_US.json"), contents).unwrap();
        let store = ConfigStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn routing_table_covers_known_locales() {
        assert_eq!(logic_file_name("en_US"), Some("logic_en_US.json"));
        assert_eq!(logic_file_name("pt_BR"), Some("logic_pt_BR.json"));
        assert_eq!(logic_file_name("fr_FR"), None);
        assert_eq!(supported_locales().count(), 4);
    }

    #[test]
    fn load_parses_and_caches() {
        let (_dir, mut store) = store_with_en_us(MINIMAL);
        let first = store.load("en_US").unwrap();
        assert_eq!(first.meta.assessment_id, "demo");
        assert_eq!(store.cached_len(), 1);
        let second = store.load("en_US").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn clear_forces_a_reload() {
        let (dir, mut store) = store_with_en_us(MINIMAL);
        let first = store.load("en_US").unwrap();
        // Rewrite the file; the cached copy must win until cleared.
        let updated = MINIMAL.replace("\"demo\"", "\"demo_v2\"");
        std::fs::write(dir.path().join("logic_en_US.json"), updated).unwrap();
        assert_eq!(store.load("en_US").unwrap().meta.assessment_id, "demo");
        store.clear();
        assert_eq!(store.cached_len(), 0);
        let reloaded = store.load("en_US").unwrap();
        assert_eq!(reloaded.meta.assessment_id, "demo_v2");
        assert!(!Arc::ptr_eq(&first, &reloaded));
    }

    #[test]
    fn unknown_locale_is_an_error() {
        let (_dir, mut store) = store_with_en_us(MINIMAL);
        let err = store.load("fr_FR").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLocale(ref locale) if locale == "fr_FR"));
        assert_eq!(
            err.to_string(),
            "No logic file configured for locale: fr_FR"
        );
    }

    #[test]
    fn missing_file_and_bad_json_are_distinct_errors() {
        let dir = TempDir::new().unwrap();
        let mut store = ConfigStore::new(dir.path());
        assert!(matches!(
            store.load("en_US").unwrap_err(),
            ConfigError::Io { .. }
        ));
        std::fs::write(dir.path().join("logic_en_US.json"), "{ not json").unwrap();
        assert!(matches!(
            store.load("en_US").unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }
}
