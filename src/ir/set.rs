//! Catalogs of a project, keyed by locale.

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use super::catalog::Catalog;
use crate::input::language::normalize_language_code;

/// A catalog together with the files it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
    /// Locale as first seen (not normalized).
    pub locale: String,
    pub catalog: Catalog,
    pub files: Vec<PathBuf>,
}

/// All catalogs of a project.
///
/// Locales are compared normalized, so `de-DE` and `de_DE` share an entry. Catalogs
/// inserted for an existing locale are merged into it, first message wins.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    catalogs: BTreeMap<String, LoadedCatalog>,
}

impl CatalogSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: &str, catalog: Catalog, file: Option<&Path>) {
        let key = normalize_language_code(locale);
        if let Some(existing) = self.catalogs.get_mut(&key) {
            let skipped = existing.catalog.merge(catalog);
            if skipped > 0 {
                tracing::warn!(
                    locale,
                    skipped,
                    file = ?file,
                    "Duplicate messages while merging catalogs; keeping the first"
                );
            }
            existing.files.extend(file.map(Path::to_path_buf));
        } else {
            self.catalogs.insert(
                key,
                LoadedCatalog {
                    locale: locale.to_string(),
                    catalog,
                    files: file.map(Path::to_path_buf).into_iter().collect(),
                },
            );
        }
    }

    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&Catalog> {
        self.entry(locale).map(|loaded| &loaded.catalog)
    }

    #[must_use]
    pub fn entry(&self, locale: &str) -> Option<&LoadedCatalog> {
        self.catalogs.get(&normalize_language_code(locale))
    }

    /// Loaded catalogs sorted by normalized locale.
    pub fn locales(&self) -> impl Iterator<Item = &LoadedCatalog> {
        self.catalogs.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}
