//! Glob matching for catalog files.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::CatalogSettings;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid catalog include pattern '{pattern}': {source}")]
    InvalidIncludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid catalog exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Decides which files under a project root are catalogs.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    workspace_root: PathBuf,
    include: GlobSet,
    exclude: GlobSet,
}

impl FileMatcher {
    /// Compiles `translationFiles` from `settings`.
    ///
    /// # Errors
    /// Returns [`MatcherError`] naming the first pattern that is not a valid glob.
    pub fn new(workspace_root: PathBuf, settings: &CatalogSettings) -> Result<Self, MatcherError> {
        let patterns = &settings.translation_files;
        let include = compile(&patterns.include_patterns, |pattern, source| {
            MatcherError::InvalidIncludePattern { pattern, source }
        })?;
        let exclude = compile(&patterns.exclude_patterns, |pattern, source| {
            MatcherError::InvalidExcludePattern { pattern, source }
        })?;

        Ok(Self { workspace_root, include, exclude })
    }

    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// Whether an absolute path is a catalog of this project.
    ///
    /// Paths outside the project root never match.
    #[must_use]
    pub fn is_catalog_file(&self, absolute_path: &Path) -> bool {
        absolute_path
            .strip_prefix(&self.workspace_root)
            .is_ok_and(|relative| self.is_catalog_file_relative(relative))
    }

    /// Same as [`Self::is_catalog_file`] for a path relative to the project root.
    #[must_use]
    pub fn is_catalog_file_relative(&self, relative_path: &Path) -> bool {
        self.include.is_match(relative_path) && !self.exclude.is_match(relative_path)
    }
}

fn compile(
    patterns: &[String],
    invalid: impl Fn(String, globset::Error) -> MatcherError,
) -> Result<GlobSet, MatcherError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).map_err(|e| invalid(pattern.clone(), e))?);
    }
    Ok(builder.build()?)
}
