use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "translationFiles.includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogSettings {
    pub translation_files: TranslationFilesConfig,

    /// Locale of the source texts. Catalogs whose locale cannot be determined are
    /// registered under it.
    pub source_language: String,

    /// Fallback chain consulted after the requested locale and its language.
    pub primary_languages: Option<Vec<String>>,

    /// Serve translations marked unfinished.
    pub include_unfinished: bool,

    pub loading: LoadingConfig,
    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { include_patterns: vec!["**/translations/*.ts".to_string()], exclude_patterns: vec![] }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadingConfig {
    /// Concurrent catalog loads.
    /// Default: 80% of CPU cores (minimum 1).
    pub num_threads: Option<usize>,
}

impl LoadingConfig {
    #[must_use]
    pub fn effective_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(|| (num_cpus::get() * 4 / 5).max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagnosticsConfig {
    /// Report every unfinished translation.
    pub unfinished: bool,
    /// Compare `%1`..`%99` between source and translation.
    pub placeholders: bool,
    /// Check numerus form counts against the catalog language.
    pub plural_forms: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { unfinished: false, placeholders: true, plural_forms: true }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            translation_files: TranslationFilesConfig::default(),
            source_language: "en".to_string(),
            primary_languages: None,
            include_unfinished: true,
            loading: LoadingConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

fn validate_patterns(patterns: &[String], field: &str, errors: &mut Vec<ValidationError>) {
    for (index, pattern) in patterns.iter().enumerate() {
        if pattern.is_empty() {
            errors.push(ValidationError::new(
                format!("{field}[{index}]"),
                "The pattern cannot be empty. Example: \"**/translations/*.ts\"",
            ));
        } else if let Err(e) = globset::Glob::new(pattern) {
            errors.push(ValidationError::new(
                format!("{field}[{index}]"),
                format!("Invalid glob pattern '{pattern}': {e}"),
            ));
        }
    }
}

impl CatalogSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - `loading.numThreads` is zero
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.translation_files.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.includePatterns",
                "At least one pattern is required. Example: [\"**/translations/*.ts\"]",
            ));
        }
        validate_patterns(
            &self.translation_files.include_patterns,
            "translationFiles.includePatterns",
            &mut errors,
        );
        validate_patterns(
            &self.translation_files.exclude_patterns,
            "translationFiles.excludePatterns",
            &mut errors,
        );

        if self.source_language.trim().is_empty() {
            errors.push(ValidationError::new(
                "sourceLanguage",
                "The language cannot be empty. Example: \"en\"",
            ));
        }

        if let Some(languages) = &self.primary_languages {
            for (index, language) in languages.iter().enumerate() {
                if language.trim().is_empty() {
                    errors.push(ValidationError::new(
                        format!("primaryLanguages[{index}]"),
                        "The language cannot be empty. Remove the entry or use a tag like \"de\"",
                    ));
                }
            }
        }

        if self.loading.num_threads == Some(0) {
            errors.push(ValidationError::new(
                "loading.numThreads",
                "At least one thread is required. Remove the field to use the default",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::expect_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    #[rstest]
    fn validate_valid_settings() {
        let settings = CatalogSettings::default();

        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn deserialize_partial_settings() {
        let json = r#"{"includeUnfinished": false, "diagnostics": {"unfinished": true}}"#;

        let settings: CatalogSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.include_unfinished, eq(false));
        assert_that!(settings.diagnostics.unfinished, eq(true));
        assert_that!(settings.diagnostics.placeholders, eq(true));
        assert_that!(settings.source_language, eq("en"));
    }

    #[rstest]
    fn deserialize_empty_settings() {
        let json = "{}";

        let settings: CatalogSettings = serde_json::from_str(json).unwrap();

        assert_that!(
            settings.translation_files.include_patterns,
            elements_are![eq("**/translations/*.ts")]
        );
        assert_that!(settings.translation_files.exclude_patterns, is_empty());
        assert_that!(settings.primary_languages, none());
        assert_that!(settings.include_unfinished, eq(true));
        assert_that!(settings.loading.num_threads, none());
        assert_that!(settings.diagnostics, eq(DiagnosticsConfig::default()));
    }

    #[rstest]
    fn deserialize_full_settings() {
        let json = r#"{
            "translationFiles": {
                "includePatterns": ["translations/*.ts"],
                "excludePatterns": ["translations/qtbase_*.ts"]
            },
            "sourceLanguage": "en_US",
            "primaryLanguages": ["en_US"],
            "loading": {"numThreads": 2},
            "diagnostics": {"placeholders": false, "pluralForms": false}
        }"#;

        let settings: CatalogSettings = serde_json::from_str(json).unwrap();

        assert_that!(settings.translation_files.exclude_patterns, len(eq(1)));
        assert_that!(settings.source_language, eq("en_US"));
        assert_that!(settings.primary_languages, some(elements_are![eq("en_US")]));
        assert_that!(settings.loading.effective_threads(), eq(2));
        assert_that!(settings.diagnostics.plural_forms, eq(false));
        assert_that!(settings.validate(), ok(anything()));
    }

    #[rstest]
    fn effective_threads_default_is_at_least_one() {
        assert_that!(LoadingConfig::default().effective_threads(), ge(1));
    }

    #[rstest]
    fn validate_invalid_include_patterns_empty() {
        let settings = CatalogSettings {
            translation_files: TranslationFilesConfig {
                include_patterns: vec![],
                exclude_patterns: vec![],
            },
            ..CatalogSettings::default()
        };
        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.includePatterns")),
                field!(ValidationError.message, contains_substring("At least one pattern"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_include_pattern_invalid_glob() {
        let settings = CatalogSettings {
            translation_files: TranslationFilesConfig {
                include_patterns: vec!["**/*.{ts,qm".to_string()],
                exclude_patterns: vec![],
            },
            ..CatalogSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![all![
                field!(ValidationError.field_path, eq("translationFiles.includePatterns[0]")),
                field!(ValidationError.message, contains_substring("Invalid glob pattern")),
                field!(ValidationError.message, contains_substring("**/*.{ts,qm"))
            ]])
        );
    }

    #[rstest]
    fn validate_invalid_exclude_pattern_invalid_glob() {
        let settings = CatalogSettings {
            translation_files: TranslationFilesConfig {
                exclude_patterns: vec![
                    "build/**".to_string(),
                    String::new(),
                    "invalid[pattern".to_string(),
                ],
                ..TranslationFilesConfig::default()
            },
            ..CatalogSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![
                all![
                    field!(ValidationError.field_path, eq("translationFiles.excludePatterns[1]")),
                    field!(ValidationError.message, contains_substring("cannot be empty"))
                ],
                all![
                    field!(ValidationError.field_path, eq("translationFiles.excludePatterns[2]")),
                    field!(ValidationError.message, contains_substring("invalid[pattern"))
                ]
            ])
        );
    }

    #[rstest]
    fn validate_invalid_languages() {
        let settings = CatalogSettings {
            source_language: " ".to_string(),
            primary_languages: Some(vec!["de".to_string(), String::new()]),
            ..CatalogSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![
                field!(ValidationError.field_path, eq("sourceLanguage")),
                field!(ValidationError.field_path, eq("primaryLanguages[1]"))
            ])
        );
    }

    #[rstest]
    fn validate_zero_threads() {
        let settings = CatalogSettings {
            loading: LoadingConfig { num_threads: Some(0) },
            ..CatalogSettings::default()
        };

        let result = settings.validate();

        assert_that!(
            result,
            err(elements_are![field!(ValidationError.field_path, eq("loading.numThreads"))])
        );
    }

    #[rstest]
    fn config_error_validation_errors_format() {
        let settings = CatalogSettings {
            translation_files: TranslationFilesConfig {
                include_patterns: vec![],
                exclude_patterns: vec![],
            },
            loading: LoadingConfig { num_threads: Some(0) },
            ..CatalogSettings::default()
        };

        let validation_result = settings.validate();
        let errors = validation_result.unwrap_err();
        let config_error = ConfigError::ValidationErrors(errors);

        let error_message = format!("{config_error}");
        assert_that!(error_message, contains_substring("Configuration validation failed"));
        assert_that!(error_message, contains_substring("1. translationFiles.includePatterns"));
        assert_that!(error_message, contains_substring("At least one pattern"));
        assert_that!(error_message, contains_substring("2. loading.numThreads"));
    }
}
