//! Project configuration (`.ts-catalog.json`).
mod loader;
mod manager;
mod matcher;
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    CatalogSettings,
    ConfigError,
    DiagnosticsConfig,
    LoadingConfig,
    TranslationFilesConfig,
    ValidationError,
};
