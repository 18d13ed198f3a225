//! Catalog input: file parsing and locale detection.

pub mod error;
pub mod language;
pub mod ts;

pub use error::ParseError;
pub use ts::{
    load_catalog_file,
    parse_catalog,
};
