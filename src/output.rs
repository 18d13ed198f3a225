//! Catalog output.

pub mod error;
pub mod ts;

pub use error::WriteError;
pub use ts::{
    save_catalog_file,
    write_catalog,
};
