//! In-memory catalog model.

pub mod catalog;
pub mod message;
pub mod set;

pub use catalog::{
    Catalog,
    Context,
    DuplicateMessage,
};
pub use message::{
    Message,
    MessageKey,
    Translation,
    TranslationText,
    TranslationType,
};
pub use set::{
    CatalogSet,
    LoadedCatalog,
};
