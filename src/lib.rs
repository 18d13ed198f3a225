//! ts-catalog
//!
//! Qt Linguist (`.ts`) 翻訳カタログの読み込み・検索・検証
//!
//! ```
//! use ts_catalog::input::parse_catalog;
//! use ts_catalog::translator::{Translator, TranslatorOptions};
//!
//! let catalog = parse_catalog(
//!     r#"<TS version="2.1" language="de"><context><name>Window</name>
//!     <message><source>Close</source><translation>Schließen</translation></message>
//!     </context></TS>"#,
//! )
//! .unwrap();
//! let translator = Translator::new(&catalog, TranslatorOptions::default());
//!
//! assert_eq!(translator.tr("Window", "Close", ""), "Schließen");
//! assert_eq!(translator.tr("Window", "Quit", ""), "Quit");
//! ```

pub mod config;
pub mod diagnostics;
pub mod indexer;
pub mod input;
pub mod ir;
pub mod output;
pub mod placeholder;
pub mod plural;
mod test_utils;
pub mod translator;
pub mod types;

// よく使う型を再エクスポート
pub use input::{
    ParseError,
    load_catalog_file,
    parse_catalog,
};
pub use ir::{
    Catalog,
    CatalogSet,
};
pub use translator::{
    Translator,
    TranslatorOptions,
    TranslatorStack,
};
