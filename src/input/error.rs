use thiserror::Error;

/// Errors raised while reading a translation catalog.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed XML
    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },
    /// Malformed attribute
    #[error("Invalid attribute at byte {position}: {source}")]
    Attribute {
        position: u64,
        #[source]
        source: quick_xml::events::attributes::AttrError,
    },
    /// Attribute value with a broken entity reference
    #[error("Invalid escape sequence at byte {position}: {source}")]
    Escape {
        position: u64,
        #[source]
        source: quick_xml::escape::EscapeError,
    },
    /// The document element is not `<TS>`
    #[error("Expected <TS> as document element, found <{found}>")]
    NotACatalog { found: String },
    /// The document has no `<TS>` element at all
    #[error("Document contains no <TS> element")]
    Empty,
    #[error("Context at byte {position} has no <name>")]
    MissingContextName { position: u64 },
    #[error("Message at byte {position} has no <source>")]
    MissingSource { position: u64 },
    #[error("Invalid {attribute} value '{value}' at byte {position}")]
    InvalidValue { attribute: &'static str, value: String, position: u64 },
    /// Input ended inside an open element
    #[error("Catalog ends before </TS>")]
    Truncated,
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}
