//! Qt Linguist `.ts` catalog writer.
//!
//! Output follows the layout lupdate produces, so a normalized file diffs cleanly
//! against one written by the Qt tools.

use std::path::Path;

use quick_xml::escape::escape;

use super::error::WriteError;
use crate::ir::{
    Catalog,
    Context,
    Message,
    Translation,
    TranslationText,
};
use crate::types::SourceLocation;

const INDENT: &str = "    ";

/// Escapes `text` for element content or a double-quoted attribute.
///
/// Control characters other than tab, newline and carriage return cannot appear in
/// XML 1.0; they are written as `<byte value="xNN"/>` elements.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run_start = 0;
    for (index, ch) in text.char_indices() {
        if u32::from(ch) < 0x20 && !matches!(ch, '\t' | '\n' | '\r') {
            out.push_str(&escape(text.get(run_start..index).unwrap_or_default()));
            out.push_str(&format!("<byte value=\"x{:x}\"/>", u32::from(ch)));
            run_start = index + ch.len_utf8();
        }
    }
    out.push_str(&escape(text.get(run_start..).unwrap_or_default()));
    out
}

/// Writes `<tag>text</tag>` on its own line.
fn push_element(out: &mut String, depth: usize, tag: &str, text: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(&format!("<{tag}>{}</{tag}>\n", escape_text(text)));
}

fn push_optional(out: &mut String, depth: usize, tag: &str, text: Option<&str>) {
    if let Some(text) = text {
        push_element(out, depth, tag, text);
    }
}

fn push_location(out: &mut String, location: &SourceLocation) {
    out.push_str(&INDENT.repeat(2));
    out.push_str(&format!("<location filename=\"{}\"", escape_text(&location.filename)));
    if let Some(line) = location.line {
        out.push_str(&format!(" line=\"{line}\""));
    }
    out.push_str("/>\n");
}

fn push_translation(out: &mut String, translation: &Translation) {
    let open = match translation.kind.as_attribute() {
        Some(kind) => format!("<translation type=\"{kind}\">"),
        None => "<translation>".to_string(),
    };
    out.push_str(&INDENT.repeat(2));
    out.push_str(&open);

    match &translation.text {
        TranslationText::Single(text) => out.push_str(&escape_text(text)),
        TranslationText::Plural(forms) if forms.is_empty() => {}
        TranslationText::Plural(forms) => {
            out.push('\n');
            for form in forms {
                push_element(out, 3, "numerusform", form);
            }
            out.push_str(&INDENT.repeat(2));
        }
    }

    out.push_str("</translation>\n");
}

fn push_message(out: &mut String, message: &Message) {
    out.push_str(INDENT);
    out.push_str("<message");
    if let Some(id) = &message.id {
        out.push_str(&format!(" id=\"{}\"", escape_text(id)));
    }
    if message.numerus {
        out.push_str(" numerus=\"yes\"");
    }
    out.push_str(">\n");

    for location in &message.locations {
        push_location(out, location);
    }
    push_element(out, 2, "source", &message.source);
    push_optional(out, 2, "oldsource", message.old_source.as_deref());
    push_optional(out, 2, "comment", message.comment.as_deref());
    push_optional(out, 2, "oldcomment", message.old_comment.as_deref());
    push_optional(out, 2, "extracomment", message.extra_comment.as_deref());
    push_optional(out, 2, "translatorcomment", message.translator_comment.as_deref());
    push_translation(out, &message.translation);

    out.push_str(INDENT);
    out.push_str("</message>\n");
}

fn push_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    push_element(out, 1, "name", &context.name);
    for message in &context.messages {
        push_message(out, message);
    }
    out.push_str("</context>\n");
}

/// Serialize a catalog as a `.ts` document.
///
/// # Examples
/// ```
/// use ts_catalog::ir::{Catalog, Context, Message, Translation};
/// use ts_catalog::output::write_catalog;
///
/// let catalog = Catalog::new("de").with_context(
///     Context::new("Window")
///         .with_message(Message::new("Close").with_translation(Translation::finished("Schließen"))),
/// );
///
/// assert!(write_catalog(&catalog).contains("<translation>Schließen</translation>"));
/// ```
#[must_use]
pub fn write_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str(&format!("<TS version=\"{}\"", escape_text(&catalog.version)));
    if let Some(language) = &catalog.language {
        out.push_str(&format!(" language=\"{}\"", escape_text(language)));
    }
    if let Some(source_language) = &catalog.source_language {
        out.push_str(&format!(" sourcelanguage=\"{}\"", escape_text(source_language)));
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        push_context(&mut out, context);
    }
    out.push_str("</TS>");
    out
}

/// Write `catalog` to `path`, replacing any existing file.
///
/// # Errors
/// Returns [`WriteError::Io`] if the file cannot be written.
pub fn save_catalog_file(path: &Path, catalog: &Catalog) -> Result<(), WriteError> {
    std::fs::write(path, write_catalog(catalog))
        .map_err(|source| WriteError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), messages = catalog.message_count(), "Saved catalog");
    Ok(())
}
