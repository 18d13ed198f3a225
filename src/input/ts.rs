//! Qt Linguist `.ts` catalog reader.

use std::collections::HashSet;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::escape::{
    resolve_predefined_entity,
    unescape,
};
use quick_xml::events::{
    BytesStart,
    Event,
};

use super::error::ParseError;
use super::language::detect_language_from_path;
use crate::ir::catalog::DEFAULT_VERSION;
use crate::ir::{
    Catalog,
    Context,
    DuplicateMessage,
    Message,
    MessageKey,
    Translation,
    TranslationText,
    TranslationType,
};
use crate::types::{
    LineRef,
    SourceLocation,
};

/// Elements whose text content is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ContextName,
    Source,
    OldSource,
    Comment,
    OldComment,
    ExtraComment,
    TranslatorComment,
    Translation,
    NumerusForm,
    LengthVariant,
}

#[derive(Debug, Default)]
struct TranslationBuilder {
    kind: TranslationType,
    forms: Vec<String>,
    in_numerus_form: bool,
    /// First `<lengthvariant>` of the element being read.
    variant: Option<String>,
}

/// Open `<message>` element.
#[derive(Debug)]
struct MessageBuilder {
    message: Message,
    position: u64,
    has_source: bool,
    has_translation: bool,
}

/// Open `<context>` element.
#[derive(Debug)]
struct ContextBuilder {
    name: Option<String>,
    messages: Vec<Message>,
    position: u64,
}

/// Event-driven builder turning XML events into a [`Catalog`].
#[derive(Debug, Default)]
struct CatalogBuilder {
    catalog: Option<Catalog>,
    closed: bool,
    context: Option<ContextBuilder>,
    message: Option<MessageBuilder>,
    translation: Option<TranslationBuilder>,
    field: Option<Field>,
    buffer: String,
    /// Depth inside elements that are not part of the model.
    skip_depth: usize,
    /// `<location>` may omit `filename` to repeat the previous one, also across
    /// messages and contexts as lupdate writes relative locations.
    last_filename: String,
    seen: HashSet<MessageKey>,
}

fn attribute(
    element: &BytesStart<'_>,
    key: &[u8],
    position: u64,
) -> Result<Option<String>, ParseError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|source| ParseError::Attribute { position, source })?;
        if attr.key.as_ref() == key {
            let raw = String::from_utf8_lossy(&attr.value);
            let value = unescape(&raw).map_err(|source| ParseError::Escape { position, source })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Decodes the `value` of `<byte value="x1b"/>` (hex with `x` prefix, or decimal).
fn decode_byte(value: &str) -> Option<char> {
    let code = match value.strip_prefix('x').or_else(|| value.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

/// Resolves an entity or character reference name (without `&` and `;`).
fn resolve_reference(name: &str) -> Option<String> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }
    resolve_predefined_entity(name).map(str::to_string)
}

impl CatalogBuilder {
    fn begin_field(&mut self, field: Field) {
        self.field = Some(field);
        self.buffer.clear();
    }

    fn take_field(&mut self) -> String {
        self.field = None;
        std::mem::take(&mut self.buffer)
    }

    fn push_text(&mut self, text: &str) {
        if self.skip_depth == 0 && self.field.is_some() {
            self.buffer.push_str(text);
        }
    }

    fn start(&mut self, element: &BytesStart<'_>, position: u64) -> Result<(), ParseError> {
        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return Ok(());
        }

        let name = element.name();
        let name = name.as_ref();

        if self.catalog.is_none() {
            if name != b"TS" {
                return Err(ParseError::NotACatalog {
                    found: String::from_utf8_lossy(name).into_owned(),
                });
            }
            self.catalog = Some(Catalog {
                version: attribute(element, b"version", position)?
                    .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
                language: attribute(element, b"language", position)?.filter(|l| !l.is_empty()),
                source_language: attribute(element, b"sourcelanguage", position)?
                    .filter(|l| !l.is_empty()),
                ..Catalog::default()
            });
            return Ok(());
        }

        let in_context = self.context.is_some();
        let in_message = self.message.is_some();
        let in_translation = self.translation.is_some();

        match name {
            b"context" if !in_context => {
                self.context = Some(ContextBuilder { name: None, messages: Vec::new(), position });
            }
            b"name" if in_context && !in_message => self.begin_field(Field::ContextName),
            b"message" if in_context && !in_message => {
                let numerus = attribute(element, b"numerus", position)?.as_deref() == Some("yes");
                let id = attribute(element, b"id", position)?;
                self.message = Some(MessageBuilder {
                    message: Message { id, numerus, ..Message::default() },
                    position,
                    has_source: false,
                    has_translation: false,
                });
            }
            b"location" if in_message && !in_translation => {
                let location = self.location(element, position)?;
                if let Some(builder) = self.message.as_mut() {
                    builder.message.locations.push(location);
                }
            }
            b"source" if in_message && !in_translation => self.begin_field(Field::Source),
            b"oldsource" if in_message && !in_translation => self.begin_field(Field::OldSource),
            b"comment" if in_message && !in_translation => self.begin_field(Field::Comment),
            b"oldcomment" if in_message && !in_translation => self.begin_field(Field::OldComment),
            b"extracomment" if in_message && !in_translation => {
                self.begin_field(Field::ExtraComment);
            }
            b"translatorcomment" if in_message && !in_translation => {
                self.begin_field(Field::TranslatorComment);
            }
            b"translation" if in_message && !in_translation => {
                let value = attribute(element, b"type", position)?;
                let kind = TranslationType::from_attribute(value.as_deref()).ok_or_else(|| {
                    ParseError::InvalidValue {
                        attribute: "type",
                        value: value.clone().unwrap_or_default(),
                        position,
                    }
                })?;
                self.translation = Some(TranslationBuilder { kind, ..TranslationBuilder::default() });
                self.begin_field(Field::Translation);
            }
            b"numerusform" if self.field == Some(Field::Translation) => {
                if let Some(translation) = self.translation.as_mut() {
                    translation.in_numerus_form = true;
                    translation.variant = None;
                }
                self.begin_field(Field::NumerusForm);
            }
            b"lengthvariant"
                if matches!(self.field, Some(Field::Translation | Field::NumerusForm)) =>
            {
                self.begin_field(Field::LengthVariant);
            }
            b"byte" if self.field.is_some() => {
                let value = attribute(element, b"value", position)?.unwrap_or_default();
                let decoded = decode_byte(&value).ok_or(ParseError::InvalidValue {
                    attribute: "byte value",
                    value,
                    position,
                })?;
                self.buffer.push(decoded);
            }
            _ => {
                tracing::debug!(
                    element = %String::from_utf8_lossy(name),
                    position,
                    "Skipping element"
                );
                self.skip_depth = 1;
            }
        }

        Ok(())
    }

    fn location(
        &mut self,
        element: &BytesStart<'_>,
        position: u64,
    ) -> Result<SourceLocation, ParseError> {
        if let Some(filename) = attribute(element, b"filename", position)? {
            self.last_filename = filename;
        }
        let line = match attribute(element, b"line", position)? {
            Some(value) => Some(LineRef::parse(&value).ok_or(ParseError::InvalidValue {
                attribute: "line",
                value,
                position,
            })?),
            None => None,
        };
        Ok(SourceLocation { filename: self.last_filename.clone(), line })
    }

    fn end(&mut self, name: &[u8], position: u64) -> Result<(), ParseError> {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return Ok(());
        }

        match name {
            b"TS" => self.closed = true,
            b"context" => self.finish_context()?,
            b"name" if self.field == Some(Field::ContextName) => {
                let text = self.take_field();
                if let Some(context) = self.context.as_mut() {
                    context.name = Some(text);
                }
            }
            b"message" => self.finish_message()?,
            b"source" | b"oldsource" | b"comment" | b"oldcomment" | b"extracomment"
            | b"translatorcomment" => {
                let field = self.field;
                let text = self.take_field();
                let Some(builder) = self.message.as_mut() else {
                    return Ok(());
                };
                let message = &mut builder.message;
                match field {
                    Some(Field::Source) => {
                        message.source = text;
                        builder.has_source = true;
                    }
                    Some(Field::OldSource) => message.old_source = Some(text),
                    Some(Field::Comment) => message.comment = Some(text),
                    Some(Field::OldComment) => message.old_comment = Some(text),
                    Some(Field::ExtraComment) => message.extra_comment = Some(text),
                    Some(Field::TranslatorComment) => message.translator_comment = Some(text),
                    _ => {}
                }
            }
            b"lengthvariant" => {
                let text = std::mem::take(&mut self.buffer);
                let Some(translation) = self.translation.as_mut() else {
                    return Ok(());
                };
                translation.variant.get_or_insert(text);
                let parent =
                    if translation.in_numerus_form { Field::NumerusForm } else { Field::Translation };
                self.field = Some(parent);
            }
            b"numerusform" => {
                let text = std::mem::take(&mut self.buffer);
                if let Some(translation) = self.translation.as_mut() {
                    let form = translation.variant.take().unwrap_or(text);
                    translation.forms.push(form);
                    translation.in_numerus_form = false;
                }
                self.field = Some(Field::Translation);
            }
            b"translation" => self.finish_translation(),
            _ => {
                tracing::trace!(element = %String::from_utf8_lossy(name), position, "Ignoring end");
            }
        }

        Ok(())
    }

    fn finish_translation(&mut self) {
        let text = self.take_field();
        let Some(mut builder) = self.translation.take() else {
            return;
        };
        let Some(message) = self.message.as_mut() else {
            return;
        };

        let text = if !builder.forms.is_empty() {
            TranslationText::Plural(builder.forms)
        } else {
            let single = builder.variant.take().unwrap_or(text);
            if message.message.numerus {
                let forms = if single.is_empty() { Vec::new() } else { vec![single] };
                TranslationText::Plural(forms)
            } else {
                TranslationText::Single(single)
            }
        };

        message.message.translation = Translation { kind: builder.kind, text };
        message.has_translation = true;
    }

    fn finish_message(&mut self) -> Result<(), ParseError> {
        let Some(builder) = self.message.take() else {
            return Ok(());
        };
        if !builder.has_source {
            return Err(ParseError::MissingSource { position: builder.position });
        }

        let mut message = builder.message;
        if !builder.has_translation {
            message.translation = if message.numerus {
                Translation {
                    kind: TranslationType::Unfinished,
                    text: TranslationText::Plural(Vec::new()),
                }
            } else {
                Translation::unfinished()
            };
        }

        if let Some(context) = self.context.as_mut() {
            context.messages.push(message);
        }
        Ok(())
    }

    fn finish_context(&mut self) -> Result<(), ParseError> {
        let Some(builder) = self.context.take() else {
            return Ok(());
        };
        let name =
            builder.name.ok_or(ParseError::MissingContextName { position: builder.position })?;

        let Some(catalog) = self.catalog.as_mut() else {
            return Ok(());
        };
        let index = catalog.contexts.len();
        let mut context = Context::new(name);
        for message in builder.messages {
            if self.seen.insert(message.key(&context.name)) {
                context.messages.push(message);
            } else {
                tracing::warn!(
                    context = %context.name,
                    source = %message.source,
                    comment = message.comment_or_empty(),
                    "Duplicate message; keeping the first"
                );
                catalog.duplicates.push(DuplicateMessage {
                    context: index,
                    position: context.messages.len(),
                    message,
                });
            }
        }

        catalog.contexts.push(context);
        Ok(())
    }

    fn finish(self) -> Result<Catalog, ParseError> {
        let catalog = self.catalog.ok_or(ParseError::Empty)?;
        if !self.closed || self.context.is_some() {
            return Err(ParseError::Truncated);
        }
        Ok(catalog)
    }
}

/// Parse the text of a `.ts` catalog.
///
/// Whitespace inside text elements is kept as is; whitespace between elements is
/// ignored. Elements outside the model (`userdata`, `extra-*`, ...) are skipped.
/// Duplicate messages keep their first occurrence; the others are listed in
/// [`Catalog::duplicates`].
///
/// # Examples
/// ```
/// use ts_catalog::input::ts::parse_catalog;
///
/// let catalog = parse_catalog(
///     r#"<TS version="2.1" language="en_US"><context><name>Document</name>
///     <message numerus="yes"><source>Added %n item(s)</source>
///     <translation><numerusform>Added %n item</numerusform><numerusform>Added %n items</numerusform></translation>
///     </message></context></TS>"#,
/// )
/// .unwrap();
///
/// assert_eq!(catalog.language.as_deref(), Some("en_US"));
/// assert_eq!(catalog.message_count(), 1);
/// ```
pub fn parse_catalog(text: &str) -> Result<Catalog, ParseError> {
    let mut reader = Reader::from_str(text);
    let mut builder = CatalogBuilder::default();

    loop {
        let position = u64::try_from(reader.buffer_position()).unwrap_or(u64::MAX);
        match reader.read_event() {
            Ok(Event::Start(element)) => builder.start(&element, position)?,
            Ok(Event::Empty(element)) => {
                builder.start(&element, position)?;
                builder.end(element.name().as_ref(), position)?;
            }
            Ok(Event::End(element)) => builder.end(element.name().as_ref(), position)?,
            Ok(Event::Text(text)) => {
                let raw = String::from_utf8_lossy(&text);
                let decoded =
                    unescape(&raw).map_err(|source| ParseError::Escape { position, source })?;
                builder.push_text(&decoded);
            }
            Ok(Event::CData(data)) => builder.push_text(&String::from_utf8_lossy(&data)),
            Ok(Event::GeneralRef(reference)) => {
                let name = String::from_utf8_lossy(&reference);
                let resolved = resolve_reference(&name).ok_or_else(|| ParseError::InvalidValue {
                    attribute: "entity",
                    value: name.to_string(),
                    position,
                })?;
                builder.push_text(&resolved);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(source) => return Err(ParseError::Xml { position, source }),
        }
    }

    builder.finish()
}

/// Read and parse a catalog file.
///
/// When the catalog has no `language` attribute, the locale is taken from the file
/// name (`brickstore_de.ts` → `de`).
pub fn load_catalog_file(path: &Path) -> Result<Catalog, ParseError> {
    let content = std::fs::read_to_string(path)?;
    let mut catalog = parse_catalog(&content)?;
    if catalog.language.is_none() {
        catalog.language = detect_language_from_path(path);
    }
    tracing::debug!(
        path = %path.display(),
        language = ?catalog.language,
        messages = catalog.message_count(),
        "Loaded catalog"
    );
    Ok(catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::SAMPLE_CATALOG;

    #[googletest::test]
    fn test_parse_sample_header() {
        let catalog = parse_catalog(SAMPLE_CATALOG).unwrap();

        expect_that!(catalog.version, eq("2.1"));
        expect_that!(catalog.language, some(eq("en_US")));
        expect_that!(catalog.source_language, none());
        let names: Vec<&str> = catalog.contexts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["AddItemDialog", "Document", "HumanReadableTimeDelta"]);
    }

    #[googletest::test]
    fn test_parse_unescapes_text_and_keeps_markup() {
        let catalog = parse_catalog(SAMPLE_CATALOG).unwrap();
        let dialog = catalog.context("AddItemDialog").unwrap();

        expect_that!(dialog.messages[1].source, eq("&Quantity"));
        expect_that!(dialog.messages[1].translation.kind, eq(TranslationType::Unfinished));
        expect_that!(dialog.messages[1].translation.text, eq(&TranslationText::Single(String::new())));

        let document = catalog.context("Document").unwrap();
        let parse_error = document.messages.iter().find(|m| m.source.starts_with("Could not")).unwrap();
        expect_that!(parse_error.source, contains_substring("%1:<br /><i>Line %2"));
    }

    #[googletest::test]
    fn test_parse_locations_and_comments() {
        let catalog = parse_catalog(SAMPLE_CATALOG).unwrap();
        let document = catalog.context("Document").unwrap();

        let unknown = document.messages.iter().find(|m| m.source.contains("unknown item")).unwrap();
        expect_that!(unknown.locations.len(), eq(2));
        expect_that!(unknown.locations[0].filename, eq("../src/document.cpp"));
        expect_that!(unknown.locations[1].line, some(eq(LineRef::Absolute(944))));

        let new_condition = document.messages.iter().find(|m| m.source == "N").unwrap();
        expect_that!(new_condition.comment, some(eq("New")));
    }

    #[googletest::test]
    fn test_parse_numerus_forms() {
        let catalog = parse_catalog(SAMPLE_CATALOG).unwrap();
        let added = &catalog.context("Document").unwrap().messages[0];

        expect_that!(added.numerus, eq(true));
        expect_that!(added.translation.kind, eq(TranslationType::Finished));
        expect_that!(
            added.translation.text,
            eq(&TranslationText::Plural(vec![
                "Added %n item".to_string(),
                "Added %n items".to_string()
            ]))
        );
    }

    #[googletest::test]
    fn test_parse_byte_elements_and_references() {
        let text = r#"<TS version="2.1"><context><name>Shortcuts</name>
            <message><source>Esc<byte value="x1b"/>&#65;&#x42;</source>
            <translation>Echap<byte value="27"/></translation></message>
            </context></TS>"#;

        let catalog = parse_catalog(text).unwrap();
        let message = &catalog.contexts[0].messages[0];

        expect_that!(message.source, eq("Esc\u{1b}AB"));
        expect_that!(message.translation.text, eq(&TranslationText::Single("Echap\u{1b}".into())));
    }

    #[googletest::test]
    fn test_parse_length_variants_and_extra_elements() {
        let text = r#"<TS version="2.1" language="de"><context><name>Window</name>
            <message id="close-doc">
                <source>Close document</source>
                <extracomment>Menu entry</extracomment>
                <translatorcomment>keep short</translatorcomment>
                <translation variants="yes"><lengthvariant>Dokument schließen</lengthvariant><lengthvariant>Schließen</lengthvariant></translation>
                <userdata>ignored</userdata>
                <extra-po-flags>c-format</extra-po-flags>
            </message>
            </context></TS>"#;

        let catalog = parse_catalog(text).unwrap();
        let message = &catalog.contexts[0].messages[0];

        expect_that!(message.id, some(eq("close-doc")));
        expect_that!(message.extra_comment, some(eq("Menu entry")));
        expect_that!(message.translator_comment, some(eq("keep short")));
        expect_that!(
            message.translation.text,
            eq(&TranslationText::Single("Dokument schließen".into()))
        );
    }

    #[googletest::test]
    fn test_parse_relative_lines_and_repeated_filename() {
        let text = r#"<TS version="2.1"><context><name>C</name>
            <message><location filename="a.cpp" line="10"/><location line="+5"/>
            <source>x</source><translation type="vanished">y</translation></message>
            </context></TS>"#;

        let catalog = parse_catalog(text).unwrap();
        let message = &catalog.contexts[0].messages[0];

        expect_that!(message.locations[1].filename, eq("a.cpp"));
        expect_that!(message.locations[1].line, some(eq(LineRef::Relative(5))));
        expect_that!(message.translation.kind, eq(TranslationType::Vanished));
    }

    #[googletest::test]
    fn test_parse_keeps_first_duplicate() {
        let text = r#"<TS version="2.1"><context><name>C</name>
            <message><source>x</source><translation>first</translation></message>
            <message><source>x</source><translation>second</translation></message>
            <message><source>x</source><comment>other</comment><translation>third</translation></message>
            </context></TS>"#;

        let catalog = parse_catalog(text).unwrap();

        expect_that!(catalog.message_count(), eq(2));
        expect_that!(
            catalog.contexts[0].messages[0].translation.text,
            eq(&TranslationText::Single("first".into()))
        );
        let dropped: Vec<(usize, usize, &TranslationText)> = catalog
            .duplicates
            .iter()
            .map(|d| (d.context, d.position, &d.message.translation.text))
            .collect();
        assert_eq!(dropped, vec![(0, 1, &TranslationText::Single("second".into()))]);
    }

    #[googletest::test]
    fn test_parse_records_duplicates_across_contexts() {
        let text = r#"<TS version="2.1"><context><name>Window</name>
            <message><source>Close</source><translation>Schließen</translation></message>
            </context><context><name>Dialog</name>
            <message><source>Close</source><translation>Zu</translation></message>
            </context><context><name>Window</name>
            <message><source>Open</source></message>
            <message><source>Close</source><translation>Zumachen</translation></message>
            </context></TS>"#;

        let catalog = parse_catalog(text).unwrap();

        expect_that!(catalog.message_count(), eq(3));
        let dropped: Vec<(usize, usize, &str)> = catalog
            .duplicates
            .iter()
            .map(|d| (d.context, d.position, d.message.source.as_str()))
            .collect();
        assert_eq!(dropped, vec![(2, 1, "Close")]);
        expect_that!(catalog.context("Dialog").map(|c| c.messages.len()), some(eq(1)));
    }

    #[googletest::test]
    fn test_parse_numerus_keeps_whitespace_text() {
        let text = r#"<TS version="2.1"><context><name>C</name>
            <message numerus="yes"><source>%n file(s)</source><translation> </translation></message>
            <message numerus="yes"><source>%n dir(s)</source><translation></translation></message>
            </context></TS>"#;

        let catalog = parse_catalog(text).unwrap();
        let messages = &catalog.contexts[0].messages;

        expect_that!(messages[0].translation.text, eq(&TranslationText::Plural(vec![" ".into()])));
        expect_that!(messages[1].translation.text, eq(&TranslationText::Plural(vec![])));
    }

    #[googletest::test]
    fn test_parse_filename_carries_over_to_later_messages() {
        let text = r#"<TS version="2.1"><context><name>C</name>
            <message><location filename="a.cpp" line="10"/><source>x</source></message>
            <message><location line="+5"/><source>y</source></message>
            </context><context><name>D</name>
            <message><location line="3"/><source>z</source></message>
            </context></TS>"#;

        let catalog = parse_catalog(text).unwrap();
        let filenames: Vec<&str> = catalog
            .messages()
            .flat_map(|(_, message)| message.locations.iter().map(|l| l.filename.as_str()))
            .collect();

        assert_eq!(filenames, vec!["a.cpp", "a.cpp", "a.cpp"]);
    }

    #[googletest::test]
    fn test_parse_message_without_translation_is_unfinished() {
        let text = r#"<TS version="2.1"><context><name>C</name>
            <message numerus="yes"><source>%n file(s)</source></message>
            <message><source>plain</source></message>
            </context></TS>"#;

        let catalog = parse_catalog(text).unwrap();
        let messages = &catalog.contexts[0].messages;

        expect_that!(messages[0].translation.kind, eq(TranslationType::Unfinished));
        expect_that!(messages[0].translation.text, eq(&TranslationText::Plural(vec![])));
        expect_that!(messages[1].translation, eq(&Translation::unfinished()));
    }

    #[rstest]
    #[case::not_ts("<html></html>")]
    #[case::empty("")]
    #[case::missing_source("<TS><context><name>C</name><message></message></context></TS>")]
    #[case::missing_name("<TS><context><message><source>x</source></message></context></TS>")]
    #[case::bad_line(r#"<TS><context><name>C</name><message><location filename="a" line="x"/><source>s</source></message></context></TS>"#)]
    #[case::bad_type(r#"<TS><context><name>C</name><message><source>s</source><translation type="done"/></message></context></TS>"#)]
    #[case::bad_byte(r#"<TS><context><name>C</name><message><source><byte value="xZZ"/></source></message></context></TS>"#)]
    #[case::mismatched("<TS><context><name>C</context></TS>")]
    #[case::truncated("<TS><context><name>C</name>")]
    fn test_parse_errors(#[case] text: &str) {
        assert!(parse_catalog(text).is_err(), "expected error for {text}");
    }

    #[googletest::test]
    fn test_parse_error_kinds() {
        assert!(matches!(parse_catalog("<html/>"), Err(ParseError::NotACatalog { .. })));
        assert!(matches!(parse_catalog(""), Err(ParseError::Empty)));
        assert!(matches!(
            parse_catalog("<TS><context><name>C</name><message></message></context></TS>"),
            Err(ParseError::MissingSource { .. })
        ));
    }

    #[googletest::test]
    fn test_load_catalog_file_detects_language() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("brickstore_de.ts");
        fs::write(&path, "<TS version=\"2.1\"><context><name>C</name></context></TS>").unwrap();

        let catalog = load_catalog_file(&path).unwrap();

        expect_that!(catalog.language, some(eq("de")));
    }

    #[googletest::test]
    fn test_load_catalog_file_missing() {
        let result = load_catalog_file(Path::new("/nonexistent/brickstore_de.ts"));

        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
