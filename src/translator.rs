//! Translation lookup.
//!
//! # Invariants
//!
//! 1. **Fallback**: `tr`/`tr_n` always return a string. When no translation is
//!    available the source text is returned (with `%n` substituted for `tr_n`).
//! 2. **Key**: lookups use `(context, source, comment)`. A miss with a non-empty
//!    comment retries with an empty one.
//! 3. **Immutability**: a `Translator` never changes after construction and is
//!    `Send + Sync`.

pub mod stack;

use std::collections::HashMap;
use std::path::Path;

use crate::input::{
    ParseError,
    load_catalog_file,
};
use crate::ir::{
    Catalog,
    TranslationText,
    TranslationType,
};
use crate::placeholder::substitute_count;
use crate::plural::PluralRule;

pub use stack::TranslatorStack;

/// Which catalog entries may be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorOptions {
    /// Serve non-empty translations marked unfinished (lrelease does by default).
    pub include_unfinished: bool,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self { include_unfinished: true }
    }
}

#[derive(Debug, Clone)]
enum Entry {
    Single(String),
    Plural(Vec<String>),
}

/// source -> [(comment, entry)]
type SourceIndex = HashMap<String, Vec<(String, Entry)>>;

/// Answers lookups from one catalog.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Option<String>,
    rule: PluralRule,
    entries: HashMap<String, SourceIndex>,
    len: usize,
}

impl Translator {
    /// Index the servable entries of `catalog`.
    ///
    /// Obsolete and vanished entries are dropped, as are empty translations.
    #[must_use]
    pub fn new(catalog: &Catalog, options: TranslatorOptions) -> Self {
        let language = catalog.language.clone();
        let rule = language.as_deref().map_or(PluralRule::OneOther, PluralRule::for_language);
        let mut entries: HashMap<String, SourceIndex> = HashMap::new();
        let mut len = 0;

        for (context, message) in catalog.messages() {
            let translation = &message.translation;
            let servable = match translation.kind {
                TranslationType::Finished => true,
                TranslationType::Unfinished => options.include_unfinished,
                TranslationType::Vanished | TranslationType::Obsolete => false,
            };
            if !servable || translation.is_empty() {
                continue;
            }

            let entry = match &translation.text {
                TranslationText::Single(text) => Entry::Single(text.clone()),
                TranslationText::Plural(forms) => Entry::Plural(forms.clone()),
            };
            let comments = entries
                .entry(context.name.clone())
                .or_default()
                .entry(message.source.clone())
                .or_default();
            if comments.iter().all(|(comment, _)| comment != message.comment_or_empty()) {
                comments.push((message.comment_or_empty().to_string(), entry));
                len += 1;
            }
        }

        tracing::debug!(language = ?language, entries = len, "Translator ready");
        Self { language, rule, entries, len }
    }

    /// Load a catalog file and index it.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the file cannot be read or is not a valid catalog.
    pub fn from_file(path: &Path, options: TranslatorOptions) -> Result<Self, ParseError> {
        let catalog = load_catalog_file(path)?;
        Ok(Self::new(&catalog, options))
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[must_use]
    pub const fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    /// Number of servable entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn lookup(&self, context: &str, source: &str, comment: &str) -> Option<&Entry> {
        let candidates = self.entries.get(context)?.get(source)?;
        let find = |wanted: &str| {
            candidates.iter().find(|(candidate, _)| candidate == wanted).map(|(_, entry)| entry)
        };
        find(comment).or_else(|| if comment.is_empty() { None } else { find("") })
    }

    /// The translation of a message, if this catalog has one.
    ///
    /// For a numerus entry the first form is returned.
    #[must_use]
    pub fn translate(&self, context: &str, source: &str, comment: &str) -> Option<&str> {
        match self.lookup(context, source, comment)? {
            Entry::Single(text) => Some(text),
            Entry::Plural(forms) => forms.first().map(String::as_str),
        }
    }

    /// The plural form for `n`, with `%n` substituted.
    ///
    /// The form is chosen by this catalog's plural rule. A catalog providing fewer
    /// forms than the rule needs falls back to its last form.
    #[must_use]
    pub fn translate_plural(
        &self,
        context: &str,
        source: &str,
        comment: &str,
        n: i64,
    ) -> Option<String> {
        let text = match self.lookup(context, source, comment)? {
            Entry::Single(text) => text,
            Entry::Plural(forms) => {
                forms.get(self.rule.form_index(n)).or_else(|| forms.last())?
            }
        };
        Some(substitute_count(text, n))
    }

    /// Translate, falling back to the source text.
    #[must_use]
    pub fn tr(&self, context: &str, source: &str, comment: &str) -> String {
        self.translate(context, source, comment).unwrap_or(source).to_string()
    }

    /// Translate a numerus message, falling back to the source text with `%n` substituted.
    ///
    /// # Examples
    /// ```
    /// use ts_catalog::input::parse_catalog;
    /// use ts_catalog::translator::{Translator, TranslatorOptions};
    ///
    /// let catalog = parse_catalog(
    ///     r#"<TS version="2.1" language="en_US"><context><name>Document</name>
    ///     <message numerus="yes"><source>Added %n item(s)</source>
    ///     <translation><numerusform>Added %n item</numerusform><numerusform>Added %n items</numerusform></translation>
    ///     </message></context></TS>"#,
    /// )
    /// .unwrap();
    /// let translator = Translator::new(&catalog, TranslatorOptions::default());
    ///
    /// assert_eq!(translator.tr_n("Document", "Added %n item(s)", "", 1), "Added 1 item");
    /// assert_eq!(translator.tr_n("Document", "Added %n item(s)", "", 5), "Added 5 items");
    /// ```
    #[must_use]
    pub fn tr_n(&self, context: &str, source: &str, comment: &str, n: i64) -> String {
        self.translate_plural(context, source, comment, n)
            .unwrap_or_else(|| substitute_count(source, n))
    }
}
