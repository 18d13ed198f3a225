//! Catalog checks and statistics.

pub mod stats;

use std::collections::{
    BTreeSet,
    HashSet,
};
use std::fmt;

use serde::Serialize;

use crate::config::DiagnosticsConfig;
use crate::ir::{
    Catalog,
    Context,
    Message,
    MessageKey,
    TranslationText,
    TranslationType,
};
use crate::placeholder::{
    has_count_placeholder,
    placeholders,
};
use crate::plural::PluralRule;
use crate::types::{
    LineResolver,
    ResolvedLocation,
};

pub use stats::CatalogStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        })
    }
}

/// One problem found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable identifier, e.g. `placeholder-mismatch`.
    pub code: String,
    pub context: String,
    pub source: String,
    /// First location of the message, if any.
    pub location: Option<ResolvedLocation>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(
            f,
            "{} [{}] {}: {} ({:?})",
            self.severity, self.code, self.context, self.message, self.source
        )
    }
}

/// Collects diagnostics for one message.
struct Reporter<'a> {
    context: &'a Context,
    message: &'a Message,
    location: Option<ResolvedLocation>,
    out: &'a mut Vec<Diagnostic>,
}

impl Reporter<'_> {
    fn report(&mut self, severity: Severity, code: &'static str, message: String) {
        self.out.push(Diagnostic {
            severity,
            code: code.to_string(),
            context: self.context.name.clone(),
            source: self.message.source.clone(),
            location: self.location.clone(),
            message,
        });
    }
}

fn format_placeholders(numbers: &BTreeSet<u8>) -> String {
    if numbers.is_empty() {
        return "none".to_string();
    }
    numbers.iter().map(|n| format!("%{n}")).collect::<Vec<_>>().join(", ")
}

fn check_message(
    reporter: &mut Reporter<'_>,
    rule: Option<PluralRule>,
    config: &DiagnosticsConfig,
) {
    let message = reporter.message;
    let translation = &message.translation;

    if message.numerus && !has_count_placeholder(&message.source) {
        reporter.report(
            Severity::Warning,
            "missing-count-placeholder",
            "Numerus message has no %n in its source text".to_string(),
        );
    }

    // Entries that are no longer served are not checked any further.
    if translation.kind.is_obsolete() {
        return;
    }

    if config.unfinished && translation.kind == TranslationType::Unfinished {
        reporter.report(Severity::Info, "unfinished", "Translation is unfinished".to_string());
    }

    if translation.kind == TranslationType::Finished && translation.is_empty() {
        reporter.report(
            Severity::Warning,
            "empty-finished",
            "Translation is marked finished but is empty".to_string(),
        );
    }

    match (&translation.text, message.numerus) {
        (TranslationText::Plural(forms), false) if !forms.is_empty() => reporter.report(
            Severity::Warning,
            "plural-not-numerus",
            format!("Message is not numerus but has {} plural forms", forms.len()),
        ),
        (TranslationText::Single(text), true) if !text.is_empty() => reporter.report(
            Severity::Warning,
            "plural-not-numerus",
            "Numerus message has a single translation instead of plural forms".to_string(),
        ),
        (TranslationText::Plural(forms), true) if config.plural_forms && !forms.is_empty() => {
            if let Some(rule) = rule
                && forms.len() != rule.form_count()
            {
                reporter.report(
                    Severity::Warning,
                    "plural-form-count",
                    format!(
                        "Expected {} plural forms for this language, found {}",
                        rule.form_count(),
                        forms.len()
                    ),
                );
            }
        }
        _ => {}
    }

    if config.placeholders {
        let expected = placeholders(&message.source);
        for (index, form) in translation.forms().enumerate() {
            if form.is_empty() {
                continue;
            }
            let found = placeholders(form);
            if found != expected {
                reporter.report(
                    Severity::Warning,
                    "placeholder-mismatch",
                    format!(
                        "Form {} uses {} but the source uses {}",
                        index + 1,
                        format_placeholders(&found),
                        format_placeholders(&expected)
                    ),
                );
            }
        }
    }
}

/// Walks a catalog in file order, keeping the state shared between messages.
struct Checker<'a> {
    rule: Option<PluralRule>,
    config: &'a DiagnosticsConfig,
    seen: HashSet<MessageKey>,
    resolver: LineResolver,
    diagnostics: Vec<Diagnostic>,
}

impl Checker<'_> {
    fn check(&mut self, context: &Context, message: &Message) {
        let mut location = None;
        for (index, record) in message.locations.iter().enumerate() {
            let resolved = self.resolver.resolve(record);
            if index == 0 {
                location = Some(resolved);
            }
        }

        let first = self.seen.insert(message.key(&context.name));
        let mut reporter = Reporter { context, message, location, out: &mut self.diagnostics };
        if first {
            check_message(&mut reporter, self.rule, self.config);
        } else {
            reporter.report(
                Severity::Error,
                "duplicate-message",
                "Message appears more than once with the same source and comment".to_string(),
            );
        }
    }
}

/// Check a catalog for problems.
///
/// Diagnostics are returned in file order, including the messages the reader
/// dropped as duplicates. A clean catalog yields none. `plural-form-count` is only
/// checked for languages with a known plural rule.
#[must_use]
pub fn check_catalog(catalog: &Catalog, config: &DiagnosticsConfig) -> Vec<Diagnostic> {
    let mut checker = Checker {
        rule: catalog.language.as_deref().and_then(PluralRule::for_known_language),
        config,
        seen: HashSet::new(),
        resolver: LineResolver::new(),
        diagnostics: Vec::new(),
    };
    let mut dropped = catalog.duplicates.iter().peekable();

    for (index, context) in catalog.contexts.iter().enumerate() {
        for (position, message) in context.messages.iter().enumerate() {
            while let Some(duplicate) =
                dropped.next_if(|d| d.context == index && d.position <= position)
            {
                checker.check(context, &duplicate.message);
            }
            checker.check(context, message);
        }
        while let Some(duplicate) = dropped.next_if(|d| d.context == index) {
            checker.check(context, &duplicate.message);
        }
    }

    tracing::debug!(
        language = ?catalog.language,
        diagnostics = checker.diagnostics.len(),
        "Checked catalog"
    );
    checker.diagnostics
}
