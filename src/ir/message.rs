//! Message entries of a catalog.

use crate::types::SourceLocation;

/// State of a translation as recorded by translator tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranslationType {
    /// No `type` attribute: the translator approved it.
    #[default]
    Finished,
    Unfinished,
    /// The source string disappeared from the program (current lupdate).
    Vanished,
    /// The source string disappeared from the program (older lupdate).
    Obsolete,
}

impl TranslationType {
    /// Maps the `type` attribute of `<translation>`. Unknown values yield `None`.
    #[must_use]
    pub fn from_attribute(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => Some(Self::Finished),
            Some("unfinished") => Some(Self::Unfinished),
            Some("vanished") => Some(Self::Vanished),
            Some("obsolete") => Some(Self::Obsolete),
            Some(_) => None,
        }
    }

    #[must_use]
    pub const fn as_attribute(self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Vanished => Some("vanished"),
            Self::Obsolete => Some("obsolete"),
        }
    }

    /// Vanished and obsolete entries are kept for translators but never served.
    #[must_use]
    pub const fn is_obsolete(self) -> bool {
        matches!(self, Self::Vanished | Self::Obsolete)
    }
}

/// Translated text: one string, or the ordered plural forms of a numerus message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationText {
    Single(String),
    Plural(Vec<String>),
}

impl Default for TranslationText {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    pub kind: TranslationType,
    pub text: TranslationText,
}

impl Translation {
    #[must_use]
    pub fn finished(text: impl Into<String>) -> Self {
        Self { kind: TranslationType::Finished, text: TranslationText::Single(text.into()) }
    }

    #[must_use]
    pub fn plural<I, S>(forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: TranslationType::Finished,
            text: TranslationText::Plural(forms.into_iter().map(Into::into).collect()),
        }
    }

    #[must_use]
    pub fn unfinished() -> Self {
        Self { kind: TranslationType::Unfinished, text: TranslationText::default() }
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: TranslationType) -> Self {
        self.kind = kind;
        self
    }

    /// All texts of this translation, in order.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        let forms: &[String] = match &self.text {
            TranslationText::Single(text) => std::slice::from_ref(text),
            TranslationText::Plural(forms) => forms,
        };
        forms.iter().map(String::as_str)
    }

    /// True when no form carries any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forms().all(str::is_empty)
    }
}

/// Lookup key of a message. `comment` is empty when the message has none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub comment: String,
}

impl MessageKey {
    #[must_use]
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self { context: context.into(), source: source.into(), comment: comment.into() }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Optional `id` attribute; carried for round-trips only.
    pub id: Option<String>,
    pub source: String,
    pub old_source: Option<String>,
    /// Disambiguating comment. Part of the lookup key.
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub locations: Vec<SourceLocation>,
    /// Quantity-sensitive message (`numerus="yes"`).
    pub numerus: bool,
    pub translation: Translation,
}

impl Message {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into(), translation: Translation::unfinished(), ..Self::default() }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.locations.push(location);
        self
    }

    #[must_use]
    pub const fn with_numerus(mut self, numerus: bool) -> Self {
        self.numerus = numerus;
        self
    }

    #[must_use]
    pub fn with_translation(mut self, translation: Translation) -> Self {
        self.translation = translation;
        self
    }

    #[must_use]
    pub fn comment_or_empty(&self) -> &str {
        self.comment.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn key(&self, context: &str) -> MessageKey {
        MessageKey::new(context, self.source.as_str(), self.comment_or_empty())
    }
}
