//! Catalog and context definitions.

use std::collections::HashSet;

use super::message::{
    Message,
    MessageKey,
};

/// Catalog format version written by current lupdate.
pub const DEFAULT_VERSION: &str = "2.1";

/// Messages owned by one UI component (e.g. "Document", "Window", "Currency").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
}

impl Context {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), messages: Vec::new() }
    }

    #[must_use]
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// A message dropped while reading because an earlier one has the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessage {
    /// Index into [`Catalog::contexts`] of the context it was read in.
    pub context: usize,
    /// Number of kept messages of that context that precede it.
    pub position: usize,
    pub message: Message,
}

/// A parsed translation catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub version: String,
    /// Target locale, e.g. `en_US`.
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
    /// Messages the reader dropped as duplicates, in file order. Never written.
    pub duplicates: Vec<DuplicateMessage>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
            duplicates: Vec::new(),
        }
    }
}

impl Catalog {
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self { language: Some(language.into()), ..Self::default() }
    }

    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    #[must_use]
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|context| context.name == name)
    }

    /// All messages in catalog order, paired with their context.
    pub fn messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.contexts
            .iter()
            .flat_map(|context| context.messages.iter().map(move |message| (context, message)))
    }

    #[must_use]
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|context| context.messages.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.message_count() == 0
    }

    /// Finds a message by its exact key.
    #[must_use]
    pub fn find(&self, key: &MessageKey) -> Option<&Message> {
        self.context(&key.context)?
            .messages
            .iter()
            .find(|message| message.source == key.source && message.comment_or_empty() == key.comment)
    }

    /// Appends the messages of `other` that this catalog does not have yet.
    ///
    /// Contexts are matched by name; new contexts are appended at the end.
    /// Returns the number of messages that were skipped as duplicates. The
    /// [`Catalog::duplicates`] of `other` are not carried over.
    pub fn merge(&mut self, other: Self) -> usize {
        if self.language.is_none() {
            self.language = other.language;
        }
        if self.source_language.is_none() {
            self.source_language = other.source_language;
        }

        let mut known: HashSet<MessageKey> =
            self.messages().map(|(context, message)| message.key(&context.name)).collect();
        let mut skipped = 0;

        for context in other.contexts {
            let index = if let Some(index) = self.contexts.iter().position(|c| c.name == context.name)
            {
                index
            } else {
                self.contexts.push(Context::new(context.name.clone()));
                self.contexts.len() - 1
            };

            for message in context.messages {
                if known.insert(message.key(&context.name)) {
                    if let Some(target) = self.contexts.get_mut(index) {
                        target.messages.push(message);
                    }
                } else {
                    skipped += 1;
                }
            }
        }

        skipped
    }
}
