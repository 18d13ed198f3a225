//! Layered translators, as an application installs them.

use std::sync::Arc;

use super::{
    Translator,
    TranslatorOptions,
};
use crate::input::language::{
    language_of,
    normalize_language_code,
};
use crate::ir::CatalogSet;
use crate::placeholder::substitute_count;

/// Translators consulted newest first.
#[derive(Debug, Clone, Default)]
pub struct TranslatorStack {
    translators: Vec<Arc<Translator>>,
}

impl TranslatorStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the stack for `locale` from the loaded catalogs.
    ///
    /// The lookup chain is `locale`, its primary language, then `fallbacks` in order.
    /// Locales without a catalog are skipped.
    #[must_use]
    pub fn for_locale(
        set: &CatalogSet,
        locale: &str,
        fallbacks: &[String],
        options: TranslatorOptions,
    ) -> Self {
        let mut chain: Vec<String> = Vec::new();
        let candidates =
            [locale.to_string(), language_of(locale)].into_iter().chain(fallbacks.iter().cloned());
        for candidate in candidates {
            let normalized = normalize_language_code(&candidate);
            if !normalized.is_empty() && !chain.contains(&normalized) {
                chain.push(normalized);
            }
        }

        let mut stack = Self::new();
        // Installed lowest priority first, so the requested locale ends on top.
        for tag in chain.iter().rev() {
            if let Some(catalog) = set.get(tag) {
                stack.install(Arc::new(Translator::new(catalog, options)));
            } else {
                tracing::debug!(locale = tag, "No catalog for locale in fallback chain");
            }
        }
        tracing::debug!(locale, installed = stack.len(), "Translator stack built");
        stack
    }

    /// Put `translator` on top. It answers before every translator installed earlier.
    pub fn install(&mut self, translator: Arc<Translator>) {
        self.translators.push(translator);
    }

    /// Remove a previously installed translator. Returns false if it was not installed.
    pub fn remove(&mut self, translator: &Arc<Translator>) -> bool {
        let before = self.translators.len();
        self.translators.retain(|installed| !Arc::ptr_eq(installed, translator));
        self.translators.len() != before
    }

    /// Installed translators, newest first.
    pub fn translators(&self) -> impl Iterator<Item = &Arc<Translator>> {
        self.translators.iter().rev()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.translators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }

    #[must_use]
    pub fn translate(&self, context: &str, source: &str, comment: &str) -> Option<&str> {
        self.translators().find_map(|translator| translator.translate(context, source, comment))
    }

    #[must_use]
    pub fn translate_plural(
        &self,
        context: &str,
        source: &str,
        comment: &str,
        n: i64,
    ) -> Option<String> {
        self.translators()
            .find_map(|translator| translator.translate_plural(context, source, comment, n))
    }

    #[must_use]
    pub fn tr(&self, context: &str, source: &str, comment: &str) -> String {
        self.translate(context, source, comment).unwrap_or(source).to_string()
    }

    #[must_use]
    pub fn tr_n(&self, context: &str, source: &str, comment: &str, n: i64) -> String {
        self.translate_plural(context, source, comment, n)
            .unwrap_or_else(|| substitute_count(source, n))
    }
}
