//! Translation progress counters.

use serde::Serialize;

use crate::ir::{
    Catalog,
    TranslationType,
};

/// Counts derived from a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub contexts: usize,
    pub messages: usize,
    pub numerus: usize,
    pub finished: usize,
    pub unfinished: usize,
    /// Vanished and obsolete entries.
    pub obsolete: usize,
    /// Entries without any translated text, whatever their type.
    pub empty: usize,
}

impl CatalogStats {
    /// Share of live messages (not obsolete) that are finished, in whole percent.
    #[must_use]
    pub fn percent_finished(&self) -> usize {
        let live = self.messages - self.obsolete;
        if live == 0 { 100 } else { self.finished * 100 / live }
    }
}

impl From<&Catalog> for CatalogStats {
    fn from(catalog: &Catalog) -> Self {
        let mut stats = Self { contexts: catalog.contexts.len(), ..Self::default() };
        for (_, message) in catalog.messages() {
            stats.messages += 1;
            if message.numerus {
                stats.numerus += 1;
            }
            match message.translation.kind {
                TranslationType::Finished => stats.finished += 1,
                TranslationType::Unfinished => stats.unfinished += 1,
                TranslationType::Vanished | TranslationType::Obsolete => stats.obsolete += 1,
            }
            if message.translation.is_empty() {
                stats.empty += 1;
            }
        }
        stats
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::test_utils::{
        SAMPLE_CATALOG,
        SAMPLE_CATALOG_DE,
        sample,
    };

    #[googletest::test]
    fn test_english_sample() {
        let stats = CatalogStats::from(&sample(SAMPLE_CATALOG));

        assert_eq!(
            stats,
            CatalogStats {
                contexts: 3,
                messages: 7,
                numerus: 3,
                finished: 3,
                unfinished: 4,
                obsolete: 0,
                empty: 4,
            }
        );
        expect_that!(stats.percent_finished(), eq(42));
    }

    #[googletest::test]
    fn test_german_sample() {
        let stats = CatalogStats::from(&sample(SAMPLE_CATALOG_DE));

        expect_that!(stats.messages, eq(7));
        expect_that!(stats.finished, eq(5));
        expect_that!(stats.unfinished, eq(1));
        expect_that!(stats.obsolete, eq(1));
        expect_that!(stats.empty, eq(0));
        expect_that!(stats.percent_finished(), eq(83));
    }

    #[googletest::test]
    fn test_empty_catalog() {
        let stats = CatalogStats::from(&Catalog::default());

        expect_that!(stats, eq(CatalogStats::default()));
        expect_that!(stats.percent_finished(), eq(100));
    }

    #[googletest::test]
    fn test_serializes_counts() {
        let json = serde_json::to_value(CatalogStats::from(&sample(SAMPLE_CATALOG_DE))).unwrap();

        assert_eq!(json["obsolete"], serde_json::json!(1));
    }
}
