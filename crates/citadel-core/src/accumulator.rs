//! Page accumulation.
//!
//! Pages of the same query are appended into one growing list instead of
//! being cached one-per-page. The rule is: accumulate across values of the
//! page variable, reset when any other variable changes (see [`QueryKey`]).

use crate::query::QueryKey;
use crate::types::{Character, CharacterPage, PageInfo};

/// All characters received so far, in arrival order, plus the cursor
/// bookkeeping of the most recent page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccumulatedList {
    pub info: Option<PageInfo>,
    pub results: Vec<Character>,
}

impl AccumulatedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Whether the server advertised another page
    pub fn has_more(&self) -> bool {
        self.info.is_some_and(|info| info.has_next())
    }

    /// Next page number, if any
    pub fn next_page(&self) -> Option<u32> {
        self.info.and_then(|info| info.next)
    }
}

/// Merge an incoming page into the existing list.
///
/// A page with missing or empty results leaves `existing` untouched
/// (including its cursor). Otherwise the results are appended in order,
/// without deduplication, and the cursor is replaced by the incoming one.
pub fn merge(existing: AccumulatedList, incoming: CharacterPage) -> AccumulatedList {
    let results = match incoming.results {
        Some(results) if !results.is_empty() => results,
        _ => return existing,
    };

    let mut merged = existing.results;
    merged.extend(results);
    AccumulatedList {
        info: Some(incoming.info),
        results: merged,
    }
}

/// Keyed accumulator: one [`AccumulatedList`] for the current [`QueryKey`].
#[derive(Debug, Clone)]
pub struct Accumulator {
    key: QueryKey,
    list: AccumulatedList,
}

impl Accumulator {
    pub fn new(key: QueryKey) -> Self {
        Self {
            key,
            list: AccumulatedList::new(),
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    pub fn list(&self) -> &AccumulatedList {
        &self.list
    }

    /// Merge a page that was fetched under `key`.
    ///
    /// Returns the number of characters appended.
    pub fn accumulate(&mut self, key: &QueryKey, page: CharacterPage) -> usize {
        if *key != self.key {
            tracing::info!(old = %self.key, new = %key, "Query key changed, resetting accumulated list");
            self.reset(key.clone());
        }

        if page.is_degenerate() {
            tracing::warn!(key = %self.key, "Ignoring page without results");
            return 0;
        }

        let before = self.list.len();
        let list = std::mem::take(&mut self.list);
        self.list = merge(list, page);
        self.list.len() - before
    }

    /// Drop everything and start over under a new key.
    pub fn reset(&mut self, key: QueryKey) {
        self.key = key;
        self.list = AccumulatedList::new();
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new(QueryKey::characters())
    }
}
