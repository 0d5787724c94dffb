use std::sync::Arc;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::domain::entities::ContactRecord;

/// A service that performs fuzzy searching using the Skim algorithm.
#[derive(Clone)]
pub struct FuzzySearcher {
    matcher: Arc<SkimMatcherV2>,
}

impl Default for FuzzySearcher {
    fn default() -> Self {
        Self {
            matcher: Arc::new(SkimMatcherV2::default().ignore_case()),
        }
    }
}

impl FuzzySearcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn score(&self, choice: &str, pattern: &str) -> Option<i64> {
        self.matcher.fuzzy_match(choice, pattern)
    }
}

/// Ranks directory contacts against a typed query.
#[derive(Clone, Default)]
pub struct ContactSearch {
    searcher: FuzzySearcher,
}

impl ContactSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices of matching contacts, best match first. A blank query keeps
    /// the directory order.
    #[must_use]
    pub fn rank(&self, contacts: &[ContactRecord], query: &str) -> Vec<usize> {
        let query = query.trim();
        if query.is_empty() {
            return (0..contacts.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = contacts
            .iter()
            .enumerate()
            .filter_map(|(index, contact)| {
                let haystack = format!(
                    "{} {} {} {}",
                    contact.name, contact.company, contact.designation, contact.phone
                );
                self.searcher
                    .score(&haystack, query)
                    .map(|score| (index, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.into_iter().map(|(index, _)| index).collect()
    }
}
