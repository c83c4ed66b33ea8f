//! Substring filtering over the candidate list.

use std::collections::HashSet;

use crate::data::{Candidate, Chip};

/// Controls how the query is compared against candidate names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// "ann" matches "Ann Carter".
    #[default]
    CaseInsensitive,
    /// "ann" does not match "Ann Carter".
    CaseSensitive,
}

impl MatchMode {
    /// Pick a mode from a `case_sensitive` flag.
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            MatchMode::CaseSensitive
        } else {
            MatchMode::CaseInsensitive
        }
    }

    /// Check whether `name` contains `query` under this mode.
    pub fn matches(self, name: &str, query: &str) -> bool {
        match self {
            MatchMode::CaseSensitive => name.contains(query),
            MatchMode::CaseInsensitive => name.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

/// Compute the suggestion set.
///
/// Linear scan in source order. Candidates whose id is chipped are always
/// excluded; a blank query keeps every remaining candidate.
pub fn filter_candidates(
    candidates: &[Candidate],
    chips: &[Chip],
    query: &str,
    mode: MatchMode,
) -> Vec<Candidate> {
    let chipped: HashSet<&str> = chips.iter().map(Chip::id).collect();
    let blank = query.trim().is_empty();

    candidates
        .iter()
        .filter(|candidate| !chipped.contains(candidate.id.as_str()))
        .filter(|candidate| blank || mode.matches(&candidate.name, query))
        .cloned()
        .collect()
}
