use std::collections::BTreeSet;

/// Parsed search query. Both sets are stop-word free, deduplicated and
/// iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<'q> {
    pub plus_words: BTreeSet<&'q str>,
    pub minus_words: BTreeSet<&'q str>,
}

impl<'q> Query<'q> {
    pub fn new() -> Self {
        Query::default()
    }
}

/// One classified query token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWord<'q> {
    pub text: &'q str,
    pub is_minus: bool,
    pub is_stop: bool,
}
