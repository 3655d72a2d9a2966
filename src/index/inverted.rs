use std::collections::BTreeMap;
use std::sync::Arc;
use rayon::prelude::*;
use crate::analysis::token::Token;
use crate::core::types::{DocId, ExecutionPolicy};
use crate::index::posting::PostingList;

/// Interned word. The inverted and the forward index share one allocation
/// per distinct word.
pub type Term = Arc<str>;

/// Word -> term frequency for a single document
pub type WordFrequencies = BTreeMap<Term, f64>;

/// Inverted index structure
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// Word -> posting list. Never holds an empty list.
    pub postings: BTreeMap<Term, PostingList>,
    /// Document -> its own word frequencies, for removal without a full scan
    pub forward: BTreeMap<DocId, WordFrequencies>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex::default()
    }

    /// Index an already analyzed document. Each occurrence adds
    /// `1 / tokens.len()` to the word's frequency.
    pub fn add_document(&mut self, doc_id: DocId, tokens: &[Token]) {
        let mut frequencies = WordFrequencies::new();

        if !tokens.is_empty() {
            let inv_word_count = 1.0 / tokens.len() as f64;
            for token in tokens {
                let term = self.intern(token.text);
                self.postings.entry(term.clone())
                    .or_insert_with(PostingList::new)
                    .add(doc_id, inv_word_count);
                *frequencies.entry(term).or_insert(0.0) += inv_word_count;
            }
        }

        self.forward.insert(doc_id, frequencies);
    }

    fn intern(&self, word: &str) -> Term {
        match self.postings.get_key_value(word) {
            Some((term, _)) => term.clone(),
            None => Arc::from(word),
        }
    }

    /// Purge every posting of `doc_id`. Returns false if it was not indexed.
    pub fn remove_document(&mut self, doc_id: DocId, policy: ExecutionPolicy) -> bool {
        let Some(frequencies) = self.forward.remove(&doc_id) else {
            return false;
        };

        match policy {
            ExecutionPolicy::Sequential => {
                for word in frequencies.keys() {
                    if let Some(list) = self.postings.get_mut(word) {
                        list.remove(doc_id);
                    }
                }
                for word in frequencies.keys() {
                    if self.postings.get(word).is_some_and(PostingList::is_empty) {
                        self.postings.remove(word);
                    }
                }
            }
            ExecutionPolicy::Parallel => {
                // Only the document's own lists are detached, so each task
                // owns exactly one of them.
                let mut detached: Vec<(Term, PostingList)> = frequencies
                    .keys()
                    .filter_map(|word| self.postings.remove_entry(word))
                    .collect();

                detached.par_iter_mut().for_each(|(_, list)| {
                    list.remove(doc_id);
                });

                self.postings.extend(detached.into_iter().filter(|(_, list)| !list.is_empty()));
            }
        }

        true
    }

    pub fn search_term(&self, word: &str) -> Option<&PostingList> {
        self.postings.get(word)
    }

    pub fn word_frequencies(&self, doc_id: DocId) -> Option<&WordFrequencies> {
        self.forward.get(&doc_id)
    }

    /// True if `word` occurs in `doc_id`
    pub fn contains(&self, word: &str, doc_id: DocId) -> bool {
        self.postings.get(word).is_some_and(|list| list.contains(doc_id))
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};

    fn index_with(docs: &[(i32, &str)]) -> InvertedIndex {
        let mut index = InvertedIndex::new();
        for (id, text) in docs {
            index.add_document(DocId(*id), &SpaceTokenizer.tokenize(text));
        }
        index
    }

    #[test]
    fn frequencies_follow_word_counts() {
        let index = index_with(&[(1, "cat dog cat cat")]);
        let freqs = index.word_frequencies(DocId(1)).unwrap();
        assert!((freqs["cat"] - 0.75).abs() < 1e-9);
        assert!((freqs["dog"] - 0.25).abs() < 1e-9);
        assert_eq!(index.search_term("cat").unwrap().doc_freq(), 1);
    }

    #[test]
    fn terms_are_shared_between_indexes() {
        let index = index_with(&[(1, "cat"), (2, "cat")]);
        let (inverted_key, _) = index.postings.get_key_value("cat").unwrap();
        let (forward_key, _) = index.word_frequencies(DocId(2)).unwrap().iter().next().unwrap();
        assert!(Arc::ptr_eq(inverted_key, forward_key));
    }

    #[test]
    fn empty_document_gets_empty_frequencies() {
        let index = index_with(&[(5, "")]);
        assert!(index.word_frequencies(DocId(5)).unwrap().is_empty());
        assert_eq!(index.term_count(), 0);
        assert_eq!(index.forward.len(), 1);
    }

    #[test]
    fn removal_drops_emptied_terms() {
        for policy in [ExecutionPolicy::Sequential, ExecutionPolicy::Parallel] {
            let mut index = index_with(&[(1, "cat dog"), (2, "dog bird")]);
            assert!(index.remove_document(DocId(1), policy));
            assert!(index.search_term("cat").is_none());
            assert!(!index.contains("dog", DocId(1)));
            assert!(index.contains("dog", DocId(2)));
            assert_eq!(index.postings.keys().map(|term| &**term).collect::<Vec<_>>(), vec!["bird", "dog"]);
            assert!(index.word_frequencies(DocId(1)).is_none());
        }
    }

    #[test]
    fn removing_unknown_document_is_noop() {
        let mut index = index_with(&[(1, "cat")]);
        assert!(!index.remove_document(DocId(9), ExecutionPolicy::Sequential));
        assert_eq!(index.forward.len(), 1);
    }

    #[test]
    fn parallel_removal_leaves_unrelated_lists_alone() {
        let mut index = InvertedIndex::new();
        for id in 0..500 {
            let text = format!("word{} shared", id);
            index.add_document(DocId(id), &SpaceTokenizer.tokenize(&text));
        }
        let untouched = index.postings.get("word7").cloned();

        assert!(index.remove_document(DocId(3), ExecutionPolicy::Parallel));
        assert!(index.search_term("word3").is_none());
        assert_eq!(index.search_term("shared").unwrap().doc_freq(), 499);
        assert_eq!(index.postings.get("word7").cloned(), untouched);
        assert_eq!(index.term_count(), 500);
    }

    #[test]
    fn parallel_removal_keeps_interned_terms() {
        let mut index = index_with(&[(1, "cat dog"), (2, "cat")]);
        index.remove_document(DocId(1), ExecutionPolicy::Parallel);
        let (inverted_key, _) = index.postings.get_key_value("cat").unwrap();
        let (forward_key, _) = index.word_frequencies(DocId(2)).unwrap().iter().next().unwrap();
        assert!(Arc::ptr_eq(inverted_key, forward_key));
    }
}
