use std::collections::BTreeMap;
use crate::core::types::DocId;

/// Posting list for a term: document id -> term frequency
/// Note: BTreeMap keeps doc ids sorted so accumulation order is stable
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostingList {
    pub postings: BTreeMap<DocId, f64>,
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            postings: BTreeMap::new(),
        }
    }

    /// Add `tf` to the document's frequency, creating the posting on first use
    pub fn add(&mut self, doc_id: DocId, tf: f64) {
        *self.postings.entry(doc_id).or_insert(0.0) += tf;
    }

    pub fn remove(&mut self, doc_id: DocId) -> Option<f64> {
        self.postings.remove(&doc_id)
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.postings.contains_key(&doc_id)
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn doc_freq(&self) -> usize {
        self.postings.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, f64)> + '_ {
        self.postings.iter().map(|(&doc_id, &tf)| (doc_id, tf))
    }

    pub fn doc_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.postings.keys().copied()
    }
}
