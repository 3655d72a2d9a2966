use std::cmp::Ordering;
use std::fmt;
use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use crate::core::types::{DocId, ExecutionPolicy};

/// Document with relevance score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl ScoredDocument {
    pub fn new(id: DocId, relevance: f64, rating: i32) -> Self {
        ScoredDocument { id, relevance, rating }
    }
}

impl fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Orders hits by relevance, breaks near ties by rating, then keeps the
/// first `k`. Near ties do not chain: hits whose relevances differ by at
/// least `epsilon` always stay in relevance order, even when a hit between
/// them is close to both.
#[derive(Debug, Clone, Copy)]
pub struct TopKCollector {
    pub k: usize,
    pub epsilon: f64,
}

impl TopKCollector {
    pub fn new(k: usize, epsilon: f64) -> Self {
        TopKCollector { k, epsilon }
    }

    pub fn collect(&self, mut hits: Vec<ScoredDocument>, policy: ExecutionPolicy) -> Vec<ScoredDocument> {
        match policy {
            ExecutionPolicy::Sequential => hits.sort_by(by_relevance),
            ExecutionPolicy::Parallel => hits.par_sort_by(by_relevance),
        }

        // A run holds the hits within epsilon of its first hit, so any two
        // members are within epsilon of each other and rating decides among
        // them. Hits at least epsilon apart never swap.
        let mut start = 0;
        for end in 1..=hits.len() {
            if end == hits.len() || hits[start].relevance - hits[end].relevance >= self.epsilon {
                hits[start..end].sort_by(|a, b| b.rating.cmp(&a.rating));
                start = end;
            }
        }

        hits.truncate(self.k);
        hits
    }
}

fn by_relevance(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.relevance.total_cmp(&a.relevance).then(a.id.cmp(&b.id))
}
