use std::collections::BTreeMap;
use rayon::prelude::*;
use tracing::debug;
use crate::core::error::Result;
use crate::core::types::{DocId, DocumentStatus, ExecutionPolicy, StoredDocument};
use crate::index::inverted::InvertedIndex;
use crate::parallel::concurrent_map::ConcurrentMap;
use crate::query::ast::Query;
use crate::scoring::scorer::TfIdfScorer;
use crate::search::results::ScoredDocument;

/// Per-document contributions in the parallel path, tagged with the plus
/// word's position so the final sum adds them in the sequential order.
type Contributions = Vec<(usize, f64)>;

/// Evaluates parsed queries against an index snapshot
pub struct QueryExecutor<'a> {
    pub index: &'a InvertedIndex,
    pub documents: &'a BTreeMap<DocId, StoredDocument>,
    pub scorer: TfIdfScorer,
    pub accumulator_buckets: usize,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(
        index: &'a InvertedIndex,
        documents: &'a BTreeMap<DocId, StoredDocument>,
        accumulator_buckets: usize,
    ) -> Self {
        QueryExecutor {
            index,
            documents,
            scorer: TfIdfScorer::new(),
            accumulator_buckets,
        }
    }

    fn idf(&self, doc_freq: usize) -> f64 {
        self.scorer.idf(self.documents.len(), doc_freq)
    }

    /// Every document matching a plus word and the predicate, minus the
    /// documents containing any minus word. Unsorted.
    pub fn find_all_documents<F>(
        &self,
        query: &Query,
        predicate: &F,
        policy: ExecutionPolicy,
    ) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        match policy {
            ExecutionPolicy::Sequential => Ok(self.find_all_sequential(query, predicate)),
            ExecutionPolicy::Parallel => {
                let relevance = self.accumulate_parallel(query, predicate)?;
                Ok(self.to_hits(query, relevance, policy))
            }
        }
    }

    /// Sequential [`find_all_documents`](Self::find_all_documents). The
    /// predicate never leaves the calling thread.
    pub fn find_all_sequential<F>(&self, query: &Query, predicate: &F) -> Vec<ScoredDocument>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let relevance = self.accumulate_sequential(query, predicate);
        self.to_hits(query, relevance, ExecutionPolicy::Sequential)
    }

    fn to_hits(
        &self,
        query: &Query,
        relevance: BTreeMap<DocId, f64>,
        policy: ExecutionPolicy,
    ) -> Vec<ScoredDocument> {
        let hits: Vec<ScoredDocument> = relevance
            .into_iter()
            .filter_map(|(doc_id, relevance)| {
                self.documents
                    .get(&doc_id)
                    .map(|doc| ScoredDocument::new(doc_id, relevance, doc.rating))
            })
            .collect();

        debug!(
            plus_words = query.plus_words.len(),
            minus_words = query.minus_words.len(),
            hits = hits.len(),
            ?policy,
            "evaluated query"
        );
        hits
    }

    fn accumulate_sequential<F>(&self, query: &Query, predicate: &F) -> BTreeMap<DocId, f64>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();

        for word in &query.plus_words {
            let Some(list) = self.index.search_term(word) else {
                continue;
            };
            let idf = self.idf(list.doc_freq());
            for (doc_id, tf) in list.iter() {
                let Some(doc) = self.documents.get(&doc_id) else {
                    continue;
                };
                if predicate(doc_id, doc.status, doc.rating) {
                    *relevance.entry(doc_id).or_insert(0.0) += self.scorer.score(tf, idf);
                }
            }
        }

        for word in &query.minus_words {
            if let Some(list) = self.index.search_term(word) {
                for doc_id in list.doc_ids() {
                    relevance.remove(&doc_id);
                }
            }
        }

        relevance
    }

    fn accumulate_parallel<F>(&self, query: &Query, predicate: &F) -> Result<BTreeMap<DocId, f64>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let accumulator: ConcurrentMap<DocId, Contributions> =
            ConcurrentMap::new(self.accumulator_buckets)?;
        let plus_words: Vec<&str> = query.plus_words.iter().copied().collect();

        plus_words.par_iter().enumerate().for_each(|(order, word)| {
            let Some(list) = self.index.search_term(word) else {
                return;
            };
            let idf = self.idf(list.doc_freq());
            for (doc_id, tf) in list.iter() {
                let Some(doc) = self.documents.get(&doc_id) else {
                    continue;
                };
                if predicate(doc_id, doc.status, doc.rating) {
                    accumulator.access(doc_id).push((order, self.scorer.score(tf, idf)));
                }
            }
        });

        let minus_words: Vec<&str> = query.minus_words.iter().copied().collect();
        minus_words.par_iter().for_each(|word| {
            if let Some(list) = self.index.search_term(word) {
                for doc_id in list.doc_ids() {
                    accumulator.erase(doc_id);
                }
            }
        });

        Ok(accumulator
            .materialize()
            .into_iter()
            .map(|(doc_id, mut contributions)| {
                contributions.sort_by_key(|(order, _)| *order);
                let relevance = contributions.iter().fold(0.0, |sum, (_, score)| sum + score);
                (doc_id, relevance)
            })
            .collect())
    }

    /// Plus words of `query` found in `doc_id`, or none at all if any minus
    /// word is found. Words borrow the index's interned terms.
    pub fn match_document(
        &self,
        query: &Query,
        doc_id: DocId,
        policy: ExecutionPolicy,
    ) -> Vec<&'a str> {
        let index = self.index;
        let lookup = |word: &str| -> Option<&'a str> {
            index.postings
                .get_key_value(word)
                .filter(|(_, list)| list.contains(doc_id))
                .map(|(term, _)| &**term)
        };

        match policy {
            ExecutionPolicy::Sequential => {
                if query.minus_words.iter().any(|word| index.contains(word, doc_id)) {
                    return Vec::new();
                }
                query.plus_words.iter().filter_map(|word| lookup(*word)).collect()
            }
            ExecutionPolicy::Parallel => {
                let minus_words: Vec<&str> = query.minus_words.iter().copied().collect();
                if minus_words.par_iter().any(|word| index.contains(word, doc_id)) {
                    return Vec::new();
                }
                let plus_words: Vec<&str> = query.plus_words.iter().copied().collect();
                plus_words.par_iter().filter_map(|word| lookup(*word)).collect()
            }
        }
    }
}
