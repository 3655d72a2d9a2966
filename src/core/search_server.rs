use std::collections::BTreeMap;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::types::{DocId, DocumentStatus, ExecutionPolicy, StoredDocument};
use crate::index::inverted::{InvertedIndex, WordFrequencies};
use crate::query::ast::Query;
use crate::query::parser::QueryParser;
use crate::search::executor::QueryExecutor;
use crate::search::results::{ScoredDocument, TopKCollector};

pub struct SearchServer {
    config: Config,

    analyzer: Analyzer,

    index: InvertedIndex,                          // postings + per-document frequencies
    documents: BTreeMap<DocId, StoredDocument>,    // text, status, rating; keys are the id set

    pool: Option<ThreadPool>,                      // dedicated workers when configured
}

impl SearchServer {
    /// Server whose stop words are the space separated words of `stop_words`
    pub fn new(stop_words: &str) -> Result<Self> {
        Self::with_config(StopWordFilter::from_text(stop_words)?, Config::default())
    }

    /// Server with stop words taken from any string container
    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(StopWordFilter::new(stop_words)?, Config::default())
    }

    pub fn with_config(stop_words: StopWordFilter, config: Config) -> Result<Self> {
        config.validate()?;

        let pool = match config.worker_threads {
            Some(threads) => Some(ThreadPoolBuilder::new().num_threads(threads).build()?),
            None => None,
        };

        Ok(Self {
            analyzer: Analyzer::with_stop_words(stop_words),
            index: InvertedIndex::new(),
            documents: BTreeMap::new(),
            pool,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWordFilter {
        &self.analyzer.stop_words
    }

    /// Index a document. Nothing is modified unless every check passes:
    /// the id must be non-negative and unused, and no word may contain a
    /// control character.
    pub fn add_document(
        &mut self,
        id: impl Into<DocId>,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        let doc_id = id.into();
        if doc_id.value() < 0 {
            return Err(Error::invalid_argument(format!("Invalid document_id {}: negative", doc_id)));
        }
        if self.documents.contains_key(&doc_id) {
            return Err(Error::invalid_argument(format!("Invalid document_id {}: already present", doc_id)));
        }

        let tokens = self.analyzer.analyze(text)?;
        self.index.add_document(doc_id, &tokens);

        let document = StoredDocument::new(text.to_string(), status, ratings);
        debug!(%doc_id, words = tokens.len(), rating = document.rating, %status, "added document");
        self.documents.insert(doc_id, document);

        Ok(())
    }

    pub fn remove_document(&mut self, id: impl Into<DocId>) {
        self.remove_document_with(ExecutionPolicy::Sequential, id)
    }

    /// Remove a document everywhere. Unknown ids are ignored. With
    /// `Parallel` the document's posting lists are purged concurrently.
    pub fn remove_document_with(&mut self, policy: ExecutionPolicy, id: impl Into<DocId>) {
        let doc_id = id.into();
        if self.documents.remove(&doc_id).is_none() {
            return;
        }

        let index = &mut self.index;
        match policy {
            ExecutionPolicy::Sequential => {
                index.remove_document(doc_id, policy);
            }
            ExecutionPolicy::Parallel => {
                in_pool(self.pool.as_ref(), || index.remove_document(doc_id, policy));
            }
        }

        debug!(%doc_id, ?policy, "removed document");
    }

    /// Top active documents for `raw_query`
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Active)
    }

    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_by_status_with(ExecutionPolicy::Sequential, raw_query, status)
    }

    /// Sequential search with a caller predicate. The predicate only runs on
    /// the calling thread, so it need not be `Sync`.
    pub fn find_top_documents_by<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let query = self.parse_query(raw_query)?;
        let hits = self.executor().find_all_sequential(&query, &predicate);
        Ok(self.collector().collect(hits, ExecutionPolicy::Sequential))
    }

    pub fn find_top_documents_by_status_with(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with(policy, raw_query, move |_, doc_status, _| doc_status == status)
    }

    /// Ranked documents satisfying `predicate`: relevance descending, near
    /// ties by rating, at most `config.max_result_count` of them.
    pub fn find_top_documents_with<F>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        if policy == ExecutionPolicy::Sequential {
            return self.find_top_documents_by(raw_query, predicate);
        }

        let query = self.parse_query(raw_query)?;
        in_pool(self.pool.as_ref(), || {
            let hits = self.executor().find_all_documents(&query, &predicate, policy)?;
            Ok(self.collector().collect(hits, policy))
        })
    }

    pub fn match_document(
        &self,
        raw_query: &str,
        id: impl Into<DocId>,
    ) -> Result<(Vec<&str>, DocumentStatus)> {
        self.match_document_with(ExecutionPolicy::Sequential, raw_query, id)
    }

    /// Plus words of the query present in the document, in lexicographic
    /// order, with the document's status. Any minus word present empties the
    /// word list.
    pub fn match_document_with(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        id: impl Into<DocId>,
    ) -> Result<(Vec<&str>, DocumentStatus)> {
        let doc_id = id.into();
        if raw_query.is_empty() {
            return Err(Error::invalid_argument("Query is empty"));
        }
        let query = self.parse_query(raw_query)?;
        let status = self.document(doc_id)?.status;

        let words = match policy {
            ExecutionPolicy::Sequential => self.executor().match_document(&query, doc_id, policy),
            ExecutionPolicy::Parallel => in_pool(self.pool.as_ref(), || {
                self.executor().match_document(&query, doc_id, policy)
            }),
        };

        Ok((words, status))
    }

    /// Word -> term frequency of a stored document
    pub fn word_frequencies(&self, id: impl Into<DocId>) -> Result<&WordFrequencies> {
        let doc_id = id.into();
        self.index
            .word_frequencies(doc_id)
            .ok_or_else(|| Error::not_found(format!("Document {} not found", doc_id)))
    }

    pub fn document(&self, id: impl Into<DocId>) -> Result<&StoredDocument> {
        let doc_id = id.into();
        self.documents
            .get(&doc_id)
            .ok_or_else(|| Error::not_found(format!("Document {} not found", doc_id)))
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Distinct indexed words
    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }

    /// Ids of stored documents in ascending order
    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.documents.keys().copied()
    }

    fn parse_query<'q>(&self, raw_query: &'q str) -> Result<Query<'q>> {
        QueryParser::new(&self.analyzer).parse(raw_query)
    }

    fn collector(&self) -> TopKCollector {
        TopKCollector::new(self.config.max_result_count, self.config.relevance_epsilon)
    }

    fn executor(&self) -> QueryExecutor<'_> {
        QueryExecutor::new(&self.index, &self.documents, self.config.accumulator_buckets)
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocId;
    type IntoIter = std::iter::Copied<std::collections::btree_map::Keys<'a, DocId, StoredDocument>>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.keys().copied()
    }
}

/// Run `op` on the dedicated pool if there is one, else on rayon's global pool
fn in_pool<R, OP>(pool: Option<&ThreadPool>, op: OP) -> R
where
    R: Send,
    OP: FnOnce() -> R + Send,
{
    match pool {
        Some(pool) => pool.install(op),
        None => op(),
    }
}
