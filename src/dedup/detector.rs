use std::collections::HashSet;
use tracing::info;
use crate::core::search_server::SearchServer;
use crate::core::types::{DocId, ExecutionPolicy};

/// Finds documents made of exactly the same set of words. Word counts,
/// ratings and statuses are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateDetector {
    pub policy: ExecutionPolicy,
}

impl DuplicateDetector {
    pub fn new(policy: ExecutionPolicy) -> Self {
        DuplicateDetector { policy }
    }

    /// Ids that repeat the word set of a lower id, in ascending order
    pub fn find_duplicates(&self, server: &SearchServer) -> Vec<DocId> {
        let mut seen: HashSet<Vec<&str>> = HashSet::new();
        let mut duplicates = Vec::new();

        for doc_id in server {
            let Ok(frequencies) = server.word_frequencies(doc_id) else {
                continue;
            };
            let words: Vec<&str> = frequencies.keys().map(|word| &**word).collect();
            if !seen.insert(words) {
                duplicates.push(doc_id);
            }
        }

        duplicates
    }

    /// Remove every duplicate, keeping the lowest id of each group.
    /// Returns the removed ids.
    pub fn remove_duplicates(&self, server: &mut SearchServer) -> Vec<DocId> {
        let duplicates = self.find_duplicates(server);

        for &doc_id in &duplicates {
            info!(%doc_id, "Found duplicate document id {}", doc_id);
            server.remove_document_with(self.policy, doc_id);
        }

        duplicates
    }
}

/// Remove duplicate documents sequentially
pub fn remove_duplicates(server: &mut SearchServer) -> Vec<DocId> {
    DuplicateDetector::default().remove_duplicates(server)
}
