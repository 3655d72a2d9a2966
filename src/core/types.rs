use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub i32);

impl DocId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for DocId {
    fn from(id: i32) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    Active,
    Irrelevant,
    Banned,
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DocumentStatus::Active => "ACTIVE",
            DocumentStatus::Irrelevant => "IRRELEVANT",
            DocumentStatus::Banned => "BANNED",
            DocumentStatus::Removed => "REMOVED",
        };
        f.write_str(name)
    }
}

/// Selects between the single-threaded and the rayon-backed code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    #[default]
    Sequential,
    Parallel,
}

/// Document metadata kept by the server alongside the index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDocument {
    pub text: String,
    pub status: DocumentStatus,
    pub rating: i32,
}

impl StoredDocument {
    pub fn new(text: String, status: DocumentStatus, ratings: &[i32]) -> Self {
        StoredDocument {
            text,
            status,
            rating: average_rating(ratings),
        }
    }
}

/// Truncating integer mean; an empty list rates 0.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}
