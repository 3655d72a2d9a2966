use crate::core::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub max_result_count: usize,    // Hits returned by find_top_documents
    pub relevance_epsilon: f64,     // Relevances closer than this are ranked by rating
    pub accumulator_buckets: usize, // Shards of the parallel relevance map

    // None runs parallel work on rayon's global pool
    pub worker_threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_result_count: 5,
            relevance_epsilon: 1e-6,
            accumulator_buckets: 100,
            worker_threads: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.max_result_count == 0 {
            return Err(Error::invalid_argument("max_result_count must be positive"));
        }
        if self.accumulator_buckets == 0 {
            return Err(Error::invalid_argument("accumulator_buckets must be positive"));
        }
        if !(self.relevance_epsilon >= 0.0) {
            return Err(Error::invalid_argument("relevance_epsilon must be non-negative"));
        }
        if self.worker_threads == Some(0) {
            return Err(Error::invalid_argument("worker_threads must be positive"));
        }
        Ok(())
    }
}
