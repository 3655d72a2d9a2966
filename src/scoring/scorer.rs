/// TF-IDF Scorer
///
/// TF is precomputed at indexing time (occurrences / document length), so
/// scoring a posting is a single multiplication by the word's IDF.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl TfIdfScorer {
    pub fn new() -> Self {
        TfIdfScorer
    }

    /// ln(total_docs / doc_freq). Callers only ask for words that occur in
    /// at least one document.
    pub fn idf(&self, total_docs: usize, doc_freq: usize) -> f64 {
        debug_assert!(doc_freq > 0);
        (total_docs as f64 / doc_freq as f64).ln()
    }

    pub fn score(&self, term_freq: f64, idf: f64) -> f64 {
        term_freq * idf
    }
}
