pub mod core;
pub mod analysis;
pub mod query;
pub mod index;
pub mod scoring;
pub mod search;
pub mod parallel;
pub mod dedup;

/*
┌────────────────────────────────────────────────────────────────────────────────────────────┐
│                             SEEKDEX STRUCT ARCHITECTURE                                     │
└────────────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────────── CORE LAYER ──────────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────────────────┐    │
│  │                            struct SearchServer                                      │    │
│  │  ┌──────────────────────────────────────────────────────────────────────────────┐ │    │
│  │  │ config: Config                    // Result limit, epsilon, buckets, threads │ │    │
│  │  │ analyzer: Analyzer                // Splitting, validation, stop words       │ │    │
│  │  │ index: InvertedIndex              // Postings + per-document frequencies     │ │    │
│  │  │ documents: BTreeMap<DocId, StoredDocument> // Text, status, rating          │ │    │
│  │  │ pool: Option<ThreadPool>          // Dedicated rayon workers                 │ │    │
│  │  └──────────────────────────────────────────────────────────────────────────────┘ │    │
│  └────────────────────────────────────────────────────────────────────────────────────┘    │
│                                                                                              │
│  ┌──────────────────┐  ┌──────────────────┐  ┌───────────────────────────────────────┐    │
│  │ struct DocId     │  │ enum Document-   │  │ struct StoredDocument                 │    │
│  │ • 0: i32         │  │   Status         │  │ • text: String                        │    │
│  └──────────────────┘  │ • Active         │  │ • status: DocumentStatus              │    │
│                        │ • Irrelevant     │  │ • rating: i32 (truncated mean)        │    │
│  ┌──────────────────┐  │ • Banned         │  └───────────────────────────────────────┘    │
│  │ enum Execution-  │  │ • Removed        │                                                │
│  │   Policy         │  └──────────────────┘                                                │
│  │ • Sequential     │                                                                      │
│  │ • Parallel       │                                                                      │
│  └──────────────────┘                                                                      │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────────── INDEXING LAYER ────────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────────────────┐    │
│  │                           struct InvertedIndex                                      │    │
│  │  ┌──────────────────────────────────────────────────────────────────────────────┐ │    │
│  │  │ postings: BTreeMap<Term, PostingList>      // Word → doc id → tf             │ │    │
│  │  │ forward: BTreeMap<DocId, WordFrequencies>  // Doc id → word → tf             │ │    │
│  │  └──────────────────────────────────────────────────────────────────────────────┘ │    │
│  └────────────────────────────────────────────────────────────────────────────────────┘    │
│                                                                                              │
│  Term = Arc<str>: one allocation per distinct word, shared by both maps                     │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────────── QUERY LAYER ───────────────────────────────────────────┐
│                                                                                              │
│  raw text ──► QueryParser ──► Query { plus_words, minus_words } ──► QueryExecutor            │
│                                                                        │                     │
│                    TfIdfScorer ◄───────────────────────────────────────┤                     │
│                    ConcurrentMap<DocId, _> (parallel accumulation) ◄───┘                     │
│                                                                        │                     │
│                                              TopKCollector ◄───────────┘                     │
│                                              (relevance desc, rating on near ties, top k)    │
└──────────────────────────────────────────────────────────────────────────────────────────────┘
*/
