use rayon::prelude::*;
use tracing::info;
use crate::core::error::Result;
use crate::core::search_server::SearchServer;
use crate::search::results::ScoredDocument;

/// Run `find_top_documents` for every query in parallel. Results keep the
/// order of `queries`; the first failing query's error is returned.
pub fn process_queries<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Vec<ScoredDocument>>>
where
    S: AsRef<str> + Sync,
{
    let results: Vec<Vec<ScoredDocument>> = queries
        .par_iter()
        .map(|query| server.find_top_documents(query.as_ref()))
        .collect::<Result<_>>()?;

    info!(
        queries = queries.len(),
        hits = results.iter().map(Vec::len).sum::<usize>(),
        "processed query batch"
    );
    Ok(results)
}

/// Same as [`process_queries`], flattened in query order
pub fn process_queries_joined<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<ScoredDocument>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(server, queries)?.into_iter().flatten().collect())
}
