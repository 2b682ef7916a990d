//! Search pipeline.
//!
//! One call per user search:
//!   1. Validate the parameters (no request for blank queries)
//!   2. Serve from the cache when a fresh entry exists
//!   3. Fetch raw works from the source
//!   4. Normalise into `PaperRecord` rows
//!   5. Sort by citation count, highest first
//!   6. Cache successful outcomes
//!
//! Fetch failures discard everything and come back as an empty outcome
//! carrying a message; they are not cached.

use keypaper_common::{KeyPaperError, Result};
use tracing::{debug, info, instrument, warn};

use crate::cache::SearchCache;
use crate::models::{PaperRecord, SearchOutcome, SearchParams};
use crate::normalise::normalise_works;
use crate::sources::WorkSource;

#[instrument(skip(source, cache, params), fields(query = %params.query))]
pub async fn run_search<S>(
    source: &S,
    cache: &mut SearchCache,
    params: &SearchParams,
) -> Result<SearchOutcome>
where
    S: WorkSource + ?Sized,
{
    params.validate()?;

    if let Some(hit) = cache.get(params) {
        debug!(records = hit.records.len(), "Search served from cache");
        return Ok(hit);
    }

    let fetched = match source.fetch_works(params).await {
        Ok(f) => f,
        Err(KeyPaperError::Network(msg)) => {
            warn!(error = %msg, "Search aborted, discarding fetched pages");
            return Ok(SearchOutcome::failed(format!("API error: {msg}")));
        }
        Err(e) => return Err(e),
    };

    let mut records = normalise_works(&fetched.works);
    sort_by_citations(&mut records);

    info!(records = records.len(), total = fetched.total_count, "Search complete");

    let outcome = SearchOutcome { records, total_count: fetched.total_count, error: None };
    cache.insert(params.clone(), outcome.clone());
    Ok(outcome)
}

/// Highest citation count first; equal counts keep API order.
pub fn sort_by_citations(records: &mut [PaperRecord]) {
    records.sort_by(|a, b| b.cited_by_count.cmp(&a.cited_by_count));
}
