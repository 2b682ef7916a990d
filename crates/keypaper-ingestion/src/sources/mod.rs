//! Literature source clients.

pub mod openalex;

use async_trait::async_trait;
use keypaper_common::Result;

use crate::models::{RawWork, SearchParams};

/// Raw works plus the API's reported match count.
#[derive(Debug, Clone, Default)]
pub struct FetchedWorks {
    pub works: Vec<RawWork>,
    pub total_count: u64,
}

/// Common interface for works sources.
#[async_trait]
pub trait WorkSource: Send + Sync {
    /// Fetch up to `params.max_results` works. Any failure aborts the
    /// whole fetch; pages already received are dropped.
    async fn fetch_works(&self, params: &SearchParams) -> Result<FetchedWorks>;
}
