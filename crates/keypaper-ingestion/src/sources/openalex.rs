//! OpenAlex works API client.
//!
//! Endpoint: https://api.openalex.org/works
//! Cursor pagination, 200 works per page, a short pause between pages.

use std::time::Duration;

use async_trait::async_trait;
use keypaper_common::{Result, SandboxClient as Client};
use tracing::{debug, info, instrument};

use crate::models::{ScopeMode, SearchParams, WorksPage};
use super::{FetchedWorks, WorkSource};

pub const OPENALEX_BASE_URL: &str = "https://api.openalex.org";
pub const PER_PAGE: usize = 200;
pub const FIRST_CURSOR: &str = "*";
pub const SELECT_FIELDS: &str =
    "id,doi,title,publication_year,cited_by_count,type,authorships,primary_location,abstract_inverted_index";
const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(100);

pub struct OpenAlexClient {
    client: Client,
    base_url: String,
    mailto: Option<String>,
    page_delay: Duration,
}

impl OpenAlexClient {
    pub fn new() -> Result<Self> {
        Ok(Self::from_client(Client::new()?))
    }

    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            base_url: OPENALEX_BASE_URL.to_string(),
            mailto: None,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }

    /// Point the client at another host (mock servers, mirrors).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Join the polite pool by identifying with an email address.
    pub fn with_mailto(mut self, mailto: Option<String>) -> Self {
        self.mailto = mailto.filter(|m| !m.trim().is_empty());
        self
    }

    /// Pause inserted before every page after the first.
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    fn works_url(&self) -> String {
        format!("{}/works", self.base_url)
    }

    /// Fetch a single page at `cursor`.
    #[instrument(skip(self, params), fields(query = %params.query))]
    async fn fetch_page(&self, params: &SearchParams, cursor: &str) -> Result<WorksPage> {
        let mut query = build_query_params(params, cursor);
        if let Some(mailto) = &self.mailto {
            query.push(("mailto", mailto.clone()));
        }

        let page = self.client
            .get(&self.works_url())?
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .json::<WorksPage>()
            .await?;

        debug!(results = page.results.len(), count = page.meta.count, "OpenAlex page received");
        Ok(page)
    }
}

/// Query string for one page request.
///
/// Title-only and abstract-only scopes move the query into a field-scoped
/// filter and drop `search`; every other scope uses `search`, which covers
/// title, abstract and fulltext.
pub fn build_query_params(params: &SearchParams, cursor: &str) -> Vec<(&'static str, String)> {
    let year_filter = format!("publication_year:{}-{}", params.year_from, params.year_to);

    let (search, filter) = match params.scope.mode() {
        ScopeMode::TitleOnly    => (None, format!("{year_filter},title.search:{}", params.query)),
        ScopeMode::AbstractOnly => (None, format!("{year_filter},abstract.search:{}", params.query)),
        ScopeMode::Combined     => (Some(params.query.clone()), year_filter),
    };

    let mut query = Vec::with_capacity(6);
    if let Some(search) = search {
        query.push(("search", search));
    }
    query.push(("filter", filter));
    query.push(("per_page", PER_PAGE.to_string()));
    query.push(("cursor", cursor.to_string()));
    query.push(("select", SELECT_FIELDS.to_string()));
    query
}

#[async_trait]
impl WorkSource for OpenAlexClient {
    #[instrument(skip(self, params), fields(query = %params.query, max = params.max_results))]
    async fn fetch_works(&self, params: &SearchParams) -> Result<FetchedWorks> {
        let mut works = Vec::new();
        let mut total_count = 0;
        let mut cursor = FIRST_CURSOR.to_string();
        let mut pages = 0usize;

        while works.len() < params.max_results {
            if pages > 0 && !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }

            let page = self.fetch_page(params, &cursor).await?;
            pages += 1;
            total_count = page.meta.count;

            if page.results.is_empty() {
                break;
            }
            works.extend(page.results);

            match page.meta.next_cursor {
                Some(next) if !next.is_empty() => cursor = next,
                _ => break,
            }
        }

        works.truncate(params.max_results);
        info!(pages, fetched = works.len(), total_count, "OpenAlex search complete");
        Ok(FetchedWorks { works, total_count })
    }
}
