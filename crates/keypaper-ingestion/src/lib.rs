//! keypaper-ingestion — Literature discovery against the OpenAlex works API.
//! - Cursor-paginated fetching with a result cap
//! - Projection of raw works into flat paper records
//! - Abstract reconstruction from inverted indexes
//! - Heuristic paper-type tagging
//! - TTL cache of completed searches

pub mod cache;
pub mod models;
pub mod normalise;
pub mod pipeline;
pub mod sources;

pub use cache::SearchCache;
pub use models::{PaperRecord, PaperType, SearchOutcome, SearchParams, SearchScope};
pub use pipeline::run_search;
