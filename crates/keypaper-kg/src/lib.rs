//! keypaper-kg — Co-authorship network construction and centrality.

pub mod centrality;
pub mod coauthor;

pub use centrality::{compute_centrality, CentralityResult, TOP_AUTHORS};
pub use coauthor::CoauthorGraph;
