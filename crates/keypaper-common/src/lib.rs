//! keypaper-common — Shared error type and HTTP sandbox used across all Key-Paper crates.

pub mod error;
pub mod sandbox;

pub use error::{KeyPaperError, Result};
pub use sandbox::SandboxClient;
