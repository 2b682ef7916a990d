//! keypaper-ranker — Must-read ranking, journal distribution and export.

pub mod export;
pub mod journals;
pub mod top;

pub use export::{export_csv, export_file_name, write_csv};
pub use journals::{journal_distribution, JournalCount, TOP_JOURNALS};
pub use top::{must_read, MustRead, MUST_READ_COUNT};
