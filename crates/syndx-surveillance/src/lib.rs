//! syndx-surveillance
//!
//! The append-only case log and the population-level views computed over
//! it: outbreak pattern detection, summaries, and search.

pub mod error;
pub mod history;
pub mod log;
pub mod outbreak;
pub mod search;
pub mod summary;

pub use history::CaseHistory;
pub use log::CaseLog;
pub use outbreak::{OutbreakReport, OutbreakStatus, detect_outbreak};
pub use search::{between, search};
pub use summary::{SurveillanceSummary, summarize};
