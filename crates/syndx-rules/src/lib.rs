//! syndx-rules
//!
//! The deterministic decision engine. Pure functions, no I/O:
//! vital sign normalization, the intake boundary, additive triage scoring,
//! the ordered syndromic rule table, multi-condition screening and the
//! discharge appearance lookup.

pub mod classifier;
pub mod discharge;
pub mod error;
pub mod intake;
pub mod screening;
pub mod triage;
pub mod vitals;

pub use classifier::{all_rules, classify, get_rule, matching_rule};
pub use triage::score;
