//! syndx-advisory
//!
//! Optional external advisory (Bedrock) and its side-by-side comparison
//! with the deterministic syndromic result.

pub mod aggregate;
pub mod bedrock;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod provider;

pub use aggregate::{Comparison, aggregate, fetch_advisory, patient_message};
pub use provider::{AdvisoryProvider, DisabledAdvisor};
