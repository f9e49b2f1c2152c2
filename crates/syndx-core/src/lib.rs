//! syndx-core
//!
//! Pure domain types for syndromic decision support: symptom and risk tags,
//! the per-request patient context, and the value objects produced by the
//! triage scorer, the syndromic classifier and the advisory provider.
//! No I/O. This is the shared vocabulary of the SynDx system.

pub mod error;
pub mod models;
