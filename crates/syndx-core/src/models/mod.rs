pub mod advisory;
pub mod case;
pub mod patient;
pub mod symptom;
pub mod syndrome;
pub mod triage;
