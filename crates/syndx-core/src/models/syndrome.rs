use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The classifier's output: one complete record per classification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SyndromicResult {
    pub probable_syndrome: String,
    /// Possible co-pathogens.
    pub differential: String,
    /// Regimen of record: drug, dose, route, duration.
    pub treatment: String,
    pub lab_recommendation: String,
}

impl SyndromicResult {
    /// `"<probable>; <differential>"` as shown in the comparison and case log.
    pub fn merged_diagnosis(&self) -> String {
        merge_diagnosis(&self.probable_syndrome, &self.differential)
    }
}

/// Join a probable diagnosis and its differential, dropping separators left
/// over when either side is empty.
pub fn merge_diagnosis(probable: &str, possible: &str) -> String {
    format!("{probable}; {possible}")
        .trim_matches(|c| c == ';' || c == ' ')
        .to_string()
}
