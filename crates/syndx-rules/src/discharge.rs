use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Reported color or appearance of a genital discharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DischargeAppearance {
    #[serde(rename = "Thick white (curd-like)")]
    ThickWhite,
    #[serde(rename = "Yellow or green (pus-like)")]
    YellowGreen,
    #[serde(rename = "Gray (with odor)")]
    Gray,
    #[serde(rename = "Bloody or brownish")]
    Bloody,
    #[serde(rename = "Clear or watery")]
    Clear,
}

impl DischargeAppearance {
    /// Informational assessment. Never alters the syndromic result.
    pub fn assess(&self) -> &'static str {
        match self {
            DischargeAppearance::ThickWhite => "Candidiasis",
            DischargeAppearance::YellowGreen => "Gonorrhea or Trichomoniasis",
            DischargeAppearance::Gray => "Bacterial vaginosis (non-STI)",
            DischargeAppearance::Bloody => "Consider cervicitis or malignancy – refer",
            DischargeAppearance::Clear => "May be normal or non-specific",
        }
    }
}
