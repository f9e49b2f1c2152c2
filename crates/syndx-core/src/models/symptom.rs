use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Separator used when a tag set is flattened into a single persisted field.
pub const TAG_SEPARATOR: &str = ";";

/// A closed vocabulary entry with a stable, human-readable label.
///
/// The label is the wire form: it is what the intake form submits, what the
/// case log persists, and what the outbreak detector counts.
pub trait Tag: Copy + Ord + 'static {
    /// Every member of the vocabulary, in declaration order.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

/// Join a set of tags into the persisted `;`-separated form.
pub fn join_tags<'a, T: Tag>(tags: impl IntoIterator<Item = &'a T>) -> String {
    tags.into_iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}

fn find_by_label<T: Tag>(label: &str) -> Option<T> {
    let label = label.trim();
    T::ALL.iter().copied().find(|t| t.label() == label)
}

/// The body system a symptom is grouped under on the intake checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomGroup {
    Sti,
    Urinary,
    Respiratory,
    Gastrointestinal,
    Systemic,
    Neurological,
}

/// A presenting symptom. Unknown labels are rejected at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SymptomTag {
    // STI
    #[serde(rename = "Urethral discharge")]
    UrethralDischarge,
    #[serde(rename = "Vaginal discharge")]
    VaginalDischarge,
    #[serde(rename = "Genital ulcer(s)")]
    GenitalUlcer,
    #[serde(rename = "Dysuria (painful urination)")]
    Dysuria,
    #[serde(rename = "Lower abdominal pain")]
    LowerAbdominalPain,
    #[serde(rename = "Dyspareunia")]
    Dyspareunia,
    #[serde(rename = "Inguinal swelling/tenderness")]
    InguinalSwelling,
    #[serde(rename = "Testicular/scrotal pain/swelling")]
    TesticularPain,
    #[serde(rename = "Itching/burning")]
    ItchingBurning,
    #[serde(rename = "Intermenstrual bleeding")]
    IntermenstrualBleeding,
    #[serde(rename = "Postcoital bleeding")]
    PostcoitalBleeding,

    // Urinary
    #[serde(rename = "Frequent urination")]
    FrequentUrination,
    #[serde(rename = "Urgency")]
    Urgency,
    #[serde(rename = "Hematuria")]
    Hematuria,
    #[serde(rename = "Cloudy urine")]
    CloudyUrine,

    // Respiratory
    #[serde(rename = "Cough")]
    Cough,
    #[serde(rename = "Sputum production")]
    SputumProduction,
    #[serde(rename = "Shortness of breath")]
    ShortnessOfBreath,
    #[serde(rename = "Chest pain")]
    ChestPain,
    #[serde(rename = "Runny nose")]
    RunnyNose,
    #[serde(rename = "Sore throat")]
    SoreThroat,

    // Gastrointestinal
    #[serde(rename = "Diarrhea")]
    Diarrhea,
    #[serde(rename = "Abdominal cramps")]
    AbdominalCramps,
    #[serde(rename = "Nausea")]
    Nausea,
    #[serde(rename = "Vomiting")]
    Vomiting,
    #[serde(rename = "Blood in stool")]
    BloodInStool,

    // Systemic
    #[serde(rename = "Fever")]
    Fever,
    #[serde(rename = "Fatigue")]
    Fatigue,
    #[serde(rename = "Myalgia")]
    Myalgia,
    #[serde(rename = "Night sweats")]
    NightSweats,
    #[serde(rename = "Rash")]
    Rash,
    #[serde(rename = "Joint pain")]
    JointPain,
    #[serde(rename = "Weight loss")]
    WeightLoss,
    #[serde(rename = "Heart murmur")]
    HeartMurmur,

    // Neurological
    #[serde(rename = "Headache")]
    Headache,
    #[serde(rename = "Neck stiffness")]
    NeckStiffness,
    #[serde(rename = "Photophobia")]
    Photophobia,
    #[serde(rename = "Altered mental status")]
    AlteredMentalStatus,
    #[serde(rename = "Confusion")]
    Confusion,
    #[serde(rename = "Seizures")]
    Seizures,
}

impl SymptomTag {
    pub fn group(&self) -> SymptomGroup {
        use SymptomTag::*;
        match self {
            UrethralDischarge | VaginalDischarge | GenitalUlcer | Dysuria | LowerAbdominalPain
            | Dyspareunia | InguinalSwelling | TesticularPain | ItchingBurning
            | IntermenstrualBleeding | PostcoitalBleeding => SymptomGroup::Sti,
            FrequentUrination | Urgency | Hematuria | CloudyUrine => SymptomGroup::Urinary,
            Cough | SputumProduction | ShortnessOfBreath | ChestPain | RunnyNose | SoreThroat => {
                SymptomGroup::Respiratory
            }
            Diarrhea | AbdominalCramps | Nausea | Vomiting | BloodInStool => {
                SymptomGroup::Gastrointestinal
            }
            Fever | Fatigue | Myalgia | NightSweats | Rash | JointPain | WeightLoss
            | HeartMurmur => SymptomGroup::Systemic,
            Headache | NeckStiffness | Photophobia | AlteredMentalStatus | Confusion
            | Seizures => SymptomGroup::Neurological,
        }
    }
}

impl Tag for SymptomTag {
    const ALL: &'static [Self] = &[
        SymptomTag::UrethralDischarge,
        SymptomTag::VaginalDischarge,
        SymptomTag::GenitalUlcer,
        SymptomTag::Dysuria,
        SymptomTag::LowerAbdominalPain,
        SymptomTag::Dyspareunia,
        SymptomTag::InguinalSwelling,
        SymptomTag::TesticularPain,
        SymptomTag::ItchingBurning,
        SymptomTag::IntermenstrualBleeding,
        SymptomTag::PostcoitalBleeding,
        SymptomTag::FrequentUrination,
        SymptomTag::Urgency,
        SymptomTag::Hematuria,
        SymptomTag::CloudyUrine,
        SymptomTag::Cough,
        SymptomTag::SputumProduction,
        SymptomTag::ShortnessOfBreath,
        SymptomTag::ChestPain,
        SymptomTag::RunnyNose,
        SymptomTag::SoreThroat,
        SymptomTag::Diarrhea,
        SymptomTag::AbdominalCramps,
        SymptomTag::Nausea,
        SymptomTag::Vomiting,
        SymptomTag::BloodInStool,
        SymptomTag::Fever,
        SymptomTag::Fatigue,
        SymptomTag::Myalgia,
        SymptomTag::NightSweats,
        SymptomTag::Rash,
        SymptomTag::JointPain,
        SymptomTag::WeightLoss,
        SymptomTag::HeartMurmur,
        SymptomTag::Headache,
        SymptomTag::NeckStiffness,
        SymptomTag::Photophobia,
        SymptomTag::AlteredMentalStatus,
        SymptomTag::Confusion,
        SymptomTag::Seizures,
    ];

    fn label(&self) -> &'static str {
        use SymptomTag::*;
        match self {
            UrethralDischarge => "Urethral discharge",
            VaginalDischarge => "Vaginal discharge",
            GenitalUlcer => "Genital ulcer(s)",
            Dysuria => "Dysuria (painful urination)",
            LowerAbdominalPain => "Lower abdominal pain",
            Dyspareunia => "Dyspareunia",
            InguinalSwelling => "Inguinal swelling/tenderness",
            TesticularPain => "Testicular/scrotal pain/swelling",
            ItchingBurning => "Itching/burning",
            IntermenstrualBleeding => "Intermenstrual bleeding",
            PostcoitalBleeding => "Postcoital bleeding",
            FrequentUrination => "Frequent urination",
            Urgency => "Urgency",
            Hematuria => "Hematuria",
            CloudyUrine => "Cloudy urine",
            Cough => "Cough",
            SputumProduction => "Sputum production",
            ShortnessOfBreath => "Shortness of breath",
            ChestPain => "Chest pain",
            RunnyNose => "Runny nose",
            SoreThroat => "Sore throat",
            Diarrhea => "Diarrhea",
            AbdominalCramps => "Abdominal cramps",
            Nausea => "Nausea",
            Vomiting => "Vomiting",
            BloodInStool => "Blood in stool",
            Fever => "Fever",
            Fatigue => "Fatigue",
            Myalgia => "Myalgia",
            NightSweats => "Night sweats",
            Rash => "Rash",
            JointPain => "Joint pain",
            WeightLoss => "Weight loss",
            HeartMurmur => "Heart murmur",
            Headache => "Headache",
            NeckStiffness => "Neck stiffness",
            Photophobia => "Photophobia",
            AlteredMentalStatus => "Altered mental status",
            Confusion => "Confusion",
            Seizures => "Seizures",
        }
    }
}

impl FromStr for SymptomTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_label(s).ok_or_else(|| CoreError::UnknownSymptom(s.to_string()))
    }
}

impl fmt::Display for SymptomTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a risk factor is behavioral (sexual history) or an exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskGroup {
    Behavioral,
    Exposure,
}

/// A behavioral or exposure risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskTag {
    // Behavioral
    #[serde(rename = "New partner in last 3 months", alias = "New sexual partner")]
    NewPartner,
    #[serde(rename = "Multiple partners")]
    MultiplePartners,
    #[serde(rename = "Unprotected sex")]
    UnprotectedSex,
    #[serde(rename = "Known partner with STI")]
    PartnerWithSti,
    #[serde(rename = "Age <25")]
    AgeUnder25,
    #[serde(rename = "Sex worker")]
    SexWorker,
    #[serde(rename = "MSM")]
    Msm,
    #[serde(rename = "Recent antibiotic use")]
    RecentAntibioticUse,

    // Exposure
    #[serde(rename = "Recent travel")]
    RecentTravel,
    #[serde(rename = "IV drug use")]
    IvDrugUse,
    #[serde(rename = "Animal exposure")]
    AnimalExposure,
    #[serde(rename = "Contact with sick person")]
    SickContact,
    #[serde(rename = "Healthcare worker")]
    HealthcareWorker,
    #[serde(rename = "Recent hospitalization")]
    RecentHospitalization,
}

impl RiskTag {
    pub fn group(&self) -> RiskGroup {
        use RiskTag::*;
        match self {
            NewPartner | MultiplePartners | UnprotectedSex | PartnerWithSti | AgeUnder25
            | SexWorker | Msm | RecentAntibioticUse => RiskGroup::Behavioral,
            RecentTravel | IvDrugUse | AnimalExposure | SickContact | HealthcareWorker
            | RecentHospitalization => RiskGroup::Exposure,
        }
    }
}

impl Tag for RiskTag {
    const ALL: &'static [Self] = &[
        RiskTag::NewPartner,
        RiskTag::MultiplePartners,
        RiskTag::UnprotectedSex,
        RiskTag::PartnerWithSti,
        RiskTag::AgeUnder25,
        RiskTag::SexWorker,
        RiskTag::Msm,
        RiskTag::RecentAntibioticUse,
        RiskTag::RecentTravel,
        RiskTag::IvDrugUse,
        RiskTag::AnimalExposure,
        RiskTag::SickContact,
        RiskTag::HealthcareWorker,
        RiskTag::RecentHospitalization,
    ];

    fn label(&self) -> &'static str {
        use RiskTag::*;
        match self {
            NewPartner => "New partner in last 3 months",
            MultiplePartners => "Multiple partners",
            UnprotectedSex => "Unprotected sex",
            PartnerWithSti => "Known partner with STI",
            AgeUnder25 => "Age <25",
            SexWorker => "Sex worker",
            Msm => "MSM",
            RecentAntibioticUse => "Recent antibiotic use",
            RecentTravel => "Recent travel",
            IvDrugUse => "IV drug use",
            AnimalExposure => "Animal exposure",
            SickContact => "Contact with sick person",
            HealthcareWorker => "Healthcare worker",
            RecentHospitalization => "Recent hospitalization",
        }
    }
}

impl FromStr for RiskTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The screening form used an older label for the same factor.
        if s.trim() == "New sexual partner" {
            return Ok(RiskTag::NewPartner);
        }
        find_by_label(s).ok_or_else(|| CoreError::UnknownRisk(s.to_string()))
    }
}

impl fmt::Display for RiskTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
