//! Syndromic classifier.
//!
//! One canonical, ordered decision list. Rules are evaluated top to bottom
//! and the first match wins. The sex gate is checked before the symptom
//! predicate, so a female patient can never reach a male-only rule. The
//! last rule always matches, so every call yields a complete record.
//!
//! Order is clinical meaning: PID outranks vaginal discharge, epididymo-
//! orchitis outranks urethral discharge, and inguinal bubo outranks genital
//! ulcer disease for either sex.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use syndx_core::models::patient::{PatientContext, Sex};
use syndx_core::models::symptom::SymptomTag;
use syndx_core::models::syndrome::SyndromicResult;
use tracing::debug;
use ts_rs::TS;

/// Identifies a rule in the decision list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RuleId {
    PelvicInflammatoryDisease,
    VaginalDischargeSyndrome,
    EpididymoOrchitis,
    UrethralDischargeSyndrome,
    InguinalBuboSyndrome,
    GenitalUlcerDisease,
    NoDefinedSyndrome,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::PelvicInflammatoryDisease => "pelvic_inflammatory_disease",
            RuleId::VaginalDischargeSyndrome => "vaginal_discharge_syndrome",
            RuleId::EpididymoOrchitis => "epididymo_orchitis",
            RuleId::UrethralDischargeSyndrome => "urethral_discharge_syndrome",
            RuleId::InguinalBuboSyndrome => "inguinal_bubo_syndrome",
            RuleId::GenitalUlcerDisease => "genital_ulcer_disease",
            RuleId::NoDefinedSyndrome => "no_defined_syndrome",
        }
    }
}

/// Which patients a rule block applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SexGate {
    Female,
    Male,
    Any,
}

impl SexGate {
    pub fn admits(&self, sex: Sex) -> bool {
        match self {
            SexGate::Female => sex == Sex::Female,
            SexGate::Male => sex == Sex::Male,
            SexGate::Any => true,
        }
    }
}

/// Static result values for a rule. Looked up, never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleRecord {
    pub probable: &'static str,
    pub differential: &'static str,
    pub treatment: &'static str,
    pub labs: &'static str,
}

impl RuleRecord {
    pub fn to_result(&self) -> SyndromicResult {
        SyndromicResult {
            probable_syndrome: self.probable.to_string(),
            differential: self.differential.to_string(),
            treatment: self.treatment.to_string(),
            lab_recommendation: self.labs.to_string(),
        }
    }
}

/// One entry of the decision list: sex gate, symptom predicate, result.
#[derive(Debug, Clone, Copy)]
pub struct SyndromeRule {
    pub id: RuleId,
    pub sex_gate: SexGate,
    pub predicate: fn(&BTreeSet<SymptomTag>) -> bool,
    pub record: RuleRecord,
}

impl SyndromeRule {
    pub fn applies_to(&self, context: &PatientContext) -> bool {
        self.sex_gate.admits(context.sex) && (self.predicate)(&context.symptoms)
    }
}

fn pid(s: &BTreeSet<SymptomTag>) -> bool {
    s.contains(&SymptomTag::LowerAbdominalPain)
        || s.contains(&SymptomTag::Dyspareunia)
        || (s.contains(&SymptomTag::Fever) && s.contains(&SymptomTag::VaginalDischarge))
}

fn vaginal_discharge(s: &BTreeSet<SymptomTag>) -> bool {
    s.contains(&SymptomTag::VaginalDischarge) || s.contains(&SymptomTag::ItchingBurning)
}

fn epididymo_orchitis(s: &BTreeSet<SymptomTag>) -> bool {
    s.contains(&SymptomTag::TesticularPain)
        || (s.contains(&SymptomTag::Fever) && s.contains(&SymptomTag::Dysuria))
}

fn urethral_discharge(s: &BTreeSet<SymptomTag>) -> bool {
    s.contains(&SymptomTag::UrethralDischarge) || s.contains(&SymptomTag::Dysuria)
}

fn inguinal_bubo(s: &BTreeSet<SymptomTag>) -> bool {
    s.contains(&SymptomTag::InguinalSwelling)
}

fn genital_ulcer(s: &BTreeSet<SymptomTag>) -> bool {
    s.contains(&SymptomTag::GenitalUlcer)
}

fn always(_: &BTreeSet<SymptomTag>) -> bool {
    true
}

const FALLBACK: SyndromeRule = SyndromeRule {
    id: RuleId::NoDefinedSyndrome,
    sex_gate: SexGate::Any,
    predicate: always,
    record: RuleRecord {
        probable: "No clear WHO-defined syndrome",
        differential: "Consider alternative causes",
        treatment: "Symptomatic care; reassess",
        labs: "Screen HIV/syphilis; NAAT if feasible",
    },
};

static RULES: [SyndromeRule; 7] = [
    SyndromeRule {
        id: RuleId::PelvicInflammatoryDisease,
        sex_gate: SexGate::Female,
        predicate: pid,
        record: RuleRecord {
            probable: "Pelvic Inflammatory Disease (PID)",
            differential: "GC/CT, anaerobes",
            treatment: "Ceftriaxone 500 mg IM once + Doxycycline 100 mg PO bid x14d + Metronidazole 500 mg PO bid x14d",
            labs: "Pregnancy test; pelvic exam; HIV & syphilis testing",
        },
    },
    SyndromeRule {
        id: RuleId::VaginalDischargeSyndrome,
        sex_gate: SexGate::Female,
        predicate: vaginal_discharge,
        record: RuleRecord {
            probable: "Vaginal discharge syndrome",
            differential: "GC/CT, Trichomonas, BV",
            treatment: "Ceftriaxone 500 mg IM once + Doxycycline 100 mg PO bid x7d + Metronidazole 500 mg PO bid x7d",
            labs: "Speculum exam; NAAT for GC/CT; wet mount; HIV/syphilis testing",
        },
    },
    SyndromeRule {
        id: RuleId::EpididymoOrchitis,
        sex_gate: SexGate::Male,
        predicate: epididymo_orchitis,
        record: RuleRecord {
            probable: "Epididymo-orchitis",
            differential: "GC/CT, enteric organisms",
            treatment: "Ceftriaxone 500 mg IM once + Doxycycline 100 mg PO bid x10–14d",
            labs: "Urinalysis; NAAT for GC/CT; ultrasound if torsion suspected",
        },
    },
    SyndromeRule {
        id: RuleId::UrethralDischargeSyndrome,
        sex_gate: SexGate::Male,
        predicate: urethral_discharge,
        record: RuleRecord {
            probable: "Urethral discharge syndrome",
            differential: "Gonorrhea, Chlamydia",
            treatment: "Ceftriaxone 500 mg IM once + Doxycycline 100 mg PO bid x7d",
            labs: "NAAT for GC/CT; HIV & syphilis testing",
        },
    },
    SyndromeRule {
        id: RuleId::InguinalBuboSyndrome,
        sex_gate: SexGate::Any,
        predicate: inguinal_bubo,
        record: RuleRecord {
            probable: "Inguinal bubo syndrome",
            differential: "LGV, chancroid",
            treatment: "Doxycycline 100 mg PO bid x21d OR Azithromycin 1g PO weekly x3",
            labs: "Ultrasound if abscess; HIV & syphilis testing",
        },
    },
    SyndromeRule {
        id: RuleId::GenitalUlcerDisease,
        sex_gate: SexGate::Any,
        predicate: genital_ulcer,
        record: RuleRecord {
            probable: "Genital ulcer disease",
            differential: "Syphilis, HSV, ±Chancroid",
            treatment: "Benzathine Penicillin G 2.4 MU IM once + Acyclovir 400 mg PO tid x7–10d; Add Azithromycin 1g PO if chancroid suspected",
            labs: "RPR/VDRL; HIV testing; HSV PCR if available",
        },
    },
    FALLBACK,
];

/// The full decision list in evaluation order. The last entry is the
/// always-matching fallback.
pub fn all_rules() -> &'static [SyndromeRule] {
    &RULES
}

/// Look up a rule by ID.
pub fn get_rule(id: RuleId) -> Option<&'static SyndromeRule> {
    RULES.iter().find(|r| r.id == id)
}

/// The first rule in the decision list that applies to the context.
pub fn matching_rule(context: &PatientContext) -> &'static SyndromeRule {
    let rule = RULES
        .iter()
        .find(|r| r.applies_to(context))
        .unwrap_or(&FALLBACK);
    debug!(rule = rule.id.as_str(), sex = %context.sex, "syndromic rule matched");
    rule
}

/// Classify a context into exactly one complete syndromic result.
pub fn classify(context: &PatientContext) -> SyndromicResult {
    matching_rule(context).record.to_result()
}
