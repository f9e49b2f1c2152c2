use std::time::Duration;

use futures::future::BoxFuture;
use syndx_advisory::aggregate::{
    DEFAULT_PATIENT_MESSAGE, FIELD_DIAGNOSIS, FIELD_FOLLOWUP, FIELD_TREATMENT,
    UNINTERPRETABLE_COMMENTARY,
};
use syndx_advisory::error::AdvisoryError;
use syndx_advisory::parse::parse_advisory;
use syndx_advisory::{AdvisoryProvider, DisabledAdvisor, aggregate, fetch_advisory, patient_message};
use syndx_core::models::advisory::{AdvisoryResult, Confidence};
use syndx_core::models::patient::{PatientContext, Sex};
use syndx_core::models::syndrome::SyndromicResult;

struct FixedProvider(String);

impl AdvisoryProvider for FixedProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    fn get_advisory<'a>(
        &'a self,
        _context: &'a PatientContext,
    ) -> BoxFuture<'a, Result<AdvisoryResult, AdvisoryError>> {
        Box::pin(async move { parse_advisory(&self.0) })
    }
}

struct SlowProvider;

impl AdvisoryProvider for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    fn get_advisory<'a>(
        &'a self,
        _context: &'a PatientContext,
    ) -> BoxFuture<'a, Result<AdvisoryResult, AdvisoryError>> {
        Box::pin(async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(AdvisoryResult::unavailable())
        })
    }
}

fn vds() -> SyndromicResult {
    SyndromicResult {
        probable_syndrome: "Vaginal discharge syndrome".to_string(),
        differential: "GC/CT, Trichomonas, BV".to_string(),
        treatment: "Ceftriaxone 500 mg IM once".to_string(),
        lab_recommendation: "Speculum exam".to_string(),
    }
}

fn advisory(message: &str) -> AdvisoryResult {
    AdvisoryResult {
        probable: "Vaginal discharge syndrome".to_string(),
        possible: "Trichomonas".to_string(),
        treatment: "Metronidazole 2 g PO once".to_string(),
        labs: "Wet mount".to_string(),
        confidence: Confidence::High,
        patient_message: message.to_string(),
    }
}

#[tokio::test]
async fn slow_provider_times_out_to_none() {
    let ctx = PatientContext::new(29, Sex::Female);
    let result = fetch_advisory(&SlowProvider, &ctx, Duration::from_millis(50)).await;
    assert!(result.is_none());
}

#[tokio::test]
async fn malformed_response_yields_none() {
    let ctx = PatientContext::new(29, Sex::Female);
    let provider = FixedProvider("Sorry, I can't do that.".to_string());
    assert!(fetch_advisory(&provider, &ctx, Duration::from_secs(1)).await.is_none());
}

#[tokio::test]
async fn disabled_provider_yields_none() {
    let ctx = PatientContext::new(29, Sex::Female);
    assert!(fetch_advisory(&DisabledAdvisor, &ctx, Duration::from_secs(1)).await.is_none());
}

#[tokio::test]
async fn well_formed_response_is_returned() {
    let ctx = PatientContext::new(29, Sex::Female);
    let provider = FixedProvider(
        r#"{"probable": "VDS", "possible": "BV", "confidence": "medium", "patient_sms": "ok"}"#
            .to_string(),
    );
    let advisory = fetch_advisory(&provider, &ctx, Duration::from_secs(1)).await.unwrap();
    assert_eq!(advisory.probable, "VDS");
    assert_eq!(advisory.confidence, Confidence::Medium);
}

#[test]
fn comparison_without_advisory_uses_safe_default() {
    let comparison = aggregate(&vds(), None);

    assert!(!comparison.advisory_available);
    assert_eq!(comparison.rows.len(), 3);
    assert_eq!(comparison.rows[0].field, FIELD_DIAGNOSIS);
    assert_eq!(
        comparison.rows[0].baseline,
        "Vaginal discharge syndrome; GC/CT, Trichomonas, BV"
    );
    assert_eq!(comparison.rows[0].advisory, "AI parsing issue; —");
    assert_eq!(comparison.diagnosis_commentary(), UNINTERPRETABLE_COMMENTARY);
    assert_eq!(comparison.confidence_display, "40%");

    // The baseline treatment is always the treatment of record.
    assert_eq!(comparison.rows[1].field, FIELD_TREATMENT);
    assert_eq!(comparison.rows[1].baseline, "Ceftriaxone 500 mg IM once");
    assert_eq!(comparison.rows[2].field, FIELD_FOLLOWUP);
    assert_eq!(
        comparison.rows[2].baseline,
        "Partner treatment; condom advice; return if no improvement"
    );
}

#[test]
fn comparison_with_advisory_builds_commentary() {
    let comparison = aggregate(&vds(), Some(advisory("")));

    assert!(comparison.advisory_available);
    assert_eq!(
        comparison.diagnosis_commentary(),
        "AI suggests: Vaginal discharge syndrome; Trichomonas. \
         WHO baseline: Vaginal discharge syndrome; GC/CT, Trichomonas, BV. \
         Overlap noted; AI highlights potential nuances or severity."
    );
    assert_eq!(comparison.rows[1].advisory, "Metronidazole 2 g PO once");
    assert_eq!(comparison.confidence_display, "90%");
}

#[test]
fn patient_message_defaults_and_addresses() {
    let comparison = aggregate(&vds(), Some(advisory("  ")));
    assert_eq!(patient_message(&comparison, None), DEFAULT_PATIENT_MESSAGE);
    assert_eq!(
        patient_message(&comparison, Some("+251911000000")),
        format!("To +251911000000: {DEFAULT_PATIENT_MESSAGE}")
    );

    let comparison = aggregate(&vds(), Some(advisory("Take all tablets.")));
    assert_eq!(patient_message(&comparison, Some("")), "Take all tablets.");

    let comparison = aggregate(&vds(), None);
    assert_eq!(patient_message(&comparison, None), "Return if symptoms worsen.");
}
