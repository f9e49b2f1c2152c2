use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures::future::BoxFuture;
use serde_json::{Value, json};
use syndx_advisory::error::AdvisoryError;
use syndx_advisory::{AdvisoryProvider, DisabledAdvisor};
use syndx_core::models::advisory::{AdvisoryResult, Confidence};
use syndx_core::models::patient::PatientContext;
use syndx_server::app;
use syndx_server::state::AppState;
use syndx_surveillance::CaseLog;
use tower::ServiceExt;

struct CannedAdvisor;

impl AdvisoryProvider for CannedAdvisor {
    fn name(&self) -> &str {
        "canned"
    }

    fn get_advisory<'a>(
        &'a self,
        _context: &'a PatientContext,
    ) -> BoxFuture<'a, Result<AdvisoryResult, AdvisoryError>> {
        Box::pin(async {
            Ok(AdvisoryResult {
                probable: "Urethritis".to_string(),
                possible: "Gonorrhea".to_string(),
                treatment: "Ceftriaxone".to_string(),
                labs: "NAAT".to_string(),
                confidence: Confidence::Medium,
                patient_message: "Finish all medicine.".to_string(),
            })
        })
    }
}

fn state_with(advisor: Arc<dyn AdvisoryProvider>) -> AppState {
    AppState::new(CaseLog::in_memory(), advisor, Duration::from_millis(200))
}

async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(b) => request.body(Body::from(b.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn female_vds() -> Value {
    json!({
        "patient_id": "P-1",
        "age": 29,
        "sex": "Female",
        "temperature": "37.0",
        "pain_level": 2,
        "symptoms": ["Vaginal discharge"]
    })
}

fn male_eo() -> Value {
    json!({
        "patient_id": "P-2",
        "age": 34,
        "sex": "Male",
        "temperature": "39.5",
        "blood_pressure": "85/60",
        "pain_level": 9,
        "symptoms": ["Testicular/scrotal pain/swelling"],
        "phone": "+251911000000"
    })
}

#[tokio::test]
async fn health_is_ok() {
    let state = state_with(Arc::new(DisabledAdvisor));
    let (status, body) = send(&state, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn vitals_are_normalized_with_warnings() {
    let state = state_with(Arc::new(DisabledAdvisor));
    let (status, body) = send(
        &state,
        "POST",
        "/vitals/normalize",
        Some(json!({"temperature": "43", "heart_rate": "fast", "blood_pressure": "120/80"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["temperature_c"], 43.0);
    assert_eq!(body["heart_rate_bpm"], Value::Null);
    assert_eq!(body["systolic_bp"], 120);
    assert_eq!(body["warnings"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn triage_and_classify_follow_the_rules() {
    let state = state_with(Arc::new(DisabledAdvisor));

    let (status, body) = send(&state, "POST", "/triage", Some(female_vds())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 0);
    assert_eq!(body["level"], "GREEN");
    assert_eq!(body["badge"], "Routine");

    let (_, body) = send(&state, "POST", "/triage", Some(male_eo())).await;
    assert_eq!(body["score"], 10);
    assert_eq!(body["level"], "RED");

    let (status, body) = send(&state, "POST", "/classify", Some(male_eo())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rule"], "epididymo_orchitis");
    assert_eq!(body["probable_syndrome"], "Epididymo-orchitis");
}

#[tokio::test]
async fn unknown_symptom_is_a_bad_request() {
    let state = state_with(Arc::new(DisabledAdvisor));
    let mut intake = female_vds();
    intake["symptoms"] = json!(["Vaginal discharge", "Sneezing"]);

    let (status, body) = send(&state, "POST", "/classify", Some(intake.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Sneezing"));

    let (status, _) = send(&state, "POST", "/diagnose", Some(intake)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(state.case_log.is_empty().await);
}

#[tokio::test]
async fn screening_and_discharge_endpoints() {
    let state = state_with(Arc::new(DisabledAdvisor));
    let (status, body) = send(
        &state,
        "POST",
        "/screening",
        Some(json!({"age": 40, "sex": "Male", "symptoms": ["Neck stiffness"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["condition"], "Meningitis");
    assert_eq!(body[0]["urgency"], "Critical");

    let (status, body) = send(
        &state,
        "POST",
        "/discharge",
        Some(json!({"appearance": "Yellow or green (pus-like)"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["assessment"], "Gonorrhea or Trichomoniasis");
}

#[tokio::test]
async fn diagnose_without_advisory_uses_safe_default() {
    let state = state_with(Arc::new(DisabledAdvisor));
    let mut request = female_vds();
    request["discharge"] = json!("Thick white (curd-like)");

    let (status, body) = send(&state, "POST", "/diagnose", Some(request)).await;
    assert_eq!(status, StatusCode::CREATED);

    let case = &body["case"];
    assert_eq!(case["CaseID"], 1);
    assert_eq!(case["Triage"], "GREEN");
    assert_eq!(case["AI_Confidence"], "low");
    assert_eq!(case["AI_Treatment"], "—");
    assert_eq!(case["AI_Commentary"], "AI could not generate interpretation.");
    assert!(
        case["WHO_Treatment"]
            .as_str()
            .unwrap()
            .starts_with("Ceftriaxone 500 mg IM once")
    );
    assert_eq!(case["SMS"], "Return if symptoms worsen.");
    assert_eq!(body["discharge_assessment"], "Candidiasis");
    assert_eq!(body["comparison"]["advisory_available"], false);
    assert_eq!(body["persisted"], true);
    assert_eq!(state.case_log.len().await, 1);
}

#[tokio::test]
async fn diagnose_still_answers_when_the_case_log_fails() {
    let dir = std::env::temp_dir().join(format!("syndx-routes-{}", uuid::Uuid::new_v4()));
    let path = dir.join("cases.jsonl");
    let case_log = CaseLog::open(&path).await.unwrap();
    // A directory in place of the log file makes every append fail.
    std::fs::create_dir(&path).unwrap();

    let state = AppState::new(case_log, Arc::new(DisabledAdvisor), Duration::from_millis(200));
    let (status, body) = send(&state, "POST", "/diagnose", Some(female_vds())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["persisted"], false);
    assert!(body["case"].is_null());
    assert_eq!(body["syndromic"]["probable_syndrome"], "Vaginal discharge syndrome");
    assert!(
        body["syndromic"]["treatment"]
            .as_str()
            .unwrap()
            .starts_with("Ceftriaxone 500 mg IM once")
    );
    assert_eq!(body["triage"]["level"], "GREEN");
    assert_eq!(body["patient_message"], "Return if symptoms worsen.");
    assert_eq!(state.case_log.len().await, 0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn diagnose_with_advisory_records_both_columns() {
    let state = state_with(Arc::new(CannedAdvisor));
    let (status, body) = send(&state, "POST", "/diagnose", Some(male_eo())).await;
    assert_eq!(status, StatusCode::CREATED);

    let case = &body["case"];
    assert_eq!(case["Triage"], "RED");
    assert_eq!(case["Triage_Score"], 10);
    assert_eq!(case["AI_SyndromicDiagnosis"], "Urethritis; Gonorrhea");
    assert_eq!(case["AI_Confidence"], "medium");
    assert_eq!(case["SMS"], "To +251911000000: Finish all medicine.");
    // The syndromic regimen stays the treatment of record.
    assert!(
        case["WHO_Treatment"]
            .as_str()
            .unwrap()
            .contains("x10–14d")
    );
    assert_eq!(body["comparison"]["confidence_display"], "70%");
}

#[tokio::test]
async fn cases_can_be_searched_and_filtered() {
    let state = state_with(Arc::new(DisabledAdvisor));
    send(&state, "POST", "/diagnose", Some(female_vds())).await;
    send(&state, "POST", "/diagnose", Some(male_eo())).await;

    let (status, body) = send(&state, "GET", "/cases", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&state, "GET", "/cases?triage=red", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["PatientID"], "P-2");

    let (_, body) = send(&state, "GET", "/cases?q=vaginal", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send(&state, "GET", "/cases?to=2000-01-01T00:00:00Z", None).await;
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = send(&state, "GET", "/cases?triage=purple", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn outbreak_and_summary_read_the_log() {
    let state = state_with(Arc::new(DisabledAdvisor));

    let (_, body) = send(&state, "GET", "/outbreak", None).await;
    assert_eq!(body["status"], "insufficient_data");

    for _ in 0..10 {
        let mut intake = male_eo();
        intake["symptoms"] = json!(["Urethral discharge", "Dysuria (painful urination)"]);
        send(&state, "POST", "/diagnose", Some(intake)).await;
    }

    let (status, body) = send(&state, "GET", "/outbreak", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alert");
    assert_eq!(body["flagged_symptoms"], json!(["Dysuria (painful urination)", "Urethral discharge"]));

    let (_, body) = send(&state, "GET", "/surveillance/summary", None).await;
    assert_eq!(body["total_cases"], 10);
    assert_eq!(body["male"], 10);
    assert_eq!(body["top_occupations"], json!(["Not Specified"]));
}
