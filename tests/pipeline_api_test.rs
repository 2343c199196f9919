use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::post,
    Json, Router,
};
use hirepulse::{
    database::store::Store,
    routes::build_router,
    services::{
        notification_service::SimulatedInviteSender, scoring_service::ScoringService,
        toast_service::ToastQueue,
    },
    AppState,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

async fn spawn_fake_gemini(score: f64) -> String {
    let text = json!({
        "matchPercentage": score,
        "keyStrengths": ["Go", "Kubernetes", "Distributed systems"],
        "gapAnalysis": ["No production Rust"],
        "recommendation": "Proceed to technical interview",
        "suggestedQuestions": [
            "How do you size a Kubernetes cluster?",
            "Describe a Go concurrency bug you fixed.",
            "How would you shard a write-heavy service?",
            "What does a good rollout look like?",
            "How do you debug tail latency?"
        ]
    })
    .to_string();

    let app = Router::new().route(
        "/v1beta/models/:model",
        post(move |Json(body): Json<JsonValue>| {
            let text = text.clone();
            async move {
                assert!(body["contents"][0]["parts"][0]["text"]
                    .as_str()
                    .unwrap_or_default()
                    .contains("CANDIDATE RESUME"));
                Json(json!({
                    "candidates": [{ "content": { "parts": [{ "text": text }] } }]
                }))
            }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn build_app(api_key: Option<&str>, gemini_url: String) -> Router {
    let scoring = ScoringService::new(
        api_key.map(str::to_string),
        "gemini-test".to_string(),
        gemini_url,
        reqwest::Client::new(),
    );
    let state = AppState::from_parts(
        Store::seeded(),
        scoring,
        Arc::new(SimulatedInviteSender::new(Duration::ZERO)),
        ToastQueue::new(Duration::from_secs(60)),
    );
    build_router(state, None)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn high_match(app: &Router) -> u64 {
    let (_, dash) = send(app, "GET", "/api/views/dashboard", None).await;
    dash["stats"]["highMatch"].as_u64().unwrap()
}

async fn run_backend_engineer_scenario(score: f64) {
    let app = build_app(Some("test-key"), spawn_fake_gemini(score).await);

    let (status, job) = send(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({ "title": "Backend Engineer", "content": "Go, Kubernetes, 3 years" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let job_id = job["id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "PUT", "/api/jobs/active", Some(json!({ "jobId": job_id }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, ada) = send(
        &app,
        "POST",
        "/api/candidates",
        Some(json!({
            "name": "Ada",
            "resumeContent": "5 years Go, Kubernetes, distributed systems"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ada["status"], "pending");
    assert!(ada["score"].is_null());
    let ada_id = ada["id"].as_str().unwrap().to_string();

    let before = high_match(&app).await;

    let (status, scored) = send(
        &app,
        "POST",
        &format!("/api/candidates/{}/screen?wait=true", ada_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scored["status"], "scored");
    let pct = scored["matchAnalysis"]["matchPercentage"].as_u64().unwrap();
    assert!(pct <= 100);
    assert_eq!(scored["score"].as_u64(), Some(pct));
    assert_eq!(scored["screening"]["state"], "succeeded");

    let after = high_match(&app).await;
    let expected = if pct >= 80 { before + 1 } else { before };
    assert_eq!(after, expected);

    let (_, toasts) = send(&app, "GET", "/api/toasts", None).await;
    let messages: Vec<&str> = toasts
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["message"].as_str())
        .collect();
    assert!(messages.contains(&"Candidate added to pipeline."));
    assert!(messages.contains(&"Ada screened successfully!"));
}

#[tokio::test]
async fn backend_engineer_high_match_counts_on_dashboard() {
    run_backend_engineer_scenario(86.0).await;
}

#[tokio::test]
async fn backend_engineer_low_match_leaves_high_count() {
    run_backend_engineer_scenario(42.0).await;
}

#[tokio::test]
async fn background_screen_reports_in_flight_then_finishes() {
    let app = build_app(Some("test-key"), spawn_fake_gemini(91.0).await);
    let (_, ada) = send(
        &app,
        "POST",
        "/api/candidates",
        Some(json!({ "name": "Ada", "resumeContent": "Go" })),
    )
    .await;
    let id = ada["id"].as_str().unwrap().to_string();

    let (status, started) = send(&app, "POST", &format!("/api/candidates/{}/screen", id), None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(started["screening"]["state"], "inFlight");

    let mut finished = JsonValue::Null;
    for _ in 0..50 {
        let (_, state) = send(&app, "GET", &format!("/api/candidates/{}/screening", id), None).await;
        if state["screening"]["state"] != "inFlight" {
            finished = state;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(finished["screening"]["state"], "succeeded");
    assert_eq!(finished["screening"]["score"], 91);

    let (status, _) = send(&app, "POST", &format!("/api/candidates/{}/screen", id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn missing_api_key_surfaces_as_bad_gateway() {
    let app = build_app(None, "http://127.0.0.1:9".to_string());
    let (_, ada) = send(
        &app,
        "POST",
        "/api/candidates",
        Some(json!({ "name": "Ada", "resumeContent": "Go" })),
    )
    .await;
    let id = ada["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/candidates/{}/screen?wait=true", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("API_KEY"));

    let (_, after) = send(&app, "GET", &format!("/api/candidates/{}", id), None).await;
    assert_eq!(after["status"], "pending");
    assert!(after["matchAnalysis"].is_null());
    assert_eq!(after["screening"]["state"], "failed");

    let (_, toasts) = send(&app, "GET", "/api/toasts", None).await;
    assert!(toasts
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["kind"] == "error" && t["message"] == "AI Screening failed. Check API key."));
}

#[tokio::test]
async fn blank_fields_are_rejected() {
    let app = build_app(None, "http://127.0.0.1:9".to_string());

    let (status, body) = send(
        &app,
        "POST",
        "/api/jobs",
        Some(json!({ "title": "  ", "content": "Go" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(
        &app,
        "POST",
        "/api/candidates",
        Some(json!({ "name": "Ada", "resumeContent": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, jobs) = send(&app, "GET", "/api/jobs", None).await;
    assert_eq!(jobs["total"], 1);
    let (_, candidates) = send(&app, "GET", "/api/candidates", None).await;
    assert_eq!(candidates["total"], 0);
}

#[tokio::test]
async fn newest_entities_are_listed_first() {
    let app = build_app(None, "http://127.0.0.1:9".to_string());
    for title in ["Designer", "Data Engineer"] {
        send(
            &app,
            "POST",
            "/api/jobs",
            Some(json!({ "title": title, "company": "Acme", "content": "..." })),
        )
        .await;
    }
    for name in ["Grace", "Linus"] {
        send(
            &app,
            "POST",
            "/api/candidates",
            Some(json!({ "name": name, "resumeContent": "..." })),
        )
        .await;
    }

    let (_, jobs) = send(&app, "GET", "/api/jobs", None).await;
    assert_eq!(jobs["items"][0]["title"], "Data Engineer");
    assert_eq!(jobs["items"][2]["title"], "Senior Software Engineer (React)");

    let (_, candidates) = send(&app, "GET", "/api/candidates", None).await;
    assert_eq!(candidates["items"][0]["name"], "Linus");
    assert_eq!(candidates["items"][1]["name"], "Grace");
}

#[tokio::test]
async fn invite_requires_a_scored_candidate() {
    let app = build_app(Some("test-key"), spawn_fake_gemini(88.0).await);
    let (_, ada) = send(
        &app,
        "POST",
        "/api/candidates",
        Some(json!({ "name": "Ada", "email": "ada@example.com", "resumeContent": "Go" })),
    )
    .await;
    let id = ada["id"].as_str().unwrap().to_string();

    let (status, _) = send(&app, "POST", &format!("/api/candidates/{}/invite", id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    send(&app, "POST", &format!("/api/candidates/{}/screen?wait=true", id), None).await;
    let (status, contacted) = send(&app, "POST", &format!("/api/candidates/{}/invite", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contacted["status"], "contacted");
    assert_eq!(contacted["score"], 88);

    let (_, dash) = send(&app, "GET", "/api/views/dashboard", None).await;
    assert_eq!(dash["stats"]["contacted"], 1);
    assert_eq!(dash["stats"]["awaitingAction"], 0);
}

#[tokio::test]
async fn screening_without_active_job_is_bad_request() {
    let scoring = ScoringService::new(
        Some("k".into()),
        "gemini-test".into(),
        "http://127.0.0.1:9".into(),
        reqwest::Client::new(),
    );
    let state = AppState::from_parts(
        Store::new(),
        scoring,
        Arc::new(SimulatedInviteSender::new(Duration::ZERO)),
        ToastQueue::new(Duration::from_secs(60)),
    );
    let app = build_router(state, None);

    let (_, ada) = send(
        &app,
        "POST",
        "/api/candidates",
        Some(json!({ "name": "Ada", "resumeContent": "Go" })),
    )
    .await;
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/candidates/{}/screen", ada["id"].as_str().unwrap()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "no active job");

    let (status, _) = send(&app, "GET", "/api/jobs/active", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
