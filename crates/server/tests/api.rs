use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::{routes, state::ServerState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

async fn build_app() -> anyhow::Result<Router> {
    let db = service::test_support::get_db().await?;
    Ok(routes::build_router(ServerState::new(db), cors()))
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).expect("request")
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("json")))
        .expect("request")
}

async fn create_question(app: &Router, text: &str, topic_id: Option<i64>) -> anyhow::Result<i64> {
    let (status, body) = send(app, post("/questions", json!({
        "text": text,
        "topic_id": topic_id,
        "options": [{"text": "yes", "is_correct": true}, {"text": "no", "is_correct": false, "explanation": "because"}]
    }))).await?;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    Ok(body["id"].as_i64().expect("id"))
}

#[tokio::test]
async fn test_health() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, get("/health")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_topic_create_list_and_duplicate() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, post("/topics", json!({"name": "Algebra"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Algebra");
    assert!(body["id"].is_i64());

    let (status, body) = send(&app, post("/topics", json!({"name": "Algebra"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Topic already exists");

    let (status, body) = send(&app, get("/topics")).await?;
    assert_eq!(status, StatusCode::OK);
    let topics = body.as_array().expect("array");
    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0]["name"], "Algebra");
    Ok(())
}

#[tokio::test]
async fn test_algebra_scenario() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (_, topic) = send(&app, post("/topics", json!({"name": "Algebra"}))).await?;
    let topic_id = topic["id"].as_i64().expect("topic id");

    let (status, created) = send(&app, post("/questions", json!({
        "text": "2+2=?",
        "topic_id": topic_id,
        "options": [{"text": "4", "is_correct": true}, {"text": "5", "is_correct": false}]
    }))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Question added successfully");

    let (status, body) = send(&app, get(&format!("/questions?topic_id={topic_id}"))).await?;
    assert_eq!(status, StatusCode::OK);
    let questions = body.as_array().expect("array");
    assert_eq!(questions.len(), 1);
    let q = &questions[0];
    assert_eq!(q["id"], created["id"]);
    assert_eq!(q["text"], "2+2=?");
    assert_eq!(q["topic_name"], "Algebra");
    let options = q["options"].as_array().expect("options");
    assert_eq!(options.len(), 2);
    assert_eq!(options[0]["text"], "4");
    assert_eq!(options[0]["is_correct"], true);
    assert_eq!(options[1]["text"], "5");
    assert_eq!(options[1]["is_correct"], false);

    // empty filter behaves like no filter
    let (status, body) = send(&app, get("/questions?topic_id=")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_question_payload_errors_are_json() -> anyhow::Result<()> {
    let app = build_app().await?;

    let (status, body) = send(&app, post("/questions", json!({"options": []}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, post("/questions", json!({"text": "no options", "options": []}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap_or_default().contains("option"));

    let (_, body) = send(&app, get("/questions")).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn test_random_quiz_counts() -> anyhow::Result<()> {
    let app = build_app().await?;
    for i in 0..4 {
        create_question(&app, &format!("q{i}"), None).await?;
    }

    let (status, body) = send(&app, get("/quiz/random?count=3")).await?;
    assert_eq!(status, StatusCode::OK);
    let quiz = body.as_array().expect("array");
    assert_eq!(quiz.len(), 3);
    let mut ids: Vec<_> = quiz.iter().map(|q| q["id"].as_i64()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert!(quiz.iter().all(|q| q["options"].as_array().map(Vec::len) == Some(2)));

    // default count (10) exceeds the pool
    let (_, body) = send(&app, get("/quiz/random")).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(4));

    let (status, _) = send(&app, get("/quiz/random?count=lots")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_stats_flow() -> anyhow::Result<()> {
    let app = build_app().await?;
    let qid = create_question(&app, "Tracked?", None).await?;

    let (_, body) = send(&app, get("/stats")).await?;
    let stats = body.as_array().expect("array");
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0]["correct_attempts"], 0);
    assert_eq!(stats[0]["incorrect_attempts"], 0);
    assert_eq!(stats[0]["success_rate"].as_f64(), Some(0.0));

    for is_correct in [true, true, true, false] {
        let (status, body) = send(&app, post("/stats", json!({"question_id": qid, "is_correct": is_correct}))).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Stats updated successfully");
    }

    let (_, body) = send(&app, get("/stats")).await?;
    let s = &body[0];
    assert_eq!(s["question_id"], qid);
    assert_eq!(s["question_text"], "Tracked?");
    assert_eq!(s["correct_attempts"], 3);
    assert_eq!(s["incorrect_attempts"], 1);
    assert_eq!(s["success_rate"].as_f64(), Some(75.0));
    assert!(s["last_attempt_date"].is_string());
    assert!(s["topic_name"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_stats_unknown_question() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, post("/stats", json!({"question_id": 404, "is_correct": true}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_search() -> anyhow::Result<()> {
    let app = build_app().await?;
    create_question(&app, "Who wrote Hamlet?", None).await?;
    create_question(&app, "Boiling point of water?", None).await?;

    let (status, body) = send(&app, get("/search?q=Hamlet")).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["text"], "Who wrote Hamlet?");
    assert_eq!(body["results"][0]["options"].as_array().map(Vec::len), Some(2));

    let (_, body) = send(&app, get("/search?q=zzz")).await?;
    assert_eq!(body["count"], 0);
    assert_eq!(body["results"], json!([]));

    let (status, body) = send(&app, get("/search?q=")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Search query is required");

    let (status, _) = send(&app, get("/search")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_metrics_exposed() -> anyhow::Result<()> {
    let app = build_app().await?;
    send(&app, post("/topics", json!({"name": "Metered"}))).await?;

    let resp = app.clone().oneshot(get("/metrics")).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let text = String::from_utf8(bytes.to_vec())?;
    assert!(text.contains("quiz_store_operations_total"));
    Ok(())
}

#[tokio::test]
async fn test_openapi_document() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = send(&app, get("/api-docs/openapi.json")).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/quiz/random"].is_object());
    Ok(())
}
