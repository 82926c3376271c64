// Integration tests: the client core against an in-process stub backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use geekedin_client::api::ApiClient;
use geekedin_client::config::ApiConfig;
use geekedin_client::models::{Connection, Event, NewEvent};
use geekedin_client::store::{ConnectionGraph, EventBoard, MutationStatus};
use geekedin_client::ClientError;

#[derive(Debug, Default)]
struct Stub {
    events: Vec<Value>,
    recommendations: Vec<Value>,
    friends: Vec<Value>,
    fail_add_event: bool,
    fail_add_friend: bool,
}

#[derive(Clone, Default)]
struct StubState {
    inner: Arc<Mutex<Stub>>,
}

fn candidate(name: &str) -> Value {
    json!({
        "name": name,
        "description": format!("{} does things with computers", name),
        "interests": ["AI"],
        "skills": ["Python"],
    })
}

async fn get_event_recommendations(State(state): State<StubState>) -> Json<Value> {
    let stub = state.inner.lock().unwrap();
    Json(json!({ "recommendations": stub.events }))
}

async fn get_friend_recommendations(
    State(state): State<StubState>,
    Query(_params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let stub = state.inner.lock().unwrap();
    Json(json!({ "recommendations": stub.recommendations }))
}

async fn get_friends(
    State(state): State<StubState>,
    Query(_params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let stub = state.inner.lock().unwrap();
    Json(json!({ "friends": stub.friends }))
}

async fn add_events(State(state): State<StubState>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut stub = state.inner.lock().unwrap();
    if stub.fail_add_event {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    let event = json!({
        "id": body["eventid"],
        "title": body["event_name"],
        "description": body["event_description"],
        "type": body["category"],
        "location": body["venue_location"],
        "interests": [],
    });
    stub.events.push(event);
    StatusCode::OK
}

async fn add_friend(State(state): State<StubState>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut stub = state.inner.lock().unwrap();
    if stub.fail_add_friend {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    let name = body["username2"].as_str().unwrap_or_default().to_string();
    if let Some(index) = stub
        .recommendations
        .iter()
        .position(|c| c["name"] == name.as_str())
    {
        let moved = stub.recommendations.remove(index);
        stub.friends.push(moved);
    }
    StatusCode::OK
}

async fn remove_friend(
    State(state): State<StubState>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut stub = state.inner.lock().unwrap();
    let name = body["username2"].as_str().unwrap_or_default().to_string();
    if let Some(index) = stub.friends.iter().position(|c| c["name"] == name.as_str()) {
        let moved = stub.friends.remove(index);
        stub.recommendations.push(moved);
    }
    StatusCode::OK
}

async fn spawn_stub(state: StubState) -> String {
    let app = Router::new()
        .route("/getEventRecommendations", get(get_event_recommendations))
        .route("/getFriendRecommendations", get(get_friend_recommendations))
        .route("/getFriends", get(get_friends))
        .route("/addEvents", post(add_events))
        .route("/addFriend", post(add_friend))
        .route("/removeFriend", post(remove_friend))
        .route("/empty", get(|| async { Json(json!({})) }))
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client_for(state: StubState) -> ApiClient {
    let base_url = spawn_stub(state).await;
    ApiClient::new(&ApiConfig {
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_collection_skips_malformed_entities() {
    let state = StubState::default();
    state.inner.lock().unwrap().events = vec![
        json!({ "title": "AI Hackathon", "startDate": "2023-06-15" }),
        json!({ "title": "Bad Dates", "startDate": "not-a-date" }),
        json!({ "title": "React Workshop" }),
    ];
    let api = client_for(state).await;

    let events: Vec<Event> = api.event_recommendations().await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "AI Hackathon");
    assert_eq!(events[1].title, "React Workshop");
}

#[tokio::test]
async fn test_missing_response_key_defaults_to_empty() {
    let api = client_for(StubState::default()).await;
    let events: Vec<Event> = api.fetch_collection("/empty", "recommendations").await;
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_server_error_collapses_to_empty_collection() {
    let api = client_for(StubState::default()).await;

    let result: Result<Vec<Event>, _> = api.try_fetch_collection("/broken", "events").await;
    assert!(matches!(
        result,
        Err(ClientError::UnexpectedStatus { status: 500, .. })
    ));

    let events: Vec<Event> = api.fetch_collection("/broken", "events").await;
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_transport_failure_collapses_to_empty_collection() {
    // Nothing listens here.
    let api = ApiClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
    })
    .unwrap();
    let connections: Vec<Connection> = api.fetch_collection("/getFriends", "friends").await;
    assert!(connections.is_empty());
}

#[tokio::test]
async fn test_add_friend_reconciles_both_collections() {
    let state = StubState::default();
    {
        let mut stub = state.inner.lock().unwrap();
        stub.recommendations = vec![candidate("Grace"), candidate("Henry")];
        stub.friends = vec![candidate("Liam")];
    }
    let api = client_for(state).await;

    let mut graph = ConnectionGraph::new(api);
    graph.load("currentUser").await;
    assert_eq!(graph.recommendations().len(), 2);
    assert_eq!(graph.friends().len(), 1);

    let status = graph.add_friend("currentUser", "Grace").await.unwrap();
    assert_eq!(status, MutationStatus::Confirmed);

    // Server truth after reconciliation: Grace moved across.
    assert!(graph.recommendations().iter().all(|c| c.name != "Grace"));
    assert!(graph.friends().iter().any(|c| c.name == "Grace"));
    assert_eq!(graph.recommendations().len(), 1);
    assert_eq!(graph.friends().len(), 2);
}

#[tokio::test]
async fn test_add_friend_failure_reverts_optimistic_move() {
    let state = StubState::default();
    {
        let mut stub = state.inner.lock().unwrap();
        stub.recommendations = vec![candidate("Grace"), candidate("Henry")];
        stub.fail_add_friend = true;
    }
    let api = client_for(state).await;

    let mut graph = ConnectionGraph::new(api);
    graph.load("currentUser").await;

    let status = graph.add_friend("currentUser", "Grace").await.unwrap();
    assert_eq!(status, MutationStatus::Failed);

    // The candidate is back where it was and never joined friends.
    assert_eq!(graph.recommendations().len(), 2);
    assert_eq!(graph.recommendations()[0].name, "Grace");
    assert!(graph.friends().is_empty());
}

#[tokio::test]
async fn test_add_friend_unknown_candidate_is_rejected() {
    let api = client_for(StubState::default()).await;
    let mut graph = ConnectionGraph::new(api);
    graph.load("currentUser").await;

    assert!(matches!(
        graph.add_friend("currentUser", "Nobody").await,
        Err(ClientError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_remove_friend_reconciles_with_server() {
    let state = StubState::default();
    {
        let mut stub = state.inner.lock().unwrap();
        stub.friends = vec![candidate("Liam"), candidate("Mia")];
    }
    let api = client_for(state).await;

    let mut graph = ConnectionGraph::new(api);
    graph.load("currentUser").await;

    let status = graph.remove_friend("currentUser", "Liam").await.unwrap();
    assert_eq!(status, MutationStatus::Confirmed);
    assert_eq!(graph.friends().len(), 1);
    assert_eq!(graph.friends()[0].name, "Mia");
    // The stub returns removed connections to the candidate pool.
    assert!(graph.recommendations().iter().any(|c| c.name == "Liam"));
}

#[tokio::test]
async fn test_add_event_reconciles_against_server_truth() {
    let state = StubState::default();
    state.inner.lock().unwrap().events =
        vec![json!({ "title": "AI Hackathon", "type": "Hackathon" })];
    let api = client_for(state).await;

    let mut board = EventBoard::new(api);
    board.load().await;
    assert_eq!(board.events().len(), 1);

    let draft = NewEvent {
        title: "Rust Meetup".to_string(),
        description: "Monthly".to_string(),
        ..Default::default()
    };
    let status = board.add_event(draft).await.unwrap();
    assert_eq!(status, MutationStatus::Confirmed);

    assert_eq!(board.events().len(), 2);
    assert!(board.events().iter().any(|e| e.title == "Rust Meetup"));
}

#[tokio::test]
async fn test_add_event_failure_reverts_optimistic_append() {
    let state = StubState::default();
    {
        let mut stub = state.inner.lock().unwrap();
        stub.events = vec![json!({ "title": "AI Hackathon" })];
        stub.fail_add_event = true;
    }
    let api = client_for(state).await;

    let mut board = EventBoard::new(api);
    board.load().await;

    let draft = NewEvent {
        title: "Rust Meetup".to_string(),
        ..Default::default()
    };
    let status = board.add_event(draft).await.unwrap();
    assert_eq!(status, MutationStatus::Failed);
    assert_eq!(board.events().len(), 1);
    assert_eq!(board.events()[0].title, "AI Hackathon");
}
