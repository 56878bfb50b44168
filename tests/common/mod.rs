//! In-process stub of the document store.
//!
//! Implements the four endpoints the crate talks to (`PUT /{index}`,
//! `DELETE /{index}`, `POST /{index}/_doc`, `POST /{index}/_search`) over
//! in-memory state. Search applies `dashmatch::analysis`, the same
//! normalize-then-prefix contract the real store's analyzer is configured
//! with, linearly over stored documents, and renders the store's
//! `hits.hits[]._source` response shape.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use dashmatch::analysis;
use dashmatch::{IndexBody, StoreClient, UserRecord};

/// Fixed delay callers apply between a batch of inserts and the first
/// query, matching the visibility accommodation used against a real store.
/// The stub is synchronous, so this is exercised but not load-bearing.
#[allow(dead_code)]
pub const WRITE_VISIBILITY_DELAY: Duration = Duration::from_millis(1000);

type Indexes = Arc<Mutex<HashMap<String, Vec<Value>>>>;

/// Spawn the stub store on an ephemeral port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_store() -> String {
    dashmatch::init_tracing();

    let state: Indexes = Arc::new(Mutex::new(HashMap::new()));

    let app = Router::new()
        .route("/:index", put(create_index).delete(delete_index))
        .route("/:index/_doc", post(insert_document))
        .route("/:index/_search", post(search))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    format!("http://{}", addr)
}

/// Index name unique to one test, so parallel tests never share state.
#[allow(dead_code)]
pub fn unique_index(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

/// Create `index` with the user-id analysis settings, insert one document
/// per id, and wait out the visibility delay.
#[allow(dead_code)]
pub async fn seed_users(store: &StoreClient, index: &str, user_ids: &[&str]) {
    store
        .create_index(index, &IndexBody::user_ids())
        .await
        .unwrap();

    for id in user_ids {
        store
            .insert_document(index, &UserRecord::new(*id))
            .await
            .unwrap();
    }

    tokio::time::sleep(WRITE_VISIBILITY_DELAY).await;
}

async fn create_index(
    State(state): State<Indexes>,
    Path(index): Path<String>,
    Json(_body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut indexes = state.lock().unwrap();
    if indexes.contains_key(&index) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": {"type": "resource_already_exists_exception", "index": index},
                "status": 400,
            })),
        );
    }

    indexes.insert(index.clone(), Vec::new());
    (
        StatusCode::OK,
        Json(json!({"acknowledged": true, "index": index})),
    )
}

async fn delete_index(
    State(state): State<Indexes>,
    Path(index): Path<String>,
) -> (StatusCode, Json<Value>) {
    let mut indexes = state.lock().unwrap();
    if indexes.remove(&index).is_none() {
        return index_not_found(&index);
    }
    (StatusCode::OK, Json(json!({"acknowledged": true})))
}

async fn insert_document(
    State(state): State<Indexes>,
    Path(index): Path<String>,
    Json(document): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut indexes = state.lock().unwrap();
    let Some(docs) = indexes.get_mut(&index) else {
        return index_not_found(&index);
    };

    docs.push(document);
    (
        StatusCode::CREATED,
        Json(json!({"_index": index, "result": "created"})),
    )
}

async fn search(
    State(state): State<Indexes>,
    Path(index): Path<String>,
    Json(request): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let indexes = state.lock().unwrap();
    let Some(docs) = indexes.get(&index) else {
        return index_not_found(&index);
    };

    let multi_match = &request["query"]["bool"]["must"][0]["multi_match"];
    let Some(phrase) = multi_match["query"].as_str() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"type": "parsing_exception"}, "status": 400})),
        );
    };
    let field = multi_match["fields"][0].as_str().unwrap_or("user_id");

    let hits: Vec<Value> = docs
        .iter()
        .enumerate()
        .filter(|(_, doc)| {
            doc[field]
                .as_str()
                .is_some_and(|value| analysis::phrase_prefix_matches(phrase, value))
        })
        .map(|(i, doc)| {
            json!({
                "_index": index,
                "_id": (i + 1).to_string(),
                "_score": 1.0,
                "_source": doc,
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "took": 1,
            "timed_out": false,
            "hits": {
                "total": {"value": hits.len(), "relation": "eq"},
                "hits": hits,
            },
        })),
    )
}

fn index_not_found(index: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {"type": "index_not_found_exception", "index": index},
            "status": 404,
        })),
    )
}
