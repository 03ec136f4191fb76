//! In-process fake PokeAPI for shell tests.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// (id, name, weight, types, base_experience)
const FAKE_DEX: &[(u64, &str, u64, &[&str], Option<u64>)] = &[
    (1, "bulbasaur", 50, &["grass"], Some(64)),
    (2, "charmander", 150, &["fire"], None),
    (3, "squirtle", 90, &["water"], Some(62)),
    (4, "missingno", 0, &["bird", "normal"], Some(0)),
    (5, "ditto", 40, &["normal"], Some(101)),
];

/// Id whose detail endpoint answers 500
pub const BROKEN_ID: u64 = 5;
/// Id whose detail record lacks `weight`
pub const MALFORMED_ID: u64 = 4;

pub fn raw_record(
    id: u64,
    name: &str,
    weight: u64,
    types: &[&str],
    base_experience: Option<u64>,
) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(idx, t)| {
            json!({
                "slot": idx + 1,
                "type": { "name": t, "url": format!("https://pokeapi.co/api/v2/type/{t}/") },
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "order": id,
        "height": 10,
        "weight": weight,
        "base_experience": base_experience,
        "types": types,
        "abilities": [],
    })
}

#[derive(Deserialize)]
struct ListQuery {
    limit: Option<usize>,
}

async fn list_handler(
    State(base): State<Arc<String>>,
    Query(query): Query<ListQuery>,
) -> Json<Value> {
    let limit = query.limit.unwrap_or(20);
    let results: Vec<Value> = FAKE_DEX
        .iter()
        .take(limit)
        .map(|(id, name, ..)| json!({ "name": name, "url": format!("{base}/pokemon/{id}/") }))
        .collect();

    Json(json!({
        "count": FAKE_DEX.len(),
        "next": null,
        "previous": null,
        "results": results,
    }))
}

async fn detail_handler(Path(id): Path<u64>) -> Response {
    if id == BROKEN_ID {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }

    match FAKE_DEX.iter().find(|(dex_id, ..)| *dex_id == id) {
        Some((id, name, weight, types, base_experience)) => {
            let mut record = raw_record(*id, name, *weight, types, *base_experience);
            if *id == MALFORMED_ID {
                if let Some(fields) = record.as_object_mut() {
                    fields.remove("weight");
                }
            }
            Json(record).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Serve the fake dex and return its base URL
pub async fn spawn_fake_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let router = Router::new()
        .route("/pokemon", get(list_handler))
        .route("/pokemon/{id}/", get(detail_handler))
        .with_state(Arc::new(base.clone()));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    base
}

/// A base URL nothing is listening on
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}
