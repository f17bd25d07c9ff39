#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use serde_json::{json, Value};
use starwars_api::{app, bootstrap, App};
use tower::ServiceExt;

/// Full application over a fresh in-memory SQLite database.
pub async fn test_app() -> App {
    test_app_with_limit(64 * 1024).await
}

pub async fn test_app_with_limit(body_limit: usize) -> App {
    let state = bootstrap("sqlite::memory:", 1).await.expect("bootstrap in-memory database");
    app(state, body_limit)
}

pub async fn send(app: &App, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");
    send_request(app, request).await
}

pub async fn send_request(app: &App, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, json)
}

pub async fn get(app: &App, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &App, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: &App, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// POST `body` to `uri`, assert 201, return the new id.
pub async fn create(app: &App, uri: &str, body: Value) -> i64 {
    let (status, created) = post(app, uri, body).await;
    assert_eq!(status, StatusCode::CREATED, "POST {} failed: {}", uri, created);
    created["id"].as_i64().expect("created record has an id")
}

pub fn planet_body(name: &str) -> Value {
    json!({
        "url": "https://swapi.dev/api/planets/1/",
        "diameter": 10465,
        "rotation_period": 23,
        "orbital_period": 304,
        "name": name,
        "terrain": "desert",
        "population": 200000,
        "gravity": "1 standard",
        "climate": "arid"
    })
}

pub fn character_body(name: &str) -> Value {
    json!({
        "url": "https://swapi.dev/api/people/1/",
        "name": name,
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "height": 172,
        "mass": 77,
        "gender": "male"
    })
}

pub fn vehicle_body(name: &str) -> Value {
    json!({
        "url": "https://swapi.dev/api/vehicles/4/",
        "name": name,
        "vehicle_class": "wheeled",
        "manufacturer": "Corellia Mining Corporation",
        "model": "Digger Crawler",
        "crew": 46,
        "cost_in_credits": 150000,
        "length": 36.8,
        "passengers": 30,
        "max_atmosphering_speed": 30,
        "cargo_capacity": 50000,
        "consumables": "2 months"
    })
}

pub fn user_body(user_name: &str) -> Value {
    json!({ "user_name": user_name, "email": format!("{}@rebellion.org", user_name) })
}
