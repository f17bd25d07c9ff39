mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn created_user_has_no_favorites() {
    let app = test_app().await;
    let (status, body) = post(&app, "/users", user_body("luke")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user_name"], "luke");
    assert_eq!(body["email"], "luke@rebellion.org");
    assert_eq!(body["favorites"], json!([]));

    let id = body["id"].as_i64().unwrap();
    let (status, read) = get(&app, &format!("/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(read, body);
}

#[tokio::test]
async fn users_are_listed_with_their_favorites() {
    let app = test_app().await;
    let luke = create(&app, "/users", user_body("luke")).await;
    let leia = create(&app, "/users", user_body("leia")).await;
    let planet = create(&app, "/planets", planet_body("Tatooine")).await;
    let fav = create(&app, "/favorites/planets", json!({ "planet_id": planet, "user_id": luke })).await;

    let (status, users) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], luke);
    assert_eq!(users[0]["favorites"][0]["id"], fav);
    assert_eq!(users[0]["favorites"][0]["planet_id"], planet);
    assert_eq!(users[1]["id"], leia);
    assert_eq!(users[1]["favorites"], json!([]));

    let (status, favorites) = get(&app, &format!("/users/{}/favorites", luke)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(favorites, users[0]["favorites"]);
}

#[tokio::test]
async fn favorites_of_unknown_user_is_not_found() {
    let app = test_app().await;
    let (status, body) = get(&app, "/users/77/favorites").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "not found: user 77");
}

#[tokio::test]
async fn deleting_user_removes_their_favorites() {
    let app = test_app().await;
    let user = create(&app, "/users", user_body("wedge")).await;
    let vehicle = create(&app, "/vehicles", vehicle_body("X-34 landspeeder")).await;
    create(&app, "/favorites/vehicles", json!({ "vehicle_id": vehicle, "user_id": user })).await;

    let (status, body) = delete(&app, &format!("/users/{}", user)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["favorites"].as_array().unwrap().len(), 1);

    let (status, _) = get(&app, &format!("/users/{}", user)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, all) = get(&app, "/favorites/vehicles").await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn user_name_longer_than_fifty_is_rejected() {
    let app = test_app().await;
    let (status, _) = post(&app, "/users", user_body(&"r".repeat(51))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
