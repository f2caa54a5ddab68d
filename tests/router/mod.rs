//! Tests through the assembled application router.
//!
//! Requests go through routing, JSON extraction and the tower layers, which covers
//! body rejections that handler-level tests cannot construct.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use holocron::{model::api::ErrorDto, server::router::app};
use holocron_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::body_json;

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn creates_and_lists_character() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let body = r#"{"name":"Luke","birth_year":"19BBY","gender":"male","height":"172","skin_color":"fair","eye_color":"blue"}"#;

    let resp = app(test.state())
        .oneshot(json_request(Method::POST, "/character", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(test.state())
        .oneshot(get_request("/character"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let characters: serde_json::Value = body_json(resp).await;
    assert_eq!(characters[0]["id"], 1);
    assert_eq!(characters[0]["name"], "Luke");

    Ok(())
}

/// Expect a key sent as `null` to count as present and be stored as `null`
#[tokio::test]
async fn null_optional_field_is_accepted() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let body = r#"{"name":"Luke","birth_year":null,"gender":"male","height":"172","skin_color":"fair","eye_color":"blue"}"#;

    let resp = app(test.state())
        .oneshot(json_request(Method::POST, "/character", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(test.state())
        .oneshot(get_request("/character/1"))
        .await
        .unwrap();
    let character: serde_json::Value = body_json(resp).await;
    assert_eq!(character["name"], "Luke");
    assert!(character["birth_year"].is_null());

    Ok(())
}

#[tokio::test]
async fn absent_field_is_still_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let body = r#"{"name":"Luke","gender":"male","height":"172","skin_color":"fair","eye_color":"blue"}"#;

    let resp = app(test.state())
        .oneshot(json_request(Method::POST, "/character", body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Missing required field: birth_year");

    Ok(())
}

/// Expect text wider than its column to be a client error rather than a database failure
#[tokio::test]
async fn overlong_name_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let body = serde_json::json!({
        "name": "x".repeat(251),
        "climate": "arid",
        "population": "200000",
        "orbital_period": "304",
        "rotation_period": "23",
        "diameter": "10465",
    })
    .to_string();

    let resp = app(test.state())
        .oneshot(json_request(Method::POST, "/planet", &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Field name exceeds 250 characters");

    Ok(())
}

/// Expect a non-integer ID to produce a JSON error body
#[tokio::test]
async fn non_integer_id_is_json_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(test.state())
        .oneshot(get_request("/character/abc"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let body: ErrorDto = body_json(resp).await;
    assert!(body.error.starts_with("Invalid path parameter"));

    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let resp = app(test.state())
        .oneshot(json_request(Method::POST, "/planet", "{\"name\": "))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert!(!body.error.is_empty());

    Ok(())
}

/// Expect a string where a ship expects an integer to be rejected
#[tokio::test]
async fn wrong_field_type_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let body = r#"{"name":"X-wing","model":"T-65","manufacturer":"Incom","cost_in_credits":"lots","crew":1}"#;

    let resp = app(test.state())
        .oneshot(json_request(Method::POST, "/ship", body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn favorite_routes_use_path_ids() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("luke@rebels.org")
        .with_planet("Dagobah")
        .build()
        .await?;

    let resp = app(test.state())
        .oneshot(json_request(
            Method::POST,
            "/favorites/planet",
            r#"{"user_id":1,"planet_id":1}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(test.state())
        .oneshot(get_request("/user/1/favorites"))
        .await
        .unwrap();
    let favorites: serde_json::Value = body_json(resp).await;
    assert_eq!(favorites["planet"][0]["name"], "Dagobah");

    let resp = app(test.state())
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/favorites/planet/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup!()?;

    let resp = app(test.state())
        .oneshot(get_request("/docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    assert!(doc["paths"].get("/user/{id}/favorites").is_some());

    Ok(())
}
