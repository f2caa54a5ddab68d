use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::{api::ErrorDto, user::UserDto},
    server::controller::user::{get_user, get_users},
};

use super::*;

/// Expect users to be listed in insertion order without their passwords
#[tokio::test]
async fn lists_users_without_passwords() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("luke@rebels.org")
        .with_user("leia@alderaan.gov")
        .build()
        .await?;

    let resp = get_users(State(test.state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: serde_json::Value = body_json(resp).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "luke@rebels.org");
    assert_eq!(users[1]["email"], "leia@alderaan.gov");
    assert!(users[0].get("password").is_none());

    Ok(())
}

#[tokio::test]
async fn gets_user_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("han@falcon.net").build().await?;

    let resp = get_user(State(test.state()), Ok(Path(1)))
        .await
        .unwrap()
        .into_response();

    let user: UserDto = body_json(resp).await;
    assert_eq!(user.email, "han@falcon.net");
    assert!(user.is_active);

    Ok(())
}

#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_user(State(test.state()), Ok(Path(99))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User not found");

    Ok(())
}
