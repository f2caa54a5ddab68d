use axum::response::Response;
use serde::de::DeserializeOwned;

/// Reads a response body and deserializes it as JSON.
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
