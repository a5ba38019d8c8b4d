use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(String),
}

/// Map a non-success response to a `Transport` error carrying the
/// server's `message` field when present, else the given localized
/// fallback. Never retries.
pub async fn error_from_response(
    resp: reqwest::Response,
    fallback: &str,
) -> ClientError {
    let message = match resp.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    };
    ClientError::Transport(message)
}
