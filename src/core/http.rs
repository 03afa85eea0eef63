use crate::utils::error::{IssError, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// The only status code the upstream services document as success.
pub const SUCCESS_STATUS: StatusCode = StatusCode::OK;

/// Sends one GET to `url`, requires `expected` back, parses the body as JSON
/// and hands it to `extract`. An `Err(reason)` from the extractor becomes a
/// `ParseError` for this URL.
pub async fn get_json<T, F>(client: &Client, url: &str, expected: StatusCode, extract: F) -> Result<T>
where
    F: FnOnce(Value) -> std::result::Result<T, String>,
{
    tracing::debug!("GET {}", url);
    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|source| IssError::TransportError {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    tracing::debug!("{} responded with {}", url, status);

    let body = response
        .text()
        .await
        .map_err(|source| IssError::TransportError {
            url: url.to_string(),
            source,
        })?;

    if status != expected {
        tracing::warn!("Status Code {} from {}", status.as_u16(), url);
        return Err(IssError::UpstreamError {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let json: Value = serde_json::from_str(&body).map_err(|e| IssError::ParseError {
        url: url.to_string(),
        reason: format!("invalid JSON: {}", e),
    })?;

    extract(json).map_err(|reason| IssError::ParseError {
        url: url.to_string(),
        reason,
    })
}

/// Reads `field` from a JSON object as a string.
pub fn string_field(json: &Value, field: &str) -> std::result::Result<String, String> {
    match json.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!("field `{}` is not a string: {}", field, other)),
        None => Err(format!("missing field `{}`", field)),
    }
}

/// Reads `field` as text, accepting either a JSON string verbatim or a JSON
/// number in its JSON rendering.
pub fn textual_field(json: &Value, field: &str) -> std::result::Result<String, String> {
    match json.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(other) => Err(format!("field `{}` is not text or a number: {}", field, other)),
        None => Err(format!("missing field `{}`", field)),
    }
}
