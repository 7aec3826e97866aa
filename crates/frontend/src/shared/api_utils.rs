//! HTTP helpers shared by the API clients
//!
//! Errors are flattened to `String` for display; aborted requests are kept
//! distinguishable so callers can drop them silently.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

/// Failure of a request made through [`get_json`]
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Cancelled through its `AbortSignal`
    Aborted,
    Failed(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Aborted => write!(f, "Request aborted"),
            FetchError::Failed(message) => write!(f, "{}", message),
        }
    }
}

fn is_abort(error: &gloo_net::Error) -> bool {
    matches!(error, gloo_net::Error::JsError(js) if js.name == "AbortError")
}

/// GET `url` and decode the JSON body
///
/// # Example
/// ```rust,ignore
/// let items: Vec<Item> = get_json(&config.api_url("items"), None).await?;
/// ```
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| {
            if is_abort(&e) {
                FetchError::Aborted
            } else {
                FetchError::Failed(format!("Failed to send request: {}", e))
            }
        })?;

    if !response.ok() {
        return Err(FetchError::Failed(format!(
            "GET {} failed: HTTP {}",
            url,
            response.status()
        )));
    }

    response.json::<T>().await.map_err(|e| {
        if is_abort(&e) {
            FetchError::Aborted
        } else {
            FetchError::Failed(format!("Failed to parse response: {}", e))
        }
    })
}
