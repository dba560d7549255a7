//! REST Command Wrappers
//!
//! Frontend bindings to the roadmap server, organized by domain.

mod feature;

use serde::de::DeserializeOwned;
use serde::Deserialize;

pub use feature::*;

/// Error body returned by the server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// API root: same origin as the page
fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    format!("{}/api{}", origin, path)
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Turn a non-2xx response into the server's message
async fn check(response: reqwest::Response) -> Result<reqwest::Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| status.to_string());
    Err(message)
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    check(response).await?.json::<T>().await.map_err(|e| e.to_string())
}
