//! Site content loading.
//!
//! The YAML document is tried first, then its JSON twin; if neither loads,
//! the terminal still starts on fallback content.

use gloo_net::http::Request;
use pandash_core::SiteContent;
use thiserror::Error;

use crate::config::{CONTENT_JSON_URL, CONTENT_YAML_URL};

/// Content fetch failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Http(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Fetch text from a URL.
async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Http(resp.status()));
    }

    resp.text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}

async fn fetch_yaml(url: &str) -> Result<SiteContent, FetchError> {
    let text = fetch_text(url).await?;
    serde_yaml::from_str(&text).map_err(|e| FetchError::Parse(e.to_string()))
}

async fn fetch_json(url: &str) -> Result<SiteContent, FetchError> {
    let text = fetch_text(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Load site content, YAML first.
///
/// Returns the error of the last attempt when both sources fail.
pub async fn load_site_content() -> Result<SiteContent, FetchError> {
    match fetch_yaml(CONTENT_YAML_URL).await {
        Ok(content) => Ok(content),
        Err(e) => {
            log::warn!("{} unavailable ({}), trying JSON", CONTENT_YAML_URL, e);
            fetch_json(CONTENT_JSON_URL).await
        }
    }
}
