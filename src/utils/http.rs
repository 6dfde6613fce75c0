use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, RequestBuilder};
use std::time::Duration;
use tracing::warn;
use url::Url;

use crate::config::Config;
use crate::error::{MenuError, Result};

/// Client with a cookie jar shared by every request made through it.
pub fn create_client(config: &Config) -> Result<Client> {
    let client = ClientBuilder::new()
        .user_agent(&config.user_agent)
        .cookie_store(true)
        .timeout(Duration::from_secs(config.request_timeout_seconds))
        .build()
        .map_err(|e| MenuError::network(&config.menu_url, e))?;

    Ok(client)
}

/// A response body kept as raw bytes; decoding is left to the caller.
#[derive(Debug)]
pub struct RawResponse {
    /// Final URL after redirects.
    pub url: Url,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Sends `request` and reads the whole body. Transport errors and non-2xx
/// statuses are both network errors.
pub async fn fetch_raw(request: RequestBuilder, url: &str) -> Result<RawResponse> {
    let response = request
        .send()
        .await
        .map_err(|e| MenuError::network(url, e))?;

    if !response.status().is_success() {
        warn!("HTTP error {}: {}", response.status(), url);
    }
    let response = response
        .error_for_status()
        .map_err(|e| MenuError::network(url, e))?;

    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response
        .bytes()
        .await
        .map_err(|e| MenuError::network(url, e))?
        .to_vec();

    Ok(RawResponse {
        url: final_url,
        content_type,
        body,
    })
}
