//! HTTP client wrapper - GETs against the character API

use std::future::Future;
use std::time::Duration;

use futures_util::future::try_join_all;
use serde::de::DeserializeOwned;

use crate::error::{FetchError, Result};
use crate::models::{Film, ListingPage, Place};

/// URL of one page of the people listing
pub fn listing_url(api_base: &str, page: u32) -> String {
    format!("{}/people/?page={}", api_base.trim_end_matches('/'), page)
}

/// GET a URL and decode its JSON body
pub async fn fetch_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}

pub async fn fetch_listing(client: &reqwest::Client, api_base: &str, page: u32) -> Result<ListingPage> {
    fetch_json(client, &listing_url(api_base, page)).await
}

pub async fn fetch_place(client: &reqwest::Client, url: &str) -> Result<Place> {
    fetch_json(client, url).await
}

/// Resolve every film URL concurrently; any failure rejects the whole batch
pub async fn fetch_films(client: &reqwest::Client, urls: Vec<String>) -> Result<Vec<Film>> {
    join_ordered(urls, |url| async move { fetch_json::<Film>(client, &url).await }).await
}

/// Run one fetch per URL concurrently and collect results in input order.
///
/// All-or-nothing: the first error wins and the successful results are
/// dropped.
pub async fn join_ordered<T, E, F, Fut>(urls: Vec<String>, fetch: F) -> std::result::Result<Vec<T>, E>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
{
    try_join_all(urls.into_iter().map(fetch)).await
}

/// Client settings shared by every fetch: user agent and optional timeout
fn client_builder(timeout: Option<Duration>) -> reqwest::ClientBuilder {
    let builder = reqwest::Client::builder()
        .user_agent(concat!("holocron-tui/", env!("CARGO_PKG_VERSION")));
    match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    }
}

/// Create an HTTP client with default configuration
pub fn create_client(timeout: Option<Duration>) -> reqwest::Client {
    client_builder(timeout).build().unwrap_or_else(|e| {
        tracing::warn!(
            error = %e,
            ?timeout,
            "HTTP client build failed, falling back to defaults without timeout or user agent"
        );
        reqwest::Client::new()
    })
}
