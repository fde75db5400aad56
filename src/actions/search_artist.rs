use reqwest::{Client, Request, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::authorize::Access;
use crate::endpoints::Endpoints;
use crate::models::artist::Artist;
use crate::models::search::ArtistSearchResponse;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search rejected with status {0}.")]
    Rejected(StatusCode),
    #[error("Request error: {0}")]
    RequestError(reqwest::Error),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::RequestError(err)
    }
}

pub fn artist_search_request(
    client: &Client,
    endpoints: &Endpoints,
    access: &Access,
    artist_name: &str,
) -> Result<Request, SearchError> {
    let request_builder = client.get(endpoints.search_url());
    let request_builder = access.authorize(request_builder);
    Ok(request_builder
        .query(&[("q", artist_name), ("type", "artist"), ("limit", "1")])
        .build()?)
}

/// Searches for `artist_name` and returns the best match, if any.
pub async fn search_artist(
    client: &Client,
    endpoints: &Endpoints,
    access: &Access,
    artist_name: &str,
) -> Result<Option<Artist>, SearchError> {
    let request = artist_search_request(client, endpoints, access, artist_name)?;
    let resp = client.execute(request).await?;
    if !resp.status().is_success() {
        return Err(SearchError::Rejected(resp.status()));
    }
    let resp = resp.json::<ArtistSearchResponse>().await?;
    debug!(total = resp.artists.total, "artist search returned");
    Ok(resp.first_artist())
}
