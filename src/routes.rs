use rocket::figment::Figment;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{get, routes, Build, Request, Rocket, State};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::actions::search_artist::SearchError;
use crate::authorize::AuthorizeError;
use crate::catalog::Catalog;
use crate::models::artist::Artist;

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No artist name given.")]
    MissingArtist,
    #[error("No artist matched the query.")]
    NotFound,
    #[error("Authorization failed: {0}")]
    Authorize(#[from] AuthorizeError),
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::MissingArtist => Status::BadRequest,
            ApiError::NotFound => Status::NotFound,
            ApiError::Authorize(_) | ApiError::Search(_) => Status::InternalServerError,
        }
    }

    /// What the browser gets to see. Upstream details only go to the log.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingArtist => "Artist name is required",
            ApiError::NotFound => "Artist not found",
            ApiError::Authorize(AuthorizeError::MissingCredentials) | ApiError::Search(_) => {
                "An error occurred while fetching data from Spotify"
            }
            ApiError::Authorize(_) => "Failed to authenticate with Spotify API",
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!(error = %self, "artist search failed");
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).respond_to(request)
    }
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub artist: Artist,
}

pub async fn lookup_artist(catalog: &dyn Catalog, artist_name: &str) -> Result<Artist, ApiError> {
    let access = catalog.access_token().await?;
    catalog
        .find_artist(&access, artist_name)
        .await?
        .ok_or(ApiError::NotFound)
}

#[get("/")]
pub fn index() -> RawHtml<&'static str> {
    RawHtml(INDEX_HTML)
}

#[get("/search?<artist>")]
pub async fn search(
    catalog: &State<Box<dyn Catalog>>,
    artist: Option<&str>,
) -> Result<Json<ArtistResponse>, ApiError> {
    let artist_name = match artist {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ApiError::MissingArtist),
    };
    info!(artist = artist_name, "searching for artist");
    let artist = lookup_artist(catalog.inner().as_ref(), artist_name).await?;
    info!(id = %artist.id, name = %artist.name, "found artist");
    Ok(Json(ArtistResponse { artist }))
}

pub fn build_rocket(figment: Figment, catalog: Box<dyn Catalog>) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(catalog)
        .mount("/", routes![index, search])
}
