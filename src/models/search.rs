use serde::Deserialize;

use crate::models::artist::Artist;

#[derive(Debug, Deserialize)]
pub struct Paging<T> {
    pub total: u32,
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct ArtistSearchResponse {
    pub artists: Paging<Artist>,
}

impl ArtistSearchResponse {
    pub fn first_artist(self) -> Option<Artist> {
        self.artists.items.into_iter().next()
    }
}
