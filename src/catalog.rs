use async_trait::async_trait;
use reqwest::Client;

use crate::actions::search_artist::{search_artist, SearchError};
use crate::authorize::{request_access_token, Access, AuthorizeError, Credentials};
use crate::endpoints::Endpoints;
use crate::models::artist::Artist;

/// The two upstream calls a search is made of.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn access_token(&self) -> Result<Access, AuthorizeError>;

    async fn find_artist(
        &self,
        access: &Access,
        artist_name: &str,
    ) -> Result<Option<Artist>, SearchError>;
}

pub struct SpotifyCatalog {
    client: Client,
    endpoints: Endpoints,
    credentials: Option<Credentials>,
}

impl SpotifyCatalog {
    pub fn new(endpoints: Endpoints, credentials: Option<Credentials>) -> Self {
        SpotifyCatalog {
            client: Client::new(),
            endpoints,
            credentials,
        }
    }
}

#[async_trait]
impl Catalog for SpotifyCatalog {
    async fn access_token(&self) -> Result<Access, AuthorizeError> {
        request_access_token(&self.client, &self.endpoints, self.credentials.as_ref()).await
    }

    async fn find_artist(
        &self,
        access: &Access,
        artist_name: &str,
    ) -> Result<Option<Artist>, SearchError> {
        search_artist(&self.client, &self.endpoints, access, artist_name).await
    }
}
