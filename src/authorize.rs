use reqwest::{Client, Request, RequestBuilder, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::endpoints::Endpoints;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Credentials {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

/// App-only token from the client credentials flow. It carries no user scope
/// and no refresh token.
#[derive(Debug, Deserialize)]
pub struct Access {
    access_token: String,
    token_type: String,
    expires_in: i32,
}

impl Access {
    pub fn authorize(&self, request_builder: RequestBuilder) -> RequestBuilder {
        request_builder.bearer_auth(self.access_token.as_str())
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn expires_in(&self) -> i32 {
        self.expires_in
    }
}

#[derive(Debug, Error)]
pub enum AuthorizeError {
    #[error("Spotify credentials are not configured.")]
    MissingCredentials,
    #[error("Token request rejected with status {0}.")]
    Rejected(StatusCode),
    #[error("Request error: {0}")]
    RequestError(reqwest::Error),
}

impl From<reqwest::Error> for AuthorizeError {
    fn from(err: reqwest::Error) -> Self {
        AuthorizeError::RequestError(err)
    }
}

pub fn access_token_request(
    client: &Client,
    endpoints: &Endpoints,
    credentials: &Credentials,
) -> Result<Request, AuthorizeError> {
    Ok(client
        .post(endpoints.token_url())
        .form(&[("grant_type", "client_credentials")])
        .basic_auth(
            credentials.client_id.as_str(),
            Some(credentials.client_secret.as_str()),
        )
        .build()?)
}

pub async fn request_access_token(
    client: &Client,
    endpoints: &Endpoints,
    credentials: Option<&Credentials>,
) -> Result<Access, AuthorizeError> {
    let credentials = credentials.ok_or(AuthorizeError::MissingCredentials)?;
    let request = access_token_request(client, endpoints, credentials)?;
    let resp = client.execute(request).await?;
    if !resp.status().is_success() {
        return Err(AuthorizeError::Rejected(resp.status()));
    }
    let access = resp.json::<Access>().await?;
    debug!(
        token_type = access.token_type(),
        expires_in = access.expires_in(),
        "received access token"
    );
    Ok(access)
}
