pub const ACCOUNTS_BASE_URL: &str = "https://accounts.spotify.com";
pub const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Base URLs of the two Spotify hosts we talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    accounts: String,
    api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::new(ACCOUNTS_BASE_URL, API_BASE_URL)
    }
}

impl Endpoints {
    pub fn new(accounts: &str, api: &str) -> Self {
        Endpoints {
            accounts: accounts.trim_end_matches('/').to_string(),
            api: api.trim_end_matches('/').to_string(),
        }
    }

    pub fn authorization_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.accounts, path)
    }

    pub fn api_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api, path)
    }

    pub fn token_url(&self) -> String {
        self.authorization_endpoint("/api/token")
    }

    pub fn search_url(&self) -> String {
        self.api_endpoint("/search")
    }
}
