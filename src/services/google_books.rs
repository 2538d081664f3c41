use async_trait::async_trait;
use regex::Regex;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::models::volumes::VolumesResponse;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected upstream status: {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    Isbn,
    Intitle,
}

impl SearchScope {
    // Any run of 10 to 13 digits is treated as an ISBN. This is a
    // heuristic, not a checksum: "1111111111" classifies as an ISBN too.
    pub fn classify(query: &str) -> Self {
        let re = Regex::new(r"^\d{10,13}$").unwrap();
        if re.is_match(query) {
            SearchScope::Isbn
        } else {
            SearchScope::Intitle
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchScope::Isbn => "isbn",
            SearchScope::Intitle => "intitle",
        }
    }
}

#[async_trait]
pub trait BooksClient {
    async fn search(
        &self,
        scope: SearchScope,
        query: &str,
    ) -> Result<VolumesResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct GoogleBooksConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

pub struct GoogleBooksClient {
    http: reqwest::Client,
    config: GoogleBooksConfig,
}

impl GoogleBooksClient {
    pub fn new(config: GoogleBooksConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    fn search_term(scope: SearchScope, query: &str) -> String {
        format!("{}:{}", scope.as_str(), query)
    }

    // Request shape: ?q=<scope>:<query>&key=<credential>, with the key pair
    // omitted entirely when no credential is configured.
    fn query_pairs(&self, scope: SearchScope, query: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", Self::search_term(scope, query))];
        if !self.config.api_key.is_empty() {
            pairs.push(("key", self.config.api_key.clone()));
        }
        pairs
    }
}

#[async_trait]
impl BooksClient for GoogleBooksClient {
    async fn search(
        &self,
        scope: SearchScope,
        query: &str,
    ) -> Result<VolumesResponse, ClientError> {
        debug!("Searching volumes with scope {}", scope.as_str());

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&self.query_pairs(scope, query))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        Ok(response.json::<VolumesResponse>().await?)
    }
}
