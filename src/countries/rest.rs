//! REST Countries source.
//!
//! Two endpoints are used:
//! - `GET {base}/all?fields=...` for the complete dataset
//! - `GET {base}/name/{query}` for name search (404 means "no matches")

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{StatusCode, Url};

use crate::countries::{Country, CountrySource, SourceError};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from `/all`. The endpoint rejects unfiltered requests.
pub const ALL_FIELDS: &[&str] = &[
    "name",
    "capital",
    "population",
    "flags",
    "cca2",
    "cca3",
    "region",
    "subregion",
    "area",
    "languages",
];

pub struct RestCountriesSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestCountriesSource {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self, SourceError> {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn all_url(&self) -> Result<Url, SourceError> {
        let mut url = self.endpoint(&["all"])?;
        url.query_pairs_mut()
            .append_pair("fields", &ALL_FIELDS.join(","));
        Ok(url)
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| SourceError::Network(format!("invalid base URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::Network(format!("base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_countries(&self, url: Url) -> Result<Vec<Country>, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("REST Countries response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SourceError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        serde_json::from_str::<Vec<Country>>(&body).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CountrySource for RestCountriesSource {
    fn name(&self) -> &str {
        "restcountries"
    }

    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        let url = self.all_url()?;
        info!("Fetching all countries: {}", url);

        let countries = self.get_countries(url).await.inspect_err(|e| {
            warn!("Fetching all countries failed: {}", e);
        })?;
        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Country>, SourceError> {
        let url = self.endpoint(&["name", query])?;
        info!("Searching countries: {}", url);

        match self.get_countries(url).await {
            Ok(countries) => {
                debug!("Search '{}' matched {} countries", query, countries.len());
                Ok(countries)
            }
            Err(SourceError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                debug!("Search '{}' matched nothing (404)", query);
                Ok(Vec::new())
            }
            Err(e) => {
                warn!("Searching countries for '{}' failed: {}", query, e);
                Err(e)
            }
        }
    }
}
