use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::model::{RecipeHit, SearchCriteria, SearchResponse};
use crate::query::QueryParams;

/// Source of recipe hits for a set of criteria
pub trait RecipeSearch {
    /// The exact URL that [`RecipeSearch::search`] will request
    fn request_url(&self, criteria: &SearchCriteria) -> Result<Url, SearchError>;

    fn search(&self, criteria: &SearchCriteria) -> Result<Vec<RecipeHit>, SearchError>;
}

/// Blocking client for the recipe search API
pub struct RecipeSearchClient {
    client: Client,
    config: SearchConfig,
}

impl RecipeSearchClient {
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("recipe-search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(config: &SearchConfig, base_url: String) -> Result<Self, SearchError> {
        let config = SearchConfig {
            base_url,
            ..config.clone()
        };
        Self::new(&config)
    }
}

impl RecipeSearch for RecipeSearchClient {
    fn request_url(&self, criteria: &SearchCriteria) -> Result<Url, SearchError> {
        let url = QueryParams::for_criteria(criteria, &self.config).to_url(&self.config.base_url)?;
        Ok(url)
    }

    fn search(&self, criteria: &SearchCriteria) -> Result<Vec<RecipeHit>, SearchError> {
        let url = self.request_url(criteria)?;
        debug!("Requesting {}", url);

        let response = self.client.get(url).send()?.error_for_status()?;
        debug!("Search API answered {}", response.status());

        let body = response.text()?;
        let decoded: SearchResponse = serde_json::from_str(&body)?;
        info!("Search returned {} hits", decoded.hits.len());

        Ok(decoded.hits)
    }
}
