//! HTTP client for the five Finding operations.
//!
//! Every call validates its parameters first. A request is only sent when
//! validation succeeds, and the response is decoded into the operation's
//! wrapper type from [`crate::response`].

use crate::config::{DEFAULT_ENDPOINT, FindingConfig};
use crate::error::{FindingError, Result};
use crate::http::build_client;
use crate::response::{
    FindItemsAdvancedResponse, FindItemsByCategoryResponse, FindItemsByKeywordsResponse,
    FindItemsByProductResponse, FindItemsInStoresResponse, ResultProvider,
};
use finding_query::{Operation, RawParams, build_query};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Client for the Finding service.
#[derive(Debug, Clone)]
pub struct FindingClient {
    http: reqwest::Client,
    app_id: String,
    url: String,
}

impl FindingClient {
    /// Creates a client against the production endpoint.
    pub fn new(http: reqwest::Client, app_id: impl Into<String>) -> Self {
        Self {
            http,
            app_id: app_id.into(),
            url: DEFAULT_ENDPOINT.to_owned(),
        }
    }

    /// Creates a client from a validated [`FindingConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`FindingError::Config`] if the config is invalid or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &FindingConfig) -> Result<Self> {
        config.validate()?;
        let http = build_client(config)?;
        Ok(Self {
            http,
            app_id: config.app_id.clone(),
            url: config.endpoint.clone(),
        })
    }

    /// Points the client at a different endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Validates `raw` and returns the full request URL without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`FindingError::Validation`] for illegal parameters and
    /// [`FindingError::Request`] if the endpoint is not a valid URL.
    pub fn request_url(&self, operation: Operation, raw: &RawParams) -> Result<Url> {
        let query = build_query(operation, &self.app_id, raw)?;
        let mut url = Url::parse(&self.url)
            .map_err(|e| FindingError::Request(format!("invalid endpoint {}: {e}", self.url)))?;
        url.query_pairs_mut().extend_pairs(query.iter());
        Ok(url)
    }

    /// Searches items in one or more categories.
    pub async fn find_items_by_category(
        &self,
        raw: &RawParams,
    ) -> Result<FindItemsByCategoryResponse> {
        self.find(raw).await
    }

    /// Searches items by keywords.
    pub async fn find_items_by_keywords(
        &self,
        raw: &RawParams,
    ) -> Result<FindItemsByKeywordsResponse> {
        self.find(raw).await
    }

    /// Searches items by category and/or keywords with description search.
    pub async fn find_items_advanced(&self, raw: &RawParams) -> Result<FindItemsAdvancedResponse> {
        self.find(raw).await
    }

    /// Searches items matching a product identifier.
    pub async fn find_items_by_product(
        &self,
        raw: &RawParams,
    ) -> Result<FindItemsByProductResponse> {
        self.find(raw).await
    }

    /// Searches items listed in stores.
    pub async fn find_items_in_stores(
        &self,
        raw: &RawParams,
    ) -> Result<FindItemsInStoresResponse> {
        self.find(raw).await
    }

    async fn find<R>(&self, raw: &RawParams) -> Result<R>
    where
        R: ResultProvider + DeserializeOwned,
    {
        let operation = R::OPERATION;
        let url = self.request_url(operation, raw)?;
        debug!(operation = %operation, "dispatching Finding request");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(operation = %operation, error = %e, "Finding request failed");
            FindingError::Transport(e.to_string())
        })?;

        let status = response.status();
        debug!(operation = %operation, status = status.as_u16(), "Finding response received");
        if status != reqwest::StatusCode::OK {
            warn!(operation = %operation, status = status.as_u16(), "unexpected Finding status");
            return Err(FindingError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FindingError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| {
            let key = operation.response_key();
            warn!(operation = %operation, key, error = %e, "failed to decode Finding response");
            FindingError::Decode(format!("{key}: {e}"))
        })
    }
}
