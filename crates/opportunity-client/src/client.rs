//! Opportunity Service Client
//!
//! `OpportunityApi` is the seam between the dashboard session and transport.
//! `HttpOpportunityClient` talks to the real service with reqwest, which uses
//! the browser fetch API on wasm32 and hyper everywhere else.

use async_trait::async_trait;

use crate::config::DashboardConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{CreateOpportunity, Opportunity};

/// Operations the dashboard needs from the opportunities service
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait OpportunityApi {
    /// `GET /opportunities`
    async fn list_opportunities(&self) -> ClientResult<Vec<Opportunity>>;

    /// `POST /opportunities` with `{ "content": ... }`; the response body is ignored
    async fn create_opportunity(&self, content: &str) -> ClientResult<()>;

    /// `PUT /opportunities/{id}/status?status=...`
    async fn update_status(&self, id: u32, status: &str) -> ClientResult<()>;
}

/// HTTP client for the opportunities service.
#[derive(Clone)]
pub struct HttpOpportunityClient {
    config: DashboardConfig,
    client: reqwest::Client,
}

impl HttpOpportunityClient {
    /// Create a new client for the given config.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: config.normalized(),
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Turn a non-2xx response into `ClientError::Status`, keeping the body for diagnostics
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait(?Send)]
impl OpportunityApi for HttpOpportunityClient {
    async fn list_opportunities(&self) -> ClientResult<Vec<Opportunity>> {
        let url = self.config.opportunities_url();
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        // Decode separately so malformed JSON surfaces as ClientError::Json
        let text = response.text().await?;
        let opportunities: Vec<Opportunity> = serde_json::from_str(&text)?;

        log::info!("Fetched {} opportunities", opportunities.len());
        Ok(opportunities)
    }

    async fn create_opportunity(&self, content: &str) -> ClientResult<()> {
        let url = self.config.opportunities_url();
        log::debug!("POST {} ({} chars)", url, content.chars().count());

        let response = self
            .client
            .post(&url)
            .json(&CreateOpportunity { content })
            .send()
            .await?;
        Self::check_status(response).await?;

        log::info!("Opportunity submitted");
        Ok(())
    }

    async fn update_status(&self, id: u32, status: &str) -> ClientResult<()> {
        let url = self.config.status_url(id);
        log::debug!("PUT {}?status={}", url, status);

        let response = self
            .client
            .put(&url)
            .query(&[("status", status)])
            .send()
            .await?;
        Self::check_status(response).await?;

        log::info!("Opportunity {} moved to {}", id, status);
        Ok(())
    }
}
