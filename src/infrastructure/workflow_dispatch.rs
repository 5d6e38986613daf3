//! Remote workflow trigger for crawl requests
//!
//! Posts a `repository_dispatch` event to the GitHub API so the hosted crawl
//! workflow runs against a target URL. This subsystem shares nothing with
//! the extraction core beyond the URL string format.

use anyhow::{Result, anyhow};
use chrono::Utc;
use reqwest::Client;
use serde_json::json;
use tracing::{error, info};

use crate::infrastructure::config::{defaults, github};

/// Target repository and credentials for workflow dispatch
#[derive(Debug, Clone)]
pub struct WorkflowDispatchConfig {
    pub repo_owner: String,
    pub repo_name: String,
    pub token: String,
}

/// Client for triggering the remote crawl workflow
pub struct WorkflowDispatchClient {
    client: Client,
    config: WorkflowDispatchConfig,
}

impl WorkflowDispatchClient {
    /// Create a new dispatch client
    pub fn new(config: WorkflowDispatchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(defaults::USER_AGENT)
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// Trigger the crawl workflow for a target URL.
    ///
    /// The dispatch payload carries the URL, an RFC 3339 timestamp, and an
    /// optional issue number for comment follow-up. GitHub answers a
    /// successful dispatch with 204 No Content.
    pub async fn trigger_crawl(&self, url: &str, issue_number: Option<u64>) -> Result<()> {
        let api_url = format!(
            "{}/repos/{}/{}/dispatches",
            github::API_BASE,
            self.config.repo_owner,
            self.config.repo_name
        );

        let mut client_payload = json!({
            "url": url,
            "timestamp": Utc::now().to_rfc3339(),
            "triggered_by": "api",
        });
        if let Some(number) = issue_number {
            client_payload["issue_number"] = json!(number);
        }

        let payload = json!({
            "event_type": github::DISPATCH_EVENT_TYPE,
            "client_payload": client_payload,
        });

        let response = self
            .client
            .post(&api_url)
            .header("Authorization", format!("token {}", self.config.token))
            .header("Accept", github::API_ACCEPT)
            .json(&payload)
            .send()
            .await
            .map_err(|e| anyhow!("Dispatch request failed: {}", e))?;

        let status = response.status();
        if status.as_u16() == 204 {
            info!(
                "✅ Triggered crawl workflow for {} on {}/{}",
                url, self.config.repo_owner, self.config.repo_name
            );
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        error!("❌ Workflow dispatch failed: {} - {}", status, body);
        Err(anyhow!("Workflow dispatch failed: {} - {}", status, body))
    }
}
