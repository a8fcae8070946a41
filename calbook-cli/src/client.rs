//! HTTP client for communicating with calbook-server

use anyhow::{Context, Result};

use calbook_core::EventDraft;
use calbook_core::protocol::{EventDetails, EventList, EventResponse, ListQuery};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:50054";

/// Typed client for the calbook-server API.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> Client {
        Client {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn create_event(&self, draft: &EventDraft) -> Result<EventResponse> {
        let response = self
            .http
            .post(format!("{}/events", self.base_url))
            .json(draft)
            .send()
            .await
            .context("Failed to reach calbook-server. Is it running?")?;
        response
            .json()
            .await
            .context("Invalid response from server")
    }

    pub async fn get_event(&self, id: &str) -> Result<EventDetails> {
        let response = self
            .http
            .get(format!("{}/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to reach calbook-server. Is it running?")?;
        response
            .json()
            .await
            .context("Invalid response from server")
    }

    pub async fn update_event(&self, id: &str, draft: &EventDraft) -> Result<EventResponse> {
        let response = self
            .http
            .put(format!("{}/events/{}", self.base_url, id))
            .json(draft)
            .send()
            .await
            .context("Failed to reach calbook-server. Is it running?")?;
        response
            .json()
            .await
            .context("Invalid response from server")
    }

    pub async fn delete_event(&self, id: &str) -> Result<EventResponse> {
        let response = self
            .http
            .delete(format!("{}/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to reach calbook-server. Is it running?")?;
        response
            .json()
            .await
            .context("Invalid response from server")
    }

    pub async fn list_events(&self, query: &ListQuery) -> Result<EventList> {
        let response = self
            .http
            .get(format!("{}/events", self.base_url))
            .query(query)
            .send()
            .await
            .context("Failed to reach calbook-server. Is it running?")?;
        response
            .json()
            .await
            .context("Invalid response from server")
    }
}
