use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Connection, Event, ForumPost};
use crate::wire::{EventPayload, FriendPayload};

/// HTTP client for the GeekedIn backend. Cheap to clone; every call is a
/// fresh request (no retry, no caching).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::Http)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Fetch a named collection, surfacing failures to the caller. The
    /// response body must be a JSON object; a missing `key` defaults to an
    /// empty array. Elements are coerced one at a time so a single
    /// malformed entity is skipped rather than poisoning the collection.
    pub async fn try_fetch_collection<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        key: &str,
    ) -> ClientResult<Vec<T>> {
        let url = self.url(endpoint);
        let response = self
            .http
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body: Value = response.json().await?;
        let items = match body.get(key) {
            Some(Value::Array(items)) => items.clone(),
            Some(other) => {
                warn!("Response key '{}' from {} is not an array: {}", key, endpoint, other);
                Vec::new()
            }
            None => Vec::new(),
        };

        let mut collection = Vec::with_capacity(items.len());
        for item in items {
            match serde_json::from_value::<T>(item) {
                Ok(entity) => collection.push(entity),
                Err(err) => warn!("Skipping malformed entity from {}: {}", endpoint, err),
            }
        }
        debug!("Fetched {} entities from {}", collection.len(), endpoint);
        Ok(collection)
    }

    /// The view-facing fetch contract: transport failures and non-success
    /// statuses are logged and collapse to an empty list, so "no data" and
    /// "error" look identical to callers.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        key: &str,
    ) -> Vec<T> {
        match self.try_fetch_collection(endpoint, key).await {
            Ok(collection) => collection,
            Err(err) => {
                warn!("Error fetching {}: {}", endpoint, err);
                Vec::new()
            }
        }
    }

    pub async fn event_recommendations(&self) -> ClientResult<Vec<Event>> {
        self.try_fetch_collection("/getEventRecommendations", "recommendations")
            .await
    }

    pub async fn post_recommendations(&self, username: &str) -> ClientResult<Vec<ForumPost>> {
        self.try_fetch_collection(
            &format!("/getPostRecommendations?username={}", username),
            "posts",
        )
        .await
    }

    pub async fn friend_recommendations(&self, username: &str) -> ClientResult<Vec<Connection>> {
        self.try_fetch_collection(
            &format!("/getFriendRecommendations?username={}", username),
            "recommendations",
        )
        .await
    }

    pub async fn friends(&self, username: &str) -> ClientResult<Vec<Connection>> {
        self.try_fetch_collection(&format!("/getFriends?username={}", username), "friends")
            .await
    }

    /// Landing-page sample collections.
    pub async fn random_events(&self) -> Vec<Event> {
        self.fetch_collection("/getRandomEvents", "events").await
    }

    pub async fn random_profiles(&self) -> Vec<Connection> {
        self.fetch_collection("/getRandomProfiles", "profiles").await
    }

    pub async fn add_event(&self, payload: &EventPayload) -> ClientResult<()> {
        self.post("/addEvents", payload).await
    }

    pub async fn add_friend(&self, username1: &str, username2: &str) -> ClientResult<()> {
        self.post("/addFriend", &FriendPayload::new(username1, username2))
            .await
    }

    pub async fn remove_friend(&self, username1: &str, username2: &str) -> ClientResult<()> {
        self.post("/removeFriend", &FriendPayload::new(username1, username2))
            .await
    }

    async fn post<B: Serialize>(&self, endpoint: &str, body: &B) -> ClientResult<()> {
        let url = self.url(endpoint);
        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }
        debug!("POST {} succeeded", endpoint);
        Ok(())
    }
}
