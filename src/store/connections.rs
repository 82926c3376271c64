use futures::join;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::models::Connection;
use crate::store::{LoadState, MutationStatus};

/// The Connect tab: two disjoint collections, recommended candidates and
/// current connections. A friend mutation touches both, so confirmation
/// re-fetches both; failure reverts the optimistic move.
#[derive(Debug)]
pub struct ConnectionGraph {
    api: ApiClient,
    recommendations: Vec<Connection>,
    friends: Vec<Connection>,
    recommendations_state: LoadState,
    friends_state: LoadState,
    in_flight: bool,
}

impl ConnectionGraph {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            recommendations: Vec::new(),
            friends: Vec::new(),
            recommendations_state: LoadState::Idle,
            friends_state: LoadState::Idle,
            in_flight: false,
        }
    }

    pub fn recommendations(&self) -> &[Connection] {
        &self.recommendations
    }

    pub fn friends(&self) -> &[Connection] {
        &self.friends
    }

    pub fn recommendations_state(&self) -> LoadState {
        self.recommendations_state
    }

    pub fn friends_state(&self) -> LoadState {
        self.friends_state
    }

    /// Fetch both collections concurrently; each is applied independently
    /// as it completes.
    pub async fn load(&mut self, username: &str) {
        self.recommendations_state = LoadState::Loading;
        self.friends_state = LoadState::Loading;

        let (recommendations, friends) = join!(
            self.api.friend_recommendations(username),
            self.api.friends(username),
        );

        match recommendations {
            Ok(list) => {
                info!("Loaded {} friend recommendations", list.len());
                self.recommendations = list;
                self.recommendations_state = LoadState::Loaded;
            }
            Err(err) => {
                warn!("Error fetching friend recommendations: {}", err);
                self.recommendations = Vec::new();
                self.recommendations_state = LoadState::Failed;
            }
        }
        match friends {
            Ok(list) => {
                info!("Loaded {} friends", list.len());
                self.friends = list;
                self.friends_state = LoadState::Loaded;
            }
            Err(err) => {
                warn!("Error fetching friends: {}", err);
                self.friends = Vec::new();
                self.friends_state = LoadState::Failed;
            }
        }
    }

    /// Connect with a recommended candidate. The candidate moves from
    /// recommendations to friends immediately; on confirmation both
    /// collections are replaced by server truth, on failure the move is
    /// reverted.
    pub async fn add_friend(
        &mut self,
        username: &str,
        friend: &str,
    ) -> ClientResult<MutationStatus> {
        if self.in_flight {
            return Err(ClientError::MutationInFlight("add_friend"));
        }
        let index = self
            .recommendations
            .iter()
            .position(|candidate| candidate.name == friend)
            .ok_or_else(|| ClientError::NotFound(format!("recommendation '{}'", friend)))?;

        self.in_flight = true;
        let candidate = self.recommendations.remove(index);
        self.friends.push(candidate.clone());

        let result = self.api.add_friend(username, friend).await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                info!("Connected with {}", friend);
                self.load(username).await;
                Ok(MutationStatus::Confirmed)
            }
            Err(err) => {
                warn!("Error adding friend: {}", err);
                self.friends.retain(|connection| connection.name != friend);
                self.recommendations.insert(index, candidate);
                Ok(MutationStatus::Failed)
            }
        }
    }

    /// Remove a current connection, with the same optimistic/revert shape
    /// as `add_friend`.
    pub async fn remove_friend(
        &mut self,
        username: &str,
        friend: &str,
    ) -> ClientResult<MutationStatus> {
        if self.in_flight {
            return Err(ClientError::MutationInFlight("remove_friend"));
        }
        let index = self
            .friends
            .iter()
            .position(|connection| connection.name == friend)
            .ok_or_else(|| ClientError::NotFound(format!("connection '{}'", friend)))?;

        self.in_flight = true;
        let removed = self.friends.remove(index);

        let result = self.api.remove_friend(username, friend).await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                info!("Removed connection {}", friend);
                self.load(username).await;
                Ok(MutationStatus::Confirmed)
            }
            Err(err) => {
                warn!("Error removing friend: {}", err);
                self.friends.insert(index, removed);
                Ok(MutationStatus::Failed)
            }
        }
    }
}
