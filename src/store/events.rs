use rand::Rng;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::filter::{self, FilterState};
use crate::models::{Event, NewEvent};
use crate::store::{LoadState, MutationStatus};
use crate::wire::EventPayload;

/// The events page: recommended events plus user submissions. New events
/// are appended optimistically, submitted, then the whole collection is
/// re-fetched so server truth replaces the local copy.
#[derive(Debug)]
pub struct EventBoard {
    api: ApiClient,
    events: Vec<Event>,
    load_state: LoadState,
    in_flight: bool,
}

impl EventBoard {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            events: Vec::new(),
            load_state: LoadState::Idle,
            in_flight: false,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Replace the collection with the server's recommendations. Failures
    /// leave an empty collection and a `Failed` load state.
    pub async fn load(&mut self) {
        self.load_state = LoadState::Loading;
        match self.api.event_recommendations().await {
            Ok(events) => {
                info!("Loaded {} recommended events", events.len());
                self.events = events;
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                warn!("Error fetching events: {}", err);
                self.events = Vec::new();
                self.load_state = LoadState::Failed;
            }
        }
    }

    /// Submit a new event. The draft is appended locally with a random
    /// provisional id before the request goes out; on success the
    /// collection is re-fetched in full, on failure the optimistic entry
    /// is removed again.
    pub async fn add_event(&mut self, draft: NewEvent) -> ClientResult<MutationStatus> {
        if self.in_flight {
            return Err(ClientError::MutationInFlight("add_event"));
        }
        self.in_flight = true;

        let provisional_id = rand::rng().random_range(0..10_000);
        let optimistic_index = self.events.len();
        self.events.push(draft.to_event(provisional_id));

        let payload = EventPayload::from_draft(&draft, provisional_id);
        let result = self.api.add_event(&payload).await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                info!("Event '{}' added", draft.title);
                self.load().await;
                Ok(MutationStatus::Confirmed)
            }
            Err(err) => {
                warn!("Error adding event: {}", err);
                self.events.remove(optimistic_index);
                Ok(MutationStatus::Failed)
            }
        }
    }

    pub fn filtered(&self, filters: &FilterState) -> Vec<&Event> {
        filter::apply_filters(&self.events, filters)
    }

    pub fn suggestions(&self, query: &str) -> Vec<&Event> {
        filter::suggest(&self.events, query)
    }
}
