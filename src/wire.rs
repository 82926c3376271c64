//! Client-to-server payload shapes. Field renaming between the client
//! entities and the backend's wire representation lives here and nowhere
//! else, one mapping function per entity type.

use serde::Serialize;

use crate::models::NewEvent;

/// Body of `POST /addEvents`. Note the backend quirks: booleans travel as
/// the literal strings "true"/"false", and the local title maps to
/// `event_name`.
#[derive(Debug, Clone, Serialize)]
pub struct EventPayload {
    pub eventid: i64,
    pub event_name: String,
    pub event_description: String,
    pub event_url: String,
    pub event_logo: String,
    pub starttime_local: String,
    pub endtime_local: String,
    pub is_free: String,
    pub is_online: String,
    pub category: String,
    pub venue_location: String,
    pub organizer_name: String,
    pub organizer_website: String,
}

impl EventPayload {
    pub fn from_draft(draft: &NewEvent, eventid: i64) -> Self {
        Self {
            eventid,
            event_name: draft.title.clone(),
            event_description: draft.description.clone(),
            event_url: draft.url.clone(),
            event_logo: draft
                .logo
                .clone()
                .unwrap_or_else(|| "/placeholder.svg".to_string()),
            starttime_local: format!("{}T{}", draft.start_date, draft.start_time),
            endtime_local: format!("{}T{}", draft.end_date, draft.end_time),
            is_free: bool_string(draft.is_free),
            is_online: bool_string(draft.is_online),
            category: draft.category.to_string(),
            venue_location: draft.location.clone(),
            organizer_name: draft.organizer.clone(),
            organizer_website: draft.organizer_website.clone(),
        }
    }
}

/// Body of `POST /addFriend` and `POST /removeFriend`.
#[derive(Debug, Clone, Serialize)]
pub struct FriendPayload {
    pub username1: String,
    pub username2: String,
}

impl FriendPayload {
    pub fn new(username1: &str, username2: &str) -> Self {
        Self {
            username1: username1.to_string(),
            username2: username2.to_string(),
        }
    }
}

fn bool_string(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}
