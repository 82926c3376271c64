use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed category enumeration for events. Backend strings outside the
/// enumeration coerce to `Other` instead of dropping the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EventCategory {
    Hackathon,
    Workshop,
    Networking,
    Lecture,
    Tutorial,
    Codefest,
    #[serde(other)]
    #[default]
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Hackathon => "Hackathon",
            EventCategory::Workshop => "Workshop",
            EventCategory::Networking => "Networking",
            EventCategory::Lecture => "Lecture",
            EventCategory::Tutorial => "Tutorial",
            EventCategory::Codefest => "Codefest",
            EventCategory::Other => "Other",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event as fetched from the backend. Every field is defaulted so a
/// sparse server entity still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image: String,
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    pub time: String,
    pub location: String,
    pub organizer: String,
    #[serde(rename = "organizerWebsite")]
    pub organizer_website: String,
    pub cost: f64,
    pub attendees: u32,
    #[serde(rename = "type")]
    pub category: EventCategory,
    #[serde(rename = "interests")]
    pub topics: Vec<String>,
    #[serde(rename = "isFree")]
    pub is_free: bool,
    #[serde(rename = "isOnline")]
    pub is_online: bool,
}

/// A user-submitted event draft, before wire mapping and before the server
/// assigns an id.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub url: String,
    pub logo: Option<String>,
    pub start_date: NaiveDate,
    pub start_time: String,
    pub end_date: NaiveDate,
    pub end_time: String,
    pub is_free: bool,
    pub is_online: bool,
    pub category: EventCategory,
    pub location: String,
    pub organizer: String,
    pub organizer_website: String,
    pub topics: Vec<String>,
}

impl NewEvent {
    /// Synthesize the optimistic in-memory event for a draft, using a
    /// locally generated provisional id.
    pub fn to_event(&self, provisional_id: i64) -> Event {
        Event {
            id: provisional_id,
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            image: self
                .logo
                .clone()
                .unwrap_or_else(|| "/placeholder.svg".to_string()),
            start_date: Some(self.start_date),
            end_date: Some(self.end_date),
            time: self.start_time.clone(),
            location: self.location.clone(),
            organizer: self.organizer.clone(),
            organizer_website: self.organizer_website.clone(),
            cost: 0.0,
            attendees: 0,
            category: self.category,
            topics: self.topics.clone(),
            is_free: self.is_free,
            is_online: self.is_online,
        }
    }
}
