use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEvent {
    pub summary: String,
    pub description: String,
    pub start_utc: DateTime<Utc>,
    pub end_utc: DateTime<Utc>,
    /// IANA zone name sent alongside both timestamps.
    pub time_zone: String,
}

/// What the calendar returned for an inserted event.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedEvent {
    pub id: String,
    pub html_link: Option<String>,
}
