pub mod compose;
pub mod google;

use async_trait::async_trait;

use crate::models::{CreatedEvent, ScheduledEvent};

/// Calendar the bot writes appointments into.
pub const PRIMARY_CALENDAR: &str = "primary";

#[async_trait]
pub trait CalendarProvider: Send + Sync {
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &ScheduledEvent,
    ) -> anyhow::Result<CreatedEvent>;
}
