use chrono::Duration;
use chrono_tz::Tz;

use crate::models::{Lead, ScheduleRequest, ScheduledEvent};

/// Every appointment books a one-hour slot.
pub const APPOINTMENT_MINUTES: i64 = 60;

pub fn compose_event(request: &ScheduleRequest, lead: &Lead, tz: Tz) -> ScheduledEvent {
    let summary = format!("{} - {}", request.job_type.to_uppercase(), lead.name);
    let description = format!(
        "Lead ID: {}\nAddress: {}\nScheduled by {}",
        lead.id, lead.address, request.requested_by
    );

    ScheduledEvent {
        summary,
        description,
        start_utc: request.starts_at,
        end_utc: request.starts_at + Duration::minutes(APPOINTMENT_MINUTES),
        time_zone: tz.name().to_string(),
    }
}
