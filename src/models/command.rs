use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::AppError;

/// The fields of an inbound slash-command form the pipeline consumes.
/// Slack sends more (team_id, response_url, ...); those are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlashCommand {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub user_name: String,
    pub channel_id: String,
}

impl SlashCommand {
    /// Decodes an `application/x-www-form-urlencoded` body that has already
    /// been checked against its signature.
    pub fn from_form(body: &[u8]) -> Result<Self, AppError> {
        let command: Self = serde_urlencoded::from_bytes(body)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if command.channel_id.is_empty() {
            return Err(AppError::BadRequest("missing channel_id".to_string()));
        }
        Ok(command)
    }
}

/// A parsed `/schedule <lead> <job-type> <date> <time>` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    pub lead_name: String,
    pub job_type: String,
    pub date_token: String,
    pub time_token: String,
    pub requested_by: String,
    pub reply_channel: String,
    /// The date and time tokens resolved in the configured zone.
    pub starts_at: DateTime<Utc>,
}
