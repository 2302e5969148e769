use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    /// Whatever else the CRM returns, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "lead id must be a string or number, got {other}"
        ))),
    }
}

/// The appointment written back to the CRM once the calendar event exists.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppointmentRecord {
    pub lead_id: String,
    #[serde(rename = "type")]
    pub job_type: String,
    #[serde(rename = "date")]
    pub scheduled_at: DateTime<Utc>,
    pub created_by: String,
}
