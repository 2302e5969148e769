use anyhow::Context;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::CalendarProvider;
use crate::models::{CreatedEvent, ScheduledEvent};

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";
const CALENDAR_API: &str = "https://www.googleapis.com/calendar/v3/calendars";
const ASSERTION_TTL_SECS: i64 = 3600;

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsertedEvent {
    id: String,
    html_link: Option<String>,
}

/// Google Calendar client authenticated as a service account.
pub struct GoogleCalendarProvider {
    client_email: String,
    key: EncodingKey,
    client: reqwest::Client,
}

impl GoogleCalendarProvider {
    pub fn new(client_email: String, private_key_pem: &str) -> anyhow::Result<Self> {
        let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .context("GOOGLE_PRIVATE_KEY is not a valid RSA PEM key")?;
        Ok(Self {
            client_email,
            key,
            client: reqwest::Client::new(),
        })
    }

    fn signed_assertion(&self) -> anyhow::Result<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            iss: &self.client_email,
            scope: CALENDAR_SCOPE,
            aud: TOKEN_URL,
            iat,
            exp: iat + ASSERTION_TTL_SECS,
        };
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .context("failed to sign service account assertion")
    }

    async fn access_token(&self) -> anyhow::Result<String> {
        let assertion = self.signed_assertion()?;

        let token: TokenResponse = self
            .client
            .post(TOKEN_URL)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .context("failed to reach Google token endpoint")?
            .error_for_status()
            .context("Google token endpoint returned error")?
            .json()
            .await
            .context("failed to parse Google token response")?;

        Ok(token.access_token)
    }
}

pub fn event_body(event: &ScheduledEvent) -> serde_json::Value {
    json!({
        "summary": event.summary,
        "description": event.description,
        "start": {
            "dateTime": event.start_utc.to_rfc3339_opts(SecondsFormat::Millis, true),
            "timeZone": event.time_zone,
        },
        "end": {
            "dateTime": event.end_utc.to_rfc3339_opts(SecondsFormat::Millis, true),
            "timeZone": event.time_zone,
        },
    })
}

#[async_trait]
impl CalendarProvider for GoogleCalendarProvider {
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &ScheduledEvent,
    ) -> anyhow::Result<CreatedEvent> {
        let token = self.access_token().await?;
        let url = format!("{CALENDAR_API}/{calendar_id}/events");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .json(&event_body(event))
            .send()
            .await
            .context("failed to call Google Calendar API")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Google Calendar API error ({status}): {body}");
        }

        let inserted: InsertedEvent = resp
            .json()
            .await
            .context("failed to parse Google Calendar response")?;

        Ok(CreatedEvent {
            id: inserted.id,
            html_link: inserted.html_link,
        })
    }
}
