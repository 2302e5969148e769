use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::MessagingProvider;

const SLACK_API: &str = "https://slack.com/api";

#[derive(Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct SlackMessagingProvider {
    bot_token: String,
    api_base: String,
    client: reqwest::Client,
}

impl SlackMessagingProvider {
    pub fn new(bot_token: String) -> Self {
        Self::with_base_url(bot_token, SLACK_API.to_string())
    }

    /// Points the client at a Slack-compatible API other than slack.com.
    pub fn with_base_url(bot_token: String, api_base: String) -> Self {
        Self {
            bot_token,
            api_base: api_base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl MessagingProvider for SlackMessagingProvider {
    async fn send_message(&self, channel: &str, text: &str) -> anyhow::Result<()> {
        let url = format!("{}/chat.postMessage", self.api_base);

        let resp: SlackResponse = self
            .client
            .post(&url)
            .bearer_auth(&self.bot_token)
            .json(&json!({ "channel": channel, "text": text }))
            .send()
            .await
            .context("failed to send Slack message")?
            .error_for_status()
            .context("Slack API returned error")?
            .json()
            .await
            .context("failed to parse Slack response")?;

        // Slack reports most failures as 200 with ok=false
        if !resp.ok {
            anyhow::bail!(
                "Slack rejected message: {}",
                resp.error.as_deref().unwrap_or("unknown error")
            );
        }

        Ok(())
    }
}
