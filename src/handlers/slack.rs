use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::errors::AppError;
use crate::models::SlashCommand;
use crate::state::AppState;

pub const ACK: &str = "📅 Working on it…";

/// Requests signed further in the past than this are treated as replays.
const MAX_SIGNATURE_AGE_SECS: u64 = 60 * 5;

fn validate_slack_signature(
    signing_secret: &str,
    signature: &str,
    timestamp: &str,
    body: &[u8],
    now: i64,
) -> bool {
    let Ok(sent_at) = timestamp.parse::<i64>() else {
        return false;
    };
    if now.abs_diff(sent_at) > MAX_SIGNATURE_AGE_SECS {
        return false;
    }

    let Some(expected) = signature
        .strip_prefix("v0=")
        .and_then(|hex_sig| hex::decode(hex_sig).ok())
    else {
        return false;
    };

    let mut mac = match Hmac::<Sha256>::new_from_slice(signing_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(b"v0:");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);

    mac.verify_slice(&expected).is_ok()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// `POST /slack/schedule`. Answers Slack immediately; the scheduling itself
/// runs in its own task and replies to the channel when done.
pub async fn schedule_command(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, AppError> {
    // Skip verification when no signing secret is configured (dev mode)
    if !state.config.slack_signing_secret.is_empty() {
        let signature = header_str(&headers, "x-slack-signature");
        let timestamp = header_str(&headers, "x-slack-request-timestamp");

        if !validate_slack_signature(
            &state.config.slack_signing_secret,
            signature,
            timestamp,
            &body,
            chrono::Utc::now().timestamp(),
        ) {
            tracing::warn!("invalid Slack signature");
            return Err(AppError::Unauthorized);
        }
    }

    let command = SlashCommand::from_form(&body)?;

    tracing::info!(
        user = %command.user_name,
        channel = %command.channel_id,
        text = %command.text,
        "incoming slash command"
    );

    let scheduler = Arc::clone(&state.scheduler);
    tokio::spawn(scheduler.handle(command));

    Ok(ACK)
}
