use crate::errors::NotifyError;
use crate::models::Outcome;
use crate::services::messaging::MessagingProvider;

/// The reply text for an outcome.
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success { request, lead, .. } => format!(
            "✅ *{}* scheduled for *{}* on {} at {}\n📍 {}",
            request.job_type.to_uppercase(),
            lead.name,
            request.date_token,
            request.time_token,
            lead.address
        ),
        Outcome::NotFound { lead_name } => format!("❌ Lead *{lead_name}* not found in CRM."),
        Outcome::Failure { stage, message } => {
            format!("⚠️ Scheduling failed at {stage}: {message}")
        }
    }
}

pub async fn notify(
    messaging: &dyn MessagingProvider,
    channel: &str,
    outcome: &Outcome,
) -> Result<(), NotifyError> {
    messaging
        .send_message(channel, &render(outcome))
        .await
        .map_err(|e| NotifyError {
            channel: channel.to_string(),
            message: format!("{e:#}"),
        })
}
