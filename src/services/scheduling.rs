use std::sync::Arc;

use chrono_tz::Tz;
use tracing::Instrument;

use crate::errors::StageError;
use crate::models::{AppointmentRecord, Outcome, ScheduleRequest, SlashCommand};
use crate::services::calendar::compose::compose_event;
use crate::services::calendar::{CalendarProvider, PRIMARY_CALENDAR};
use crate::services::command::{parse_command, today_in};
use crate::services::crm::CrmProvider;
use crate::services::leads::{resolve_lead, Resolution};
use crate::services::messaging::MessagingProvider;
use crate::services::notifier;

/// Runs one slash command through parse, lookup, calendar insert and CRM
/// update, then replies to the channel exactly once.
///
/// The calendar is written before the CRM. If the CRM update fails the event
/// stays on the calendar without an appointment record; nothing is rolled
/// back and no call is retried, so re-issuing such a command can leave a
/// duplicate event.
pub struct Scheduler {
    crm: Arc<dyn CrmProvider>,
    calendar: Arc<dyn CalendarProvider>,
    messaging: Arc<dyn MessagingProvider>,
    time_zone: Tz,
}

impl Scheduler {
    pub fn new(
        crm: Arc<dyn CrmProvider>,
        calendar: Arc<dyn CalendarProvider>,
        messaging: Arc<dyn MessagingProvider>,
        time_zone: Tz,
    ) -> Self {
        Self {
            crm,
            calendar,
            messaging,
            time_zone,
        }
    }

    /// Runs the pipeline to completion and sends its single reply. A panic
    /// anywhere in the pipeline still produces a reply, as an `unknown`
    /// failure.
    pub async fn handle(self: Arc<Self>, command: SlashCommand) -> Outcome {
        let command_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!(
            "command",
            id = %command_id,
            user = %command.user_name,
            channel = %command.channel_id
        );

        async move {
            let channel = command.channel_id.clone();
            let pipeline = Arc::clone(&self);

            let outcome = match tokio::spawn(
                async move { pipeline.run(command).await }.in_current_span(),
            )
            .await
            {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(error = %e, "scheduling task aborted");
                    StageError::Unknown(e.to_string()).into()
                }
            };

            tracing::info!(outcome = outcome.kind(), "command finished");

            if let Err(e) = notifier::notify(self.messaging.as_ref(), &channel, &outcome).await {
                tracing::error!(error = %e, "failed to send reply");
            }

            outcome
        }
        .instrument(span)
        .await
    }

    /// Everything up to, but not including, the reply.
    pub async fn run(&self, command: SlashCommand) -> Outcome {
        match self.try_run(command).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(stage = %e.stage(), error = %e, "scheduling failed");
                e.into()
            }
        }
    }

    async fn try_run(&self, command: SlashCommand) -> Result<Outcome, StageError> {
        let request = parse_command(
            &command.text,
            &command.user_name,
            &command.channel_id,
            self.time_zone,
            today_in(self.time_zone),
        )?;

        tracing::info!(
            lead = %request.lead_name,
            job = %request.job_type,
            starts_at = %request.starts_at,
            "parsed command"
        );

        self.schedule(request).await
    }

    async fn schedule(&self, request: ScheduleRequest) -> Result<Outcome, StageError> {
        let lead = match resolve_lead(self.crm.as_ref(), &request.lead_name).await? {
            Resolution::Found(lead) => lead,
            Resolution::NotFound => {
                tracing::info!(lead = %request.lead_name, "lead not found");
                return Ok(Outcome::NotFound {
                    lead_name: request.lead_name,
                });
            }
        };

        let event = compose_event(&request, &lead, self.time_zone);

        let created = self
            .calendar
            .insert_event(PRIMARY_CALENDAR, &event)
            .await
            .map_err(|e| StageError::Calendar(format!("{e:#}")))?;
        tracing::info!(
            event_id = %created.id,
            link = created.html_link.as_deref().unwrap_or(""),
            lead_id = %lead.id,
            "calendar event created"
        );

        let record = AppointmentRecord {
            lead_id: lead.id.clone(),
            job_type: request.job_type.clone(),
            scheduled_at: event.start_utc,
            created_by: request.requested_by.clone(),
        };

        if let Err(e) = self.crm.create_appointment(&record).await {
            tracing::error!(
                event_id = %created.id,
                link = created.html_link.as_deref().unwrap_or(""),
                lead_id = %lead.id,
                "calendar event exists without a CRM appointment"
            );
            return Err(StageError::CrmUpdate(format!("{e:#}")));
        }

        Ok(Outcome::Success {
            request,
            lead,
            event,
        })
    }
}
