use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use chrono_tz::Tz;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use roofsched::config::AppConfig;
use roofsched::errors::AppError;
use roofsched::handlers;
use roofsched::services::calendar::google::GoogleCalendarProvider;
use roofsched::services::crm::rest::RestCrmProvider;
use roofsched::services::messaging::slack::SlackMessagingProvider;
use roofsched::services::scheduling::Scheduler;
use roofsched::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let time_zone: Tz = config
        .time_zone
        .parse()
        .map_err(|e| AppError::Config(format!("TIME_ZONE {:?}: {e}", config.time_zone)))?;

    if config.slack_bot_token.is_empty() {
        tracing::warn!("SLACK_BOT_TOKEN not set, replies will fail");
    }
    if config.slack_signing_secret.is_empty() {
        tracing::warn!("SLACK_SIGNING_SECRET not set, skipping request verification");
    }
    anyhow::ensure!(
        !config.google_client_email.is_empty(),
        "GOOGLE_CLIENT_EMAIL must be set"
    );

    let calendar = GoogleCalendarProvider::new(
        config.google_client_email.clone(),
        &config.google_private_key,
    )?;
    let crm = RestCrmProvider::new(config.crm_api_base.clone());
    let messaging = SlackMessagingProvider::new(config.slack_bot_token.clone());

    tracing::info!(
        crm = %config.crm_api_base,
        time_zone = %time_zone,
        "scheduler configured"
    );

    let scheduler = Scheduler::new(
        Arc::new(crm),
        Arc::new(calendar),
        Arc::new(messaging),
        time_zone,
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        scheduler: Arc::new(scheduler),
    });

    let app = Router::new()
        .route("/", get(handlers::health::health))
        .route("/health", get(handlers::health::health))
        .route("/slack/schedule", post(handlers::slack::schedule_command))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("RoofSched Bot listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
