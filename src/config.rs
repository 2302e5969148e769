use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub crm_api_base: String,
    pub slack_bot_token: String,
    pub slack_signing_secret: String,
    pub google_client_email: String,
    pub google_private_key: String,
    pub time_zone: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            crm_api_base: env::var("CRM_API_BASE")
                .unwrap_or_else(|_| "http://localhost:8080".to_string())
                .trim_end_matches('/')
                .to_string(),
            slack_bot_token: env::var("SLACK_BOT_TOKEN").unwrap_or_default(),
            slack_signing_secret: env::var("SLACK_SIGNING_SECRET").unwrap_or_default(),
            google_client_email: env::var("GOOGLE_CLIENT_EMAIL").unwrap_or_default(),
            // Keys pasted into .env files usually carry escaped newlines
            google_private_key: env::var("GOOGLE_PRIVATE_KEY")
                .unwrap_or_default()
                .replace("\\n", "\n"),
            time_zone: env::var("TIME_ZONE").unwrap_or_else(|_| "America/Chicago".to_string()),
        }
    }
}
