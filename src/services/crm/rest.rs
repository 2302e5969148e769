use anyhow::Context;
use async_trait::async_trait;

use super::CrmProvider;
use crate::models::{AppointmentRecord, Lead};

/// CRM reached over its plain REST API at `base_url`.
pub struct RestCrmProvider {
    base_url: String,
    client: reqwest::Client,
}

impl RestCrmProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CrmProvider for RestCrmProvider {
    async fn find_leads(&self, name: &str) -> anyhow::Result<Vec<Lead>> {
        let url = format!("{}/leads", self.base_url);

        // A `null` body means no matches
        let leads: Option<Vec<Lead>> = self
            .client
            .get(&url)
            .query(&[("name", name)])
            .send()
            .await
            .context("failed to reach CRM")?
            .error_for_status()
            .context("CRM lead lookup returned error")?
            .json()
            .await
            .context("failed to parse CRM leads response")?;

        Ok(leads.unwrap_or_default())
    }

    async fn create_appointment(&self, record: &AppointmentRecord) -> anyhow::Result<()> {
        let url = format!("{}/appointments", self.base_url);

        self.client
            .post(&url)
            .json(record)
            .send()
            .await
            .context("failed to reach CRM")?
            .error_for_status()
            .context("CRM appointment update returned error")?;

        Ok(())
    }
}
