pub mod rest;

use async_trait::async_trait;

use crate::models::{AppointmentRecord, Lead};

#[async_trait]
pub trait CrmProvider: Send + Sync {
    /// All leads whose name matches `name` exactly, in the order the CRM lists them.
    async fn find_leads(&self, name: &str) -> anyhow::Result<Vec<Lead>>;

    async fn create_appointment(&self, record: &AppointmentRecord) -> anyhow::Result<()>;
}
