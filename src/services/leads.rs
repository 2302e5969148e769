use crate::errors::StageError;
use crate::models::Lead;
use crate::services::crm::CrmProvider;

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Lead),
    NotFound,
}

/// Looks up `name` in the CRM. When several leads match, the first one the
/// CRM lists is used.
pub async fn resolve_lead(crm: &dyn CrmProvider, name: &str) -> Result<Resolution, StageError> {
    let leads = crm
        .find_leads(name)
        .await
        .map_err(|e| StageError::Lookup(format!("{e:#}")))?;

    if leads.len() > 1 {
        tracing::warn!(
            lead_name = name,
            matches = leads.len(),
            "multiple CRM leads matched, using the first"
        );
    }

    Ok(select_first(leads))
}

fn select_first(leads: Vec<Lead>) -> Resolution {
    match leads.into_iter().next() {
        Some(lead) => Resolution::Found(lead),
        None => Resolution::NotFound,
    }
}
