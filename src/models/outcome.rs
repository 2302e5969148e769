use crate::errors::StageError;
use crate::models::{Lead, ScheduleRequest, ScheduledEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parse,
    Lookup,
    Calendar,
    CrmUpdate,
    Unknown,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Parse => "parse",
            Stage::Lookup => "lookup",
            Stage::Calendar => "calendar",
            Stage::CrmUpdate => "crm-update",
            Stage::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single terminal result of one command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success {
        request: ScheduleRequest,
        lead: Lead,
        event: ScheduledEvent,
    },
    NotFound {
        lead_name: String,
    },
    Failure {
        stage: Stage,
        message: String,
    },
}

impl Outcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Success { .. } => "success",
            Outcome::NotFound { .. } => "not_found",
            Outcome::Failure { .. } => "failure",
        }
    }
}

impl From<StageError> for Outcome {
    fn from(err: StageError) -> Self {
        Outcome::Failure {
            stage: err.stage(),
            message: err.message(),
        }
    }
}
