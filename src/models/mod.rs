pub mod command;
pub mod event;
pub mod lead;
pub mod outcome;

pub use command::{ScheduleRequest, SlashCommand};
pub use event::{CreatedEvent, ScheduledEvent};
pub use lead::{AppointmentRecord, Lead};
pub use outcome::{Outcome, Stage};
