pub mod calendar;
pub mod command;
pub mod crm;
pub mod leads;
pub mod messaging;
pub mod notifier;
pub mod scheduling;
