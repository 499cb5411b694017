pub mod interaction;
pub mod message;
pub mod ready;
pub mod scheduled_event;
