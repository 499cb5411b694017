//! Business logic layer built on top of the repositories and the dialogue engine.
//!
//! Services own the interesting behavior of the bot: the event creation wizard, the
//! Discord-side provisioning of roles, channels, and scheduled events, RSVP role sync,
//! control panel actions, and teardown of provisioned resources.

pub mod control;
pub mod event_sync;
pub mod event_wizard;
pub mod provision;
pub mod sweep;
