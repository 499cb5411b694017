//! Domain models shared between the dialogue, service, and data layers.

pub mod event;
