//! Discord gateway integration.
//!
//! Wires serenity's event handler to the dialogue engine and the services. The
//! handler methods stay thin; anything with behavior worth testing lives in
//! `service` or `dialogue`.

pub mod commands;
pub mod handler;
pub mod start;
