//! Conversational dialogue engine for multi-step command flows.
//!
//! The bot gathers event details through an in-channel question and answer flow rather than
//! a single slash command with a dozen options. This module provides the pieces that make
//! that work: a dispatcher that routes incoming messages to whichever task is waiting for
//! them, a chat abstraction over the Discord HTTP surface, and a typed prompt layer that
//! asks a question, parses the reply, and re-asks until it gets something valid.

pub mod chat;
pub mod prompt;
pub mod waiter;
