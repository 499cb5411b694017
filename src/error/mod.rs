//! Error types for the bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. Every
//! failure path in the bot degrades to a user-visible message and a clean
//! return; `AppError` exists so handlers can log the underlying cause.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity. Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Internal issue indicating unexpected behavior or a possible bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        Self::DiscordErr(Box::new(err))
    }
}
