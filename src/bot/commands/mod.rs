//! Command registry and dispatch.
//!
//! Every command is registered explicitly in [`create_commands`] and matched by
//! name in the dispatchers; the same commands work as slash commands and behind
//! the configured text prefix.

use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::client::Context;
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use tracing::warn;

use crate::bot::start::BotState;
use crate::error::AppError;

pub mod clear;
pub mod new;
pub mod permit;
pub mod ping;

pub fn create_commands() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("new").description("Set up a new event through a short conversation"),
        CreateCommand::new("ping").description("Check that the bot is alive"),
        CreateCommand::new("clear")
            .description("Delete event channels, roles, and records by name prefix")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "prefix",
                    "Name prefix of the event resources to delete",
                )
                .required(true),
            ),
        CreateCommand::new("permit")
            .description("Allow a role to create events")
            .add_option(
                CreateCommandOption::new(CommandOptionType::Role, "role", "Role to permit")
                    .required(true),
            ),
        CreateCommand::new("unpermit")
            .description("Stop allowing a role to create events")
            .add_option(
                CreateCommandOption::new(CommandOptionType::Role, "role", "Role to unpermit")
                    .required(true),
            ),
    ]
}

pub async fn dispatch_slash(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        "new" => new::run_slash(state, ctx, command).await,
        "ping" => ping::run_slash(ctx, command).await,
        "clear" => clear::run_slash(state, ctx, command).await,
        "permit" => permit::run_slash(state, ctx, command, true).await,
        "unpermit" => permit::run_slash(state, ctx, command, false).await,
        other => {
            warn!("unknown slash command {other:?}");
            Ok(())
        }
    }
}

pub async fn dispatch_prefixed(
    state: &BotState,
    ctx: &Context,
    message: &Message,
    name: &str,
    argument: &str,
) -> Result<(), AppError> {
    match name {
        "new" => new::run_prefixed(state, ctx, message).await,
        "ping" => ping::run_prefixed(ctx, message).await,
        "clear" => clear::run_prefixed(state, ctx, message, argument).await,
        "permit" => permit::run_prefixed(state, ctx, message, argument, true).await,
        "unpermit" => permit::run_prefixed(state, ctx, message, argument, false).await,
        _ => Ok(()),
    }
}

/// Whether a guild member holds the administrator permission, from cache.
pub(crate) fn member_is_admin(
    ctx: &Context,
    guild_id: serenity::model::id::GuildId,
    member: &serenity::model::guild::Member,
) -> bool {
    ctx.cache
        .guild(guild_id)
        .map(|guild| guild.member_permissions(member).administrator())
        .unwrap_or(false)
}
