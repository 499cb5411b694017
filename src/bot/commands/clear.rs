use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::Context;
use serenity::model::application::{CommandInteraction, ResolvedValue};
use serenity::model::channel::Message;

use crate::bot::commands::member_is_admin;
use crate::bot::start::BotState;
use crate::error::AppError;
use crate::service::sweep::{self, SweepSummary};

const ADMIN_ONLY_MESSAGE: &str = "Only administrators can clear event resources.";
const EMPTY_PREFIX_MESSAGE: &str = "Please provide a non-empty prefix to clear.";

pub async fn run_slash(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let (Some(guild_id), Some(member)) = (command.guild_id, command.member.as_deref()) else {
        return Ok(());
    };

    let is_admin = member
        .permissions
        .map(|permissions| permissions.administrator())
        .unwrap_or_else(|| member_is_admin(ctx, guild_id, member));
    if !is_admin {
        respond(ctx, command, ADMIN_ONLY_MESSAGE).await?;
        return Ok(());
    }

    let prefix = command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::String(value) if option.name == "prefix" => Some(value.to_string()),
            _ => None,
        })
        .unwrap_or_default();

    if prefix.trim().is_empty() {
        respond(ctx, command, EMPTY_PREFIX_MESSAGE).await?;
        return Ok(());
    }

    // Deleting channels and roles can take a while; acknowledge first.
    command.defer(&ctx.http).await.map_err(Box::new)?;

    let summary = sweep::clear_by_prefix(&ctx.http, &state.db, guild_id.get(), prefix.trim()).await?;

    command
        .edit_response(
            &ctx.http,
            serenity::builder::EditInteractionResponse::new().content(summarize(&summary)),
        )
        .await
        .map_err(Box::new)?;

    Ok(())
}

pub async fn run_prefixed(
    state: &BotState,
    ctx: &Context,
    message: &Message,
    argument: &str,
) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let member = guild_id.member(&ctx.http, message.author.id).await?;
    if !member_is_admin(ctx, guild_id, &member) {
        message.channel_id.say(&ctx.http, ADMIN_ONLY_MESSAGE).await?;
        return Ok(());
    }

    let prefix = argument.trim();
    if prefix.is_empty() {
        message
            .channel_id
            .say(&ctx.http, EMPTY_PREFIX_MESSAGE)
            .await?;
        return Ok(());
    }

    let summary = sweep::clear_by_prefix(&ctx.http, &state.db, guild_id.get(), prefix).await?;

    message
        .channel_id
        .say(&ctx.http, summarize(&summary))
        .await?;

    Ok(())
}

fn summarize(summary: &SweepSummary) -> String {
    format!(
        "Cleared {} channels, {} roles, and {} event records.",
        summary.channels_deleted, summary.roles_deleted, summary.events_deleted
    )
}

async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await
        .map_err(Box::new)?;
    Ok(())
}
