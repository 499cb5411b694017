use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::Context;
use serenity::model::application::{CommandInteraction, ResolvedValue};
use serenity::model::channel::Message;

use crate::bot::commands::member_is_admin;
use crate::bot::start::BotState;
use crate::data::permitted_role::PermittedRoleRepository;
use crate::error::AppError;
use crate::util::parse::parse_role_mention;

const ADMIN_ONLY_MESSAGE: &str = "Only administrators can manage event permissions.";
const MISSING_ROLE_MESSAGE: &str = "Please mention the role to change permissions for.";

pub async fn run_slash(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
    grant: bool,
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

    let role_id = command
        .data
        .options()
        .into_iter()
        .find_map(|option| match option.value {
            ResolvedValue::Role(role) if option.name == "role" => Some(role.id.get()),
            _ => None,
        });

    let Some(role_id) = role_id else {
        respond(ctx, command, MISSING_ROLE_MESSAGE).await?;
        return Ok(());
    };

    let reply = apply(state, guild_id.get(), role_id, grant).await?;
    respond(ctx, command, &reply).await?;
    Ok(())
}

pub async fn run_prefixed(
    state: &BotState,
    ctx: &Context,
    message: &Message,
    argument: &str,
    grant: bool,
) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        return Ok(());
    };

    let member = guild_id.member(&ctx.http, message.author.id).await?;
    if !member_is_admin(ctx, guild_id, &member) {
        message.channel_id.say(&ctx.http, ADMIN_ONLY_MESSAGE).await?;
        return Ok(());
    }

    let Some(role_id) = parse_role_mention(argument.trim()) else {
        message
            .channel_id
            .say(&ctx.http, MISSING_ROLE_MESSAGE)
            .await?;
        return Ok(());
    };

    let reply = apply(state, guild_id.get(), role_id, grant).await?;
    message.channel_id.say(&ctx.http, reply).await?;
    Ok(())
}

async fn apply(
    state: &BotState,
    guild_id: u64,
    role_id: u64,
    grant: bool,
) -> Result<String, AppError> {
    let repository = PermittedRoleRepository::new(&state.db);

    if grant {
        if repository.exists(role_id).await? {
            return Ok("That role can already create events.".to_string());
        }
        repository.create(guild_id, role_id).await?;
        Ok(format!("Members with <@&{role_id}> can now create events."))
    } else if repository.delete(role_id).await? {
        Ok(format!(
            "Members with <@&{role_id}> can no longer create events."
        ))
    } else {
        Ok("That role wasn't permitted to create events.".to_string())
    }
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
