use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::Context;
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::model::guild::Member;
use serenity::model::id::GuildId;
use tracing::error;

use crate::bot::commands::member_is_admin;
use crate::bot::start::BotState;
use crate::dialogue::chat::{DiscordChat, DiscordDirectory};
use crate::error::AppError;
use crate::service::event_wizard::{EventWizard, GuildUsage, Invoker};
use crate::service::provision::DiscordProvisioner;

const GUILD_ONLY_MESSAGE: &str = "Events can only be set up inside a server.";
const ALREADY_RUNNING_MESSAGE: &str =
    "You already have an event setup running in this channel. Finish or cancel it first.";
const INTRO_MESSAGE: &str =
    "Let's set up your event! Answer the questions below, or say `cancel` at any time to stop.";

pub async fn run_slash(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let (Some(guild_id), Some(member)) = (command.guild_id, command.member.as_deref()) else {
        respond(ctx, command, GUILD_ONLY_MESSAGE, true).await?;
        return Ok(());
    };

    let user_id = command.user.id.get();
    let channel_id = command.channel_id.get();

    let Some(claim) = state.dispatcher.try_claim(user_id, channel_id) else {
        respond(ctx, command, ALREADY_RUNNING_MESSAGE, true).await?;
        return Ok(());
    };

    let invoker = build_invoker(ctx, guild_id, member, user_id, channel_id);
    let usage = guild_usage(ctx, guild_id).await?;

    respond(ctx, command, INTRO_MESSAGE, false).await?;

    spawn_wizard(state, ctx, invoker, usage, claim);
    Ok(())
}

pub async fn run_prefixed(
    state: &BotState,
    ctx: &Context,
    message: &Message,
) -> Result<(), AppError> {
    let Some(guild_id) = message.guild_id else {
        message.channel_id.say(&ctx.http, GUILD_ONLY_MESSAGE).await?;
        return Ok(());
    };

    let user_id = message.author.id.get();
    let channel_id = message.channel_id.get();

    let Some(claim) = state.dispatcher.try_claim(user_id, channel_id) else {
        message
            .channel_id
            .say(&ctx.http, ALREADY_RUNNING_MESSAGE)
            .await?;
        return Ok(());
    };

    let member = guild_id.member(&ctx.http, message.author.id).await?;
    let invoker = build_invoker(ctx, guild_id, &member, user_id, channel_id);
    let usage = guild_usage(ctx, guild_id).await?;

    message.channel_id.say(&ctx.http, INTRO_MESSAGE).await?;

    spawn_wizard(state, ctx, invoker, usage, claim);
    Ok(())
}

fn build_invoker(
    ctx: &Context,
    guild_id: GuildId,
    member: &Member,
    user_id: u64,
    channel_id: u64,
) -> Invoker {
    // Interaction payloads carry resolved permissions; fall back to the cache
    // for prefix invocations.
    let is_admin = member
        .permissions
        .map(|permissions| permissions.administrator())
        .unwrap_or_else(|| member_is_admin(ctx, guild_id, member));

    Invoker {
        user_id,
        channel_id,
        guild_id: guild_id.get(),
        is_admin,
        role_ids: member.roles.iter().map(|role| role.get()).collect(),
    }
}

async fn guild_usage(ctx: &Context, guild_id: GuildId) -> Result<GuildUsage, AppError> {
    let channel_count = guild_id.channels(&ctx.http).await?.len() as u64;
    let role_count = guild_id.roles(&ctx.http).await?.len() as u64;
    Ok(GuildUsage {
        channel_count,
        role_count,
    })
}

/// Runs the wizard on its own task so the gateway handler is free to deliver
/// the dialogue replies it is waiting on.
fn spawn_wizard(
    state: &BotState,
    ctx: &Context,
    invoker: Invoker,
    usage: GuildUsage,
    claim: crate::dialogue::waiter::SessionClaim,
) {
    let db = state.db.clone();
    let http = ctx.http.clone();
    let dispatcher = state.dispatcher.clone();
    let reply_timeout = state.options.reply_timeout;
    let require_future_start = state.options.require_future_start;

    tokio::spawn(async move {
        let _claim = claim;

        let chat = DiscordChat::new(
            http.clone(),
            dispatcher,
            invoker.user_id,
            invoker.channel_id,
            reply_timeout,
        );
        let directory = DiscordDirectory::new(http.clone(), invoker.guild_id);
        let provisioner = DiscordProvisioner::new(http);

        let wizard = EventWizard::new(&db, &chat, &directory, &provisioner, require_future_start);
        if let Err(err) = wizard.run(&invoker, &usage).await {
            error!("event wizard failed: {err}");
        }
    });
}

async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
    ephemeral: bool,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(ephemeral),
            ),
        )
        .await
        .map_err(Box::new)?;
    Ok(())
}
