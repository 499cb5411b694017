use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::Context;
use serenity::model::application::{ComponentInteraction, Interaction};
use tracing::error;

use crate::bot::commands;
use crate::bot::start::BotState;
use crate::service::control;

pub async fn handle(state: &BotState, ctx: &Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            if let Err(err) = commands::dispatch_slash(state, ctx, &command).await {
                error!("slash command {:?} failed: {err}", command.data.name);
            }
        }
        Interaction::Component(component) => {
            if let Err(err) = handle_component(state, ctx, &component).await {
                error!(
                    "component interaction {:?} failed: {err}",
                    component.data.custom_id
                );
            }
        }
        _ => {}
    }
}

async fn handle_component(
    state: &BotState,
    ctx: &Context,
    component: &ComponentInteraction,
) -> Result<(), crate::error::AppError> {
    let Some(guild_id) = component.guild_id else {
        return Ok(());
    };

    let presser_roles: Vec<u64> = component
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    let reply = control::handle(
        ctx,
        &state.db,
        guild_id.get(),
        component.user.id.get(),
        &presser_roles,
        &component.data.custom_id,
    )
    .await?;

    component
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(reply)
                    .ephemeral(true),
            ),
        )
        .await
        .map_err(Box::new)?;

    Ok(())
}
