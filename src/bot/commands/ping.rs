use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::Context;
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;

use crate::error::AppError;

pub async fn run_slash(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content("Pong!"),
            ),
        )
        .await
        .map_err(Box::new)?;
    Ok(())
}

pub async fn run_prefixed(ctx: &Context, message: &Message) -> Result<(), AppError> {
    message.channel_id.say(&ctx.http, "Pong!").await?;
    Ok(())
}
