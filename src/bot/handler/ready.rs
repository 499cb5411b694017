use serenity::client::Context;
use serenity::gateway::ActivityData;
use serenity::model::application::Command;
use serenity::model::gateway::Ready;
use tracing::{error, info};

use crate::bot::commands;

pub async fn handle(ctx: &Context, ready: &Ready) {
    info!("{} is connected", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("for new events")));

    if let Err(err) = Command::set_global_commands(&ctx.http, commands::create_commands()).await {
        error!("failed to register slash commands: {err}");
    }
}
