use serenity::client::Context;
use serenity::model::channel::Message;
use tracing::error;

use crate::bot::commands;
use crate::bot::start::BotState;

/// Routes every incoming message: dialogue replies first, then prefix commands.
///
/// A message consumed by a waiting dialogue never reaches command parsing, so
/// an answer that happens to start with the command prefix is still treated as
/// an answer.
pub async fn handle(state: &BotState, ctx: &Context, message: &Message) {
    if message.author.bot {
        return;
    }

    if state.dispatcher.dispatch(message) {
        return;
    }

    let Some(rest) = message.content.strip_prefix(&state.options.prefix) else {
        return;
    };
    let rest = rest.trim_start();

    let name = rest.split_whitespace().next().unwrap_or_default();
    let argument = rest[name.len()..].trim();

    if let Err(err) = commands::dispatch_prefixed(state, ctx, message, name, argument).await {
        error!("prefix command {name:?} failed: {err}");
        let _ = message
            .channel_id
            .say(&ctx.http, "Something went wrong running that command.")
            .await;
    }
}
