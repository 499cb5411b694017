use serenity::client::Context;
use serenity::model::event::{GuildScheduledEventUserAddEvent, GuildScheduledEventUserRemoveEvent};
use tracing::error;

use crate::bot::start::BotState;
use crate::service::event_sync::EventSync;

pub async fn user_added(state: &BotState, ctx: &Context, event: &GuildScheduledEventUserAddEvent) {
    let sync = EventSync::new(&state.db, ctx.http.clone());
    if let Err(err) = sync
        .rsvp_added(event.scheduled_event_id.get(), event.user_id.get())
        .await
    {
        error!("failed to grant attendee role on RSVP: {err}");
    }
}

pub async fn user_removed(
    state: &BotState,
    ctx: &Context,
    event: &GuildScheduledEventUserRemoveEvent,
) {
    let sync = EventSync::new(&state.db, ctx.http.clone());
    if let Err(err) = sync
        .rsvp_removed(event.scheduled_event_id.get(), event.user_id.get())
        .await
    {
        error!("failed to remove attendee role on RSVP withdrawal: {err}");
    }
}
