//! Test factory for creating Serenity Message objects.
//!
//! This module provides a factory function for creating mock Serenity `Message`
//! structs for testing purposes. The factory creates a valid Message object by
//! deserializing JSON, simulating what Discord's gateway would deliver.

use serenity::all::Message;

/// Creates a test Serenity Message with customizable fields.
///
/// Creates a Message object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (no mentions, no embeds,
/// not pinned, regular message type, non-bot author).
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was sent in
/// - `author_id` - User that sent the message
/// - `content` - Raw message content
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": author_id.to_string(),
            "username": "tester",
            "discriminator": null,
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "content": content,
        "timestamp": "2026-01-01T00:00:00Z",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "activity": null,
        "application": null,
        "application_id": null,
        "message_reference": null,
        "flags": null,
        "referenced_message": null,
        "interaction": null,
        "thread": null,
        "components": [],
        "sticker_items": [],
        "position": null,
        "role_subscription_data": null,
        "guild_id": null,
        "member": null,
        "nonce": null,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
