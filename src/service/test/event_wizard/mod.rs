use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

use crate::error::AppError;
use crate::service::event_wizard::{EventWizard, GuildUsage, Invoker};
use crate::test_support::{FakeProvisioner, FixtureDirectory, ScriptedChat};

mod admission;
mod capacity;
mod cancel;
mod duplicate_short_name;
mod full_flow;
mod reprompt;

const GUILD: u64 = 77;

fn admin_invoker() -> Invoker {
    Invoker {
        user_id: 42,
        channel_id: 1001,
        guild_id: GUILD,
        is_admin: true,
        role_ids: Vec::new(),
    }
}

fn member_invoker(role_ids: Vec<u64>) -> Invoker {
    Invoker {
        user_id: 42,
        channel_id: 1001,
        guild_id: GUILD,
        is_admin: false,
        role_ids,
    }
}

fn roomy_guild() -> GuildUsage {
    GuildUsage {
        channel_count: 20,
        role_count: 15,
    }
}

/// The scripted replies for a complete, valid run (admin variant, with the
/// cosmetic role prompt skipped).
fn happy_path_replies() -> Vec<Option<&'static str>> {
    vec![
        Some("Launch Party"),
        Some("Join us"),
        Some("LP1"),
        Some("12/31/2030 20:00:00"),
        Some("02:00:00"),
        Some("skip"),
        Some("skip"),
        Some("skip"),
    ]
}
