//! Scripted fakes for exercising dialogue and wizard flows without a gateway.

use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::dialogue::chat::{Chat, GuildDirectory, Reply};
use crate::error::AppError;
use crate::model::event::EventDraft;
use crate::service::provision::{ProvisionEvent, ProvisionedResources};

/// [`Chat`] that replays a scripted list of user replies.
///
/// Each queued `Some(text)` is one user message; a queued `None` (or running
/// out of script) is a reply deadline expiring. Everything the code under test
/// says is recorded for assertions.
pub struct ScriptedChat {
    replies: Mutex<VecDeque<Option<String>>>,
    pub sent: Mutex<Vec<String>>,
    next_status_id: AtomicU64,
    pub status_edits: Mutex<Vec<(u64, String)>>,
}

impl ScriptedChat {
    pub fn new<I>(replies: I) -> Self
    where
        I: IntoIterator<Item = Option<&'static str>>,
    {
        Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|reply| reply.map(str::to_string))
                    .collect(),
            ),
            sent: Mutex::new(Vec::new()),
            next_status_id: AtomicU64::new(1),
            status_edits: Mutex::new(Vec::new()),
        }
    }

    pub fn sent_messages(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    pub fn last_status_edit(&self) -> Option<String> {
        self.status_edits
            .lock()
            .last()
            .map(|(_, content)| content.clone())
    }
}

#[async_trait]
impl Chat for ScriptedChat {
    async fn say(&self, content: &str) -> Result<(), AppError> {
        self.sent.lock().push(content.to_string());
        Ok(())
    }

    async fn next_reply(&self) -> Result<Option<Reply>, AppError> {
        match self.replies.lock().pop_front() {
            Some(Some(content)) => Ok(Some(Reply { content })),
            Some(None) | None => Ok(None),
        }
    }

    async fn send_status(&self, content: &str) -> Result<u64, AppError> {
        self.sent.lock().push(content.to_string());
        Ok(self.next_status_id.fetch_add(1, Ordering::Relaxed))
    }

    async fn edit_status(&self, message_id: u64, content: &str) -> Result<(), AppError> {
        self.status_edits
            .lock()
            .push((message_id, content.to_string()));
        Ok(())
    }
}

/// [`GuildDirectory`] over fixed sets of role and member IDs.
pub struct FixtureDirectory {
    roles: HashSet<u64>,
    members: HashSet<u64>,
}

impl FixtureDirectory {
    pub fn new<R, M>(roles: R, members: M) -> Self
    where
        R: IntoIterator<Item = u64>,
        M: IntoIterator<Item = u64>,
    {
        Self {
            roles: roles.into_iter().collect(),
            members: members.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new([], [])
    }
}

#[async_trait]
impl GuildDirectory for FixtureDirectory {
    async fn role_exists(&self, role_id: u64) -> Result<bool, AppError> {
        Ok(self.roles.contains(&role_id))
    }

    async fn member_exists(&self, user_id: u64) -> Result<bool, AppError> {
        Ok(self.members.contains(&user_id))
    }
}

/// [`ProvisionEvent`] that hands out fixed resource IDs, or fails on demand.
pub struct FakeProvisioner {
    fail: bool,
    calls: AtomicU64,
}

impl FakeProvisioner {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: AtomicU64::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicU64::new(0),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ProvisionEvent for FakeProvisioner {
    async fn provision(&self, _draft: &EventDraft) -> Result<ProvisionedResources, AppError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        if self.fail {
            return Err(crate::error::internal::InternalError::Provisioning(
                "scripted failure".to_string(),
            )
            .into());
        }

        Ok(ProvisionedResources {
            scheduled_event_id: 9001,
            category_id: 9100,
            text_channel_id: 9101,
            voice_channel_id: 9102,
            control_channel_id: 9103,
            steward_role_id: 9201,
            speaker_role_id: 9202,
            attendee_role_id: 9203,
            control_panel_message_id: 9301,
            event_panel_message_id: 9302,
        })
    }
}
