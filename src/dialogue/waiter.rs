use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serenity::model::channel::Message;
use tokio::sync::oneshot;

/// Outcome of waiting for a user's next message in a channel.
pub enum WaitResult {
    /// The user sent a message before the deadline.
    Message(Box<Message>),
    /// The deadline passed with no matching message.
    TimedOut,
}

struct PendingWait {
    token: u64,
    user_id: u64,
    channel_id: u64,
    sender: oneshot::Sender<Box<Message>>,
}

/// Routes incoming Discord messages to tasks waiting on a reply.
///
/// A dialogue task registers interest in the next message from a specific user in a
/// specific channel, then awaits it with a deadline. The message event handler feeds
/// every non-bot message through [`MessageDispatcher::dispatch`]; a matched message is
/// consumed by the waiter and never reaches command parsing.
///
/// The dispatcher also tracks active dialogue sessions so a user cannot start a second
/// wizard in the same channel while one is already running.
pub struct MessageDispatcher {
    next_token: AtomicU64,
    waiters: Mutex<Vec<PendingWait>>,
    sessions: Mutex<HashSet<(u64, u64)>>,
}

impl MessageDispatcher {
    pub fn new() -> Self {
        Self {
            next_token: AtomicU64::new(1),
            waiters: Mutex::new(Vec::new()),
            sessions: Mutex::new(HashSet::new()),
        }
    }

    /// Offers an incoming message to pending waiters.
    ///
    /// # Returns
    /// - `true`: A waiter consumed the message; skip command parsing
    /// - `false`: No waiter matched
    pub fn dispatch(&self, message: &Message) -> bool {
        let user_id = message.author.id.get();
        let channel_id = message.channel_id.get();

        let waiter = {
            let mut waiters = self.waiters.lock();
            let position = waiters
                .iter()
                .position(|w| w.user_id == user_id && w.channel_id == channel_id);
            position.map(|index| waiters.swap_remove(index))
        };

        match waiter {
            Some(waiter) => {
                // A closed receiver means the waiting task already timed out or
                // dropped; the message falls through to command parsing.
                waiter.sender.send(Box::new(message.clone())).is_ok()
            }
            None => false,
        }
    }

    /// Waits for the next message from `user_id` in `channel_id`.
    pub async fn await_reply(
        &self,
        user_id: u64,
        channel_id: u64,
        timeout: Duration,
    ) -> WaitResult {
        let token = self.next_token.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = oneshot::channel();

        self.waiters.lock().push(PendingWait {
            token,
            user_id,
            channel_id,
            sender,
        });

        let guard = WaitGuard {
            dispatcher: self,
            token,
        };

        let result = match tokio::time::timeout(timeout, receiver).await {
            Ok(Ok(message)) => WaitResult::Message(message),
            Ok(Err(_)) | Err(_) => WaitResult::TimedOut,
        };

        drop(guard);
        result
    }

    /// Claims a dialogue session slot for a user in a channel.
    ///
    /// # Returns
    /// - `Some(SessionClaim)`: Slot claimed; released when the claim is dropped
    /// - `None`: A dialogue with this user is already running in this channel
    pub fn try_claim(self: &Arc<Self>, user_id: u64, channel_id: u64) -> Option<SessionClaim> {
        let mut sessions = self.sessions.lock();
        if !sessions.insert((user_id, channel_id)) {
            return None;
        }

        Some(SessionClaim {
            dispatcher: Arc::clone(self),
            user_id,
            channel_id,
        })
    }

    fn remove_waiter(&self, token: u64) {
        self.waiters.lock().retain(|w| w.token != token);
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.waiters.lock().len()
    }
}

impl Default for MessageDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes the registered waiter if the waiting task is cancelled before a
/// message arrives.
struct WaitGuard<'a> {
    dispatcher: &'a MessageDispatcher,
    token: u64,
}

impl Drop for WaitGuard<'_> {
    fn drop(&mut self) {
        self.dispatcher.remove_waiter(self.token);
    }
}

/// Exclusive hold on a (user, channel) dialogue slot.
pub struct SessionClaim {
    dispatcher: Arc<MessageDispatcher>,
    user_id: u64,
    channel_id: u64,
}

impl Drop for SessionClaim {
    fn drop(&mut self) {
        self.dispatcher
            .sessions
            .lock()
            .remove(&(self.user_id, self.channel_id));
    }
}
