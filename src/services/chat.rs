//! Scripted driver chat.
//!
//! Every user message schedules a reply timer. When a timer fires and the last
//! message in the log is still the user's, the driver answers that message
//! with a canned line. [`ReplyPolicy`] decides what happens to timers that are
//! still pending when the user sends again.

use crate::config::ReplyPolicy;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// Reply to messages mentioning "confirmar"
pub const CONFIRMED_REPLY: &str = "Sí, el servicio está confirmado. ¿Algo más?";
/// Reply to messages mentioning "hola"
pub const GREETING_REPLY: &str = "¡Hola! ¿En qué puedo ayudarte?";
/// Reply to everything else
pub const DEFAULT_REPLY: &str = "Gracias por tu mensaje. Estoy revisando tu solicitud.";

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Driver,
}

/// One chat bubble
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub author: Author,
    /// `hh:mm AM/PM`
    pub timestamp: String,
    pub emojis: Vec<String>,
}

impl Message {
    pub fn new(text: impl Into<String>, author: Author) -> Self {
        Self {
            text: text.into(),
            author,
            timestamp: timestamp_now(),
            emojis: Vec::new(),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.author == Author::User
    }
}

/// Local time as `hh:mm AM/PM`
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%I:%M %p").to_string()
}

/// The driver's answer to `text`. "confirmar" wins over "hola".
pub fn canned_reply(text: &str) -> &'static str {
    let text = text.to_lowercase();
    if text.contains("confirmar") {
        CONFIRMED_REPLY
    } else if text.contains("hola") {
        GREETING_REPLY
    } else {
        DEFAULT_REPLY
    }
}

type MessageLog = Arc<Mutex<Vec<Message>>>;

fn lock(log: &MessageLog) -> MutexGuard<'_, Vec<Message>> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Message log shared between the chat screen and its reply timers.
///
/// Dropping the session cancels every pending reply.
pub struct ChatSession {
    messages: MessageLog,
    pending: Vec<JoinHandle<()>>,
    runtime: Handle,
    delay: Duration,
    policy: ReplyPolicy,
}

impl ChatSession {
    /// Empty conversation whose reply timers run on `runtime`
    pub fn new(runtime: Handle, delay: Duration, policy: ReplyPolicy) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            pending: Vec::new(),
            runtime,
            delay,
            policy,
        }
    }

    /// Append a user message and schedule the reply. Blank text is ignored.
    pub fn send(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        lock(&self.messages).push(Message::new(text, Author::User));

        self.pending.retain(|timer| !timer.is_finished());
        if self.policy == ReplyPolicy::Restart {
            for timer in self.pending.drain(..) {
                timer.abort();
            }
        }

        let messages = Arc::clone(&self.messages);
        let delay = self.delay;
        debug!("Scheduling driver reply in {:?}", delay);
        self.pending.push(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let mut log = lock(&messages);
            let reply = match log.last() {
                Some(last) if last.is_from_user() => canned_reply(&last.text),
                _ => return,
            };
            debug!("Driver replies: {}", reply);
            log.push(Message::new(reply, Author::Driver));
        }));
        true
    }

    /// Snapshot of the conversation, oldest first
    pub fn messages(&self) -> Vec<Message> {
        lock(&self.messages).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.messages).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a reply timer is still running
    pub fn has_pending_reply(&self) -> bool {
        self.pending.iter().any(|timer| !timer.is_finished())
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        for timer in &self.pending {
            timer.abort();
        }
    }
}
