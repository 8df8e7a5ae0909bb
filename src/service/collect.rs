//! Reply collection sessions.
//!
//! Speech and ad commands prompt the actor and then suspend until the actor's
//! qualifying follow-up message arrives. The hub is the registry the
//! dispatcher's message handler feeds every inbound message into; each
//! suspended command holds a single-use waiter keyed by author and
//! correlation token. Exactly one qualifying reply is consumed per waiter; a
//! timeout invalidates the waiter so late replies fall through.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::debug;

use crate::error::ElectionError;
use crate::model::message::IncomingMessage;

/// Default collection window for speech and ad replies.
pub const COLLECT_TIMEOUT: Duration = Duration::from_secs(300);

type ReplyPredicate = Box<dyn Fn(&IncomingMessage) -> bool + Send + Sync>;

struct Waiter {
    id: u64,
    author_id: u64,
    correlation_token: String,
    qualifies: ReplyPredicate,
    tx: oneshot::Sender<IncomingMessage>,
}

impl Waiter {
    fn matches(&self, message: &IncomingMessage) -> bool {
        message.author_id == self.author_id
            && message.reference_token.as_deref() == Some(self.correlation_token.as_str())
            && (self.qualifies)(message)
    }
}

/// Registry of pending reply waiters for one bot process.
///
/// Shared between the dispatcher's message handler (which calls
/// [`deliver`](Self::deliver)) and suspended commands (which call
/// [`await_reply`](Self::await_reply)). Suspension never blocks other guilds'
/// commands; the waiting future simply parks on its channel.
pub struct CollectionHub {
    waiters: Mutex<Vec<Waiter>>,
    next_id: AtomicU64,
}

impl CollectionHub {
    pub fn new() -> Self {
        Self {
            waiters: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Offers an inbound message to the pending waiters.
    ///
    /// The first waiter whose author, correlation token, and predicate all
    /// match consumes the message and is removed. All other messages are
    /// ignored.
    ///
    /// # Returns
    /// - `true` - A waiter consumed the message
    /// - `false` - No waiter matched
    pub fn deliver(&self, message: &IncomingMessage) -> bool {
        let waiter = {
            let mut waiters = self.waiters.lock().expect("collection hub lock poisoned");
            match waiters.iter().position(|w| w.matches(message)) {
                Some(index) => waiters.remove(index),
                None => return false,
            }
        };

        debug!(
            author_id = message.author_id,
            token = %waiter.correlation_token,
            "collection reply consumed"
        );

        // The receiver may have been dropped by a concurrent timeout; the
        // message is discarded in that case.
        waiter.tx.send(message.clone()).is_ok()
    }

    /// Waits for the actor's next qualifying reply.
    ///
    /// Registers a single-use waiter and suspends until a message from
    /// `author_id` referencing `correlation_token` and satisfying `qualifies`
    /// is delivered, or the timeout elapses. On timeout the waiter is
    /// unregistered, so the pending prompt is invalidated and later replies
    /// are not consumed.
    ///
    /// # Arguments
    /// - `author_id`: Only messages from this user qualify
    /// - `correlation_token`: Token the reply must reference
    /// - `timeout`: Collection window (normally [`COLLECT_TIMEOUT`])
    /// - `qualifies`: Extra content requirement (e.g. has an attachment)
    ///
    /// # Returns
    /// - `Ok(IncomingMessage)`: The consumed reply
    /// - `Err(ElectionError::ContentTimeout)`: Window elapsed with no
    ///   qualifying reply
    pub async fn await_reply<F>(
        &self,
        author_id: u64,
        correlation_token: &str,
        timeout: Duration,
        qualifies: F,
    ) -> Result<IncomingMessage, ElectionError>
    where
        F: Fn(&IncomingMessage) -> bool + Send + Sync + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        {
            let mut waiters = self.waiters.lock().expect("collection hub lock poisoned");
            waiters.push(Waiter {
                id,
                author_id,
                correlation_token: correlation_token.to_string(),
                qualifies: Box::new(qualifies),
                tx,
            });
        }

        match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(message)) => Ok(message),
            // Either the window elapsed or the sender vanished; both
            // invalidate the prompt.
            Ok(Err(_)) => {
                self.remove(id);
                Err(ElectionError::ContentTimeout)
            }
            Err(_) => {
                self.remove(id);
                Err(ElectionError::ContentTimeout)
            }
        }
    }

    fn remove(&self, id: u64) {
        let mut waiters = self.waiters.lock().expect("collection hub lock poisoned");
        waiters.retain(|w| w.id != id);
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.waiters.lock().expect("collection hub lock poisoned").len()
    }
}

impl Default for CollectionHub {
    fn default() -> Self {
        Self::new()
    }
}
