//! The fire request channel between driver control and the launcher task.
//!
//! [`FireSignal`] is a counting notification: [`post`](FireSignal::post)
//! never blocks and can be called from any task, [`take`](FireSignal::take)
//! suspends the launcher task until a request is pending and consumes it.
//! Requests posted while a cycle is running stay pending until the launcher
//! is idle again.
//!
//! In [`SignalMode::Queue`] requests sit in an `embassy_sync` channel of
//! [`QUEUE_DEPTH`] slots; in [`SignalMode::Coalesce`] they share one
//! `embassy_sync` signal. vexide runs every task on one thread, so both use
//! [`NoopRawMutex`] behind an `Rc`. Only one task may await
//! [`take`](FireSignal::take) at a time.

use std::{fmt, rc::Rc};

use embassy_sync::{blocking_mutex::raw::NoopRawMutex, channel::Channel, signal::Signal};
use log::warn;

use super::SignalMode;

/// Requests a queueing signal holds before further posts are dropped.
pub const QUEUE_DEPTH: usize = 8;

enum Requests {
    Queue(Channel<NoopRawMutex, (), QUEUE_DEPTH>),
    Coalesce(Signal<NoopRawMutex, ()>),
}

/// A cloneable handle to a shared fire request channel.
#[derive(Clone)]
pub struct FireSignal {
    requests: Rc<Requests>,
}

impl FireSignal {
    /// Creates an empty signal with the given counting policy.
    pub fn new(mode: SignalMode) -> Self {
        let requests = match mode {
            SignalMode::Queue => Requests::Queue(Channel::new()),
            SignalMode::Coalesce => Requests::Coalesce(Signal::new()),
        };
        Self {
            requests: Rc::new(requests),
        }
    }

    /// Records a fire request and wakes the waiting launcher task.
    ///
    /// A queueing signal already holding [`QUEUE_DEPTH`] requests drops this
    /// one with a warning.
    pub fn post(&self) {
        match self.requests.as_ref() {
            Requests::Queue(channel) => {
                if channel.try_send(()).is_err() {
                    warn!("Fire Queue Full, request dropped");
                }
            }
            Requests::Coalesce(signal) => signal.signal(()),
        }
    }

    /// Consumes one pending request without waiting.
    ///
    /// Returns `false` if nothing was pending.
    pub fn try_take(&self) -> bool {
        match self.requests.as_ref() {
            Requests::Queue(channel) => channel.try_receive().is_ok(),
            Requests::Coalesce(signal) => signal.try_take().is_some(),
        }
    }

    /// Waits until a request is pending, then consumes it.
    pub async fn take(&self) {
        match self.requests.as_ref() {
            Requests::Queue(channel) => channel.receive().await,
            Requests::Coalesce(signal) => signal.wait().await,
        }
    }

    /// Number of requests waiting to be served.
    pub fn pending(&self) -> u32 {
        match self.requests.as_ref() {
            Requests::Queue(channel) => channel.len() as u32,
            Requests::Coalesce(signal) => u32::from(signal.signaled()),
        }
    }

    /// Drops every pending request.
    pub fn clear(&self) {
        match self.requests.as_ref() {
            Requests::Queue(channel) => channel.clear(),
            Requests::Coalesce(signal) => signal.reset(),
        }
    }

    /// The counting policy this signal was created with.
    pub fn mode(&self) -> SignalMode {
        match self.requests.as_ref() {
            Requests::Queue(_) => SignalMode::Queue,
            Requests::Coalesce(_) => SignalMode::Coalesce,
        }
    }
}

impl Default for FireSignal {
    fn default() -> Self { Self::new(SignalMode::default()) }
}

impl fmt::Debug for FireSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FireSignal")
            .field("mode", &self.mode())
            .field("pending", &self.pending())
            .finish()
    }
}
