// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject that replays its latest value.
//!
//! A [`FeedSubject`] broadcasts each value to all active subscribers and
//! remembers the most recent one.
//!
//! ## Characteristics
//!
//! - **Replay-latest**: a new subscriber first receives the most recent value
//!   (if any), then every value sent afterwards.
//! - **Unbounded**: uses unbounded mpsc channels internally (no backpressure).
//! - **Thread-safe**: cheap to clone; all clones share the same state.
//! - **Close**: closing completes every subscriber stream.
//!
//! ## Example
//!
//! ```
//! use livefeed_core::FeedSubject;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = FeedSubject::<i32>::new();
//! subject.send(1).unwrap();
//!
//! let mut stream = subject.subscribe().unwrap();
//! subject.send(2).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(1));
//! assert_eq!(stream.next().await, Some(2));
//! assert_eq!(stream.next().await, None);
//! # }
//! ```

use crate::{FeedError, Result};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

/// Stream handed out by [`FeedSubject::subscribe`].
pub type SubjectBoxStream<T> = Pin<Box<dyn Stream<Item = T> + Send + Sync + 'static>>;

struct SubjectState<T> {
    closed: bool,
    latest: Option<T>,
    senders: Vec<UnboundedSender<T>>,
}

// Sync-capable wrapper around the unbounded receiver of one subscription.
struct SubjectStream<T> {
    inner: Arc<Mutex<UnboundedReceiver<T>>>,
}

impl<T: Clone + Send + Sync + 'static> SubjectStream<T> {
    fn into_boxed_stream(rx: UnboundedReceiver<T>) -> SubjectBoxStream<T> {
        Box::pin(Self {
            inner: Arc::new(Mutex::new(rx)),
        })
    }
}

impl<T: Clone + Send + Sync + 'static> Stream for SubjectStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut guard = self.inner.lock();
        Pin::new(&mut *guard).poll_next(cx)
    }
}

/// A hot, unbounded subject that broadcasts values and replays the latest one.
///
/// See the [module documentation](self) for details.
pub struct FeedSubject<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> FeedSubject<T> {
    /// Creates an open subject with no subscribers and no latest value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                latest: None,
                senders: Vec::new(),
            })),
        }
    }

    /// Creates an open subject whose latest value is `initial`.
    #[must_use]
    pub fn with_latest(initial: T) -> Self {
        let subject = Self::new();
        subject.state.lock().latest = Some(initial);
        subject
    }

    /// Subscribe and receive the latest value followed by every later value.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Closed` if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectBoxStream<T>> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(FeedError::Closed);
        }

        let (tx, rx) = mpsc::unbounded();
        if let Some(latest) = &state.latest {
            // The receiver is alive, so this cannot fail
            let _ = tx.unbounded_send(latest.clone());
        }
        state.senders.push(tx);
        Ok(SubjectStream::into_boxed_stream(rx))
    }

    /// Record `value` as the latest and send it to all active subscribers.
    ///
    /// Subscribers whose streams were dropped are pruned here.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Closed` if the subject has been closed.
    pub fn send(&self, value: T) -> Result<()> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(FeedError::Closed);
        }

        state
            .senders
            .retain(|tx| tx.unbounded_send(value.clone()).is_ok());
        state.latest = Some(value);
        Ok(())
    }

    /// The most recently sent value, if any.
    #[must_use]
    pub fn latest(&self) -> Option<T> {
        self.state.lock().latest.clone()
    }

    /// Closes the subject, completing all subscriber streams. Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of subscribers seen alive at the last `send()`.
    ///
    /// Dropped subscribers are removed lazily, on the next send.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for FeedSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for FeedSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
