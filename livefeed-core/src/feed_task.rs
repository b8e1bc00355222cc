// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task spawning with cooperative cancellation.

use crate::CancellationToken;
use core::future::Future;

/// Handle to a spawned background task that is cancelled on drop.
///
/// The spawned future receives a `CancellationToken`; it is expected to watch
/// the token and return once it fires. Dropping the handle, or calling
/// [`cancel`](FeedTask::cancel), signals the token without waiting for the task.
///
/// # Example
///
/// ```rust
/// use livefeed_core::FeedTask;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = FeedTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
/// });
///
/// task.cancel();
/// assert!(task.is_cancelled());
/// # }
/// ```
#[derive(Debug)]
pub struct FeedTask {
    cancel: CancellationToken,
}

impl FeedTask {
    /// Spawn `f` on the tokio runtime, handing it a fresh cancellation token.
    ///
    /// Must be called from within a tokio runtime.
    #[cfg(feature = "runtime-tokio")]
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        tokio::spawn(f(cancel.clone()));
        Self { cancel }
    }

    /// Signal the task to stop. Does not wait for it to finish.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// A clone of the token observed by the task.
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Drop for FeedTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
