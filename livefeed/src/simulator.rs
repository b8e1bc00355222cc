// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The live activity feed simulator.
//!
//! An [`ActivityFeedSimulator`] emits one synthetic event per interval while
//! running and keeps the most recent events in a [`BoundedLog`]. Every change
//! to the log is published as a newest-first snapshot to all subscribers.
//!
//! ## Lifecycle
//!
//! ```text
//!            start()
//!  Stopped ----------> Running
//!     ^                   |
//!     +-------------------+
//!            stop()
//! ```
//!
//! `start()` and `stop()` are idempotent. The first tick is due one interval
//! after `start()`. Dropping the simulator stops it and completes all
//! subscriber streams.
//!
//! ## Example
//!
//! ```rust
//! use livefeed::{ActivityFeedSimulator, FeedConfig, TokioTimer};
//! use futures::StreamExt;
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() -> livefeed::Result<()> {
//! let config = FeedConfig::default()
//!     .with_interval(Duration::from_secs(10))
//!     .with_rng_seed(7);
//! let feed = ActivityFeedSimulator::launch(config, TokioTimer)?;
//! let mut snapshots = feed.subscribe()?;
//!
//! // The current (empty) log is replayed first
//! assert_eq!(snapshots.next().await.map(|s| s.len()), Some(0));
//!
//! // Then one snapshot per tick
//! let snapshot = snapshots.next().await.unwrap_or_default();
//! assert_eq!(snapshot.len(), 1);
//!
//! feed.stop();
//! # Ok(())
//! # }
//! ```

use crate::bounded_log::BoundedLog;
use crate::config::FeedConfig;
use crate::event::ActivityEvent;
use crate::generator::EventGenerator;
use crate::stats::FeedStats;
use core::pin::pin;
use core::time::Duration;
use futures::future::{select, Either};
use livefeed_core::{CancellationToken, FeedError, FeedSubject, FeedTask, Result, SubjectBoxStream};
use livefeed_runtime::Timer;
use parking_lot::Mutex;
use std::sync::Arc;

/// Newest-first copy of the log handed to subscribers.
pub type FeedSnapshot<I> = Vec<ActivityEvent<I>>;

/// Stream of snapshots returned by [`ActivityFeedSimulator::subscribe`].
pub type SnapshotStream<I> = SubjectBoxStream<FeedSnapshot<I>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    Running,
    Stopped,
}

struct FeedState<I> {
    log: BoundedLog<ActivityEvent<I>>,
    generator: EventGenerator,
    emitted: u64,
    evicted: u64,
}

struct Shared<TM: Timer> {
    timer: TM,
    state: Mutex<FeedState<TM::Instant>>,
    subject: FeedSubject<FeedSnapshot<TM::Instant>>,
}

impl<TM: Timer> Shared<TM> {
    fn tick(&self) -> ActivityEvent<TM::Instant> {
        let mut state = self.state.lock();
        self.tick_locked(&mut state)
    }

    // The token is checked under the lock so no tick lands after stop() returns
    fn tick_unless_cancelled(&self, cancel: &CancellationToken) -> bool {
        let mut state = self.state.lock();
        if cancel.is_cancelled() {
            return false;
        }
        self.tick_locked(&mut state);
        true
    }

    fn tick_locked(&self, state: &mut FeedState<TM::Instant>) -> ActivityEvent<TM::Instant> {
        let event = state.generator.next_event(self.timer.now());
        state.emitted += 1;

        if let Some(evicted) = state.log.push(event.clone()) {
            state.evicted += 1;
            debug!("activity feed: evicted event {}", evicted.id());
        }
        debug!(
            "activity feed: tick emitted {} event {}",
            event.kind(),
            event.id()
        );

        match self.subject.send(state.log.to_vec()) {
            Ok(()) => {}
            Err(FeedError::Closed) => debug!("activity feed: snapshot dropped, feed is closed"),
            Err(error) => warn!("activity feed: failed to publish snapshot: {}", error),
        }
        event
    }
}

/// Periodic generator of synthetic activity events with a bounded log.
///
/// See the [module documentation](self) for the lifecycle and an example.
pub struct ActivityFeedSimulator<TM: Timer> {
    shared: Arc<Shared<TM>>,
    config: FeedConfig,
    task: Mutex<Option<FeedTask>>,
}

impl<TM: Timer> ActivityFeedSimulator<TM> {
    /// Creates a stopped simulator.
    ///
    /// With `seed_history` set, the log starts with one sample event per kind.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if `config` does not validate.
    pub fn new(config: FeedConfig, timer: TM) -> Result<Self> {
        if let Err(error) = config.validate() {
            warn!("activity feed: rejected configuration: {}", error);
            return Err(error);
        }

        let mut generator = EventGenerator::from_config(&config)?;
        let mut log = BoundedLog::new(config.capacity)?;
        let mut evicted = 0;
        if config.seed_history {
            for event in generator.seed_history(timer.now()) {
                if log.push(event).is_some() {
                    evicted += 1;
                }
            }
        }

        let subject = FeedSubject::with_latest(log.to_vec());
        let shared = Shared {
            timer,
            state: Mutex::new(FeedState {
                log,
                generator,
                emitted: 0,
                evicted,
            }),
            subject,
        };

        Ok(Self {
            shared: Arc::new(shared),
            config,
            task: Mutex::new(None),
        })
    }

    /// Creates a simulator and starts it.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if `config` does not validate.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn launch(config: FeedConfig, timer: TM) -> Result<Self> {
        let simulator = Self::new(config, timer)?;
        simulator.start();
        Ok(simulator)
    }

    /// Enables periodic emission. Does nothing if already running.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(&self) {
        let mut task = self.task.lock();
        self.start_locked(&mut task);
    }

    /// Disables periodic emission. Does nothing if already stopped.
    pub fn stop(&self) {
        let mut task = self.task.lock();
        Self::stop_locked(&self.shared, &mut task);
    }

    /// Flips between running and stopped, returning the new state.
    ///
    /// # Panics
    ///
    /// Panics if it needs to start and is called outside a tokio runtime.
    pub fn toggle(&self) -> SimulatorState {
        let mut task = self.task.lock();
        if task.is_some() {
            Self::stop_locked(&self.shared, &mut task);
            SimulatorState::Stopped
        } else {
            self.start_locked(&mut task);
            SimulatorState::Running
        }
    }

    /// Runs one generation step now and returns the new event.
    ///
    /// This is the step the running simulator performs once per interval; it
    /// can also be called directly, whether running or not.
    pub fn tick(&self) -> ActivityEvent<TM::Instant> {
        self.shared.tick()
    }

    #[must_use]
    pub fn state(&self) -> SimulatorState {
        if self.task.lock().is_some() {
            SimulatorState::Running
        } else {
            SimulatorState::Stopped
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state() == SimulatorState::Running
    }

    /// The current log, newest first.
    #[must_use]
    pub fn snapshot(&self) -> FeedSnapshot<TM::Instant> {
        self.shared.state.lock().log.to_vec()
    }

    /// Number of events currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state.lock().log.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribes to log changes.
    ///
    /// The stream yields the current snapshot first, then one snapshot per
    /// change. It ends when the simulator is dropped.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Closed` if the feed has been torn down.
    pub fn subscribe(&self) -> Result<SnapshotStream<TM::Instant>> {
        self.shared.subject.subscribe()
    }

    #[must_use]
    pub fn stats(&self) -> FeedStats {
        let state = self.shared.state.lock();
        FeedStats::collect(&state.log, state.emitted, state.evicted)
    }

    #[must_use]
    pub const fn config(&self) -> &FeedConfig {
        &self.config
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.config.interval
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.config.capacity
    }

    #[must_use]
    pub fn timer(&self) -> &TM {
        &self.shared.timer
    }

    fn start_locked(&self, task: &mut Option<FeedTask>) {
        if task.is_some() {
            debug!("activity feed: start ignored, already running");
            return;
        }

        let shared = Arc::clone(&self.shared);
        let interval = self.config.interval;
        let first_deadline = shared.timer.now() + interval;
        *task = Some(FeedTask::spawn(move |cancel| {
            run_ticker(shared, interval, first_deadline, cancel)
        }));
        info!("activity feed: started, ticking every {:?}", interval);
    }

    fn stop_locked(shared: &Shared<TM>, task: &mut Option<FeedTask>) {
        match task.take() {
            Some(running) => {
                running.cancel();
                // Waits out a tick that passed its cancellation check before cancel()
                drop(shared.state.lock());
                info!("activity feed: stopped");
            }
            None => debug!("activity feed: stop ignored, already stopped"),
        }
    }
}

impl<TM: Timer> Drop for ActivityFeedSimulator<TM> {
    fn drop(&mut self) {
        Self::stop_locked(&self.shared, self.task.get_mut());
        self.shared.subject.close();
    }
}

// Fixed-rate schedule: deadlines advance by exactly one interval, so a late
// wake-up delivers the missed ticks back to back.
async fn run_ticker<TM: Timer>(
    shared: Arc<Shared<TM>>,
    interval: Duration,
    first_deadline: TM::Instant,
    cancel: CancellationToken,
) {
    let mut deadline = first_deadline;
    loop {
        let remaining = TM::saturating_elapsed(shared.timer.now(), deadline);
        let cancelled = pin!(cancel.cancelled());
        let sleep = pin!(shared.timer.sleep_future(remaining));

        if let Either::Left(_) = select(cancelled, sleep).await {
            break;
        }
        if !shared.tick_unless_cancelled(&cancel) {
            break;
        }
        deadline = deadline + interval;
    }
}
