use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::TrackerConfig;
use crate::errors::TrackerError;
use crate::events;
use crate::map::{MapFrame, MapView};
use crate::position::{Observer, Position};
use crate::provider::{HttpProvider, PositionProvider, ProviderError};
use crate::tracker::state::TrackerSnapshot;

/// Refresh interval between fetches (5 seconds).
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// A mounted tracker.
///
/// Owns the polling task and its cancellation token. The token is cancelled
/// exactly once: by [`TrackerView::unmount`], or by `Drop` if the view is
/// discarded without unmounting.
pub struct TrackerView {
    snapshot: watch::Receiver<TrackerSnapshot>,
    map: MapView,
    cancel: CancellationToken,
    /// Handle to the polling task. Awaited on unmount so teardown is observable.
    task: Option<JoinHandle<()>>,
}

impl TrackerView {
    /// Mount the view: fetch now, then every `interval`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, like `tokio::spawn`.
    pub fn mount(provider: Arc<dyn PositionProvider>, interval: Duration, map: MapView) -> Self {
        let (tx, rx) = watch::channel(TrackerSnapshot::default());
        let cancel = CancellationToken::new();

        events::log_tracker_mounted(&provider.describe(), interval);

        let poller = Poller {
            provider,
            snapshot: tx,
            cancel: cancel.clone(),
            observer: map.observer(),
            overhead: false,
        };
        let task = tokio::spawn(poller.run(interval));

        Self {
            snapshot: rx,
            map,
            cancel,
            task: Some(task),
        }
    }

    /// Mount a view wired to the HTTP provider described by `config`.
    pub fn from_config(config: &TrackerConfig) -> Result<Self, ProviderError> {
        let provider = HttpProvider::new(config.provider.endpoint(), config.provider.timeout())?;
        Ok(Self::mount(
            Arc::new(provider),
            config.poll.interval(),
            MapView::from_config(config),
        ))
    }

    pub fn position(&self) -> Position {
        self.snapshot.borrow().position
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        self.snapshot.borrow().clone()
    }

    /// A receiver that is notified after every completed fetch.
    pub fn subscribe(&self) -> watch::Receiver<TrackerSnapshot> {
        self.snapshot.clone()
    }

    /// Render the map centered on the current position.
    pub fn render(&self) -> MapFrame {
        self.map.render(&self.snapshot.borrow())
    }

    pub fn is_mounted(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Cancel the recurring fetch and wait for the polling task to exit.
    ///
    /// An in-flight request is dropped rather than awaited.
    pub async fn unmount(mut self) {
        self.release();
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            warn!(
                event = "core.tracker.task_join_failed",
                error = %e,
            );
        }
    }

    fn release(&mut self) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.cancel.cancel();
        events::log_tracker_unmounted(self.snapshot.borrow().completed_ticks);
    }
}

impl Drop for TrackerView {
    fn drop(&mut self) {
        self.release();
    }
}

/// The background half of a [`TrackerView`].
struct Poller {
    provider: Arc<dyn PositionProvider>,
    snapshot: watch::Sender<TrackerSnapshot>,
    cancel: CancellationToken,
    observer: Option<Observer>,
    /// Whether the last accepted position was overhead the observer.
    overhead: bool,
}

impl Poller {
    /// Fetch once per `interval` until cancelled.
    ///
    /// Fetches are serialized: the next tick is not awaited until the current
    /// fetch has finished. A tick that comes due during a slow fetch fires
    /// when it completes; missed ticks are not queued up.
    async fn run(mut self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            if !self.fetch_position().await {
                break;
            }
        }

        debug!(event = "core.tracker.poll_loop_stopped");
    }

    /// Run one fetch and commit its outcome.
    ///
    /// Returns `false` if the view was torn down while the request was in
    /// flight; nothing is committed in that case.
    async fn fetch_position(&mut self) -> bool {
        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return false,
            result = self.provider.fetch() => result,
        };

        if self.cancel.is_cancelled() {
            return false;
        }

        match result {
            Ok(position) => {
                debug!(
                    event = "core.tracker.position_updated",
                    latitude = position.latitude(),
                    longitude = position.longitude(),
                );
                self.track_overhead(&position);
                self.snapshot
                    .send_modify(|snapshot| snapshot.record_success(position, Utc::now()));
            }
            Err(e) => {
                warn!(
                    event = "core.tracker.fetch_failed",
                    provider = %self.provider.describe(),
                    error = %e,
                    error_code = e.error_code(),
                );
                self.snapshot.send_modify(TrackerSnapshot::record_failure);
            }
        }

        true
    }

    /// Log when `position` crosses the observer's overhead threshold.
    ///
    /// Returns the new state on a crossing, `None` otherwise.
    fn track_overhead(&mut self, position: &Position) -> Option<bool> {
        let observer = self.observer?;
        let overhead = observer.is_overhead(position);
        if overhead == self.overhead {
            return None;
        }

        self.overhead = overhead;
        events::log_overhead_changed(&observer, overhead, observer.distance_km(position));
        Some(overhead)
    }
}
