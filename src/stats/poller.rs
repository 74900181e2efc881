use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, warn};

use crate::client::source::FrameSource;
use crate::config::Config;
use crate::error::Result;
use crate::stats::tracker::StatsTracker;

pub struct StatsPoller {
    source: Arc<RwLock<dyn FrameSource>>,
    tracker: Arc<RwLock<StatsTracker>>,
    interval: Duration,
    shutdown: Option<watch::Sender<bool>>,
    handle: Option<JoinHandle<()>>,
}

impl StatsPoller {
    pub fn new(
        source: Arc<RwLock<dyn FrameSource>>,
        tracker: Arc<RwLock<StatsTracker>>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            tracker,
            interval,
            shutdown: None,
            handle: None,
        }
    }

    pub fn from_config(
        source: Arc<RwLock<dyn FrameSource>>,
        tracker: Arc<RwLock<StatsTracker>>,
        config: &Config,
    ) -> Self {
        Self::new(source, tracker, config.polling_interval)
    }

    pub async fn start(&mut self) -> Result<()> {
        if self.handle.is_some() {
            return Ok(());
        }

        self.source.write().await.open().await?;

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let source = Arc::clone(&self.source);
        let tracker = Arc::clone(&self.tracker);
        let poll_interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = interval(poll_interval);

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {
                        poll_once(&source, &tracker).await;
                    }
                }
            }
        });

        self.shutdown = Some(shutdown_tx);
        self.handle = Some(handle);
        debug!(interval_ms = self.interval.as_millis() as u64, "stats polling started");
        Ok(())
    }

    // Waits for the poll task to exit before releasing the source, so no
    // delivery lands on the tracker after this returns.
    pub async fn stop(&mut self) -> Result<()> {
        if let Some(handle) = self.handle.take() {
            if let Some(shutdown) = self.shutdown.take() {
                let _ = shutdown.send(true);
            }
            let _ = handle.await;

            self.source.write().await.close().await?;
            debug!("stats polling stopped");
        }

        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

async fn poll_once(source: &Arc<RwLock<dyn FrameSource>>, tracker: &Arc<RwLock<StatsTracker>>) {
    let source = source.read().await;

    if !source.is_open().await {
        warn!("frame source is closed, recording gap");
        tracker.write().await.pause();
        return;
    }

    match source.fetch_stats().await {
        Ok(frame) => {
            if let Err(e) = tracker.write().await.append(&frame) {
                warn!(error = %e, "dropping malformed stats frame");
            }
        }
        Err(e) => {
            warn!(error = %e, "stats fetch failed, recording gap");
            tracker.write().await.pause();
        }
    }
}
