//! Debounced refresh trigger.
//!
//! Gateway events such as members joining or leaving voice arrive in bursts. Each
//! trigger cancels the refresh still waiting out its delay and starts a new timer, so
//! a burst results in a single refresh once it has settled. A refresh that has
//! already started is never cancelled.

use serenity::async_trait;
use std::{sync::Arc, time::Duration};
use tokio::{sync::Mutex, task::JoinHandle};

/// Something that can be refreshed out of band.
#[async_trait]
pub trait Refresh: Send + Sync + 'static {
    async fn refresh(&self);
}

/// Coalesces bursts of refresh requests into one refresh.
pub struct DebouncedRefresh<R: Refresh> {
    target: Arc<R>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<R: Refresh> DebouncedRefresh<R> {
    pub fn new(target: Arc<R>) -> Self {
        Self {
            target,
            pending: Mutex::new(None),
        }
    }

    /// Schedules a refresh after `delay`, cancelling any refresh still waiting.
    ///
    /// With a zero delay the refresh starts as soon as the runtime polls it.
    pub async fn trigger(&self, delay: Duration) {
        let mut pending = self.pending.lock().await;

        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let target = self.target.clone();
        *pending = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            // detached, aborting the timer must not cancel a running refresh
            tokio::spawn(async move { target.refresh().await });
        }));
    }
}
