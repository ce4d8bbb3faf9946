//! Per-status request counters with a rolling one-second window.
//! Used by: middleware, handlers::stats, state.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::task::JoinHandle;

use super::snapshot::StatsSnapshot;

pub const RESET_INTERVAL: Duration = Duration::from_secs(1);

pub struct Stats {
    started_at: Instant,
    pid: u32,
    counters: RwLock<Counters>,
}

#[derive(Default)]
struct Counters {
    window: BTreeMap<String, u64>,
    total: BTreeMap<String, u64>,
    total_response_time: Duration,
}

/// An in-flight request. Status stays 200 unless the handler sets one.
#[derive(Debug, Clone, Copy)]
pub struct Scope {
    started: Instant,
    status: u16,
}

impl Scope {
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn started(&self) -> Instant {
        self.started
    }
}

impl Stats {
    /// Recorder without a reset task; the window only clears on `reset_window`.
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            pid: std::process::id(),
            counters: RwLock::new(Counters::default()),
        }
    }

    /// Recorder plus its window reset task. Must be called inside a Tokio runtime.
    pub fn spawn() -> Arc<Self> {
        let stats = Arc::new(Self::new());
        spawn_resetter(Arc::downgrade(&stats), RESET_INTERVAL);
        tracing::info!(pid = stats.pid, "stats recorder started");
        stats
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn begin(&self) -> Scope {
        Scope { started: Instant::now(), status: 200 }
    }

    pub fn end(&self, scope: Scope) {
        self.end_with_status(scope.started, scope.status);
    }

    pub fn end_with_status(&self, started: Instant, status: u16) {
        self.record(status, started.elapsed());
    }

    /// Count one completed request; the only place counters are incremented.
    pub fn record(&self, status: u16, elapsed: Duration) {
        let key = status.to_string();
        let mut counters = self.write();
        *counters.window.entry(key.clone()).or_insert(0) += 1;
        *counters.total.entry(key).or_insert(0) += 1;
        counters.total_response_time += elapsed;
    }

    pub fn reset_window(&self) {
        self.write().window = BTreeMap::new();
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let counters = self.read();
        let observed_at = Utc::now();
        let uptime = self.started_at.elapsed();

        let count: u64 = counters.window.values().sum();
        let total_count: u64 = counters.total.values().sum();
        let total_response_time = counters.total_response_time;

        let average_response_time = if total_count > 0 {
            let avg = total_response_time.as_nanos() / u128::from(total_count);
            Duration::from_nanos(avg as u64)
        } else {
            Duration::ZERO
        };

        StatsSnapshot {
            pid: self.pid,
            uptime,
            observed_at,
            status_code_count: counters.window.clone(),
            total_status_code_count: counters.total.clone(),
            count,
            total_count,
            total_response_time,
            average_response_time,
        }
    }

    // Every mutation finishes under the guard, so a poisoned lock still holds
    // consistent counters.
    fn read(&self) -> RwLockReadGuard<'_, Counters> {
        self.counters.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Counters> {
        self.counters.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_resetter(stats: Weak<Stats>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let Some(stats) = stats.upgrade() else {
                tracing::debug!("stats recorder dropped, window reset stopped");
                break;
            };
            stats.reset_window();
            tracing::trace!("stats window reset");
        }
    })
}
