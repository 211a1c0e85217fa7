//! Debounced persistence of gross-box-office-potential edits.
//!
//! The potential is edited keystroke-by-keystroke in the client, and a
//! write per keystroke would hammer the database. Each scenario gets an
//! explicit pending write with a cancellable timer: a new value resets the
//! timer, and once a quiescence window passes with no further edits,
//! exactly one UPDATE is issued carrying the latest value. Overlapping
//! writes across scenarios are independent; within a scenario,
//! last-write-wins.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use limelight_core::types::DbId;
use limelight_db::repositories::ScenarioRepo;
use limelight_db::DbPool;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Destination of a debounced potential write.
#[async_trait]
pub trait PotentialWriter: Send + Sync + 'static {
    async fn write_potential(&self, scenario_id: DbId, value: f64) -> Result<(), sqlx::Error>;
}

/// Production writer: persists through [`ScenarioRepo`].
pub struct SqlxPotentialWriter {
    pool: DbPool,
}

impl SqlxPotentialWriter {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PotentialWriter for SqlxPotentialWriter {
    async fn write_potential(&self, scenario_id: DbId, value: f64) -> Result<(), sqlx::Error> {
        let existed = ScenarioRepo::update_potential(&self.pool, scenario_id, value).await?;
        if !existed {
            // Scenario deleted while a write was pending; nothing to save.
            tracing::warn!(scenario_id, "Autosave target scenario no longer exists");
        }
        Ok(())
    }
}

/// A scheduled write awaiting its quiescence window.
struct PendingSave {
    value: f64,
    generation: u64,
    handle: JoinHandle<()>,
}

struct Inner {
    writer: Arc<dyn PotentialWriter>,
    debounce: Duration,
    pending: Mutex<HashMap<DbId, PendingSave>>,
    generations: AtomicU64,
}

/// Trailing-edge debounced writer, one pending slot per scenario.
pub struct PotentialAutosaver {
    inner: Arc<Inner>,
}

impl PotentialAutosaver {
    pub fn new(writer: Arc<dyn PotentialWriter>, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                writer,
                debounce,
                pending: Mutex::new(HashMap::new()),
                generations: AtomicU64::new(0),
            }),
        }
    }

    /// Record a new potential value for a scenario.
    ///
    /// Cancels any timer already pending for the scenario and reschedules;
    /// the write fires only after `debounce` elapses with no newer value.
    pub async fn submit(&self, scenario_id: DbId, value: f64) {
        let generation = self.inner.generations.fetch_add(1, Ordering::Relaxed);

        let mut pending = self.inner.pending.lock().await;
        if let Some(prev) = pending.remove(&scenario_id) {
            prev.handle.abort();
        }

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;

            let fired = {
                let mut pending = inner.pending.lock().await;
                match pending.get(&scenario_id) {
                    // Still the newest edit: claim the slot.
                    Some(entry) if entry.generation == generation => {
                        pending.remove(&scenario_id).map(|e| e.value)
                    }
                    // Superseded or flushed while we slept.
                    _ => None,
                }
            };

            if let Some(value) = fired {
                if let Err(e) = inner.writer.write_potential(scenario_id, value).await {
                    tracing::error!(scenario_id, error = %e, "Autosave write failed");
                }
            }
        });

        pending.insert(
            scenario_id,
            PendingSave {
                value,
                generation,
                handle,
            },
        );
    }

    /// Write every pending value immediately, without waiting out the
    /// quiescence window. Called during graceful shutdown. Returns the
    /// number of writes issued.
    pub async fn flush(&self) -> usize {
        let drained: Vec<(DbId, f64)> = {
            let mut pending = self.inner.pending.lock().await;
            pending
                .drain()
                .map(|(id, entry)| {
                    entry.handle.abort();
                    (id, entry.value)
                })
                .collect()
        };

        let mut written = 0;
        for (scenario_id, value) in drained {
            match self.inner.writer.write_potential(scenario_id, value).await {
                Ok(()) => written += 1,
                Err(e) => {
                    tracing::error!(scenario_id, error = %e, "Autosave flush write failed");
                }
            }
        }
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockWriter {
        writes: Mutex<Vec<(DbId, f64)>>,
    }

    impl MockWriter {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                writes: Mutex::new(Vec::new()),
            })
        }

        async fn writes(&self) -> Vec<(DbId, f64)> {
            self.writes.lock().await.clone()
        }
    }

    #[async_trait]
    impl PotentialWriter for MockWriter {
        async fn write_potential(&self, scenario_id: DbId, value: f64) -> Result<(), sqlx::Error> {
            self.writes.lock().await.push((scenario_id, value));
            Ok(())
        }
    }

    const DEBOUNCE: Duration = Duration::from_millis(500);

    async fn settle() {
        // Let any just-woken save task run to completion.
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn burst_collapses_to_one_write_of_final_value() {
        let writer = MockWriter::new();
        let saver = PotentialAutosaver::new(writer.clone(), DEBOUNCE);

        for value in [10_000.0, 25_000.0, 40_000.0, 55_000.0] {
            saver.submit(1, value).await;
            tokio::time::advance(Duration::from_millis(50)).await;
        }

        tokio::time::sleep(DEBOUNCE + Duration::from_millis(50)).await;
        settle().await;

        assert_eq!(writer.writes().await, vec![(1, 55_000.0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_edits_each_persist() {
        let writer = MockWriter::new();
        let saver = PotentialAutosaver::new(writer.clone(), DEBOUNCE);

        saver.submit(1, 10_000.0).await;
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(50)).await;
        settle().await;

        saver.submit(1, 20_000.0).await;
        tokio::time::sleep(DEBOUNCE + Duration::from_millis(50)).await;
        settle().await;

        assert_eq!(writer.writes().await, vec![(1, 10_000.0), (1, 20_000.0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn scenarios_debounce_independently() {
        let writer = MockWriter::new();
        let saver = PotentialAutosaver::new(writer.clone(), DEBOUNCE);

        saver.submit(1, 10_000.0).await;
        saver.submit(2, 90_000.0).await;

        tokio::time::sleep(DEBOUNCE + Duration::from_millis(50)).await;
        settle().await;

        let mut writes = writer.writes().await;
        writes.sort_by_key(|(id, _)| *id);
        assert_eq!(writes, vec![(1, 10_000.0), (2, 90_000.0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn no_write_before_quiescence() {
        let writer = MockWriter::new();
        let saver = PotentialAutosaver::new(writer.clone(), DEBOUNCE);

        saver.submit(1, 10_000.0).await;
        tokio::time::sleep(DEBOUNCE / 2).await;
        settle().await;

        assert!(writer.writes().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn flush_writes_pending_values_immediately() {
        let writer = MockWriter::new();
        let saver = PotentialAutosaver::new(writer.clone(), DEBOUNCE);

        saver.submit(1, 10_000.0).await;
        saver.submit(2, 20_000.0).await;

        let written = saver.flush().await;
        assert_eq!(written, 2);

        let mut writes = writer.writes().await;
        writes.sort_by_key(|(id, _)| *id);
        assert_eq!(writes, vec![(1, 10_000.0), (2, 20_000.0)]);

        // The cancelled timers must not fire a second write.
        tokio::time::sleep(DEBOUNCE * 2).await;
        settle().await;
        assert_eq!(writer.writes().await.len(), 2);
    }
}
