//! Engine entry points.
//!
//! Every public operation follows the same protocol while holding the roster
//! lock:
//! 1. Read one roster snapshot
//! 2. Build the load index and compute decisions in memory
//! 3. Persist one write per mentee, stopping at the first failure
//! 4. Emit at most one aggregate notice

use std::collections::HashSet;

use mentora_config::AssignmentConfig;
use mentora_core::entities::Mentee;
use mentora_core::enums::AssignmentStrategy;
use mentora_core::responses::{BatchOutcome, MentorLoad, RebalanceOutcome};
use tokio::sync::Mutex;

use crate::balanced::assign_balanced;
use crate::error::EngineError;
use crate::load_index::build_load_index;
use crate::roster::{
    Assignment, AssignmentWriter, ChangeNotice, ChangeNotifier, RosterProvider, RosterSnapshot,
};
use crate::strategy::plan_batch;

/// Serialized assignment engine over a roster store.
///
/// Two invocations never interleave: each one holds the roster lock from
/// snapshot read to the final write, so no decision is made against a
/// snapshot that another invocation is about to change.
pub struct AssignmentEngine<S> {
    store: S,
    config: AssignmentConfig,
    roster_lock: Mutex<()>,
}

impl<S> AssignmentEngine<S>
where
    S: RosterProvider + AssignmentWriter + ChangeNotifier,
{
    #[must_use]
    pub fn new(store: S, config: AssignmentConfig) -> Self {
        Self {
            store,
            config,
            roster_lock: Mutex::new(()),
        }
    }

    /// Access the underlying roster store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &AssignmentConfig {
        &self.config
    }

    /// Redistribute the mentees of a mentor who is being deactivated or
    /// deleted.
    ///
    /// The departing mentor is never a candidate, whether or not the snapshot
    /// still shows it active. Running this again for the same mentor is a
    /// no-op once its mentees have moved.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Roster` if the snapshot cannot be read,
    /// `EngineError::InconsistentSnapshot` if a mentee points at an unknown
    /// mentor, `EngineError::PersistenceWriteFailed` on the first failed
    /// write, and `EngineError::Notify` if the aggregate notice fails.
    pub async fn rebalance_after_mentor_removal(
        &self,
        mentor_id: &str,
    ) -> Result<RebalanceOutcome, EngineError> {
        let _guard = self.roster_lock.lock().await;
        let snapshot = self.snapshot().await?;

        let moving = snapshot.mentees_of(mentor_id);
        if moving.is_empty() {
            tracing::debug!(mentor = %mentor_id, "no mentees to redistribute");
            return Ok(RebalanceOutcome::noop(mentor_id));
        }

        let candidates = snapshot.candidate_ids(Some(mentor_id));
        if candidates.is_empty() {
            tracing::warn!(
                mentor = %mentor_id,
                mentees = moving.len(),
                "no other active mentor; leaving mentees unassigned"
            );
            let unassigned = self.clear_assignments(&moving).await?;
            return Ok(RebalanceOutcome {
                mentor_id: mentor_id.to_string(),
                moved_count: 0,
                unassigned_count: unassigned,
                ok: true,
            });
        }

        let moving_ids: HashSet<&str> = moving.iter().map(|m| m.id.as_str()).collect();
        let mut index = build_load_index(
            snapshot.active_mentors(Some(mentor_id)),
            snapshot.countable_mentees(Some(mentor_id), &moving_ids),
        )?;
        let decisions = assign_balanced(&mut index, &moving, &candidates)?;
        let moved = self
            .apply_and_announce(&decisions, |moved| {
                format!("{moved} mentee(s) reassigned after mentor {mentor_id} became unavailable")
            })
            .await?;

        tracing::info!(
            mentor = %mentor_id,
            moved,
            mentors = candidates.len(),
            "redistributed mentees of removed mentor"
        );

        Ok(RebalanceOutcome {
            mentor_id: mentor_id.to_string(),
            moved_count: moved,
            unassigned_count: 0,
            ok: true,
        })
    }

    /// Place a batch of newly created mentees under `strategy`.
    ///
    /// Inactive mentees in the batch are skipped. With zero active mentors
    /// every batch mentee is written as unassigned and the outcome reports
    /// `assigned_count = 0`.
    ///
    /// # Errors
    ///
    /// See [`Self::rebalance_after_mentor_removal`].
    pub async fn assign_batch(
        &self,
        new_mentees: &[Mentee],
        strategy: AssignmentStrategy,
    ) -> Result<BatchOutcome, EngineError> {
        let _guard = self.roster_lock.lock().await;
        let snapshot = self.snapshot().await?;
        let batch: Vec<Mentee> = new_mentees.iter().filter(|m| m.active).cloned().collect();
        self.place(&snapshot, &batch, strategy).await
    }

    /// Place every active mentee that has no mentor or whose mentor is
    /// inactive. This is the reconciliation path after partial failures.
    ///
    /// # Errors
    ///
    /// See [`Self::rebalance_after_mentor_removal`].
    pub async fn assign_unassigned(
        &self,
        strategy: AssignmentStrategy,
    ) -> Result<BatchOutcome, EngineError> {
        let _guard = self.roster_lock.lock().await;
        let snapshot = self.snapshot().await?;
        let orphaned = snapshot.orphaned_mentees();
        self.place(&snapshot, &orphaned, strategy).await
    }

    /// Current load of every active mentor, in mentor id order.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Roster` or `EngineError::InconsistentSnapshot`.
    pub async fn load_report(&self) -> Result<Vec<MentorLoad>, EngineError> {
        let _guard = self.roster_lock.lock().await;
        let snapshot = self.snapshot().await?;
        let none = HashSet::new();
        let index = build_load_index(
            snapshot.active_mentors(None),
            snapshot.countable_mentees(None, &none),
        )?;
        Ok(index.report())
    }

    async fn place(
        &self,
        snapshot: &RosterSnapshot,
        batch: &[Mentee],
        strategy: AssignmentStrategy,
    ) -> Result<BatchOutcome, EngineError> {
        let candidates = snapshot.candidate_ids(None);
        let mentor_count = u32::try_from(candidates.len()).unwrap_or(u32::MAX);

        if batch.is_empty() {
            return Ok(BatchOutcome {
                strategy,
                assigned_count: 0,
                mentor_count,
                seed: None,
            });
        }

        if candidates.is_empty() || strategy == AssignmentStrategy::Manual {
            if candidates.is_empty() {
                tracing::warn!(
                    mentees = batch.len(),
                    %strategy,
                    "no active mentors; leaving batch unassigned"
                );
            }
            self.clear_assignments(batch).await?;
            return Ok(BatchOutcome {
                strategy,
                assigned_count: 0,
                mentor_count,
                seed: None,
            });
        }

        let batch_ids: HashSet<&str> = batch.iter().map(|m| m.id.as_str()).collect();
        let mut index = build_load_index(
            snapshot.active_mentors(None),
            snapshot.countable_mentees(None, &batch_ids),
        )?;
        let plan = plan_batch(
            strategy,
            &mut index,
            batch,
            &candidates,
            self.config.semester_seed,
        )?;
        if let Some(seed) = plan.seed {
            tracing::info!(seed, "semester strategy seed");
        }

        let assigned = self
            .apply_and_announce(&plan.assignments, |assigned| {
                format!(
                    "{assigned} mentee(s) assigned across {mentor_count} mentor(s) using the {strategy} strategy"
                )
            })
            .await?;
        tracing::info!(assigned, mentors = mentor_count, %strategy, "placed mentee batch");

        Ok(BatchOutcome {
            strategy,
            assigned_count: assigned,
            mentor_count,
            seed: plan.seed,
        })
    }

    async fn snapshot(&self) -> Result<RosterSnapshot, EngineError> {
        self.store
            .roster_snapshot()
            .await
            .map_err(EngineError::Roster)
    }

    /// Persist decisions one mentee at a time, then emit one notice covering
    /// every applied write. Returns the number applied.
    ///
    /// A failed write stops the loop. Writes before it stay in place and are
    /// still announced before `PersistenceWriteFailed` is returned.
    async fn apply_and_announce(
        &self,
        decisions: &[Assignment],
        describe: impl Fn(u32) -> String,
    ) -> Result<u32, EngineError> {
        let mut applied = 0u32;
        for decision in decisions {
            if let Err(source) = self
                .store
                .write_assignment(&decision.mentee_id, Some(&decision.mentor_id))
                .await
            {
                tracing::warn!(
                    mentee = %decision.mentee_id,
                    applied,
                    "assignment write failed; stopping"
                );
                if applied > 0 {
                    if let Err(error) = self.announce(applied, &describe).await {
                        tracing::warn!(error = %error, "partial reassignment notice failed");
                    }
                }
                return Err(EngineError::PersistenceWriteFailed {
                    mentee_id: decision.mentee_id.clone(),
                    applied,
                    source,
                });
            }
            applied += 1;
        }

        if applied > 0 {
            self.announce(applied, &describe).await?;
        }
        Ok(applied)
    }

    /// Explicit null-assignment fallback; returns the number written.
    async fn clear_assignments(&self, mentees: &[Mentee]) -> Result<u32, EngineError> {
        let mut applied = 0u32;
        for mentee in mentees {
            self.store
                .write_assignment(&mentee.id, None)
                .await
                .map_err(|source| EngineError::PersistenceWriteFailed {
                    mentee_id: mentee.id.clone(),
                    applied,
                    source,
                })?;
            applied += 1;
        }
        Ok(applied)
    }

    async fn announce(
        &self,
        count: u32,
        describe: &impl Fn(u32) -> String,
    ) -> Result<(), EngineError> {
        let notice = ChangeNotice {
            message: describe(count),
            target_roles: self.config.notify_roles.clone(),
            count,
        };
        self.store
            .notify(&notice)
            .await
            .map_err(|source| EngineError::Notify {
                applied: count,
                source,
            })
    }
}
