//! Decides whether a cycle record is written and drives the daily commit loop
//!
//! Each write is one commit on the contribution graph. A day with a budget
//! of N commits produces N writes; the count is decremented before each write
//! so the last committed file records zero remaining.

use crate::cycle::state::CycleState;
use crate::io::error::Result;
use crate::remote::store::{Revision, StateStore};

/// How a leftover budget from an earlier invocation is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistPolicy {
    /// Never write a record that is unchanged since it was loaded
    #[default]
    Literal,
    /// Keep spending a leftover budget even when nothing changed since load
    ResumeBudget,
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Record is byte-identical to what was loaded
    Unchanged,
    /// Today's budget is spent or was zero
    BudgetExhausted,
    /// Commit count is not tracked, a single write was made
    Untracked,
}

/// Result of a persist loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistOutcome {
    /// Successful writes made by this call
    pub writes: u32,
    /// Revision after the last successful write
    pub revision: Revision,
    /// Why no further write was made
    pub stop: StopReason,
}

/// Reason the next write should be skipped, if any
///
/// # Errors
///
/// Returns an error if the state cannot be serialized
pub fn skip_reason(
    state: &CycleState,
    snapshot: &str,
    policy: PersistPolicy,
) -> Result<Option<StopReason>> {
    if state.current_commits_left == Some(0) {
        return Ok(Some(StopReason::BudgetExhausted));
    }

    let resumable = policy == PersistPolicy::ResumeBudget
        && state.current_commits_left.is_some_and(|left| left > 0);
    if !resumable && state.to_json()? == snapshot {
        return Ok(Some(StopReason::Unchanged));
    }

    Ok(None)
}

/// Write the record once per commit left today, threading the revision
///
/// `on_write` receives the commits still remaining after each successful write.
///
/// # Errors
///
/// Returns an error if a write fails; writes made before it are kept and the
/// state reflects them.
pub fn persist_budget<F>(
    store: &dyn StateStore,
    state: &mut CycleState,
    snapshot: &str,
    revision: Revision,
    policy: PersistPolicy,
    mut on_write: F,
) -> Result<PersistOutcome>
where
    F: FnMut(Option<u32>),
{
    let mut revision = revision;
    let mut writes = 0;

    loop {
        if let Some(stop) = skip_reason(state, snapshot, policy)? {
            tracing::debug!(?stop, writes, "persist loop finished");
            return Ok(PersistOutcome {
                writes,
                revision,
                stop,
            });
        }

        if let Some(left) = state.current_commits_left.as_mut() {
            *left = left.saturating_sub(1);
        }

        let content = state.to_pretty_json()?;
        revision = store.save(&content, &revision)?;
        writes += 1;
        tracing::info!(
            revision = %revision,
            commits_left = ?state.current_commits_left,
            "committed state file"
        );
        on_write(state.current_commits_left);

        if state.current_commits_left.is_none() {
            return Ok(PersistOutcome {
                writes,
                revision,
                stop: StopReason::Untracked,
            });
        }
    }
}
