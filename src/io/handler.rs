//! One full invocation: load, advance, persist, report

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::cycle::machine::{CycleMachine, CycleOutcome, PositionResolver};
use crate::cycle::persistence::{PersistOutcome, PersistPolicy, persist_budget, skip_reason};
use crate::cycle::state::CycleState;
use crate::io::configuration::{COMPLETE_MESSAGE, COMPLETE_STATUS};
use crate::io::error::Result;
use crate::pattern::Pattern;
use crate::remote::store::StateStore;

/// Collaborators for one invocation
pub struct Invocation<'a> {
    /// Pattern being painted
    pub pattern: &'a Pattern,
    /// Zone deciding when a new day starts
    pub timezone: Tz,
    /// Where the state file lives
    pub store: &'a dyn StateStore,
    /// Bootstrap offset source for the first run
    pub resolver: &'a dyn PositionResolver,
    /// Treatment of leftover budgets
    pub policy: PersistPolicy,
}

/// Payload of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct ResponseBody {
    /// Completion message
    pub message: String,
    /// State after the run
    pub state: CycleState,
}

/// Status and payload returned to the scheduler
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    /// HTTP-style status code
    pub status_code: u16,
    /// Completion message and resulting state
    pub body: ResponseBody,
    /// What the cycle machine did
    #[serde(skip)]
    pub outcome: CycleOutcome,
    /// What the persist loop did
    #[serde(skip)]
    pub persisted: PersistOutcome,
}

/// Run one full cycle at `now`
///
/// `on_start` receives the number of commits about to be made, `on_write` the
/// commits remaining after each write.
///
/// # Errors
///
/// Returns the first error from loading, advancing or persisting. Writes made
/// before a failing write are kept by the store.
pub fn run_cycle<S, W>(
    invocation: &Invocation<'_>,
    now: DateTime<Utc>,
    on_start: S,
    on_write: W,
) -> Result<HandlerResponse>
where
    S: FnOnce(u32),
    W: FnMut(Option<u32>),
{
    let loaded = invocation.store.load()?;
    tracing::info!(revision = %loaded.revision, "loaded state file");

    let mut state = loaded.state;
    let machine = CycleMachine::new(invocation.pattern, invocation.timezone);
    let outcome = machine.advance_if_needed(&mut state, now, invocation.resolver)?;

    let planned = match skip_reason(&state, &loaded.snapshot, invocation.policy)? {
        Some(_) => 0,
        None => state.current_commits_left.unwrap_or(1),
    };
    on_start(planned);

    let persisted = persist_budget(
        invocation.store,
        &mut state,
        &loaded.snapshot,
        loaded.revision,
        invocation.policy,
        on_write,
    )?;
    tracing::info!(writes = persisted.writes, stop = ?persisted.stop, "run complete");

    Ok(HandlerResponse {
        status_code: COMPLETE_STATUS,
        body: ResponseBody {
            message: COMPLETE_MESSAGE.to_string(),
            state,
        },
        outcome,
        persisted,
    })
}
