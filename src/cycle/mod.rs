//! Position and commit state machine

/// Daily transition of the cycle record
pub mod machine;
/// Persistence decision and the commit loop
pub mod persistence;
/// Anchor-relative position arithmetic
pub mod position;
/// Persisted cycle record
pub mod state;

pub use machine::{CycleMachine, CycleOutcome, PositionResolver};
pub use persistence::{PersistOutcome, PersistPolicy, persist_budget};
pub use position::{CycleDate, Position, calculate_position};
pub use state::CycleState;
