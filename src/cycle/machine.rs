//! Daily cycle transition
//!
//! A cycle advances at most once per local calendar day. The first cycle
//! records the anchor (date, timezone and the offset discovered on the real
//! contribution graph); every later cycle measures its position from it.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::cycle::position::{CycleDate, Position, calculate_position};
use crate::cycle::state::CycleState;
use crate::io::error::Result;
use crate::pattern::Pattern;
use crate::pattern::intensity::commits_for_marker;

/// Discovers where the account's existing graph already sits within a week
pub trait PositionResolver {
    /// Offset in cells, queried once when the anchor is recorded
    ///
    /// # Errors
    ///
    /// Returns a bootstrap error if the offset cannot be determined
    fn resolve_offset(&self) -> Result<u64>;
}

/// What a call to [`CycleMachine::advance_if_needed`] did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleOutcome {
    /// The cycle already ran today, state untouched
    AlreadyRan,
    /// A new day was processed
    Advanced {
        /// Cycle number after advancing
        cycle_number: u64,
        /// Cursor for today
        position: Position,
        /// Commits due today
        commits: u32,
    },
}

/// Advances the cycle record against a fixed pattern and timezone
pub struct CycleMachine<'a> {
    pattern: &'a Pattern,
    timezone: Tz,
}

impl<'a> CycleMachine<'a> {
    /// Create a machine for the configured timezone
    pub const fn new(pattern: &'a Pattern, timezone: Tz) -> Self {
        Self { pattern, timezone }
    }

    /// Process today's cycle unless it already ran
    ///
    /// Nothing is written to `state` unless every step succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The resolver fails while the anchor is being recorded
    /// - The stored anchor date or timezone cannot be parsed
    pub fn advance_if_needed(
        &self,
        state: &mut CycleState,
        now: DateTime<Utc>,
        resolver: &dyn PositionResolver,
    ) -> Result<CycleOutcome> {
        let today = CycleDate::from_instant(now, self.timezone);
        let today_text = today.format();

        if state.last_cycle_date.as_deref() == Some(today_text.as_str()) {
            tracing::debug!(today = %today, "cycle already ran today");
            return Ok(CycleOutcome::AlreadyRan);
        }

        let mut next = state.clone();

        if !next.is_anchored() {
            if next.first_cycle_date.is_none() {
                next.first_cycle_date = Some(today_text.clone());
            }
            if next.first_cycle_timezone.is_none() {
                next.first_cycle_timezone = Some(self.timezone.name().to_string());
            }
            if next.first_position_offset.is_none() {
                let offset = resolver.resolve_offset()?;
                tracing::info!(offset, "recorded anchor offset from contribution graph");
                next.first_position_offset = Some(offset);
            }
        }

        next.last_cycle_date = Some(today_text);
        next.last_cycle_timezone = Some(self.timezone.name().to_string());
        let cycle_number = next.current_cycle_number.unwrap_or(0).saturating_add(1);
        next.current_cycle_number = Some(cycle_number);

        let anchor = CycleDate::parse_anchor(
            next.first_cycle_date.as_deref().unwrap_or_default(),
            next.first_cycle_timezone.as_deref().unwrap_or_default(),
        )?;
        let position = calculate_position(
            &anchor,
            next.first_position_offset.unwrap_or(0),
            &today,
        )?;

        let marker = self.pattern.symbol_at(position.column, position.row);
        let commits = commits_for_marker(&marker.to_string());

        next.current_position = Some(position);
        next.current_marker = Some(marker.to_string());
        next.current_commits_left = Some(commits);
        next.initial_commits_for_cycle = Some(commits);

        tracing::info!(
            today = %today,
            cycle = cycle_number,
            column = position.column,
            row = position.row,
            marker = %marker,
            commits,
            "advanced cycle"
        );

        *state = next;
        Ok(CycleOutcome::Advanced {
            cycle_number,
            position,
            commits,
        })
    }
}
