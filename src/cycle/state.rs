//! Persisted cycle record
//!
//! JSON keys match the state files already committed by earlier versions of
//! the bot, and keys this version does not know about are carried through
//! untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cycle::position::Position;
use crate::io::error::Result;

/// Cycle record stored in the tracked file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleState {
    /// Date of the very first run, write-once
    #[serde(rename = "firstCycle", default, skip_serializing_if = "Option::is_none")]
    pub first_cycle_date: Option<String>,
    /// Timezone of the very first run, write-once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_cycle_timezone: Option<String>,
    /// Cells into the pattern the first run already corresponded to, write-once
    #[serde(rename = "firstPosition", default, skip_serializing_if = "Option::is_none")]
    pub first_position_offset: Option<u64>,
    /// Date of the most recent run that advanced the cycle
    #[serde(rename = "lastCycle", default, skip_serializing_if = "Option::is_none")]
    pub last_cycle_date: Option<String>,
    /// Timezone of the most recent advancing run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_cycle_timezone: Option<String>,
    /// Number of distinct days processed
    #[serde(rename = "currentCycle", default, skip_serializing_if = "Option::is_none")]
    pub current_cycle_number: Option<u64>,
    /// Cursor for the current day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_position: Option<Position>,
    /// Symbol under the cursor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_marker: Option<String>,
    /// Commits still to make today, untracked when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_commits_left: Option<u32>,
    /// Commits due when the day started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_commits_for_cycle: Option<u32>,
    /// Keys written by other tools or older versions
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CycleState {
    /// Decode a stored document; blank content and `null` are an empty state
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a JSON object
    pub fn from_json(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let state: Option<Self> = serde_json::from_str(content)?;
        Ok(state.unwrap_or_default())
    }

    /// Compact form, formatting-insensitive, used to detect changes
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Two-space indented form written to the repository
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether the anchor has been fully recorded
    pub const fn is_anchored(&self) -> bool {
        self.first_cycle_date.is_some()
            && self.first_cycle_timezone.is_some()
            && self.first_position_offset.is_some()
    }
}
