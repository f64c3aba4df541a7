//! Identity and secrets resolved from the environment

use chrono_tz::Tz;
use std::fmt;

use crate::cycle::position::parse_timezone;
use crate::io::configuration::{ENV_REPO, ENV_STATE_FILE, ENV_TIMEZONE, ENV_TOKEN, ENV_USER};
use crate::io::error::{GraphArtError, Result};
use crate::remote::secrets::{KeyService, reveal};

/// Resolved settings for one invocation
#[derive(Clone)]
pub struct Settings {
    /// Token for API and graph requests
    pub token: String,
    /// Account owning the graph and the repository
    pub user: String,
    /// Repository holding the state file
    pub repo: String,
    /// Path of the state file within the repository
    pub state_file: String,
    /// Zone deciding when a new day starts
    pub timezone: Tz,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .field("repo", &self.repo)
            .field("state_file", &self.state_file)
            .field("timezone", &self.timezone)
            .finish()
    }
}

impl Settings {
    /// Resolve every required variable through `lookup`, decrypting enveloped values
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A variable is missing or empty after decryption
    /// - An enveloped value cannot be decrypted
    /// - The timezone is not a known IANA name
    pub fn from_lookup<F>(lookup: F, keys: &dyn KeyService) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| -> Result<String> {
            let raw = lookup(key).ok_or(GraphArtError::Configuration { key })?;
            let value = reveal(key, &raw, keys)?;
            if value.is_empty() {
                return Err(GraphArtError::Configuration { key });
            }
            Ok(value)
        };

        let token = require(ENV_TOKEN)?;
        let user = require(ENV_USER)?;
        let repo = require(ENV_REPO)?;
        let state_file = require(ENV_STATE_FILE)?;
        let timezone = parse_timezone(ENV_TIMEZONE, require(ENV_TIMEZONE)?.trim())?;

        Ok(Self {
            token,
            user,
            repo,
            state_file,
            timezone,
        })
    }

    /// Resolve from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Settings::from_lookup`]
    pub fn from_env(keys: &dyn KeyService) -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), keys)
    }
}
