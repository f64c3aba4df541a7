//! Remote store contract with optimistic concurrency, plus an in-memory store

use std::cell::RefCell;
use std::fmt;

use crate::cycle::state::CycleState;
use crate::io::error::{GraphArtError, Result};

/// Opaque token identifying the stored version a write is based on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    /// Wrap a token returned by the store
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Token text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// State as loaded, with the unmodified snapshot kept beside the mutable record
#[derive(Debug, Clone)]
pub struct LoadedState {
    /// Record to advance and persist
    pub state: CycleState,
    /// Compact serialization at load time
    pub snapshot: String,
    /// Revision the next write must be based on
    pub revision: Revision,
}

impl LoadedState {
    /// Decode stored content, normalizing formatting into the snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid state document
    pub fn from_content(content: &str, revision: Revision) -> Result<Self> {
        let state = CycleState::from_json(content)?;
        let snapshot = state.to_json()?;
        Ok(Self {
            state,
            snapshot,
            revision,
        })
    }
}

/// Storage for the single tracked state file
pub trait StateStore {
    /// Fetch the current state and its revision
    ///
    /// # Errors
    ///
    /// Returns a remote read error if the file cannot be fetched or decoded
    fn load(&self) -> Result<LoadedState>;

    /// Replace the file content, returning the new revision
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or `revision` is stale
    fn save(&self, content: &str, revision: &Revision) -> Result<Revision>;
}

#[derive(Debug)]
struct MemoryFile {
    content: String,
    version: u64,
    history: Vec<String>,
}

/// In-process store honoring the same revision rules as the remote one
#[derive(Debug)]
pub struct MemoryStore {
    file: RefCell<MemoryFile>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl MemoryStore {
    /// Store holding `content` at its first revision
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            file: RefCell::new(MemoryFile {
                content: content.into(),
                version: 1,
                history: Vec::new(),
            }),
        }
    }

    /// Current file content
    pub fn content(&self) -> String {
        self.file.borrow().content.clone()
    }

    /// Current revision
    pub fn revision(&self) -> Revision {
        Self::revision_for(self.file.borrow().version)
    }

    /// Content of every accepted write, oldest first
    pub fn history(&self) -> Vec<String> {
        self.file.borrow().history.clone()
    }

    fn revision_for(version: u64) -> Revision {
        Revision::new(format!("mem-{version}"))
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<LoadedState> {
        let file = self.file.borrow();
        LoadedState::from_content(&file.content, Self::revision_for(file.version))
    }

    fn save(&self, content: &str, revision: &Revision) -> Result<Revision> {
        let mut file = self.file.borrow_mut();
        if *revision != Self::revision_for(file.version) {
            return Err(GraphArtError::RevisionConflict {
                revision: revision.to_string(),
            });
        }

        file.version += 1;
        file.content = content.to_string();
        file.history.push(content.to_string());
        Ok(Self::revision_for(file.version))
    }
}
