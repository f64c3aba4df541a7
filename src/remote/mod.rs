//! Collaborators outside the process: GitHub, the contribution graph and the key service

/// GitHub Contents API store
pub mod github;
/// Contribution graph position resolver
pub mod graph;
/// Envelope decryption of settings
pub mod secrets;
/// Store contract, revisions and the in-memory store
pub mod store;

pub use store::{LoadedState, MemoryStore, Revision, StateStore};
