//! Input/output surfaces: CLI, settings, logging, progress and error handling

/// Command-line parsing and the invocation runner
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Handler entry point for one cycle
pub mod handler;
/// Tracing subscriber setup
pub mod logging;
/// Commit progress display
pub mod progress;
/// Environment settings
pub mod settings;
