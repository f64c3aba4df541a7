//! Pixel pattern source
//!
//! This module contains pattern-related functionality including:
//! - The intensity alphabet and commit-count mapping
//! - The immutable symbol grid and its lookup rules
//! - Loading the embedded art or a user supplied asset

/// Symbol grid with defensive lookup
pub mod grid;
/// Intensity levels and commit counts
pub mod intensity;
/// Embedded and file based pattern assets
pub mod loader;

pub use grid::Pattern;
pub use intensity::Intensity;
