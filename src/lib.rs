//! Contribution graph art: paints a pixel pattern onto a GitHub contribution graph
//!
//! Each day the cursor moves one cell through the pattern. The cell's intensity
//! decides how many commits of the tracked state file are made that day, so the
//! public activity graph slowly renders the pattern.

#![forbid(unsafe_code)]

/// Position arithmetic, the daily state machine and the commit loop
pub mod cycle;
/// Input/output operations and error handling
pub mod io;
/// Pixel pattern source and intensity mapping
pub mod pattern;
/// GitHub store, contribution graph resolver and secret decryption
pub mod remote;

pub use io::error::{GraphArtError, Result};
