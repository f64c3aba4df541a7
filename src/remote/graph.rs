//! Bootstrap offset from the account's public contribution graph
//!
//! The graph page lists one cell per day up to today. The number of cells
//! modulo a week tells which weekday row today falls on, so a new anchor
//! continues from the real graph instead of starting at the top of a column.

use scraper::{Html, Selector};

use crate::cycle::machine::PositionResolver;
use crate::io::configuration::{DAY_CELL_SELECTOR, DAYS_PER_WEEK};
use crate::io::error::{Result, bootstrap_error};
use crate::remote::github::encode_component;

/// Count day cells carrying a `data-date` attribute
///
/// # Errors
///
/// Returns a bootstrap error if the cell selector cannot be compiled
pub fn count_dated_cells(html: &str) -> Result<usize> {
    let selector = Selector::parse(DAY_CELL_SELECTOR).map_err(|e| bootstrap_error(&e))?;
    let document = Html::parse_document(html);
    Ok(document.select(&selector).count())
}

/// Offset within the current week for a graph page
///
/// # Errors
///
/// Returns a bootstrap error if the page cannot be inspected
pub fn offset_from_html(html: &str) -> Result<u64> {
    let cells = count_dated_cells(html)?;
    if cells == 0 {
        tracing::warn!("contribution graph has no dated cells, anchoring at offset 0");
    }
    Ok(cells as u64 % DAYS_PER_WEEK)
}

/// Resolver backed by `{web}/users/{user}/contributions`
pub struct ContributionGraphResolver {
    agent: ureq::Agent,
    url: String,
    token: String,
}

impl ContributionGraphResolver {
    /// Resolver for the given account
    pub fn new(agent: ureq::Agent, web_url: &str, user: &str, token: &str) -> Self {
        Self {
            agent,
            url: format!(
                "{}/users/{}/contributions",
                web_url.trim_end_matches('/'),
                encode_component(user)
            ),
            token: token.to_string(),
        }
    }

    /// Contribution graph page address
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PositionResolver for ContributionGraphResolver {
    fn resolve_offset(&self) -> Result<u64> {
        tracing::debug!(url = %self.url, "fetching contribution graph");
        let html = self
            .agent
            .get(&self.url)
            .set("Authorization", &format!("token {}", self.token))
            .set("Accept", "text/html")
            .call()
            .map_err(|e| bootstrap_error(&format!("{}: {e}", self.url)))?
            .into_string()
            .map_err(|e| bootstrap_error(&format!("{}: {e}", self.url)))?;

        offset_from_html(&html)
    }
}

/// Resolver returning a fixed offset
///
/// Useful when the real graph should be ignored or cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffset(pub u64);

impl PositionResolver for FixedOffset {
    fn resolve_offset(&self) -> Result<u64> {
        Ok(self.0)
    }
}
