use log::{error, info, warn};
use std::sync::Arc;
use std::time::Duration;

use super::locator::locate_match;
use super::lookups::GameApi;
use super::report::ReportRenderer;
use super::resolver::resolve_identity;
use super::roster::{fetch_roster, FanOutLimits};
use crate::config::AppConfig;
use crate::domain::{ChampionCatalog, MatchReport};
use crate::errors::LookupError;

/// Handle -> rendered scoreboard of the player's current match
pub struct LiveGameService<A: GameApi> {
    api: A,
    renderer: ReportRenderer,
    timeout: Duration,
    max_in_flight: usize,
}

impl<A: GameApi> LiveGameService<A> {
    pub fn new(api: A, catalog: Arc<ChampionCatalog>, config: &AppConfig) -> Self {
        Self {
            api,
            renderer: ReportRenderer::new(catalog, config.report.team_split),
            timeout: config.riot.request_timeout,
            max_in_flight: config.report.max_concurrent_lookups,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Run the whole pipeline and render the result
    pub async fn report(&self, handle: &str) -> Result<String, LookupError> {
        let report = self.build_report(handle).await?;
        Ok(self.renderer.render(&report))
    }

    /// Resolve, locate, fan out and join. Stops at the first failing stage.
    pub async fn build_report(&self, handle: &str) -> Result<MatchReport, LookupError> {
        info!("=== Live game lookup for {} ===", handle.trim());

        // Step 1: Resolve the handle
        let identity = resolve_identity(&self.api, handle, self.timeout).await?;

        // Step 2: Find the active match
        let descriptor = locate_match(&self.api, &identity.internal_id, self.timeout).await?;

        // Step 3: Ranked stats for every seat
        let limits = FanOutLimits {
            max_in_flight: self.max_in_flight,
            timeout: self.timeout,
        };
        let stats = fetch_roster(&self.api, &descriptor.participants, limits).await?;

        // Step 4: Join with the catalog and split teams
        let report = self
            .renderer
            .build_report(descriptor.match_id, descriptor.participants, stats);
        info!(
            "  → Match {}: {} blue, {} purple",
            report.match_id,
            report.blue.len(),
            report.purple.len()
        );

        Ok(report)
    }
}

/// Log the operator-facing detail of a failed lookup
pub fn log_failure(handle: &str, err: &LookupError) {
    match err {
        LookupError::NotFound { .. } | LookupError::NotInGame { .. } => {
            info!("Lookup for {} ended: {}", handle, err)
        }
        LookupError::MalformedMatch { .. } | LookupError::PartialRosterFailure { .. } => {
            warn!("Lookup for {} failed: {}", handle, err)
        }
        LookupError::Unavailable { .. } => error!("Lookup for {} failed: {}", handle, err),
    }
}
