use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{MarketFilter, MarketInsights};
use crate::workflows::export::{ExportArtifact, ExportError, ExportFormat, ExportFormatter};

/// Serves a fixed market snapshot.
pub struct MarketDemandService {
    insights: MarketInsights,
}

impl MarketDemandService {
    pub fn new(insights: MarketInsights) -> Self {
        Self { insights }
    }

    pub fn insights(&self, filter: &MarketFilter) -> MarketInsights {
        self.insights.filtered(filter)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.insights.categories()
    }

    /// CSV and report cover the filtered skills; JSON carries the whole filtered snapshot.
    pub fn export(
        &self,
        filter: &MarketFilter,
        format: ExportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<ExportArtifact, MarketServiceError> {
        let insights = self.insights(filter);
        let formatter = ExportFormatter::MARKET_DEMAND;
        let artifact = match format {
            ExportFormat::Csv => formatter.csv(&insights.skills, generated_at)?,
            ExportFormat::Json => formatter.json(&insights, generated_at)?,
            ExportFormat::Text => formatter.report(&insights.skills, generated_at),
        };
        info!(
            format = %format,
            skills = insights.skills.len(),
            filename = %artifact.filename,
            "rendered market demand export"
        );
        Ok(artifact)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MarketServiceError {
    #[error(transparent)]
    Export(#[from] ExportError),
}
