use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::comparison::{ComparisonSelection, MIN_COMPARISON_SIZE};
use super::domain::Application;
use super::feed::ApplicationListResponse;
use super::filter::ApplicationFilter;
use super::repository::{ApplicationListQuery, GigRepository, RepositoryError};
use super::stats::ApplicationStats;
use super::views::{ApplicationRow, ApplicationsOverview, ComparisonView};
use crate::workflows::export::{ExportArtifact, ExportError, ExportFormat, ExportFormatter};

/// Read-side service over the gig repository.
pub struct RecruiterApplicationService<R> {
    repository: Arc<R>,
}

impl<R> RecruiterApplicationService<R>
where
    R: GigRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Every application across every gig.
    pub fn applications(&self) -> Result<Vec<Application>, ApplicationServiceError> {
        Ok(self.repository.applications(&ApplicationListQuery::All)?)
    }

    pub fn list(
        &self,
        query: &ApplicationListQuery,
    ) -> Result<ApplicationListResponse, ApplicationServiceError> {
        let applications = self.repository.applications(query)?;
        debug!(query = query.label(), count = applications.len(), "listed applications");
        Ok(ApplicationListResponse::from_applications(applications))
    }

    /// Filtered rows plus stats over the unfiltered list.
    pub fn overview(
        &self,
        filter: &ApplicationFilter,
        selection: &ComparisonSelection,
    ) -> Result<ApplicationsOverview, ApplicationServiceError> {
        let applications = self.applications()?;
        let stats = ApplicationStats::from_applications(&applications);
        let rows: Vec<ApplicationRow> = filter
            .apply(&applications)
            .into_iter()
            .map(|application| {
                let selected = selection.contains(&application.applicant.id.0);
                ApplicationRow::from_application(application, selected)
            })
            .collect();

        Ok(ApplicationsOverview {
            visible: rows.len(),
            stat_cards: stats.entries(),
            stats,
            rows,
        })
    }

    pub fn stats(&self) -> Result<ApplicationStats, ApplicationServiceError> {
        Ok(ApplicationStats::from_applications(&self.applications()?))
    }

    pub fn export(
        &self,
        filter: &ApplicationFilter,
        format: ExportFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<ExportArtifact, ApplicationServiceError> {
        let applications = self.applications()?;
        let visible = filter.apply(&applications);
        let artifact = ExportFormatter::APPLICATIONS.export(&visible, format, generated_at)?;
        info!(
            format = %format,
            rows = visible.len(),
            filename = %artifact.filename,
            "rendered application export"
        );
        Ok(artifact)
    }

    /// Resolve candidate ids to their first matching application, in request order.
    /// Repeated ids count once.
    pub fn compare(&self, ids: &[String]) -> Result<ComparisonView, ApplicationServiceError> {
        let mut unique: Vec<&String> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        if unique.len() < MIN_COMPARISON_SIZE {
            return Err(ApplicationServiceError::InsufficientSelection {
                selected: unique.len(),
            });
        }

        let applications = self.applications()?;
        let mut candidates = Vec::with_capacity(unique.len());
        let mut missing = Vec::new();
        for id in unique {
            match applications
                .iter()
                .find(|application| &application.applicant.id.0 == id)
            {
                Some(application) => candidates.push(application.clone()),
                None => missing.push(id.clone()),
            }
        }

        if candidates.len() < MIN_COMPARISON_SIZE {
            return Err(ApplicationServiceError::UnknownCandidates(missing));
        }

        Ok(ComparisonView {
            candidates,
            missing,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("comparison needs at least two candidates, got {selected}")]
    InsufficientSelection { selected: usize },
    #[error("unknown candidates: {}", .0.join(", "))]
    UnknownCandidates(Vec<String>),
}
