use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::aggregate::aggregate_applications;
use super::demo::demo_gigs;
use super::domain::{Application, Gig, GigId};
use super::repository::{ApplicationListQuery, GigRepository, RepositoryError};

/// Body of `GET /api/recruiter/application/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    pub success: bool,
    #[serde(default)]
    pub applications: Vec<Application>,
}

impl ApplicationListResponse {
    pub fn from_applications(applications: Vec<Application>) -> Self {
        Self {
            success: !applications.is_empty(),
            applications,
        }
    }

    fn is_usable(&self) -> bool {
        self.success && !self.applications.is_empty()
    }
}

/// Source of application lists, local or remote.
#[async_trait]
pub trait ApplicationFeed: Send + Sync {
    async fn list(
        &self,
        query: &ApplicationListQuery,
    ) -> Result<ApplicationListResponse, FeedError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed transport failed: {0}")]
    Transport(String),
    #[error("feed returned an unreadable payload: {0}")]
    Decode(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Feed answering from an in-process repository.
pub struct RepositoryFeed<R> {
    repository: Arc<R>,
}

impl<R> RepositoryFeed<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ApplicationFeed for RepositoryFeed<R>
where
    R: GigRepository + 'static,
{
    async fn list(
        &self,
        query: &ApplicationListQuery,
    ) -> Result<ApplicationListResponse, FeedError> {
        let applications = self.repository.applications(query)?;
        Ok(ApplicationListResponse::from_applications(applications))
    }
}

/// Which step of the chain produced the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSource {
    Recruiter,
    Gig,
    All,
    Demo,
}

impl LoadSource {
    fn from_query(query: &ApplicationListQuery) -> Self {
        match query {
            ApplicationListQuery::Recruiter(_) => Self::Recruiter,
            ApplicationListQuery::Gig(_) => Self::Gig,
            ApplicationListQuery::All => Self::All,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadedApplications {
    pub applications: Vec<Application>,
    pub source: LoadSource,
    /// Feed requests issued, including failed ones.
    pub attempts: usize,
}

/// Queries tried in order: recruiter (if known), gig (if known), unfiltered.
pub fn attempt_chain(
    recruiter_id: Option<&str>,
    gig_id: Option<&GigId>,
) -> Vec<ApplicationListQuery> {
    let mut chain = Vec::with_capacity(3);
    if let Some(recruiter_id) = recruiter_id {
        chain.push(ApplicationListQuery::Recruiter(recruiter_id.to_string()));
    }
    if let Some(gig_id) = gig_id {
        chain.push(ApplicationListQuery::Gig(gig_id.clone()));
    }
    chain.push(ApplicationListQuery::All);
    chain
}

/// One-shot loader: recruiter, then gig, then unfiltered, then demo data.
pub struct ApplicationLoader<F> {
    feed: Arc<F>,
    fallback: Vec<Gig>,
}

impl<F> ApplicationLoader<F>
where
    F: ApplicationFeed + 'static,
{
    pub fn new(feed: Arc<F>) -> Self {
        Self::with_fallback(feed, demo_gigs())
    }

    pub fn with_fallback(feed: Arc<F>, fallback: Vec<Gig>) -> Self {
        Self { feed, fallback }
    }

    /// Never fails; every feed problem falls through to the next step.
    pub async fn load(
        &self,
        recruiter_id: Option<&str>,
        gig_id: Option<&GigId>,
    ) -> LoadedApplications {
        let chain = attempt_chain(recruiter_id, gig_id);
        let mut attempts = 0;

        for query in &chain {
            attempts += 1;
            match self.feed.list(query).await {
                Ok(response) if response.is_usable() => {
                    info!(
                        query = query.label(),
                        count = response.applications.len(),
                        "loaded applications from feed"
                    );
                    return LoadedApplications {
                        applications: response.applications,
                        source: LoadSource::from_query(query),
                        attempts,
                    };
                }
                Ok(_) => debug!(query = query.label(), "feed returned no applications"),
                Err(err) => warn!(query = query.label(), error = %err, "application feed failed"),
            }
        }

        warn!(attempts, "falling back to embedded demo applications");
        LoadedApplications {
            applications: aggregate_applications(&self.fallback),
            source: LoadSource::Demo,
            attempts,
        }
    }
}
