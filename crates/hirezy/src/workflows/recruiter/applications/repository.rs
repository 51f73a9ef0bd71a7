use std::io::Read;
use std::path::Path;

use super::aggregate::aggregate_applications;
use super::demo::demo_gigs;
use super::domain::{Application, Gig, GigId};

/// Which slice of the application list a caller asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationListQuery {
    Recruiter(String),
    Gig(GigId),
    All,
}

impl ApplicationListQuery {
    /// A recruiter id takes precedence over a gig id.
    pub fn from_params(recruiter_id: Option<String>, gig_id: Option<String>) -> Self {
        match (recruiter_id, gig_id) {
            (Some(recruiter_id), _) => Self::Recruiter(recruiter_id),
            (None, Some(gig_id)) => Self::Gig(GigId(gig_id)),
            (None, None) => Self::All,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Recruiter(recruiter_id) => vec![("recruiterId", recruiter_id.clone())],
            Self::Gig(gig_id) => vec![("gigId", gig_id.0.clone())],
            Self::All => Vec::new(),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Recruiter(_) => "recruiter",
            Self::Gig(_) => "gig",
            Self::All => "all",
        }
    }
}

/// Data-access seam for gigs and their applicants.
pub trait GigRepository: Send + Sync {
    fn gigs(&self) -> Result<Vec<Gig>, RepositoryError>;

    fn gig(&self, id: &GigId) -> Result<Option<Gig>, RepositoryError> {
        Ok(self.gigs()?.into_iter().find(|gig| &gig.id == id))
    }

    fn applications(
        &self,
        query: &ApplicationListQuery,
    ) -> Result<Vec<Application>, RepositoryError> {
        let gigs = match query {
            ApplicationListQuery::Recruiter(recruiter_id) => self
                .gigs()?
                .into_iter()
                .filter(|gig| gig.recruiter_id.as_deref() == Some(recruiter_id.as_str()))
                .collect(),
            ApplicationListQuery::Gig(gig_id) => self.gig(gig_id)?.into_iter().collect(),
            ApplicationListQuery::All => self.gigs()?,
        };
        Ok(aggregate_applications(&gigs))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read gig fixture: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed gig fixture: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Repository over a fixed set of gigs, loaded once.
#[derive(Debug, Clone, Default)]
pub struct StaticGigRepository {
    gigs: Vec<Gig>,
}

impl StaticGigRepository {
    pub fn new(gigs: Vec<Gig>) -> Self {
        Self { gigs }
    }

    pub fn demo() -> Self {
        Self::new(demo_gigs())
    }

    /// Reads a JSON array of gigs with nested applicants.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RepositoryError> {
        let gigs: Vec<Gig> = serde_json::from_reader(reader)?;
        Ok(Self::new(gigs))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Regroup flat rows under their gigs, in first-seen gig order. Every
    /// regrouped gig is owned by `recruiter_id` when one is given.
    pub fn from_applications(applications: Vec<Application>, recruiter_id: Option<&str>) -> Self {
        let mut gigs: Vec<Gig> = Vec::new();
        for application in applications {
            let Application {
                applicant,
                gig_id,
                gig_title,
            } = application;
            match gigs.iter_mut().find(|gig| gig.id == gig_id) {
                Some(gig) => gig.applicants.push(applicant),
                None => gigs.push(Gig {
                    id: gig_id,
                    title: gig_title,
                    company: String::new(),
                    recruiter_id: recruiter_id.map(str::to_string),
                    applicants: vec![applicant],
                }),
            }
        }
        Self::new(gigs)
    }
}

impl GigRepository for StaticGigRepository {
    fn gigs(&self) -> Result<Vec<Gig>, RepositoryError> {
        Ok(self.gigs.clone())
    }

    fn gig(&self, id: &GigId) -> Result<Option<Gig>, RepositoryError> {
        Ok(self.gigs.iter().find(|gig| &gig.id == id).cloned())
    }
}
