//! Recruiter applications: flattening gigs into application rows, filtering,
//! per-status stats, the comparison selection, and the one-shot data load.

pub mod aggregate;
pub mod comparison;
pub mod demo;
pub mod domain;
pub mod feed;
pub mod filter;
pub mod repository;
pub mod router;
pub mod service;
pub mod session;
pub mod stats;
pub mod views;

#[cfg(test)]
mod tests;

pub use aggregate::aggregate_applications;
pub use comparison::{parse_candidates, ComparisonSelection, COMPARISON_ROUTE};
pub use domain::{
    Applicant, ApplicantId, Application, ApplicationKey, ApplicationStatus, Gig, GigId, Skill,
    StatusTone, TimelineEntry, TimelineKind, UnknownStatus,
};
pub use feed::{
    attempt_chain, ApplicationFeed, ApplicationListResponse, ApplicationLoader, FeedError,
    LoadSource, LoadedApplications, RepositoryFeed,
};
pub use filter::{ApplicationFilter, FilterParamError, SearchScope, StatusFilter, UnknownScope};
pub use repository::{ApplicationListQuery, GigRepository, RepositoryError, StaticGigRepository};
pub use router::application_router;
pub use service::{ApplicationServiceError, RecruiterApplicationService};
pub use session::FilterState;
pub use stats::{ApplicationStats, StatusCountEntry};
pub use views::{ApplicationRow, ApplicationsOverview, ComparisonView};
