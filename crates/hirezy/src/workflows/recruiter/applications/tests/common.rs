use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::to_bytes;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::recruiter::applications::domain::{
    Applicant, Application, ApplicationStatus, Gig, GigId,
};
use crate::workflows::recruiter::applications::feed::{
    ApplicationFeed, ApplicationListResponse, FeedError,
};
use crate::workflows::recruiter::applications::repository::{
    ApplicationListQuery, GigRepository, RepositoryError, StaticGigRepository,
};
use crate::workflows::recruiter::applications::RecruiterApplicationService;

pub(super) fn applicant(id: &str, name: &str, status: Option<ApplicationStatus>) -> Applicant {
    let mut applicant = Applicant::new(id, name);
    applicant.status = status;
    applicant
}

pub(super) fn gig(id: &str, title: &str, applicants: Vec<Applicant>) -> Gig {
    Gig {
        id: GigId(id.to_string()),
        title: title.to_string(),
        company: "Northwind Labs".to_string(),
        recruiter_id: Some("rec-1".to_string()),
        applicants,
    }
}

/// Two gigs sharing applicant id "1".
pub(super) fn sample_gigs() -> Vec<Gig> {
    use ApplicationStatus::*;

    let mut ann = applicant("1", "Ann Lee", Some(Applied));
    ann.role = Some("Backend Developer".to_string());
    ann.match_score = Some(80);
    ann.applied_date = NaiveDate::from_ymd_opt(2024, 1, 1);

    vec![
        gig(
            "g-1",
            "Rust Engineer",
            vec![
                ann,
                applicant("2", "Bo Park", Some(Hired)),
                applicant("3", "Chidi Okafor", Some(Shortlisted)),
            ],
        ),
        gig(
            "g-2",
            "QA Analyst",
            vec![
                applicant("1", "Dana Whitfield", Some(Rejected)),
                applicant("4", "Annika Berg", None),
            ],
        ),
        gig("g-3", "Empty Gig", Vec::new()),
    ]
}

pub(super) fn sample_service() -> Arc<RecruiterApplicationService<StaticGigRepository>> {
    Arc::new(RecruiterApplicationService::new(Arc::new(
        StaticGigRepository::new(sample_gigs()),
    )))
}

pub(super) fn names(applications: &[&Application]) -> Vec<String> {
    applications
        .iter()
        .map(|application| application.applicant.name.clone())
        .collect()
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) struct UnavailableRepository;

impl GigRepository for UnavailableRepository {
    fn gigs(&self) -> Result<Vec<Gig>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Scripted feed that answers each query from a fixed table and records what it was asked.
#[derive(Default)]
pub(super) struct ScriptedFeed {
    pub(super) recruiter: Option<Result<ApplicationListResponse, String>>,
    pub(super) gig: Option<Result<ApplicationListResponse, String>>,
    pub(super) all: Option<Result<ApplicationListResponse, String>>,
    pub(super) calls: AtomicUsize,
    pub(super) queries: Mutex<Vec<ApplicationListQuery>>,
}

impl ScriptedFeed {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn queries(&self) -> Vec<ApplicationListQuery> {
        self.queries.lock().expect("queries mutex poisoned").clone()
    }
}

#[async_trait]
impl ApplicationFeed for ScriptedFeed {
    async fn list(
        &self,
        query: &ApplicationListQuery,
    ) -> Result<ApplicationListResponse, FeedError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .expect("queries mutex poisoned")
            .push(query.clone());

        let scripted = match query {
            ApplicationListQuery::Recruiter(_) => &self.recruiter,
            ApplicationListQuery::Gig(_) => &self.gig,
            ApplicationListQuery::All => &self.all,
        };

        match scripted {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(FeedError::Transport(message.clone())),
            None => Ok(ApplicationListResponse {
                success: false,
                applications: Vec::new(),
            }),
        }
    }
}
