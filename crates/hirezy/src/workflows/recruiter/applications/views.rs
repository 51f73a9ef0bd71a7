use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Application, ApplicationStatus, StatusTone};
use super::stats::{ApplicationStats, StatusCountEntry};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRow {
    pub key: String,
    pub applicant_id: String,
    pub name: String,
    pub gig_id: String,
    pub gig_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub tone: StatusTone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<NaiveDate>,
    pub skills: Vec<String>,
    pub selected: bool,
}

impl ApplicationRow {
    pub fn from_application(application: &Application, selected: bool) -> Self {
        let status = application.applicant.display_status();
        Self {
            key: application.key().to_string(),
            applicant_id: application.applicant.id.0.clone(),
            name: application.applicant.name.clone(),
            gig_id: application.gig_id.0.clone(),
            gig_title: application.gig_title.clone(),
            role: application.role().map(str::to_string),
            status_label: status.display_name(),
            tone: status.tone(),
            status,
            match_score: application.applicant.match_score,
            applied_date: application.applicant.applied_date,
            skills: application
                .applicant
                .skills
                .iter()
                .map(|skill| skill.name.clone())
                .collect(),
            selected,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationsOverview {
    pub rows: Vec<ApplicationRow>,
    pub visible: usize,
    pub stats: ApplicationStats,
    pub stat_cards: Vec<StatusCountEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub candidates: Vec<Application>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}
