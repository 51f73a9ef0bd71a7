use serde::Serialize;

use super::domain::{Application, ApplicationStatus};

/// Per-status counts over the full application list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationStats {
    pub total: usize,
    pub applied: usize,
    pub shortlisted: usize,
    pub rejected: usize,
    pub interviewed: usize,
    pub hired: usize,
}

/// One stat card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountEntry {
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub count: usize,
}

impl ApplicationStats {
    /// Rows without a status and unrecognized statuses count toward `total` only.
    pub fn from_applications(applications: &[Application]) -> Self {
        let count = |status: ApplicationStatus| {
            applications
                .iter()
                .filter(|application| application.applicant.status.as_ref() == Some(&status))
                .count()
        };

        Self {
            total: applications.len(),
            applied: count(ApplicationStatus::Applied),
            shortlisted: count(ApplicationStatus::Shortlisted),
            rejected: count(ApplicationStatus::Rejected),
            interviewed: count(ApplicationStatus::Interviewed),
            hired: count(ApplicationStatus::Hired),
        }
    }

    pub fn count(&self, status: &ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Applied => self.applied,
            ApplicationStatus::Shortlisted => self.shortlisted,
            ApplicationStatus::Rejected => self.rejected,
            ApplicationStatus::Interviewed => self.interviewed,
            ApplicationStatus::Hired => self.hired,
            ApplicationStatus::Unrecognized(_) => 0,
        }
    }

    pub fn named_total(&self) -> usize {
        ApplicationStatus::ordered()
            .into_iter()
            .map(|status| self.count(&status))
            .sum()
    }

    pub fn entries(&self) -> Vec<StatusCountEntry> {
        ApplicationStatus::ordered()
            .into_iter()
            .map(|status| StatusCountEntry {
                status_label: status.display_name(),
                count: self.count(&status),
                status,
            })
            .collect()
    }
}
