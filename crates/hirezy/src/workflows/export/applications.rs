use super::{or_missing, percent, Exportable};
use crate::workflows::recruiter::applications::{Application, ApplicationStatus};

impl Exportable for Application {
    const CSV_HEADER: &'static [&'static str] =
        &["Name", "Role", "Status", "Skills Match", "Applied Date"];

    fn csv_fields(&self) -> Vec<String> {
        vec![
            self.applicant.name.clone(),
            or_missing(self.role()),
            or_missing(self.applicant.status.as_ref().map(ApplicationStatus::label)),
            percent(self.applicant.match_score),
            or_missing(self.applicant.applied_date),
        ]
    }

    fn report_heading(&self) -> String {
        self.applicant.name.clone()
    }

    fn report_details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Role", or_missing(self.role())),
            ("Gig", or_missing((!self.gig_title.is_empty()).then_some(&self.gig_title))),
            ("Status", or_missing(self.applicant.status.as_ref().map(ApplicationStatus::label))),
            ("Match", percent(self.applicant.match_score)),
        ]
    }
}
