use super::domain::{Application, Gig};

/// Flatten gigs into application rows, keeping gig order then applicant order.
pub fn aggregate_applications(gigs: &[Gig]) -> Vec<Application> {
    gigs.iter()
        .flat_map(|gig| {
            gig.applicants
                .iter()
                .cloned()
                .map(move |applicant| Application::from_gig(gig, applicant))
        })
        .collect()
}
