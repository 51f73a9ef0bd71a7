//! Embedded demo data, used when no gig fixture is configured and as the last
//! step of the load fallback chain.

use chrono::NaiveDate;

use super::aggregate::aggregate_applications;
use super::domain::{
    Applicant, Application, ApplicationStatus, Gig, GigId, Skill, TimelineEntry, TimelineKind,
};

struct Seed {
    id: &'static str,
    name: &'static str,
    status: Option<ApplicationStatus>,
    location: &'static str,
    years: u16,
    skills: &'static [&'static str],
    match_score: Option<u8>,
    applied: (i32, u32, u32),
}

fn applicant(seed: Seed) -> Applicant {
    let applied_date = NaiveDate::from_ymd_opt(seed.applied.0, seed.applied.1, seed.applied.2);
    let mut applicant = Applicant::new(seed.id, seed.name);
    applicant.status = seed.status;
    applicant.location = Some(seed.location.to_string());
    applicant.years_of_experience = Some(seed.years);
    applicant.skills = seed.skills.iter().map(|name| Skill::named(*name)).collect();
    applicant.match_score = seed.match_score;
    applicant.applied_date = applied_date;
    applicant.timeline = vec![TimelineEntry {
        kind: TimelineKind::Applied,
        title: "Application submitted".to_string(),
        date: applied_date,
    }];
    applicant
}

fn gig(id: &str, title: &str, company: &str, recruiter: &str, applicants: Vec<Applicant>) -> Gig {
    Gig {
        id: GigId(id.to_string()),
        title: title.to_string(),
        company: company.to_string(),
        recruiter_id: Some(recruiter.to_string()),
        applicants,
    }
}

/// Four gigs, ten applicants. Applicant ids repeat across gigs.
pub fn demo_gigs() -> Vec<Gig> {
    use ApplicationStatus::*;

    let mut backend = vec![
        applicant(Seed {
            id: "1",
            name: "Ann Lee",
            status: Some(Applied),
            location: "Austin, TX",
            years: 6,
            skills: &["Rust", "PostgreSQL", "Kubernetes"],
            match_score: Some(88),
            applied: (2024, 3, 1),
        }),
        applicant(Seed {
            id: "2",
            name: "Marcus Chen",
            status: Some(Shortlisted),
            location: "Toronto, ON",
            years: 8,
            skills: &["Rust", "gRPC", "AWS"],
            match_score: Some(92),
            applied: (2024, 3, 2),
        }),
        applicant(Seed {
            id: "3",
            name: "Sofia Alvarez",
            status: Some(Interviewed),
            location: "Madrid, ES",
            years: 5,
            skills: &["Go", "Rust", "Kafka"],
            match_score: Some(85),
            applied: (2024, 3, 4),
        }),
        applicant(Seed {
            id: "4",
            name: "Diego Ramos",
            status: Some(Rejected),
            location: "Lima, PE",
            years: 2,
            skills: &["Python", "Docker"],
            match_score: Some(61),
            applied: (2024, 3, 5),
        }),
    ];
    backend[1].proposal =
        Some("I have shipped two Rust services handling payments traffic.".to_string());
    backend[1].timeline.push(TimelineEntry {
        kind: TimelineKind::Reviewed,
        title: "Shortlisted by recruiter".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 6),
    });
    backend[2].timeline.push(TimelineEntry {
        kind: TimelineKind::Interview,
        title: "Technical interview".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 11),
    });

    let mut design = vec![
        applicant(Seed {
            id: "1",
            name: "Priya Nair",
            status: Some(Applied),
            location: "Bengaluru, IN",
            years: 4,
            skills: &["Figma", "Design Systems"],
            match_score: Some(79),
            applied: (2024, 3, 3),
        }),
        applicant(Seed {
            id: "2",
            name: "Tom Becker",
            status: Some(Hired),
            location: "Berlin, DE",
            years: 9,
            skills: &["Figma", "User Research", "Prototyping"],
            match_score: Some(95),
            applied: (2024, 2, 20),
        }),
        applicant(Seed {
            id: "3",
            name: "Lena Novak",
            status: None,
            location: "Prague, CZ",
            years: 3,
            skills: &["Sketch", "Illustration"],
            match_score: Some(70),
            applied: (2024, 3, 7),
        }),
    ];
    design[1].portfolio_url = Some("https://portfolio.example.com/tbecker".to_string());
    design[1].timeline.push(TimelineEntry {
        kind: TimelineKind::Hired,
        title: "Offer accepted".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 3, 1),
    });

    let analytics = vec![
        applicant(Seed {
            id: "5",
            name: "Omar Haddad",
            status: Some(Applied),
            location: "Dubai, AE",
            years: 3,
            skills: &["SQL", "Tableau"],
            match_score: Some(74),
            applied: (2024, 3, 8),
        }),
        applicant(Seed {
            id: "6",
            name: "Grace Kim",
            status: Some(Shortlisted),
            location: "Seoul, KR",
            years: 5,
            skills: &["SQL", "Python", "dbt"],
            match_score: Some(89),
            applied: (2024, 3, 9),
        }),
        applicant(Seed {
            id: "7",
            name: "Felix Wagner",
            status: Some(Applied),
            location: "Vienna, AT",
            years: 1,
            skills: &["Excel"],
            match_score: None,
            applied: (2024, 3, 10),
        }),
    ];

    vec![
        gig(
            "101",
            "Senior Rust Engineer",
            "Northwind Labs",
            "rec-1",
            backend,
        ),
        gig("102", "Product Designer", "Northwind Labs", "rec-1", design),
        gig("103", "Data Analyst", "Bluefin Analytics", "rec-2", analytics),
        gig(
            "104",
            "DevOps Contractor",
            "Northwind Labs",
            "rec-1",
            Vec::new(),
        ),
    ]
}

pub fn demo_applications() -> Vec<Application> {
    aggregate_applications(&demo_gigs())
}
