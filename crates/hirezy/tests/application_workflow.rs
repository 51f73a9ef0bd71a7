use hirezy::workflows::recruiter::applications::{
    aggregate_applications, Application, ApplicationStatus, FilterState, GigRepository,
    SearchScope, StaticGigRepository, StatusFilter, StatusTone,
};

const FIXTURE: &str = r#"[
  {
    "id": 501,
    "title": "Backend Engineer",
    "company": "Acme",
    "recruiterId": "rec-9",
    "applicants": [
      {
        "id": 1,
        "name": "Ann Lee",
        "status": "applied",
        "skills": ["Rust", {"name": "SQL", "level": 4}],
        "matchScore": 91,
        "appliedDate": "2024-02-03T10:15:00Z",
        "timeline": [{"kind": "interview", "title": "Phone screen", "date": "2024-02-10"}]
      },
      {"id": "2", "name": "Bo Park", "status": "on_hold", "experience": 6},
      {"id": "3", "name": "Cy Moss"}
    ]
  },
  {
    "id": "502",
    "title": "Frontend Engineer",
    "applicants": [
      {"id": 1, "name": "Dee Fox", "status": "hired", "appliedDate": "2024-01-20"}
    ]
  }
]"#;

fn fixture_applications() -> Vec<Application> {
    let repository =
        StaticGigRepository::from_reader(FIXTURE.as_bytes()).expect("fixture parses");
    aggregate_applications(&repository.gigs().expect("fixture gigs"))
}

#[test]
fn fixture_ingestion_normalises_loose_fields() {
    let applications = fixture_applications();
    assert_eq!(applications.len(), 4);

    let ann = &applications[0];
    assert_eq!(ann.applicant.id.0, "1");
    assert_eq!(ann.gig_id.0, "501");
    assert_eq!(ann.gig_title, "Backend Engineer");
    assert_eq!(ann.applicant.skills[1].level.as_deref(), Some("4"));
    assert_eq!(
        ann.applicant.applied_date.map(|date| date.to_string()),
        Some("2024-02-03".to_string())
    );

    let bo = &applications[1];
    assert_eq!(
        bo.applicant.status,
        Some(ApplicationStatus::Unrecognized("on_hold".to_string()))
    );
    assert_eq!(bo.applicant.display_status().tone(), StatusTone::Gray);
    assert_eq!(bo.applicant.years_of_experience, Some(6));

    let keys: Vec<String> = applications
        .iter()
        .map(|application| application.key().to_string())
        .collect();
    assert_eq!(keys, vec!["1-501", "2-501", "3-501", "1-502"]);
}

#[test]
fn stats_ignore_filters_and_skip_non_canonical_statuses() {
    let applications = fixture_applications();
    let mut state = FilterState::new(SearchScope::Name);
    state.set_status_filter(StatusFilter::Only(ApplicationStatus::Hired));

    let visible = state.visible(&applications);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].applicant.name, "Dee Fox");

    let stats = state.stats(&applications);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.applied, 1);
    assert_eq!(stats.hired, 1);
    assert_eq!(stats.named_total(), 2);
}

#[test]
fn gig_wide_scope_searches_gig_titles() {
    let applications = fixture_applications();
    let mut state = FilterState::new(SearchScope::NameAndGigTitle);
    state.set_search_query("frontend");

    let names: Vec<&str> = state
        .visible(&applications)
        .into_iter()
        .map(|application| application.applicant.name.as_str())
        .collect();
    assert_eq!(names, vec!["Dee Fox"]);
}

#[test]
fn comparison_selection_survives_filter_changes_until_mode_exits() {
    let mut state = FilterState::new(SearchScope::Name);
    assert!(state.toggle_comparison_mode());
    state.toggle_selected("1");
    state.toggle_selected("3");
    state.set_search_query("zzz");

    assert!(state.comparison.can_compare());
    assert_eq!(
        state.comparison.comparison_url().as_deref(),
        Some("/recruiter/applications/comparison?candidates=1,3")
    );

    assert!(!state.toggle_comparison_mode());
    assert!(state.comparison.is_empty());
}
