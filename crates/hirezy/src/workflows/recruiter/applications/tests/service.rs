use super::common::*;
use crate::workflows::recruiter::applications::comparison::ComparisonSelection;
use crate::workflows::recruiter::applications::domain::{ApplicationStatus, GigId, StatusTone};
use crate::workflows::recruiter::applications::filter::{ApplicationFilter, StatusFilter};
use crate::workflows::recruiter::applications::repository::{
    ApplicationListQuery, RepositoryError,
};
use crate::workflows::recruiter::applications::{
    ApplicationServiceError, RecruiterApplicationService,
};
use crate::workflows::export::ExportFormat;
use chrono::{TimeZone, Utc};
use std::sync::Arc;

#[test]
fn overview_filters_rows_but_counts_everything() {
    let service = sample_service();
    let filter = ApplicationFilter::new("ann", StatusFilter::All);
    let mut selection = ComparisonSelection::new();
    selection.enter();
    selection.toggle("4");

    let overview = service.overview(&filter, &selection).expect("overview builds");

    assert_eq!(overview.visible, 2);
    assert_eq!(overview.stats.total, 5);
    assert_eq!(overview.stat_cards.len(), 5);

    let annika = overview
        .rows
        .iter()
        .find(|row| row.name == "Annika Berg")
        .expect("annika listed");
    assert!(annika.selected);
    assert_eq!(annika.status, ApplicationStatus::Applied);
    assert_eq!(annika.tone, StatusTone::Blue);
    assert_eq!(annika.key, "4-g-2");
    assert_eq!(annika.role.as_deref(), Some("QA Analyst"));
}

#[test]
fn list_reports_failure_flag_for_empty_results() {
    let service = sample_service();

    let gig = service
        .list(&ApplicationListQuery::Gig(GigId("g-1".to_string())))
        .expect("list succeeds");
    assert!(gig.success);
    assert_eq!(gig.applications.len(), 3);

    let empty = service
        .list(&ApplicationListQuery::Gig(GigId("g-3".to_string())))
        .expect("list succeeds");
    assert!(!empty.success);
    assert!(empty.applications.is_empty());
}

#[test]
fn export_covers_only_filtered_rows() {
    let service = sample_service();
    let filter = ApplicationFilter::new("", StatusFilter::Only(ApplicationStatus::Applied));
    let at = Utc
        .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");

    let artifact = service
        .export(&filter, ExportFormat::Csv, at)
        .expect("export renders");

    assert_eq!(artifact.filename, "applications_2024-06-01.csv");
    assert_eq!(
        artifact.body,
        "\"Name\",\"Role\",\"Status\",\"Skills Match\",\"Applied Date\"\n\
         \"Ann Lee\",\"Backend Developer\",\"applied\",\"80%\",\"2024-01-01\""
    );
}

#[test]
fn json_export_keeps_nested_fields() {
    let service = sample_service();
    let at = Utc
        .with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");

    let artifact = service
        .export(&ApplicationFilter::default(), ExportFormat::Json, at)
        .expect("export renders");
    let value: serde_json::Value = serde_json::from_str(&artifact.body).expect("valid json");

    assert_eq!(value.as_array().map(Vec::len), Some(5));
    assert_eq!(value[0]["gigTitle"], "Rust Engineer");
    assert_eq!(value[0]["matchScore"], 80);
    assert!(artifact.body.contains("\n  {"));
}

#[test]
fn compare_resolves_ids_in_request_order() {
    let service = sample_service();
    let ids = vec!["3".to_string(), "1".to_string(), "99".to_string()];

    let view = service.compare(&ids).expect("comparison resolves");

    let names: Vec<&str> = view
        .candidates
        .iter()
        .map(|application| application.applicant.name.as_str())
        .collect();
    assert_eq!(names, vec!["Chidi Okafor", "Ann Lee"]);
    assert_eq!(view.missing, vec!["99".to_string()]);
}

#[test]
fn compare_rejects_short_selections() {
    let service = sample_service();

    match service.compare(&["1".to_string()]) {
        Err(ApplicationServiceError::InsufficientSelection { selected: 1 }) => {}
        other => panic!("expected insufficient selection, got {other:?}"),
    }

    match service.compare(&["1".to_string(), "42".to_string()]) {
        Err(ApplicationServiceError::UnknownCandidates(missing)) => {
            assert_eq!(missing, vec!["42".to_string()])
        }
        other => panic!("expected unknown candidates, got {other:?}"),
    }
}

#[test]
fn compare_counts_repeated_ids_once() {
    let service = sample_service();

    match service.compare(&["1".to_string(), "1".to_string()]) {
        Err(ApplicationServiceError::InsufficientSelection { selected: 1 }) => {}
        other => panic!("expected insufficient selection, got {other:?}"),
    }

    let ids = vec!["3".to_string(), "1".to_string(), "3".to_string()];
    let view = service.compare(&ids).expect("comparison resolves");
    let names: Vec<&str> = view
        .candidates
        .iter()
        .map(|application| application.applicant.name.as_str())
        .collect();
    assert_eq!(names, vec!["Chidi Okafor", "Ann Lee"]);
}

#[test]
fn repository_failures_propagate() {
    let service = RecruiterApplicationService::new(Arc::new(UnavailableRepository));

    match service.stats() {
        Err(ApplicationServiceError::Repository(RepositoryError::Unavailable(message))) => {
            assert_eq!(message, "database offline")
        }
        other => panic!("expected repository error, got {other:?}"),
    }
}
