use super::common::*;
use axum::body::{to_bytes, Body};
use axum::extract::{Query, State};
use axum::http::{header, Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::recruiter::applications::router::{
    application_router, list_handler, ListParams,
};
use crate::workflows::recruiter::applications::RecruiterApplicationService;

#[tokio::test]
async fn list_endpoint_prefers_recruiter_filter() {
    let response = list_handler(
        State(sample_service()),
        Query(ListParams {
            recruiter_id: Some("rec-1".to_string()),
            gig_id: Some("g-2".to_string()),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["applications"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn list_route_accepts_camel_case_gig_param() {
    let router = application_router(sample_service());

    let response = router
        .oneshot(
            Request::get("/api/recruiter/application/list?gigId=g-2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let applications = body["applications"].as_array().expect("array");
    assert_eq!(applications.len(), 2);
    assert!(applications
        .iter()
        .all(|application| application["gigId"] == "g-2"));
}

#[tokio::test]
async fn list_route_reports_unsuccessful_empty_gig() {
    let router = application_router(sample_service());
    let response = router
        .oneshot(
            Request::get("/api/recruiter/application/list?gigId=g-3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn overview_route_applies_search_and_status() {
    let router = application_router(sample_service());
    let response = router
        .oneshot(
            Request::get("/api/v1/recruiter/applications?search=QA&scope=gig&status=rejected")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["visible"], 1);
    assert_eq!(body["rows"][0]["name"], "Dana Whitfield");
    assert_eq!(body["stats"]["total"], 5);
}

#[tokio::test]
async fn overview_route_rejects_unknown_status() {
    let router = application_router(sample_service());
    let response = router
        .oneshot(
            Request::get("/api/v1/recruiter/applications?status=Hired")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("Hired"));
}

#[tokio::test]
async fn overview_route_rejects_unknown_scope() {
    let router = application_router(sample_service());
    let response = router
        .oneshot(
            Request::get("/api/v1/recruiter/applications?scope=email")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("email"));
}

#[tokio::test]
async fn export_route_returns_attachment() {
    let router = application_router(sample_service());
    let response = router
        .oneshot(
            Request::get("/api/v1/recruiter/applications/export?format=csv&status=hired")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .expect("ascii header")
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"applications_"));
    assert!(disposition.ends_with(".csv\""));

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    assert_eq!(body.lines().count(), 2);
    assert!(body.ends_with("\"Bo Park\",\"Rust Engineer\",\"hired\",\"N/A\",\"N/A\""));
}

#[tokio::test]
async fn export_route_rejects_unknown_format() {
    let router = application_router(sample_service());
    let response = router
        .oneshot(
            Request::get("/api/v1/recruiter/applications/export?format=xlsx")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn comparison_route_needs_two_candidates() {
    let router = application_router(sample_service());
    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/recruiter/applications/comparison?candidates=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = router
        .oneshot(
            Request::get("/api/v1/recruiter/applications/comparison?candidates=2,3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["candidates"].as_array().map(Vec::len), Some(2));
    assert!(body.get("missing").is_none());
}

#[tokio::test]
async fn repository_outage_maps_to_internal_error() {
    let service = Arc::new(RecruiterApplicationService::new(Arc::new(
        UnavailableRepository,
    )));
    let router = application_router(service);
    let response = router
        .oneshot(
            Request::get("/api/v1/recruiter/applications/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
