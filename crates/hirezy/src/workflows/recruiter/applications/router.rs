use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::comparison::{parse_candidates, ComparisonSelection};
use super::filter::ApplicationFilter;
use super::repository::{ApplicationListQuery, GigRepository};
use super::service::{ApplicationServiceError, RecruiterApplicationService};
use crate::workflows::export::ExportFormat;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListParams {
    pub(crate) recruiter_id: Option<String>,
    pub(crate) gig_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OverviewParams {
    pub(crate) search: Option<String>,
    pub(crate) status: Option<String>,
    pub(crate) scope: Option<String>,
    /// Comma-separated ids currently picked for comparison.
    pub(crate) selected: Option<String>,
    pub(crate) format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ComparisonParams {
    pub(crate) candidates: Option<String>,
}

/// Router builder exposing the application list, overview, export and comparison endpoints.
pub fn application_router<R>(service: Arc<RecruiterApplicationService<R>>) -> Router
where
    R: GigRepository + 'static,
{
    Router::new()
        .route("/api/recruiter/application/list", get(list_handler::<R>))
        .route("/api/v1/recruiter/applications", get(overview_handler::<R>))
        .route(
            "/api/v1/recruiter/applications/stats",
            get(stats_handler::<R>),
        )
        .route(
            "/api/v1/recruiter/applications/export",
            get(export_handler::<R>),
        )
        .route(
            "/api/v1/recruiter/applications/comparison",
            get(comparison_handler::<R>),
        )
        .with_state(service)
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn service_error_response(error: ApplicationServiceError) -> Response {
    let status = match &error {
        ApplicationServiceError::InsufficientSelection { .. }
        | ApplicationServiceError::UnknownCandidates(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationServiceError::Repository(_) | ApplicationServiceError::Export(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, error.to_string())
}

fn filter_from(params: &OverviewParams) -> Result<ApplicationFilter, Response> {
    ApplicationFilter::from_params(
        params.search.as_deref(),
        params.status.as_deref(),
        params.scope.as_deref(),
    )
    .map_err(|err| error_response(StatusCode::BAD_REQUEST, err.to_string()))
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<RecruiterApplicationService<R>>>,
    Query(params): Query<ListParams>,
) -> Response
where
    R: GigRepository + 'static,
{
    let query = ApplicationListQuery::from_params(params.recruiter_id, params.gig_id);
    match service.list(&query) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(other) => service_error_response(other),
    }
}

pub(crate) async fn overview_handler<R>(
    State(service): State<Arc<RecruiterApplicationService<R>>>,
    Query(params): Query<OverviewParams>,
) -> Response
where
    R: GigRepository + 'static,
{
    let filter = match filter_from(&params) {
        Ok(filter) => filter,
        Err(response) => return response,
    };

    let mut selection = ComparisonSelection::new();
    if let Some(selected) = params.selected.as_deref() {
        selection.enter();
        for id in parse_candidates(selected) {
            selection.toggle(&id);
        }
    }

    match service.overview(&filter, &selection) {
        Ok(overview) => (StatusCode::OK, Json(overview)).into_response(),
        Err(other) => service_error_response(other),
    }
}

pub(crate) async fn stats_handler<R>(
    State(service): State<Arc<RecruiterApplicationService<R>>>,
) -> Response
where
    R: GigRepository + 'static,
{
    match service.stats() {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(other) => service_error_response(other),
    }
}

pub(crate) async fn export_handler<R>(
    State(service): State<Arc<RecruiterApplicationService<R>>>,
    Query(params): Query<OverviewParams>,
) -> Response
where
    R: GigRepository + 'static,
{
    let filter = match filter_from(&params) {
        Ok(filter) => filter,
        Err(response) => return response,
    };
    let format = match params.format.as_deref().unwrap_or("csv").parse::<ExportFormat>() {
        Ok(format) => format,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, err.to_string()),
    };

    match service.export(&filter, format, Utc::now()) {
        Ok(artifact) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, artifact.content_type.to_string()),
                (header::CONTENT_DISPOSITION, artifact.content_disposition()),
            ],
            artifact.body,
        )
            .into_response(),
        Err(other) => service_error_response(other),
    }
}

pub(crate) async fn comparison_handler<R>(
    State(service): State<Arc<RecruiterApplicationService<R>>>,
    Query(params): Query<ComparisonParams>,
) -> Response
where
    R: GigRepository + 'static,
{
    let ids = parse_candidates(params.candidates.as_deref().unwrap_or_default());
    match service.compare(&ids) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(other) => service_error_response(other),
    }
}
