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

use super::domain::MarketFilter;
use super::service::MarketDemandService;
use crate::workflows::export::ExportFormat;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DemandParams {
    pub(crate) search: Option<String>,
    pub(crate) category: Option<String>,
    pub(crate) format: Option<String>,
}

impl DemandParams {
    fn filter(&self) -> MarketFilter {
        MarketFilter::from_params(self.search.as_deref(), self.category.as_deref())
    }
}

pub fn market_router(service: Arc<MarketDemandService>) -> Router {
    Router::new()
        .route("/api/v1/market/demand", get(demand_handler))
        .route("/api/v1/market/demand/export", get(export_handler))
        .with_state(service)
}

pub(crate) async fn demand_handler(
    State(service): State<Arc<MarketDemandService>>,
    Query(params): Query<DemandParams>,
) -> Response {
    let insights = service.insights(&params.filter());
    (
        StatusCode::OK,
        Json(json!({
            "insights": insights,
            "categories": service.categories(),
        })),
    )
        .into_response()
}

pub(crate) async fn export_handler(
    State(service): State<Arc<MarketDemandService>>,
    Query(params): Query<DemandParams>,
) -> Response {
    let format = match params.format.as_deref().unwrap_or("csv").parse::<ExportFormat>() {
        Ok(format) => format,
        Err(err) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": err.to_string() })))
                .into_response()
        }
    };

    match service.export(&params.filter(), format, Utc::now()) {
        Ok(artifact) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, artifact.content_type.to_string()),
                (header::CONTENT_DISPOSITION, artifact.content_disposition()),
            ],
            artifact.body,
        )
            .into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}
