use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use std::sync::Arc;
use hirezy::workflows::market::{market_router, MarketDemandService};
use hirezy::workflows::recruiter::applications::{
    application_router, GigRepository, RecruiterApplicationService,
};

pub(crate) fn with_platform_routes<R>(
    applications: Arc<RecruiterApplicationService<R>>,
    market: Arc<MarketDemandService>,
) -> Router
where
    R: GigRepository + 'static,
{
    application_router(applications)
        .merge(market_router(market))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/recruiter/dashboard/live", get(live_dashboard_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Latest ticker snapshot.
pub(crate) async fn live_dashboard_endpoint(
    Extension(state): Extension<AppState>,
) -> impl IntoResponse {
    let counters = *state.live.read().await;
    Json(counters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use hirezy::workflows::market::demo_market_insights;
    use hirezy::workflows::recruiter::applications::StaticGigRepository;
    use hirezy::workflows::recruiter::LiveCounters;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    fn state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            live: Arc::new(RwLock::new(LiveCounters::default())),
        }
    }

    fn app(state: AppState) -> Router {
        let applications = Arc::new(RecruiterApplicationService::new(Arc::new(
            StaticGigRepository::demo(),
        )));
        let market = Arc::new(MarketDemandService::new(demo_market_insights()));
        with_platform_routes(applications, market).layer(Extension(state))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        let state = state(false);
        let (status, body) = get_json(app(state.clone()), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        state.readiness.store(true, Ordering::Release);
        let (status, _) = get_json(app(state), "/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn live_dashboard_reflects_shared_counters() {
        let state = state(true);
        state.live.write().await.hires_this_month = 11;

        let (status, body) = get_json(app(state), "/api/v1/recruiter/dashboard/live").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hiresThisMonth"], 11);
        assert_eq!(body["activeGigs"], 12);
    }

    #[tokio::test]
    async fn platform_router_serves_applications_and_market() {
        let (status, body) = get_json(app(state(true)), "/api/v1/recruiter/applications/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 10);
        assert_eq!(body["applied"], 4);

        let (status, body) = get_json(app(state(true)), "/api/v1/market/demand?search=sql").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["insights"]["skills"][0]["skill"], "SQL");
    }

    #[tokio::test]
    async fn health_is_static() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }
}
