use crate::cli::ServeArgs;
use crate::infra::{load_repository, run_live_ticker, AppState};
use crate::routes::with_platform_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hirezy::config::AppConfig;
use hirezy::error::AppError;
use hirezy::telemetry::{self, LogSink};
use hirezy::workflows::market::{demo_market_insights, MarketDemandService};
use hirezy::workflows::recruiter::{LiveCounters, RecruiterApplicationService};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let ServeArgs { host, port, source } = args;
    let mut config = AppConfig::load()?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    let gig_id = source.into_overrides().apply(&mut config.data);

    telemetry::init(&config.telemetry, LogSink::Stdout)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let live = Arc::new(RwLock::new(LiveCounters::default()));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        live: live.clone(),
    };

    let (repository, data_source) = load_repository(&config.data, gig_id.as_ref()).await?;
    let application_service = Arc::new(RecruiterApplicationService::new(Arc::new(repository)));
    let market_service = Arc::new(MarketDemandService::new(demo_market_insights()));

    tokio::spawn(run_live_ticker(live, config.data.live_tick));

    let app = with_platform_routes(application_service, market_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        source = data_source.label(),
        "hirezy recruiter api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
