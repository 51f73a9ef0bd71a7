use crate::cli::{
    ApplicationExportArgs, CompareArgs, ListArgs, MarketArgs, MarketExportArgs, SourceArgs,
};
use crate::demo::{render_board, render_comparison, render_market, render_stats, write_artifact};
use crate::infra::load_repository;
use chrono::Utc;
use hirezy::config::AppConfig;
use hirezy::error::AppError;
use hirezy::telemetry::{self, LogSink};
use hirezy::workflows::export::ExportError;
use hirezy::workflows::market::{demo_market_insights, MarketDemandService, MarketFilter};
use hirezy::workflows::recruiter::applications::{
    ComparisonSelection, RecruiterApplicationService, StaticGigRepository,
};
use std::sync::Arc;
use tracing::debug;

fn cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;
    Ok(config)
}

async fn cli_service(
    source: SourceArgs,
) -> Result<(AppConfig, RecruiterApplicationService<StaticGigRepository>), AppError> {
    let mut config = cli_config()?;
    let gig_id = source.into_overrides().apply(&mut config.data);
    let (repository, data_source) = load_repository(&config.data, gig_id.as_ref()).await?;
    debug!(source = data_source.label(), "application source ready");
    Ok((
        config,
        RecruiterApplicationService::new(Arc::new(repository)),
    ))
}

fn market_filter(args: &MarketArgs) -> MarketFilter {
    MarketFilter::from_params(args.search.as_deref(), args.category.as_deref())
}

pub(crate) async fn run_application_list(args: ListArgs) -> Result<(), AppError> {
    let ListArgs {
        source,
        filter,
        selected,
        json,
    } = args;
    let (_, service) = cli_service(source).await?;

    let mut selection = ComparisonSelection::new();
    if !selected.is_empty() {
        selection.enter();
        for id in &selected {
            selection.toggle(id);
        }
    }

    let overview = service.overview(&filter.filter(), &selection)?;
    if json {
        let body = serde_json::to_string_pretty(&overview).map_err(ExportError::from)?;
        println!("{body}");
    } else {
        println!("{}", render_board(&overview));
    }
    Ok(())
}

pub(crate) async fn run_application_stats(args: SourceArgs) -> Result<(), AppError> {
    let (_, service) = cli_service(args).await?;
    println!("{}", render_stats(&service.stats()?));
    Ok(())
}

pub(crate) async fn run_application_export(args: ApplicationExportArgs) -> Result<(), AppError> {
    let ApplicationExportArgs {
        source,
        filter,
        format,
        out_dir,
    } = args;
    let (config, service) = cli_service(source).await?;

    let artifact = service.export(&filter.filter(), format, Utc::now())?;
    let dir = out_dir.unwrap_or(config.data.export_dir);
    write_artifact(&artifact, &dir)?;
    Ok(())
}

pub(crate) async fn run_application_compare(args: CompareArgs) -> Result<(), AppError> {
    let (_, service) = cli_service(args.source).await?;
    let view = service.compare(&args.candidates)?;
    print!("{}", render_comparison(&view));
    Ok(())
}

pub(crate) fn run_market_show(args: MarketArgs) -> Result<(), AppError> {
    cli_config()?;
    let service = MarketDemandService::new(demo_market_insights());
    println!("{}", render_market(&service.insights(&market_filter(&args))));
    Ok(())
}

pub(crate) fn run_market_export(args: MarketExportArgs) -> Result<(), AppError> {
    let config = cli_config()?;
    let service = MarketDemandService::new(demo_market_insights());

    let artifact = service.export(&market_filter(&args.market), args.format, Utc::now())?;
    let dir = args.out_dir.unwrap_or(config.data.export_dir);
    write_artifact(&artifact, &dir)?;
    Ok(())
}
