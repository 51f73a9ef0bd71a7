use chrono::Utc;
use clap::Args;
use hirezy::config::AppConfig;
use hirezy::error::AppError;
use hirezy::telemetry::{self, LogSink};
use hirezy::workflows::export::{ExportArtifact, ExportFormat};
use hirezy::workflows::market::{
    demo_market_insights, MarketDemandService, MarketFilter, MarketInsights,
};
use hirezy::workflows::recruiter::applications::{
    ApplicationStats, ApplicationStatus, ApplicationsOverview, ComparisonSelection,
    ComparisonView, FilterState, RecruiterApplicationService, SearchScope, StaticGigRepository,
    StatusFilter,
};
use hirezy::workflows::recruiter::LiveCounters;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Also write every export format for applications and market demand
    #[arg(long)]
    pub(crate) write_exports: bool,
    /// Directory for exported files (defaults to APP_EXPORT_DIR)
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
    /// Seed for the simulated live dashboard ticks
    #[arg(long, default_value_t = 7)]
    pub(crate) seed: u64,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;

    let service = RecruiterApplicationService::new(Arc::new(StaticGigRepository::demo()));
    let applications = service.applications()?;

    let mut state = FilterState::new(SearchScope::Name);
    println!("== Application board ==");
    println!("{}", render_stats(&state.stats(&applications)));
    println!(
        "{}",
        render_board(&service.overview(&state.filter, &state.comparison)?)
    );

    state.set_status_filter(StatusFilter::Only(ApplicationStatus::Shortlisted));
    println!("== Shortlisted only ==");
    println!(
        "{}",
        render_board(&service.overview(&state.filter, &state.comparison)?)
    );

    state.set_status_filter(StatusFilter::All);
    state.set_search_query("a");
    state.toggle_comparison_mode();
    state.toggle_selected("1");
    state.toggle_selected("2");
    println!("== Search \"a\" with two candidates selected ==");
    println!(
        "{}",
        render_board(&service.overview(&state.filter, &state.comparison)?)
    );

    println!("{}", selection_summary(&state.comparison));
    let view = service.compare(state.comparison.ids())?;
    println!("{}", render_comparison(&view));

    println!("== Live dashboard ==");
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut counters = LiveCounters::default();
    for _ in 0..3 {
        println!("{}", render_live(&counters));
        counters = counters.tick(&mut rng);
    }
    println!("{}", render_live(&counters));

    let market = MarketDemandService::new(demo_market_insights());
    let insights = market.insights(&MarketFilter::default());
    println!();
    println!("== Market demand ==");
    println!("{}", render_market(&insights));

    if args.write_exports {
        let dir = args.out_dir.unwrap_or(config.data.export_dir);
        let now = Utc::now();
        let mut artifacts = Vec::new();
        for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Text] {
            artifacts.push(service.export(&state.filter, format, now)?);
            artifacts.push(market.export(&MarketFilter::default(), format, now)?);
        }
        for artifact in &artifacts {
            write_artifact(artifact, &dir)?;
        }
    }

    Ok(())
}

pub(crate) fn write_artifact(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf, AppError> {
    let path = artifact.write_to(dir)?;
    println!("Wrote {} ({})", path.display(), artifact.content_type);
    Ok(path)
}

pub(crate) fn render_stats(stats: &ApplicationStats) -> String {
    let mut out = format!("Total: {}", stats.total);
    for entry in stats.entries() {
        let _ = write!(out, " | {}: {}", entry.status_label, entry.count);
    }
    out
}

pub(crate) fn render_board(overview: &ApplicationsOverview) -> String {
    let mut out = format!(
        "{:<3} {:<10} {:<18} {:<22} {:<12} {:>5}\n",
        "", "Key", "Name", "Gig", "Status", "Match"
    );
    for row in &overview.rows {
        let match_score = row
            .match_score
            .map(|score| format!("{score}%"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<3} {:<10} {:<18} {:<22} {:<12} {:>5}",
            if row.selected { "[x]" } else { "[ ]" },
            row.key,
            row.name,
            row.gig_title,
            row.status_label,
            match_score
        );
    }
    let _ = write!(
        out,
        "Showing {} of {} applications",
        overview.visible, overview.stats.total
    );
    out
}

pub(crate) fn render_comparison(view: &ComparisonView) -> String {
    let mut out = String::from("Candidate comparison\n");
    for candidate in &view.candidates {
        let applicant = &candidate.applicant;
        let skills: Vec<&str> = applicant
            .skills
            .iter()
            .map(|skill| skill.name.as_str())
            .collect();
        let _ = writeln!(
            out,
            "- {} ({}) | {} | match {} | {} yrs | skills: {}",
            applicant.name,
            candidate.gig_title,
            applicant.display_status().display_name(),
            applicant
                .match_score
                .map(|score| format!("{score}%"))
                .unwrap_or_else(|| "n/a".to_string()),
            applicant
                .years_of_experience
                .map(|years| years.to_string())
                .unwrap_or_else(|| "?".to_string()),
            if skills.is_empty() {
                "none".to_string()
            } else {
                skills.join(", ")
            }
        );
    }
    if !view.missing.is_empty() {
        let _ = writeln!(out, "Not found: {}", view.missing.join(", "));
    }
    out
}

pub(crate) fn render_live(counters: &LiveCounters) -> String {
    format!(
        "active gigs {:>3} | applications today {:>3} | interviews {:>3} | hires this month {:>3}",
        counters.active_gigs,
        counters.applications_today,
        counters.interviews_scheduled,
        counters.hires_this_month
    )
}

pub(crate) fn render_market(insights: &MarketInsights) -> String {
    let mut out = format!("Updated {}\n", insights.updated_on);
    for skill in &insights.skills {
        let _ = writeln!(
            out,
            "{:<18} {:<12} {:>4}% {:>6} jobs  ${:<7} {}",
            skill.skill,
            skill.category,
            skill.growth_pct,
            skill.jobs,
            skill.average_salary,
            skill.trend.label()
        );
    }
    let leaders: Vec<&str> = insights
        .top_growing(3)
        .into_iter()
        .map(|skill| skill.skill.as_str())
        .collect();
    let _ = write!(out, "Fastest growing: {}", leaders.join(", "));
    out
}

pub(crate) fn selection_summary(selection: &ComparisonSelection) -> String {
    match selection.comparison_url() {
        Some(url) => format!("{} selected, compare at {url}", selection.len()),
        None => format!("{} selected, pick at least two to compare", selection.len()),
    }
}
