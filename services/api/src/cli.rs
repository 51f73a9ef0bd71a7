use crate::commands::{
    run_application_compare, run_application_export, run_application_list,
    run_application_stats, run_market_export, run_market_show,
};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::SourceOverrides;
use crate::server;
use clap::{Args, Parser, Subcommand};
use hirezy::error::AppError;
use hirezy::workflows::export::ExportFormat;
use hirezy::workflows::recruiter::applications::{ApplicationFilter, SearchScope, StatusFilter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hirezy",
    about = "Serve and inspect the Hirezy recruiter application board",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect, compare and export recruiter applications
    Applications {
        #[command(subcommand)]
        command: ApplicationsCommand,
    },
    /// Show or export skill demand insights
    Market {
        #[command(subcommand)]
        command: MarketCommand,
    },
    /// Walk through the board, a comparison and the exports on demo data
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ApplicationsCommand {
    /// Print the filtered application board
    List(ListArgs),
    /// Print per-status counts over every application
    Stats(SourceArgs),
    /// Write the filtered applications as csv, json or txt
    Export(ApplicationExportArgs),
    /// Compare two or more candidates side by side
    Compare(CompareArgs),
}

#[derive(Subcommand, Debug)]
enum MarketCommand {
    /// Print skill demand, optionally filtered
    Show(MarketArgs),
    /// Write skill demand as csv, json or txt
    Export(MarketExportArgs),
}

/// Where applications are read from.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct SourceArgs {
    /// JSON file holding an array of gigs with nested applicants
    #[arg(long)]
    pub(crate) gigs: Option<PathBuf>,
    /// Base URL of a backend exposing /api/recruiter/application/list
    #[arg(long)]
    pub(crate) api_base: Option<String>,
    /// Recruiter id tried first against the backend
    #[arg(long)]
    pub(crate) recruiter_id: Option<String>,
    /// Gig id tried second against the backend
    #[arg(long)]
    pub(crate) gig_id: Option<String>,
}

impl SourceArgs {
    pub(crate) fn into_overrides(self) -> SourceOverrides {
        SourceOverrides {
            gigs_path: self.gigs,
            feed_url: self.api_base,
            recruiter_id: self.recruiter_id,
            gig_id: self.gig_id,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct FilterArgs {
    /// Case-insensitive name search
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// `all` or one of applied, shortlisted, rejected, interviewed, hired
    #[arg(long, default_value = "all")]
    pub(crate) status: StatusFilter,
    /// Search scope: `name`, or `gig` to match gig titles as well
    #[arg(long, default_value = "name")]
    pub(crate) scope: SearchScope,
}

impl FilterArgs {
    pub(crate) fn filter(&self) -> ApplicationFilter {
        ApplicationFilter::new(self.search.clone(), self.status.clone()).with_scope(self.scope)
    }
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    #[command(flatten)]
    pub(crate) filter: FilterArgs,
    /// Applicant ids marked for comparison in the listing
    #[arg(long, value_delimiter = ',')]
    pub(crate) selected: Vec<String>,
    /// Print the board as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ApplicationExportArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    #[command(flatten)]
    pub(crate) filter: FilterArgs,
    /// csv, json, or txt (`pdf` is accepted as txt)
    #[arg(long, default_value = "csv")]
    pub(crate) format: ExportFormat,
    /// Directory for the export file (defaults to APP_EXPORT_DIR)
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
    /// Applicant ids, comma separated or repeated
    #[arg(value_delimiter = ',', required = true)]
    pub(crate) candidates: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct MarketArgs {
    /// Case-insensitive skill search
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Restrict to one category (`all` for every category)
    #[arg(long)]
    pub(crate) category: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct MarketExportArgs {
    #[command(flatten)]
    pub(crate) market: MarketArgs,
    #[arg(long, default_value = "csv")]
    pub(crate) format: ExportFormat,
    #[arg(long)]
    pub(crate) out_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Applications { command } => match command {
            ApplicationsCommand::List(args) => run_application_list(args).await,
            ApplicationsCommand::Stats(args) => run_application_stats(args).await,
            ApplicationsCommand::Export(args) => run_application_export(args).await,
            ApplicationsCommand::Compare(args) => run_application_compare(args).await,
        },
        Command::Market { command } => match command {
            MarketCommand::Show(args) => run_market_show(args),
            MarketCommand::Export(args) => run_market_export(args),
        },
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use hirezy::workflows::recruiter::applications::{
        ApplicationServiceError, ApplicationStatus, RecruiterApplicationService,
        StaticGigRepository,
    };
    use std::sync::Arc;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_typed_filter_and_format() {
        let cli = Cli::try_parse_from([
            "hirezy",
            "applications",
            "export",
            "--status",
            "hired",
            "--scope",
            "gig",
            "--format",
            "pdf",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Applications {
                command: ApplicationsCommand::Export(args),
            }) => {
                assert_eq!(args.format, ExportFormat::Text);
                let filter = args.filter.filter();
                assert_eq!(filter.status, StatusFilter::Only(ApplicationStatus::Hired));
                assert_eq!(filter.scope, SearchScope::NameAndGigTitle);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_canonical_status() {
        let parsed = Cli::try_parse_from(["hirezy", "applications", "list", "--status", "Hired"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn compare_splits_comma_separated_ids() {
        let cli = Cli::try_parse_from(["hirezy", "applications", "compare", "1,3", "5"])
            .expect("arguments parse");
        match cli.command {
            Some(Command::Applications {
                command: ApplicationsCommand::Compare(args),
            }) => assert_eq!(args.candidates, vec!["1", "3", "5"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn repeated_compare_ids_are_one_selection() {
        let cli = Cli::try_parse_from(["hirezy", "applications", "compare", "1", "1"])
            .expect("arguments parse");
        let Some(Command::Applications {
            command: ApplicationsCommand::Compare(args),
        }) = cli.command
        else {
            panic!("expected compare command");
        };

        let service = RecruiterApplicationService::new(Arc::new(StaticGigRepository::demo()));
        match service.compare(&args.candidates) {
            Err(ApplicationServiceError::InsufficientSelection { selected: 1 }) => {}
            other => panic!("expected insufficient selection, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_search_scope() {
        let parsed = Cli::try_parse_from(["hirezy", "applications", "list", "--scope", "email"]);
        assert!(parsed.is_err());
    }
}
