use crate::feed::HttpApplicationFeed;
use hirezy::config::DataConfig;
use hirezy::workflows::recruiter::applications::{
    ApplicationLoader, GigId, LoadSource, RepositoryError, StaticGigRepository,
};
use hirezy::workflows::recruiter::LiveCounters;
use metrics_exporter_prometheus::PrometheusHandle;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) live: Arc<RwLock<LiveCounters>>,
}

/// Where the served applications came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DataSource {
    Fixture,
    Feed(LoadSource),
    Demo,
}

impl DataSource {
    pub(crate) fn label(self) -> &'static str {
        match self {
            DataSource::Fixture => "fixture",
            DataSource::Feed(LoadSource::Demo) | DataSource::Demo => "demo",
            DataSource::Feed(_) => "feed",
        }
    }
}

/// Source flags shared by the server and CLI commands; each one overrides its config counterpart.
#[derive(Debug, Clone, Default)]
pub(crate) struct SourceOverrides {
    pub(crate) gigs_path: Option<std::path::PathBuf>,
    pub(crate) feed_url: Option<String>,
    pub(crate) recruiter_id: Option<String>,
    pub(crate) gig_id: Option<String>,
}

impl SourceOverrides {
    pub(crate) fn apply(self, data: &mut DataConfig) -> Option<GigId> {
        if let Some(path) = self.gigs_path {
            data.gigs_path = Some(path);
        }
        if let Some(url) = self.feed_url {
            data.feed_url = Some(url);
        }
        if let Some(recruiter_id) = self.recruiter_id {
            data.recruiter_id = Some(recruiter_id);
        }
        self.gig_id.map(GigId)
    }
}

/// A JSON fixture wins over a remote feed; with neither, the embedded demo board is used.
pub(crate) async fn load_repository(
    data: &DataConfig,
    gig_id: Option<&GigId>,
) -> Result<(StaticGigRepository, DataSource), RepositoryError> {
    if let Some(path) = &data.gigs_path {
        let repository = StaticGigRepository::from_path(path)?;
        info!(path = %path.display(), "loaded gigs from fixture");
        return Ok((repository, DataSource::Fixture));
    }

    if let Some(url) = &data.feed_url {
        let loader = ApplicationLoader::new(Arc::new(HttpApplicationFeed::new(url.as_str())));
        let recruiter_id = data.recruiter_id.as_deref();
        let loaded = loader.load(recruiter_id, gig_id).await;
        info!(
            source = ?loaded.source,
            attempts = loaded.attempts,
            count = loaded.applications.len(),
            "loaded applications"
        );
        // Only the recruiter slice is known to belong to the configured recruiter.
        let owner = recruiter_id.filter(|_| loaded.source == LoadSource::Recruiter);
        return Ok((
            StaticGigRepository::from_applications(loaded.applications, owner),
            DataSource::Feed(loaded.source),
        ));
    }

    debug!("no gig source configured, using demo data");
    Ok((StaticGigRepository::demo(), DataSource::Demo))
}

/// Replaces the shared counters with a fresh tick on every interval.
pub(crate) async fn run_live_ticker(live: Arc<RwLock<LiveCounters>>, period: Duration) {
    let mut rng = StdRng::from_entropy();
    let mut interval = tokio::time::interval(period);
    interval.tick().await;
    loop {
        interval.tick().await;
        let mut counters = live.write().await;
        *counters = counters.tick(&mut rng);
        debug!(counters = ?*counters, "live counters ticked");
    }
}
