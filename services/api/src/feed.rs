use async_trait::async_trait;
use hirezy::workflows::recruiter::applications::{
    ApplicationFeed, ApplicationListQuery, ApplicationListResponse, FeedError,
};
use tracing::debug;

const APPLICATION_LIST_PATH: &str = "/api/recruiter/application/list";

/// Application list fetched from a remote Hirezy-compatible backend.
pub(crate) struct HttpApplicationFeed {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApplicationFeed {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, APPLICATION_LIST_PATH)
    }
}

#[async_trait]
impl ApplicationFeed for HttpApplicationFeed {
    async fn list(
        &self,
        query: &ApplicationListQuery,
    ) -> Result<ApplicationListResponse, FeedError> {
        let url = self.url();
        debug!(%url, query = query.label(), "requesting application list");

        let response = self
            .client
            .get(&url)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|err| FeedError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Transport(format!("{url} answered {status}")));
        }

        response
            .json::<ApplicationListResponse>()
            .await
            .map_err(|err| FeedError::Decode(err.to_string()))
    }
}
