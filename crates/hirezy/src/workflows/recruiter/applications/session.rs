use super::comparison::ComparisonSelection;
use super::domain::Application;
use super::filter::{ApplicationFilter, SearchScope, StatusFilter};
use super::stats::ApplicationStats;

/// Per-session state of the applications view. Nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub filter: ApplicationFilter,
    pub comparison: ComparisonSelection,
}

impl FilterState {
    pub fn new(scope: SearchScope) -> Self {
        Self {
            filter: ApplicationFilter::default().with_scope(scope),
            comparison: ComparisonSelection::new(),
        }
    }

    pub fn search_query(&self) -> &str {
        &self.filter.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
    }

    pub fn status_filter(&self) -> &StatusFilter {
        &self.filter.status
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    pub fn toggle_comparison_mode(&mut self) -> bool {
        self.comparison.toggle_mode()
    }

    pub fn toggle_selected(&mut self, id: &str) -> bool {
        self.comparison.toggle(id)
    }

    pub fn visible<'a>(&self, applications: &'a [Application]) -> Vec<&'a Application> {
        self.filter.apply(applications)
    }

    /// Independent of the active search and status selector.
    pub fn stats(&self, applications: &[Application]) -> ApplicationStats {
        ApplicationStats::from_applications(applications)
    }
}
