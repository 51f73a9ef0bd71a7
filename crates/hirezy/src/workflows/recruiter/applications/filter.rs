use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{Application, ApplicationStatus, UnknownStatus};

/// Status selector: the `all` sentinel or one canonical status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(ApplicationStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: Option<&ApplicationStatus>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => status == Some(expected),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(StatusFilter::All);
        }
        value.parse().map(StatusFilter::Only)
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        value.to_string()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => f.write_str(status.label()),
        }
    }
}

/// Which fields the text search looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    #[default]
    Name,
    /// Gig-wide listing, where the gig title is searchable too.
    NameAndGigTitle,
}

impl FromStr for SearchScope {
    type Err = UnknownScope;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "name" => Ok(SearchScope::Name),
            "name_and_gig_title" | "gig" => Ok(SearchScope::NameAndGigTitle),
            other => Err(UnknownScope(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search scope '{0}'")]
pub struct UnknownScope(pub String);

/// A request parameter of the applications view that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterParamError {
    #[error(transparent)]
    Status(#[from] UnknownStatus),
    #[error(transparent)]
    Scope(#[from] UnknownScope),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub search_query: String,
    pub status: StatusFilter,
    pub scope: SearchScope,
}

impl ApplicationFilter {
    pub fn new(search_query: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search_query: search_query.into(),
            status,
            scope: SearchScope::Name,
        }
    }

    /// Build from loosely typed request parameters; blank values mean "no constraint".
    pub fn from_params(
        search: Option<&str>,
        status: Option<&str>,
        scope: Option<&str>,
    ) -> Result<Self, FilterParamError> {
        let status = match status.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value.parse()?,
            None => StatusFilter::All,
        };
        let scope = match scope.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value.parse()?,
            None => SearchScope::default(),
        };

        Ok(Self::new(search.unwrap_or_default(), status).with_scope(scope))
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn matches_search(&self, application: &Application) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let query = self.search_query.to_lowercase();
        if application.applicant.name.to_lowercase().contains(&query) {
            return true;
        }
        self.scope == SearchScope::NameAndGigTitle
            && application.gig_title.to_lowercase().contains(&query)
    }

    pub fn matches_status(&self, application: &Application) -> bool {
        self.status.matches(application.applicant.status.as_ref())
    }

    pub fn matches(&self, application: &Application) -> bool {
        self.matches_search(application) && self.matches_status(application)
    }

    /// Recomputed from scratch on every call; input order is preserved.
    pub fn apply<'a>(&self, applications: &'a [Application]) -> Vec<&'a Application> {
        applications
            .iter()
            .filter(|application| self.matches(application))
            .collect()
    }
}
