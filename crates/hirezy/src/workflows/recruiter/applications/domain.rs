use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ids arrive as JSON strings or integers depending on the upstream source.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIdentifier {
    Text(String),
    Number(i64),
}

impl RawIdentifier {
    fn into_string(self) -> String {
        match self {
            RawIdentifier::Text(text) => text,
            RawIdentifier::Number(number) => number.to_string(),
        }
    }
}

/// Identifier of an applicant. Unique within a gig only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ApplicantId(pub String);

impl<'de> Deserialize<'de> for ApplicantId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawIdentifier::deserialize(deserializer).map(|raw| Self(raw.into_string()))
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct GigId(pub String);

impl<'de> Deserialize<'de> for GigId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawIdentifier::deserialize(deserializer).map(|raw| Self(raw.into_string()))
    }
}

impl fmt::Display for GigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status of an application as tracked on the recruiter board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Rejected,
    Interviewed,
    Hired,
    /// Any status string outside the canonical five, kept verbatim.
    Unrecognized(String),
}

impl ApplicationStatus {
    /// The canonical statuses in stat-card order.
    pub const fn ordered() -> [ApplicationStatus; 5] {
        [
            ApplicationStatus::Applied,
            ApplicationStatus::Shortlisted,
            ApplicationStatus::Rejected,
            ApplicationStatus::Interviewed,
            ApplicationStatus::Hired,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Interviewed => "interviewed",
            ApplicationStatus::Hired => "hired",
            ApplicationStatus::Unrecognized(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Interviewed => "Interviewed",
            ApplicationStatus::Hired => "Hired",
            ApplicationStatus::Unrecognized(_) => "Unknown",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            ApplicationStatus::Applied => StatusTone::Blue,
            ApplicationStatus::Shortlisted => StatusTone::Yellow,
            ApplicationStatus::Rejected => StatusTone::Red,
            ApplicationStatus::Interviewed => StatusTone::Purple,
            ApplicationStatus::Hired => StatusTone::Green,
            ApplicationStatus::Unrecognized(_) => StatusTone::Gray,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Only the canonical lowercase names parse.
impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ordered()
            .into_iter()
            .find(|status| status.label() == value)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

impl Serialize for ApplicationStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Never fails on a string: anything non-canonical becomes `Unrecognized`.
impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or(ApplicationStatus::Unrecognized(raw)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status '{0}'")]
pub struct UnknownStatus(pub String);

/// Badge colour bucket for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Blue,
    Yellow,
    Red,
    Purple,
    Green,
    Gray,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSkill {
    Name(String),
    Rated {
        name: String,
        #[serde(default)]
        level: Option<RawLevel>,
    },
}

/// Skill entry, normalised from either a bare name or a `{name, level}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Skill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
        }
    }

    pub fn rated(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Some(level.into()),
        }
    }
}

impl<'de> Deserialize<'de> for Skill {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let skill = match RawSkill::deserialize(deserializer)? {
            RawSkill::Name(name) => Skill::named(name),
            RawSkill::Rated { name, level } => Skill {
                name,
                level: level.map(|level| match level {
                    RawLevel::Text(text) => text,
                    RawLevel::Number(number) => number.to_string(),
                }),
            },
        };
        Ok(skill)
    }
}

/// Kinds of events on an applicant's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Applied,
    Reviewed,
    Interview,
    Message,
    Offer,
    Hired,
    Rejected,
    #[serde(other)]
    Note,
}

impl TimelineKind {
    /// Icon identifier rendered next to the timeline entry.
    pub const fn icon(self) -> &'static str {
        match self {
            TimelineKind::Applied => "file-text",
            TimelineKind::Reviewed => "eye",
            TimelineKind::Interview => "calendar",
            TimelineKind::Message => "message-square",
            TimelineKind::Offer => "award",
            TimelineKind::Hired => "check-circle",
            TimelineKind::Rejected => "x-circle",
            TimelineKind::Note => "circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,
}

/// Applicant as submitted against a gig.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub id: ApplicantId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, alias = "experience", skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u16>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposal: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub applied_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<TimelineEntry>,
}

impl Applicant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ApplicantId(id.into()),
            name: name.into(),
            status: None,
            role: None,
            location: None,
            years_of_experience: None,
            skills: Vec::new(),
            match_score: None,
            proposal: None,
            applied_date: None,
            resume_url: None,
            portfolio_url: None,
            timeline: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Status shown on badges; a missing status reads as `applied`.
    pub fn display_status(&self) -> ApplicationStatus {
        self.status.clone().unwrap_or(ApplicationStatus::Applied)
    }
}

/// A posted gig and the applicants it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gig {
    pub id: GigId,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<String>,
    #[serde(default)]
    pub applicants: Vec<Applicant>,
}

/// Flattened application row: an applicant annotated with its gig.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(flatten)]
    pub applicant: Applicant,
    #[serde(default)]
    pub gig_id: GigId,
    #[serde(default)]
    pub gig_title: String,
}

impl Application {
    pub fn from_gig(gig: &Gig, applicant: Applicant) -> Self {
        Self {
            applicant,
            gig_id: gig.id.clone(),
            gig_title: gig.title.clone(),
        }
    }

    pub fn key(&self) -> ApplicationKey {
        ApplicationKey {
            applicant_id: self.applicant.id.clone(),
            gig_id: self.gig_id.clone(),
        }
    }

    /// Applicant role, falling back to the gig title.
    pub fn role(&self) -> Option<&str> {
        self.applicant
            .role
            .as_deref()
            .or_else(|| (!self.gig_title.is_empty()).then_some(self.gig_title.as_str()))
    }
}

/// Rendering key; applicant ids repeat across gigs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicationKey {
    pub applicant_id: ApplicantId,
    pub gig_id: GigId,
}

impl fmt::Display for ApplicationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.applicant_id, self.gig_id)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD or RFC 3339 ({err})"))
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.filter(|value| !value.trim().is_empty())
        .map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
