use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemandTrend {
    Rising,
    Stable,
    Declining,
}

impl DemandTrend {
    pub const fn label(self) -> &'static str {
        match self {
            DemandTrend::Rising => "rising",
            DemandTrend::Stable => "stable",
            DemandTrend::Declining => "declining",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDemand {
    pub skill: String,
    pub category: String,
    /// Year-over-year change in postings, may be negative.
    pub growth_pct: i32,
    pub jobs: u32,
    pub average_salary: u32,
    #[serde(default)]
    pub regions: Vec<String>,
    pub trend: DemandTrend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDemand {
    pub region: String,
    pub jobs: u32,
    pub growth_pct: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsights {
    pub skills: Vec<SkillDemand>,
    #[serde(default)]
    pub regions: Vec<RegionDemand>,
    pub updated_on: NaiveDate,
}

impl MarketInsights {
    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for skill in &self.skills {
            if !categories.contains(&skill.category.as_str()) {
                categories.push(skill.category.as_str());
            }
        }
        categories
    }

    /// Skills narrowed by `filter`; regions and date are carried over untouched.
    pub fn filtered(&self, filter: &MarketFilter) -> MarketInsights {
        MarketInsights {
            skills: self
                .skills
                .iter()
                .filter(|skill| filter.matches(skill))
                .cloned()
                .collect(),
            regions: self.regions.clone(),
            updated_on: self.updated_on,
        }
    }

    pub fn top_growing(&self, limit: usize) -> Vec<&SkillDemand> {
        let mut skills: Vec<&SkillDemand> = self.skills.iter().collect();
        skills.sort_by(|a, b| b.growth_pct.cmp(&a.growth_pct));
        skills.truncate(limit);
        skills
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketFilter {
    pub search: String,
    /// `None` selects every category.
    pub category: Option<String>,
}

impl MarketFilter {
    /// Blank values and the literal `all` leave that dimension open.
    pub fn from_params(search: Option<&str>, category: Option<&str>) -> Self {
        let category = category
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
            .map(str::to_string);
        Self {
            search: search.unwrap_or_default().trim().to_string(),
            category,
        }
    }

    pub fn matches(&self, skill: &SkillDemand) -> bool {
        let search_ok = self.search.is_empty()
            || skill
                .skill
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |category| skill.category.eq_ignore_ascii_case(category));
        search_ok && category_ok
    }
}
