use chrono::NaiveDate;

use super::domain::{DemandTrend, MarketInsights, RegionDemand, SkillDemand};

fn skill(
    skill: &str,
    category: &str,
    growth_pct: i32,
    jobs: u32,
    average_salary: u32,
    regions: &[&str],
    trend: DemandTrend,
) -> SkillDemand {
    SkillDemand {
        skill: skill.to_string(),
        category: category.to_string(),
        growth_pct,
        jobs,
        average_salary,
        regions: regions.iter().map(|region| region.to_string()).collect(),
        trend,
    }
}

fn region(region: &str, jobs: u32, growth_pct: i32) -> RegionDemand {
    RegionDemand {
        region: region.to_string(),
        jobs,
        growth_pct,
    }
}

/// Built-in snapshot served when no market feed is configured.
pub fn demo_market_insights() -> MarketInsights {
    use DemandTrend::*;

    MarketInsights {
        skills: vec![
            skill("Rust", "Engineering", 34, 1840, 152000, &["North America", "Europe"], Rising),
            skill("TypeScript", "Engineering", 12, 6420, 128000, &["North America", "Europe", "Asia"], Stable),
            skill("Java", "Engineering", -3, 7210, 121000, &["Europe", "Asia"], Declining),
            skill("Machine Learning", "Data", 41, 2980, 165000, &["North America", "Asia"], Rising),
            skill("SQL", "Data", 5, 8100, 104000, &["North America", "Europe", "Asia"], Stable),
            skill("Kubernetes", "Cloud", 22, 3350, 146000, &["North America", "Europe"], Rising),
            skill("Terraform", "Cloud", 18, 2140, 139000, &["Europe"], Rising),
            skill("Figma", "Design", 9, 1560, 98000, &["Europe", "North America"], Stable),
        ],
        regions: vec![
            region("North America", 14200, 11),
            region("Europe", 11800, 8),
            region("Asia", 9600, 15),
        ],
        updated_on: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap_or_default(),
    }
}
