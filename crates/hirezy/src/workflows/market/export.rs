use super::domain::SkillDemand;
use crate::workflows::export::{or_missing, percent, Exportable};

fn salary(amount: u32) -> String {
    format!("${amount}")
}

impl Exportable for SkillDemand {
    const CSV_HEADER: &'static [&'static str] = &[
        "Skill", "Category", "Growth%", "Jobs", "Salary", "Regions", "Trend",
    ];

    fn csv_fields(&self) -> Vec<String> {
        vec![
            self.skill.clone(),
            self.category.clone(),
            percent(Some(self.growth_pct)),
            self.jobs.to_string(),
            salary(self.average_salary),
            or_missing((!self.regions.is_empty()).then(|| self.regions.join("; "))),
            self.trend.label().to_string(),
        ]
    }

    fn report_heading(&self) -> String {
        self.skill.clone()
    }

    fn report_details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Category", self.category.clone()),
            ("Growth", percent(Some(self.growth_pct))),
            ("Open Jobs", self.jobs.to_string()),
            ("Average Salary", salary(self.average_salary)),
            ("Trend", self.trend.label().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::export::{render_csv, render_report};
    use crate::workflows::market::DemandTrend;
    use chrono::{TimeZone, Utc};

    fn rust() -> SkillDemand {
        SkillDemand {
            skill: "Rust".to_string(),
            category: "Engineering".to_string(),
            growth_pct: 34,
            jobs: 1840,
            average_salary: 152000,
            regions: vec!["North America".to_string(), "Europe".to_string()],
            trend: DemandTrend::Rising,
        }
    }

    #[test]
    fn csv_uses_market_layout() {
        let body = render_csv(&[rust()]).expect("csv renders");
        assert_eq!(
            body,
            "\"Skill\",\"Category\",\"Growth%\",\"Jobs\",\"Salary\",\"Regions\",\"Trend\"\n\
             \"Rust\",\"Engineering\",\"34%\",\"1840\",\"$152000\",\"North America; Europe\",\"rising\""
        );
    }

    #[test]
    fn negative_growth_keeps_sign() {
        let mut java = rust();
        java.growth_pct = -3;
        assert_eq!(java.csv_fields()[2], "-3%");
    }

    #[test]
    fn skills_without_regions_render_missing_marker() {
        let mut cobol = rust();
        cobol.regions.clear();
        assert_eq!(cobol.csv_fields()[5], "N/A");
    }

    #[test]
    fn report_lists_each_skill() {
        let at = Utc
            .with_ymd_and_hms(2024, 5, 17, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        let report = render_report("Market Demand Report", "Total Skills", &[rust()], at);
        assert!(report.contains("Total Skills: 1"));
        assert!(report.contains("1. Rust"));
        assert!(report.contains("   Average Salary: $152000"));
    }
}
