use serde::Serialize;

use crate::schema::GuidanceResult;

/// Headline numbers shown above the report sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportSummary {
    pub roadmap_steps: usize,
    pub companies: usize,
    pub companies_hiring: usize,
    /// Saturates at `u64::MAX`, as does `layoffs_reported`.
    pub open_positions: u64,
    /// Mean over companies that advertise a salary; `None` when none do.
    pub mean_salary: Option<f64>,
    pub layoffs_reported: u64,
    pub recommendations: usize,
}

pub fn summarize(result: &GuidanceResult) -> ReportSummary {
    let companies = result.market_data.as_deref().unwrap_or_default();

    let salaries: Vec<f64> = companies.iter().filter_map(|c| c.average_salary).collect();
    let mean_salary = if salaries.is_empty() {
        None
    } else {
        Some(salaries.iter().sum::<f64>() / salaries.len() as f64)
    };

    ReportSummary {
        roadmap_steps: result.roadmap.as_ref().map(|r| r.steps.len()).unwrap_or(0),
        companies: companies.len(),
        companies_hiring: companies.iter().filter(|c| c.is_actively_hiring()).count(),
        open_positions: companies.iter().map(|c| c.open_positions).fold(0, u64::saturating_add),
        mean_salary,
        layoffs_reported: result
            .layoff_statistics
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|l| l.layoff_count)
            .fold(0, u64::saturating_add),
        recommendations: result.recommendations.as_ref().map(Vec::len).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CompanyProfile, LayoffRecord};
    use chrono::NaiveDate;

    fn company(status: &str, open: u64, salary: Option<f64>) -> CompanyProfile {
        CompanyProfile {
            name: "X".to_string(),
            hiring_status: status.to_string(),
            open_positions: open,
            average_salary: salary,
            ..CompanyProfile::default()
        }
    }

    #[test]
    fn empty_result_summarizes_to_zero() {
        assert_eq!(summarize(&GuidanceResult::default()), ReportSummary::default());
    }

    #[test]
    fn counts_hiring_and_averages_known_salaries() {
        let result = GuidanceResult {
            market_data: Some(vec![
                company("Active", 10, Some(100_000.0)),
                company("active", 5, None),
                company("Active", 0, Some(80_000.0)),
            ]),
            ..GuidanceResult::default()
        };
        let summary = summarize(&result);
        assert_eq!(summary.companies, 3);
        assert_eq!(summary.companies_hiring, 2);
        assert_eq!(summary.open_positions, 15);
        assert_eq!(summary.mean_salary, Some(90_000.0));
    }

    #[test]
    fn no_salaries_means_no_mean() {
        let result = GuidanceResult {
            market_data: Some(vec![company("Active", 1, None)]),
            ..GuidanceResult::default()
        };
        assert_eq!(summarize(&result).mean_salary, None);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let layoff = |count| LayoffRecord {
            company: "X".to_string(),
            layoff_count: count,
            percentage: 1.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            reason: String::new(),
            affected_departments: Vec::new(),
        };
        let result = GuidanceResult {
            market_data: Some(vec![company("Active", u64::MAX, None), company("Active", 1, None)]),
            layoff_statistics: Some(vec![layoff(u64::MAX), layoff(1)]),
            ..GuidanceResult::default()
        };
        let summary = summarize(&result);
        assert_eq!(summary.open_positions, u64::MAX);
        assert_eq!(summary.layoffs_reported, u64::MAX);
    }
}
