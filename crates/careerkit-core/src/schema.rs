use chrono::NaiveDate;

/// Hiring status that classifies a company badge as positive.
pub const HIRING_ACTIVE: &str = "Active";

/// Trend impact that classifies a trend badge as elevated.
pub const IMPACT_HIGH: &str = "High";

/// One guidance query's result, as returned by the guidance backend.
///
/// Top-level lists stay `Option` so that "not provided" and "provided but
/// empty" remain distinguishable after validation, even though both render
/// the same way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuidanceResult {
    pub roadmap: Option<Roadmap>,
    pub market_data: Option<Vec<CompanyProfile>>,
    pub market_trends: Option<Vec<MarketTrend>>,
    pub layoff_statistics: Option<Vec<LayoffRecord>>,
    pub skill_requirements: Option<Vec<RoleSkillProfile>>,
    pub recommendations: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roadmap {
    pub field: Option<String>,
    pub specialization: String,
    pub total_duration: String,
    pub steps: Vec<RoadmapStep>,
    /// Distinct skills in first-seen order.
    pub skills_covered: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadmapStep {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: String,
    pub resources: Vec<String>,
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub company_size: String,
    pub hiring_status: String,
    pub open_positions: u64,
    pub average_salary: Option<f64>,
    pub required_skills: Vec<String>,
}

impl CompanyProfile {
    /// Exact, case-sensitive match against [`HIRING_ACTIVE`].
    pub fn is_actively_hiring(&self) -> bool {
        self.hiring_status == HIRING_ACTIVE
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketTrend {
    pub trend_type: String,
    pub description: String,
    pub impact: String,
    pub timeframe: String,
    pub source: String,
}

impl MarketTrend {
    /// Exact, case-sensitive match against [`IMPACT_HIGH`].
    pub fn is_high_impact(&self) -> bool {
        self.impact == IMPACT_HIGH
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoffRecord {
    pub company: String,
    pub layoff_count: u64,
    pub percentage: f64,
    pub date: NaiveDate,
    pub reason: String,
    pub affected_departments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleSkillProfile {
    pub role: String,
    pub essential_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
    pub experience_required: String,
    pub certifications: Vec<String>,
}
