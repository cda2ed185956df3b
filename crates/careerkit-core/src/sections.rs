use serde::Serialize;
use thiserror::Error;

use crate::format::{capitalize_first, fmt_currency, fmt_long_date, fmt_percentage, fmt_thousands};
use crate::schema::*;

// ── section tree ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Roadmap,
    #[serde(rename = "market_data")]
    Companies,
    MarketTrends,
    #[serde(rename = "layoff_statistics")]
    Layoffs,
    SkillRequirements,
    Recommendations,
}

impl SectionKind {
    /// Presentation order of the report.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Roadmap,
        SectionKind::Companies,
        SectionKind::MarketTrends,
        SectionKind::Layoffs,
        SectionKind::SkillRequirements,
        SectionKind::Recommendations,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            SectionKind::Roadmap => "Career Roadmap",
            SectionKind::Companies => "Company Market Data",
            SectionKind::MarketTrends => "Market Trends",
            SectionKind::Layoffs => "Layoff Statistics",
            SectionKind::SkillRequirements => "Skill Requirements",
            SectionKind::Recommendations => "Personalized Recommendations",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Roadmap => write!(f, "roadmap"),
            SectionKind::Companies => write!(f, "market_data"),
            SectionKind::MarketTrends => write!(f, "market_trends"),
            SectionKind::Layoffs => write!(f, "layoff_statistics"),
            SectionKind::SkillRequirements => write!(f, "skill_requirements"),
            SectionKind::Recommendations => write!(f, "recommendations"),
        }
    }
}

/// One candidate section of the report. Absent sections carry no markup at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReportSection {
    Present {
        kind: SectionKind,
        title: String,
        body: Vec<Block>,
    },
    Absent {
        kind: SectionKind,
    },
}

impl ReportSection {
    pub fn kind(&self) -> SectionKind {
        match self {
            ReportSection::Present { kind, .. } | ReportSection::Absent { kind } => *kind,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ReportSection::Present { .. })
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ReportSection::Present { title, .. } => Some(title),
            ReportSection::Absent { .. } => None,
        }
    }

    pub fn body(&self) -> &[Block] {
        match self {
            ReportSection::Present { body, .. } => body,
            ReportSection::Absent { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Text { text: String },
    Field { label: String, value: String },
    TagList { label: String, tags: Vec<String> },
    Items { items: Vec<String> },
    Card(Card),
}

impl Block {
    fn text(text: &str) -> Self {
        Block::Text { text: text.to_string() }
    }

    fn field(label: &str, value: impl Into<String>) -> Self {
        Block::Field {
            label: label.to_string(),
            value: value.into(),
        }
    }

    fn tags(label: &str, tags: &[String]) -> Self {
        Block::TagList {
            label: label.to_string(),
            tags: tags.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// 1-based position within its list, when the list is numbered.
    pub index: Option<usize>,
    pub title: String,
    pub badges: Vec<Badge>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub class: BadgeClass,
}

impl Badge {
    fn new(label: &str, class: BadgeClass) -> Self {
        Self {
            label: label.to_string(),
            class,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeClass {
    Positive,
    Warning,
    Elevated,
    Informational,
    Neutral,
}

impl BadgeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeClass::Positive => "positive",
            BadgeClass::Warning => "warning",
            BadgeClass::Elevated => "elevated",
            BadgeClass::Informational => "informational",
            BadgeClass::Neutral => "neutral",
        }
    }

    pub fn hiring(company: &CompanyProfile) -> Self {
        if company.is_actively_hiring() {
            BadgeClass::Positive
        } else {
            BadgeClass::Warning
        }
    }

    pub fn impact(trend: &MarketTrend) -> Self {
        if trend.is_high_impact() {
            BadgeClass::Elevated
        } else {
            BadgeClass::Informational
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{path}: required field is missing")]
    MissingField { path: String },
}

impl RenderError {
    pub fn path(&self) -> &str {
        match self {
            RenderError::MissingField { path } => path,
        }
    }
}

// ── visibility ────────────────────────────────────────────────────────────────

/// A top-level result field that may or may not have anything to show.
pub trait SectionField {
    fn has_content(&self) -> bool;
}

impl SectionField for Roadmap {
    fn has_content(&self) -> bool {
        true
    }
}

impl<T> SectionField for Vec<T> {
    fn has_content(&self) -> bool {
        !self.is_empty()
    }
}

/// Present and, for lists, non-empty.
pub fn section_visible<T: SectionField>(field: Option<&T>) -> bool {
    field.is_some_and(SectionField::has_content)
}

fn visible<T: SectionField>(field: &Option<T>) -> Option<&T> {
    field.as_ref().filter(|f| section_visible(Some(*f)))
}

// ── renderer ──────────────────────────────────────────────────────────────────

/// Build the report's six candidate sections in presentation order.
pub fn render(result: &GuidanceResult) -> Result<Vec<ReportSection>, RenderError> {
    Ok(vec![
        build(SectionKind::Roadmap, &result.roadmap, roadmap_section)?,
        build(SectionKind::Companies, &result.market_data, company_section)?,
        build(SectionKind::MarketTrends, &result.market_trends, trend_section)?,
        build(SectionKind::Layoffs, &result.layoff_statistics, layoff_section)?,
        build(SectionKind::SkillRequirements, &result.skill_requirements, skill_section)?,
        build(SectionKind::Recommendations, &result.recommendations, recommendation_section)?,
    ])
}

type SectionParts = (String, Vec<Block>);

fn build<T, F>(kind: SectionKind, field: &Option<T>, body: F) -> Result<ReportSection, RenderError>
where
    T: SectionField,
    F: FnOnce(&T) -> Result<SectionParts, RenderError>,
{
    match visible(field) {
        Some(value) => {
            let (title, body) = body(value)?;
            tracing::debug!(section = %kind, blocks = body.len(), "section present");
            Ok(ReportSection::Present { kind, title, body })
        }
        None => {
            tracing::debug!(section = %kind, "section absent");
            Ok(ReportSection::Absent { kind })
        }
    }
}

fn required(value: &str, path: impl FnOnce() -> String) -> Result<String, RenderError> {
    if value.trim().is_empty() {
        Err(RenderError::MissingField { path: path() })
    } else {
        Ok(value.to_string())
    }
}

fn roadmap_section(roadmap: &Roadmap) -> Result<SectionParts, RenderError> {
    let specialization = required(&roadmap.specialization, || "roadmap.specialization".into())?;
    let title = format!(
        "{}: {}",
        SectionKind::Roadmap.heading(),
        capitalize_first(&specialization)
    );

    let mut body = Vec::with_capacity(roadmap.steps.len() + 3);
    if let Some(field) = roadmap.field.as_deref().filter(|f| !f.trim().is_empty()) {
        body.push(Block::field("Field", field));
    }
    body.push(Block::field("Total Duration", roadmap.total_duration.as_str()));

    for (i, step) in roadmap.steps.iter().enumerate() {
        let title = required(&step.title, || format!("roadmap.steps[{i}].title"))?;
        let mut blocks = Vec::new();
        if !step.description.trim().is_empty() {
            blocks.push(Block::text(&step.description));
        }
        blocks.push(Block::tags("Resources", &step.resources));
        if !step.prerequisites.is_empty() {
            blocks.push(Block::tags("Prerequisites", &step.prerequisites));
        }
        body.push(Block::Card(Card {
            index: Some(i + 1),
            title,
            badges: vec![
                Badge::new(&step.duration, BadgeClass::Neutral),
                Badge::new(&step.difficulty, BadgeClass::Neutral),
            ],
            blocks,
        }));
    }

    if !roadmap.skills_covered.is_empty() {
        body.push(Block::tags("Skills Covered", &roadmap.skills_covered));
    }

    Ok((title, body))
}

fn company_section(companies: &Vec<CompanyProfile>) -> Result<SectionParts, RenderError> {
    let cards = companies
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let title = required(&c.name, || format!("market_data[{i}].name"))?;
            let mut blocks = vec![
                Block::field("Industry", c.industry.as_str()),
                Block::field("Company Size", c.company_size.as_str()),
                Block::field("Open Positions", fmt_thousands(c.open_positions)),
            ];
            if let Some(salary) = c.average_salary {
                blocks.push(Block::field("Average Salary", fmt_currency(salary)));
            }
            blocks.push(Block::tags("Key Skills", &c.required_skills));
            Ok(Block::Card(Card {
                index: None,
                title,
                badges: vec![Badge::new(&c.hiring_status, BadgeClass::hiring(c))],
                blocks,
            }))
        })
        .collect::<Result<Vec<_>, RenderError>>()?;
    Ok((SectionKind::Companies.heading().to_string(), cards))
}

fn trend_section(trends: &Vec<MarketTrend>) -> Result<SectionParts, RenderError> {
    let cards = trends
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let title = required(&t.trend_type, || format!("market_trends[{i}].trend_type"))?;
            Ok(Block::Card(Card {
                index: None,
                title,
                badges: vec![Badge::new(&t.impact, BadgeClass::impact(t))],
                blocks: vec![
                    Block::text(&t.description),
                    Block::field("Timeframe", t.timeframe.as_str()),
                    Block::field("Source", t.source.as_str()),
                ],
            }))
        })
        .collect::<Result<Vec<_>, RenderError>>()?;
    Ok((SectionKind::MarketTrends.heading().to_string(), cards))
}

fn layoff_section(records: &Vec<LayoffRecord>) -> Result<SectionParts, RenderError> {
    let cards = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let title = required(&r.company, || format!("layoff_statistics[{i}].company"))?;
            Ok(Block::Card(Card {
                index: None,
                title,
                badges: Vec::new(),
                blocks: vec![
                    Block::field("Employees Affected", fmt_thousands(r.layoff_count)),
                    Block::field("Workforce Reduction", fmt_percentage(r.percentage)),
                    Block::field("Date", fmt_long_date(r.date)),
                    Block::field("Reason", r.reason.as_str()),
                    Block::tags("Affected Departments", &r.affected_departments),
                ],
            }))
        })
        .collect::<Result<Vec<_>, RenderError>>()?;
    Ok((SectionKind::Layoffs.heading().to_string(), cards))
}

fn skill_section(profiles: &Vec<RoleSkillProfile>) -> Result<SectionParts, RenderError> {
    let cards = profiles
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let title = required(&p.role, || format!("skill_requirements[{i}].role"))?;
            let mut blocks = vec![
                Block::field("Experience Required", p.experience_required.as_str()),
                Block::tags("Essential Skills", &p.essential_skills),
                Block::tags("Nice to Have", &p.nice_to_have_skills),
            ];
            // The only labelled block that disappears entirely when empty.
            if !p.certifications.is_empty() {
                blocks.push(Block::tags("Certifications", &p.certifications));
            }
            Ok(Block::Card(Card {
                index: None,
                title,
                badges: Vec::new(),
                blocks,
            }))
        })
        .collect::<Result<Vec<_>, RenderError>>()?;
    Ok((SectionKind::SkillRequirements.heading().to_string(), cards))
}

fn recommendation_section(items: &Vec<String>) -> Result<SectionParts, RenderError> {
    Ok((
        SectionKind::Recommendations.heading().to_string(),
        vec![Block::Items {
            items: items.clone(),
        }],
    ))
}
