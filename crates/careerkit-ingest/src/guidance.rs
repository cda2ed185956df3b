//! Guidance result adapter.
//! Input: the JSON body returned by the guidance backend's query endpoint.
//! Top-level fields may be absent or null; unknown fields (`query`,
//! `generated_at`, `last_updated`, ...) are ignored.
use careerkit_core::*;
use serde_json::Value;

use crate::error::ValidationError;
use crate::fields::{count, date, list, non_negative, number, text, text_list, Fields};

pub fn from_value(value: &Value) -> Result<GuidanceResult, ValidationError> {
    let root = Fields::root(value)?;

    let result = GuidanceResult {
        roadmap: root.opt("roadmap", roadmap)?,
        market_data: root.opt("market_data", |v, p| list(v, p, company))?,
        market_trends: root.opt("market_trends", |v, p| list(v, p, trend))?,
        layoff_statistics: root.opt("layoff_statistics", |v, p| list(v, p, layoff))?,
        skill_requirements: root.opt("skill_requirements", |v, p| list(v, p, role_skills))?,
        recommendations: root.opt("recommendations", text_list)?,
    };

    tracing::debug!(
        roadmap = result.roadmap.is_some(),
        companies = result.market_data.as_ref().map(Vec::len),
        trends = result.market_trends.as_ref().map(Vec::len),
        layoffs = result.layoff_statistics.as_ref().map(Vec::len),
        roles = result.skill_requirements.as_ref().map(Vec::len),
        recommendations = result.recommendations.as_ref().map(Vec::len),
        "validated guidance result"
    );

    Ok(result)
}

// ── entities ──────────────────────────────────────────────────────────────────

fn roadmap(value: &Value, path: &str) -> Result<Roadmap, ValidationError> {
    let f = Fields::object(value, path)?;
    Ok(Roadmap {
        field: f.opt("field", text)?,
        specialization: f.text("specialization")?,
        total_duration: f.text("total_duration")?,
        steps: f.list("steps", step)?,
        skills_covered: first_seen(f.text_list("skills_covered")?),
    })
}

fn step(value: &Value, path: &str) -> Result<RoadmapStep, ValidationError> {
    let f = Fields::object(value, path)?;
    let difficulty = f.text("difficulty")?;
    if difficulty.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            path: format!("{path}.difficulty"),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(RoadmapStep {
        title: f.text("title")?,
        description: f.text("description")?,
        duration: f.text("duration")?,
        difficulty,
        resources: f.text_list("resources")?,
        prerequisites: f.text_list("prerequisites")?,
    })
}

fn company(value: &Value, path: &str) -> Result<CompanyProfile, ValidationError> {
    let f = Fields::object(value, path)?;
    Ok(CompanyProfile {
        name: f.text("name")?,
        industry: f.text("industry")?,
        company_size: f.text("company_size")?,
        hiring_status: f.text("hiring_status")?,
        open_positions: f.req("open_positions", count)?,
        average_salary: f.opt("average_salary", non_negative)?,
        required_skills: f.text_list("required_skills")?,
    })
}

fn trend(value: &Value, path: &str) -> Result<MarketTrend, ValidationError> {
    let f = Fields::object(value, path)?;
    Ok(MarketTrend {
        trend_type: f.text("trend_type")?,
        description: f.text("description")?,
        impact: f.text("impact")?,
        timeframe: f.text("timeframe")?,
        source: f.text("source")?,
    })
}

fn layoff(value: &Value, path: &str) -> Result<LayoffRecord, ValidationError> {
    let f = Fields::object(value, path)?;
    Ok(LayoffRecord {
        company: f.text("company")?,
        layoff_count: f.req("layoff_count", count)?,
        percentage: f.req("percentage", number)?,
        date: f.req("date", date)?,
        reason: f.text("reason")?,
        affected_departments: f.text_list("affected_departments")?,
    })
}

fn role_skills(value: &Value, path: &str) -> Result<RoleSkillProfile, ValidationError> {
    let f = Fields::object(value, path)?;
    Ok(RoleSkillProfile {
        role: f.text("role")?,
        essential_skills: f.text_list("essential_skills")?,
        nice_to_have_skills: f.text_list("nice_to_have_skills")?,
        experience_required: f.text("experience_required")?,
        certifications: f.text_list("certifications")?,
    })
}

/// Set semantics for `skills_covered`: later duplicates are dropped.
fn first_seen(skills: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    skills.into_iter().filter(|s| seen.insert(s.clone())).collect()
}
