use serde::Serialize;
use std::collections::HashSet;

use crate::schema::{GuidanceResult, RoleSkillProfile};

/// How a student's current skills compare with one role's requirements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsGap {
    pub target_role: String,
    pub skills_you_have: Vec<String>,
    pub missing_essential: Vec<String>,
    pub missing_nice_to_have: Vec<String>,
    /// Share of essential skills already covered, in percent.
    pub coverage_pct: Option<f64>,
    pub suggestions: Vec<String>,
}

/// Case-insensitive comparison of `current` against `profile`.
pub fn analyze_skills_gap(current: &[String], profile: &RoleSkillProfile) -> SkillsGap {
    let have: HashSet<String> = current.iter().map(|s| s.to_lowercase()).collect();
    let essential: HashSet<String> = profile.essential_skills.iter().map(|s| s.to_lowercase()).collect();
    let nice: HashSet<String> = profile.nice_to_have_skills.iter().map(|s| s.to_lowercase()).collect();

    let skills_you_have: Vec<String> = current
        .iter()
        .filter(|s| {
            let k = s.to_lowercase();
            essential.contains(&k) || nice.contains(&k)
        })
        .cloned()
        .collect();
    let missing_essential = missing(&profile.essential_skills, &have);
    let missing_nice_to_have = missing(&profile.nice_to_have_skills, &have);

    let coverage_pct = if profile.essential_skills.is_empty() {
        None
    } else {
        let covered = profile.essential_skills.len() - missing_essential.len();
        Some(covered as f64 / profile.essential_skills.len() as f64 * 100.0)
    };

    let mut suggestions = Vec::new();
    if !missing_essential.is_empty() {
        suggestions.push(format!("Focus on learning: {}", first_three(&missing_essential)));
    }
    if !missing_nice_to_have.is_empty() {
        suggestions.push(format!("Consider adding: {}", first_three(&missing_nice_to_have)));
    }
    if !skills_you_have.is_empty() {
        suggestions.push(format!(
            "Leverage your existing skills: {}",
            first_three(&skills_you_have)
        ));
    }

    SkillsGap {
        target_role: profile.role.clone(),
        skills_you_have,
        missing_essential,
        missing_nice_to_have,
        coverage_pct,
        suggestions,
    }
}

/// Exact-name lookup of a role profile in a result.
pub fn find_role<'a>(result: &'a GuidanceResult, role: &str) -> Option<&'a RoleSkillProfile> {
    result
        .skill_requirements
        .as_deref()
        .unwrap_or_default()
        .iter()
        .find(|p| p.role == role)
}

fn missing(required: &[String], have: &HashSet<String>) -> Vec<String> {
    required
        .iter()
        .filter(|s| !have.contains(&s.to_lowercase()))
        .cloned()
        .collect()
}

fn first_three(skills: &[String]) -> String {
    skills.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn engineer() -> RoleSkillProfile {
        RoleSkillProfile {
            role: "software_engineer".to_string(),
            essential_skills: strings(&["Python", "Git", "SQL", "Data Structures"]),
            nice_to_have_skills: strings(&["Docker", "AWS"]),
            experience_required: "0-2 years".to_string(),
            certifications: Vec::new(),
        }
    }

    #[test]
    fn matches_ignore_case_and_keep_input_order() {
        let gap = analyze_skills_gap(&strings(&["docker", "python", "Excel"]), &engineer());
        assert_eq!(gap.skills_you_have, strings(&["docker", "python"]));
        assert_eq!(gap.missing_essential, strings(&["Git", "SQL", "Data Structures"]));
        assert_eq!(gap.missing_nice_to_have, strings(&["AWS"]));
        assert_eq!(gap.coverage_pct, Some(25.0));
    }

    #[test]
    fn nice_to_have_matches_leave_coverage_unchanged() {
        let essential_only = analyze_skills_gap(&strings(&["Python"]), &engineer());
        let with_extras = analyze_skills_gap(&strings(&["Python", "Docker", "AWS"]), &engineer());
        assert_eq!(essential_only.coverage_pct, Some(25.0));
        assert_eq!(with_extras.coverage_pct, Some(25.0));
        assert_eq!(with_extras.skills_you_have.len(), 3);
    }

    #[test]
    fn suggestions_name_at_most_three_skills() {
        let gap = analyze_skills_gap(&[], &engineer());
        assert_eq!(
            gap.suggestions,
            strings(&[
                "Focus on learning: Python, Git, SQL",
                "Consider adding: Docker, AWS",
            ])
        );
    }

    #[test]
    fn no_essential_skills_has_no_coverage() {
        let profile = RoleSkillProfile {
            essential_skills: Vec::new(),
            ..engineer()
        };
        assert_eq!(analyze_skills_gap(&strings(&["Docker"]), &profile).coverage_pct, None);
    }

    #[test]
    fn find_role_is_exact() {
        let result = GuidanceResult {
            skill_requirements: Some(vec![engineer()]),
            ..GuidanceResult::default()
        };
        assert!(find_role(&result, "software_engineer").is_some());
        assert!(find_role(&result, "Software_Engineer").is_none());
        assert!(find_role(&GuidanceResult::default(), "software_engineer").is_none());
    }
}
