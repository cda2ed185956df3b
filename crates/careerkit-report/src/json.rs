use anyhow::Result;
use careerkit_core::*;

/// Present sections only; an absent section has no representation at all.
pub fn render_sections(summary: &ReportSummary, sections: &[ReportSection]) -> Result<String> {
    let present: Vec<&ReportSection> = sections.iter().filter(|s| s.is_present()).collect();
    let doc = serde_json::json!({
        "summary": summary,
        "sections": present,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn render_gap(gap: &SkillsGap) -> Result<String> {
    Ok(serde_json::to_string_pretty(gap)?)
}
