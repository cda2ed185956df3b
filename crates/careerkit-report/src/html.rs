use careerkit_core::format::{fmt_currency, fmt_thousands};
use careerkit_core::*;

pub fn render_page(summary: &ReportSummary, sections: &[ReportSection]) -> String {
    let body: String = sections.iter().map(render_section).collect();
    let body = if body.is_empty() {
        r#"<div class="empty">No guidance data available.</div>"#.to_string()
    } else {
        body
    };

    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>careerkit — Career Guidance Report</title>
<style>
  :root {{
    --bg: #0f1117; --surface: #1a1d27; --border: #2a2d3a;
    --text: #e2e8f0; --muted: #64748b; --accent: #7c6af7;
    --green: #4ade80; --yellow: #facc15; --red: #f87171;
    --cyan: #22d3ee;
    font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
  }}
  * {{ box-sizing: border-box; margin: 0; padding: 0; }}
  body {{ background: var(--bg); color: var(--text); min-height: 100vh; }}
  .header {{ background: var(--surface); border-bottom: 1px solid var(--border);
    padding: 1.5rem 2rem; display: flex; align-items: center; gap: 1rem; }}
  .header h1 {{ font-size: 1.25rem; font-weight: 700; color: var(--accent); }}
  .header .subtitle {{ color: var(--muted); font-size: 0.85rem; }}
  .container {{ max-width: 1100px; margin: 0 auto; padding: 2rem; }}
  .kpi-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
    gap: 1rem; margin-bottom: 2rem; }}
  .kpi {{ background: var(--surface); border: 1px solid var(--border);
    border-radius: 8px; padding: 1.25rem; }}
  .kpi .label {{ font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.1em;
    color: var(--muted); margin-bottom: 0.4rem; }}
  .kpi .value {{ font-size: 1.5rem; font-weight: 700; }}
  .kpi .value.green {{ color: var(--green); }}
  .kpi .value.yellow {{ color: var(--yellow); }}
  .kpi .value.cyan {{ color: var(--cyan); }}
  .section {{ background: var(--surface); border: 1px solid var(--border);
    border-radius: 8px; margin-bottom: 1.5rem; overflow: hidden; }}
  .section-header {{ padding: 0.875rem 1.25rem; border-bottom: 1px solid var(--border);
    font-size: 0.8rem; font-weight: 600; text-transform: uppercase;
    letter-spacing: 0.08em; color: var(--muted); }}
  .section-body {{ padding: 1rem 1.25rem; display: grid; gap: 0.75rem; }}
  .card {{ border: 1px solid var(--border); border-radius: 6px; padding: 1rem; }}
  .card-header {{ display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.5rem; }}
  .card-index {{ background: var(--accent); color: var(--bg); border-radius: 50%;
    width: 1.5rem; height: 1.5rem; display: inline-flex; align-items: center;
    justify-content: center; font-size: 0.75rem; font-weight: 700; }}
  .card-title {{ font-weight: 600; }}
  .badge {{ padding: 0.1rem 0.5rem; border-radius: 3px; font-size: 0.7rem; font-weight: 700; }}
  .badge-positive {{ background: rgba(74,222,128,0.15); color: var(--green); }}
  .badge-warning {{ background: rgba(250,204,21,0.15); color: var(--yellow); }}
  .badge-elevated {{ background: rgba(248,113,113,0.15); color: var(--red); }}
  .badge-informational {{ background: rgba(34,211,238,0.15); color: var(--cyan); }}
  .badge-neutral {{ background: var(--border); color: var(--muted); }}
  .text {{ font-size: 0.9rem; margin: 0.25rem 0; }}
  .field {{ font-size: 0.85rem; margin: 0.2rem 0; }}
  .field .label {{ color: var(--muted); margin-right: 0.5rem; }}
  .tag-list {{ margin-top: 0.5rem; }}
  .tag-list .label {{ font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.08em;
    color: var(--muted); margin-bottom: 0.3rem; }}
  .tags {{ display: flex; flex-wrap: wrap; gap: 0.3rem; }}
  .tag {{ background: rgba(124,106,247,0.15); color: var(--accent); padding: 0.1rem 0.5rem;
    border-radius: 999px; font-size: 0.75rem; }}
  .items {{ padding-left: 1.25rem; font-size: 0.9rem; display: grid; gap: 0.4rem; }}
  .empty {{ padding: 1.25rem; color: var(--muted); font-size: 0.9rem; }}
  footer {{ text-align: center; padding: 2rem; color: var(--muted); font-size: 0.75rem; }}
</style>
</head>
<body>
<div class="header">
  <h1>careerkit</h1>
  <span class="subtitle">Career Guidance Report</span>
</div>
<div class="container">

  <div class="kpi-grid">
    <div class="kpi"><div class="label">Roadmap Steps</div><div class="value cyan">{roadmap_steps}</div></div>
    <div class="kpi"><div class="label">Companies</div><div class="value">{companies}</div></div>
    <div class="kpi"><div class="label">Actively Hiring</div><div class="value green">{hiring}</div></div>
    <div class="kpi"><div class="label">Open Positions</div><div class="value">{open_positions}</div></div>
    <div class="kpi"><div class="label">Mean Salary</div><div class="value green">{mean_salary}</div></div>
    <div class="kpi"><div class="label">Layoffs Reported</div><div class="value yellow">{layoffs}</div></div>
  </div>

{body}
</div>
<footer>Generated by careerkit</footer>
</body>
</html>
"#,
        roadmap_steps = summary.roadmap_steps,
        companies = summary.companies,
        hiring = format!("{} / {}", summary.companies_hiring, summary.companies),
        open_positions = fmt_thousands(summary.open_positions),
        mean_salary = summary.mean_salary.map(fmt_currency).unwrap_or_else(|| "-".to_string()),
        layoffs = fmt_thousands(summary.layoffs_reported),
        body = body,
    )
}

/// Absent sections produce nothing, not even a heading.
pub fn render_section(section: &ReportSection) -> String {
    match section {
        ReportSection::Absent { .. } => String::new(),
        ReportSection::Present { kind, title, body } => format!(
            r#"  <div class="section" id="{kind}">
    <div class="section-header">{title}</div>
    <div class="section-body">
{blocks}    </div>
  </div>
"#,
            kind = kind,
            title = html_escape(title),
            blocks = body.iter().map(render_block).collect::<String>(),
        ),
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Text { text } => format!("<p class=\"text\">{}</p>\n", html_escape(text)),
        Block::Field { label, value } => format!(
            "<div class=\"field\"><span class=\"label\">{}</span><span class=\"value\">{}</span></div>\n",
            html_escape(label),
            html_escape(value),
        ),
        Block::TagList { label, tags } => format!(
            "<div class=\"tag-list\"><div class=\"label\">{}</div><div class=\"tags\">{}</div></div>\n",
            html_escape(label),
            tags.iter()
                .map(|t| format!(r#"<span class="tag">{}</span>"#, html_escape(t)))
                .collect::<String>(),
        ),
        Block::Items { items } => format!(
            "<ul class=\"items\">{}</ul>\n",
            items.iter()
                .map(|i| format!("<li>{}</li>", html_escape(i)))
                .collect::<String>(),
        ),
        Block::Card(card) => render_card(card),
    }
}

fn render_card(card: &Card) -> String {
    let index = card
        .index
        .map(|i| format!(r#"<span class="card-index">{i}</span>"#))
        .unwrap_or_default();
    let badges = card.badges.iter().map(render_badge).collect::<String>();
    format!(
        "<div class=\"card\">\n<div class=\"card-header\">{index}<span class=\"card-title\">{title}</span>{badges}</div>\n{blocks}</div>\n",
        index = index,
        title = html_escape(&card.title),
        badges = badges,
        blocks = card.blocks.iter().map(render_block).collect::<String>(),
    )
}

fn render_badge(badge: &Badge) -> String {
    format!(
        r#"<span class="badge badge-{}">{}</span>"#,
        badge.class.as_str(),
        html_escape(&badge.label)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(status: &str) -> CompanyProfile {
        CompanyProfile {
            name: "R&D <Labs>".to_string(),
            industry: "Technology".to_string(),
            company_size: "Large".to_string(),
            hiring_status: status.to_string(),
            open_positions: 3,
            average_salary: Some(95_000.0),
            required_skills: Vec::new(),
        }
    }

    fn page(result: &GuidanceResult) -> String {
        render_page(&summarize(result), &render(result).unwrap())
    }

    #[test]
    fn absent_sections_leave_no_markup() {
        let html = page(&GuidanceResult {
            recommendations: Some(Vec::new()),
            ..GuidanceResult::default()
        });
        assert!(!html.contains("Personalized Recommendations"));
        assert!(!html.contains(r#"class="section""#));
        assert!(html.contains("No guidance data available."));
    }

    #[test]
    fn company_card_badges_and_escaping() {
        let html = page(&GuidanceResult {
            market_data: Some(vec![company("Active"), company("active")]),
            ..GuidanceResult::default()
        });
        assert!(html.contains(r#"<span class="badge badge-positive">Active</span>"#));
        assert!(html.contains(r#"<span class="badge badge-warning">active</span>"#));
        assert!(html.contains("R&amp;D &lt;Labs&gt;"));
        assert!(html.contains("$95,000"));
        // Empty skill list still gets its label and an empty chip row.
        assert!(html.contains(r#"<div class="label">Key Skills</div><div class="tags"></div>"#));
    }

    #[test]
    fn recommendations_render_as_list_items_in_order() {
        let html = page(&GuidanceResult {
            recommendations: Some(vec!["Second <b>".to_string(), "First".to_string()]),
            ..GuidanceResult::default()
        });
        assert!(html.contains(r#"<ul class="items"><li>Second &lt;b&gt;</li><li>First</li></ul>"#));
    }

    #[test]
    fn page_is_deterministic() {
        let result = GuidanceResult {
            market_data: Some(vec![company("Active")]),
            recommendations: Some(vec!["x".to_string()]),
            ..GuidanceResult::default()
        };
        assert_eq!(page(&result), page(&result));
    }
}
