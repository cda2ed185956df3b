use colored::Colorize;
use std::fmt::Write as _;

use careerkit_core::format::{fmt_currency, fmt_thousands};
use careerkit_core::*;

// ── formatting helpers ────────────────────────────────────────────────────────

fn rule(title: &str) -> String {
    let fill = 64usize.saturating_sub(title.chars().count() + 4);
    format!("── {} {}", title, "─".repeat(fill))
}

fn badge(b: &Badge) -> String {
    let label = format!("[{}]", b.label);
    match b.class {
        BadgeClass::Positive => label.green().to_string(),
        BadgeClass::Warning => label.yellow().to_string(),
        BadgeClass::Elevated => label.red().bold().to_string(),
        BadgeClass::Informational => label.cyan().to_string(),
        BadgeClass::Neutral => label.dimmed().to_string(),
    }
}

fn tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return "-".dimmed().to_string();
    }
    tags.iter()
        .map(|t| format!("[{}]", t).magenta().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

// ── guidance report ───────────────────────────────────────────────────────────

pub fn print_report(summary: &ReportSummary, sections: &[ReportSection]) {
    print!("{}", format_report(summary, sections));
}

pub fn format_report(summary: &ReportSummary, sections: &[ReportSection]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", rule("Summary").bold());
    let _ = writeln!(out, "  Roadmap steps  : {}", summary.roadmap_steps);
    let _ = writeln!(
        out,
        "  Companies      : {} ({} actively hiring)",
        summary.companies,
        summary.companies_hiring.to_string().green()
    );
    let _ = writeln!(out, "  Open positions : {}", fmt_thousands(summary.open_positions));
    if let Some(mean) = summary.mean_salary {
        let _ = writeln!(out, "  Mean salary    : {}", fmt_currency(mean).green().bold());
    }
    let _ = writeln!(out, "  Layoffs        : {}", fmt_thousands(summary.layoffs_reported).yellow());

    let mut shown = 0usize;
    for section in sections {
        if let ReportSection::Present { title, body, .. } = section {
            shown += 1;
            let _ = writeln!(out, "\n{}", rule(title).bold());
            for block in body {
                write_block(&mut out, block, 2);
            }
        }
    }
    if shown == 0 {
        let _ = writeln!(out, "\n{}", "No guidance data available.".yellow());
    }

    out.push('\n');
    out
}

fn write_block(out: &mut String, block: &Block, indent: usize) {
    let pad = " ".repeat(indent);
    match block {
        Block::Text { text } => {
            let _ = writeln!(out, "{pad}{text}");
        }
        Block::Field { label, value } => {
            let _ = writeln!(out, "{pad}{} : {}", label.dimmed(), value);
        }
        Block::TagList { label, tags: items } => {
            let _ = writeln!(out, "{pad}{}: {}", label.dimmed(), tags(items));
        }
        Block::Items { items } => {
            for item in items {
                let _ = writeln!(out, "{pad}• {item}");
            }
        }
        Block::Card(card) => {
            let marker = match card.index {
                Some(i) => format!("{i}."),
                None => "•".to_string(),
            };
            let badges = card.badges.iter().map(badge).collect::<Vec<_>>().join(" ");
            let _ = writeln!(out, "\n{pad}{} {}  {}", marker, card.title.bold(), badges);
            for inner in &card.blocks {
                write_block(out, inner, indent + 3);
            }
        }
    }
}

// ── skills gap ────────────────────────────────────────────────────────────────

pub fn print_gap(gap: &SkillsGap) {
    print!("{}", format_gap(gap));
}

pub fn format_gap(gap: &SkillsGap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule(&format!("Skills Gap: {}", gap.target_role)).bold());
    let coverage = match gap.coverage_pct {
        Some(p) => format!("{:.0}%", p),
        None => "-".to_string(),
    };
    let _ = writeln!(out, "  Essential coverage   : {}", coverage.cyan().bold());
    let _ = writeln!(out, "  Skills you have      : {}", tags(&gap.skills_you_have));
    let _ = writeln!(out, "  Missing essentials   : {}", tags(&gap.missing_essential));
    let _ = writeln!(out, "  Missing nice-to-have : {}", tags(&gap.missing_nice_to_have));
    if !gap.suggestions.is_empty() {
        let _ = writeln!(out, "\n{}", rule("Suggestions").bold());
        for (i, s) in gap.suggestions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, s);
        }
    }
    out.push('\n');
    out
}
