use anyhow::{Context, Result};
use careerkit_core::{render, ReportSection};
use clap::Args;
use colored::Colorize;
use std::fmt::Write as _;
use std::path::PathBuf;

use super::load_input;

#[derive(Args)]
pub struct ValidateArgs {
    /// Guidance result JSON file ("-" for stdin)
    #[arg(long, default_value = "-")]
    pub input: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let result = load_input(&args.input)?;
    let sections = render(&result).context("guidance result cannot be rendered")?;
    print!("{}", format_census(&sections));
    Ok(())
}

/// `ok`, then one line per section kind in render order.
fn format_census(sections: &[ReportSection]) -> String {
    let mut out = format!("{}\n", "ok".green().bold());
    for section in sections {
        let kind = section.kind().to_string();
        if section.is_present() {
            let _ = writeln!(
                out,
                "  {:<20}  {}  ({} blocks)",
                kind,
                "present".green(),
                section.body().len()
            );
        } else {
            let _ = writeln!(out, "  {:<20}  {}", kind, "absent".dimmed());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerkit_core::GuidanceResult;

    #[test]
    fn census_starts_with_ok_and_lists_every_section() {
        colored::control::set_override(false);
        let result = GuidanceResult {
            recommendations: Some(vec!["Build a portfolio".to_string()]),
            ..GuidanceResult::default()
        };
        let text = format_census(&render(&result).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ok");
        assert_eq!(lines.len(), 7);
        assert!(lines[1].trim_start().starts_with("roadmap"));
        assert!(lines[1].ends_with("absent"));
        assert!(lines[6].trim_start().starts_with("recommendations"));
        assert!(lines[6].ends_with("present  (1 blocks)"));
    }
}
