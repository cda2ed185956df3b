use anyhow::Result;
use careerkit_core::{analyze_skills_gap, find_role};
use careerkit_report::{json as jreport, terminal};
use clap::Args;
use std::path::PathBuf;

use super::{load_input, parse_skills};

#[derive(Args)]
pub struct GapArgs {
    /// Guidance result JSON file ("-" for stdin)
    #[arg(long, default_value = "-")]
    pub input: PathBuf,

    /// Role to compare against (must match a skill_requirements entry)
    #[arg(long)]
    pub role: String,

    /// Your current skills, comma-separated
    #[arg(long, default_value = "")]
    pub skills: String,

    /// Output format: table, json
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,
}

pub fn run(args: GapArgs) -> Result<()> {
    let result = load_input(&args.input)?;
    let profile = find_role(&result, &args.role).ok_or_else(|| {
        let known: Vec<&str> = result
            .skill_requirements
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|p| p.role.as_str())
            .collect();
        anyhow::anyhow!(
            "No skill requirements for role '{}' (available: {})",
            args.role,
            if known.is_empty() { "none".to_string() } else { known.join(", ") }
        )
    })?;

    let gap = analyze_skills_gap(&parse_skills(&args.skills), profile);
    match args.format.as_str() {
        "json" => println!("{}", jreport::render_gap(&gap)?),
        "table" => terminal::print_gap(&gap),
        other => anyhow::bail!("unknown format '{}' (expected table or json)", other),
    }
    Ok(())
}
