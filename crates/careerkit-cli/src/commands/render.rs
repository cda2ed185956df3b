use anyhow::{Context, Result};
use careerkit_core::{render, summarize};
use careerkit_report::{html as html_report, json as jreport, terminal};
use clap::Args;
use std::path::PathBuf;

use super::{load_input, write_or_print};

#[derive(Args)]
pub struct RenderArgs {
    /// Guidance result JSON file ("-" for stdin)
    #[arg(long, default_value = "-")]
    pub input: PathBuf,

    /// Output format: table, json, html
    #[arg(long, default_value = "table", value_parser = ["table", "json", "html"])]
    pub format: String,

    /// Output file (defaults to stdout for table/json, report.html for html)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let result = load_input(&args.input)?;
    let sections = render(&result).context("rendering guidance report")?;
    let summary = summarize(&result);
    tracing::info!(
        present = sections.iter().filter(|s| s.is_present()).count(),
        format = %args.format,
        "rendered guidance report"
    );

    match args.format.as_str() {
        "json" => {
            let content = jreport::render_sections(&summary, &sections)?;
            write_or_print(&content, args.out.as_ref(), "report.json")?;
        }
        "html" => {
            let content = html_report::render_page(&summary, &sections);
            write_or_print(&content, args.out.as_ref(), "report.html")?;
        }
        "table" => terminal::print_report(&summary, &sections),
        other => anyhow::bail!("unknown format '{}' (expected table, json or html)", other),
    }
    Ok(())
}
