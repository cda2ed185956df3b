use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
use commands::{gap, render, validate};

#[derive(Parser)]
#[command(
    name = "careerkit",
    version = "0.1.0",
    author,
    about = "Render career-guidance results into structured reports",
    long_about = r#"careerkit validates the JSON returned by a career-guidance backend
(roadmap, company market data, market trends, layoff statistics, role skill
requirements, recommendations) and renders it as a terminal, JSON or HTML report.

Input is read from --input, or stdin when omitted or "-".

Quick start:
  careerkit render --input result.json                  # coloured terminal report
  careerkit render --input result.json --format html    # writes report.html
  careerkit validate --input result.json                # check shape, list sections
  careerkit gap --input result.json --role data_scientist --skills "Python,SQL"

Set RUST_LOG=debug to trace validation and section decisions."#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a guidance result as a report (terminal/JSON/HTML)
    Render(render::RenderArgs),

    /// Validate a guidance result and list which sections it would show
    Validate(validate::ValidateArgs),

    /// Compare your skills with one role's requirements
    Gap(gap::GapArgs),
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => render::run(args),
        Commands::Validate(args) => validate::run(args),
        Commands::Gap(args) => gap::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn render_accepts_known_formats() {
        for format in ["table", "json", "html"] {
            let cli = Cli::try_parse_from(["careerkit", "render", "--format", format]).unwrap();
            match cli.command {
                Commands::Render(args) => assert_eq!(args.format, format),
                _ => panic!("expected render"),
            }
        }
    }

    #[test]
    fn unknown_format_is_rejected_with_accepted_values() {
        let err = match Cli::try_parse_from(["careerkit", "render", "--format", "htm"]) {
            Ok(_) => panic!("htm should not parse"),
            Err(e) => e,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        let message = err.to_string();
        assert!(message.contains("htm"));
        assert!(message.contains("table"));
        assert!(message.contains("html"));
    }

    #[test]
    fn gap_has_no_html_format() {
        assert!(Cli::try_parse_from(["careerkit", "gap", "--role", "x", "--format", "html"]).is_err());
        assert!(Cli::try_parse_from(["careerkit", "gap", "--role", "x", "--format", "json"]).is_ok());
    }
}
