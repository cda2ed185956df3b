pub mod gap;
pub mod render;
pub mod validate;

use anyhow::Result;
use careerkit_core::GuidanceResult;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Load and validate the guidance result named by `--input`.
pub fn load_input(input: &Path) -> Result<GuidanceResult> {
    if input != Path::new("-") {
        eprintln!("{} Loading {}...", "→".cyan(), input.display());
    }
    careerkit_ingest::load(input)
}

pub fn write_or_print(content: &str, out: Option<&PathBuf>, default_file: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content)?;
            eprintln!("{} Written to {}", "✓".green(), path.display());
        }
        None if content.starts_with("<!DOCTYPE") => {
            // HTML: write to default file
            let path = PathBuf::from(default_file);
            std::fs::write(&path, content)?;
            eprintln!("{} Written to {}", "✓".green(), path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Split a comma-separated skill list, dropping blanks.
pub fn parse_skills(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
