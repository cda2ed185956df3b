pub mod error;
mod fields;
pub mod guidance;

pub use error::{IngestError, ValidationError};
pub use guidance::from_value;

use anyhow::{Context, Result};
use careerkit_core::GuidanceResult;
use std::io::Read;
use std::path::Path;

/// Decode and validate a guidance result from JSON text.
pub fn parse_str(json: &str) -> std::result::Result<GuidanceResult, IngestError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(from_value(&value)?)
}

/// Load a guidance result from a file, or from stdin when `path` is `-`.
pub fn load(path: &Path) -> Result<GuidanceResult> {
    if path == Path::new("-") {
        return load_reader(std::io::stdin().lock()).context("reading guidance result from stdin");
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "loaded guidance result");
    parse_str(&content).with_context(|| format!("parsing {}", path.display()))
}

pub fn load_reader(mut reader: impl Read) -> Result<GuidanceResult> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(parse_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_errors_are_json_errors() {
        assert!(matches!(parse_str("{ not json"), Err(IngestError::Json(_))));
    }

    #[test]
    fn shape_errors_are_validation_errors() {
        match parse_str(r#"{"recommendations": [1]}"#) {
            Err(IngestError::Validation(e)) => assert_eq!(e.path(), "recommendations[0]"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn reader_input_is_validated() {
        let result = load_reader(r#"{"recommendations": ["Network early"]}"#.as_bytes()).unwrap();
        assert_eq!(result.recommendations, Some(vec!["Network early".to_string()]));
    }

    #[test]
    fn load_mentions_the_missing_file() {
        let err = load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }
}
