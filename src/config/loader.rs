//! Configuration Loader - Options File Loading
//!
//! Reads `AssertOptions` from TOML with clear error context, so a test
//! suite can keep its assertion mode next to its fixtures.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AssertOptions;

/// Load options from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails or names an unknown mode
pub fn load_options(path: impl AsRef<Path>) -> Result<AssertOptions> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file: {}", path.display()))?;

    parse_options(&content)
        .with_context(|| format!("Invalid options file: {}", path.display()))
}

/// Parse options from TOML text.
///
/// # Errors
/// Returns an error when the text is not valid options TOML.
pub fn parse_options(content: &str) -> Result<AssertOptions> {
    let options: AssertOptions =
        toml::from_str(content).context("Failed to parse assertion options")?;

    info!(
        found_detection = ?options.found_detection,
        not_called_scope = ?options.not_called_scope,
        "Assertion options loaded"
    );

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FoundDetection, NotCalledScope};

    #[test]
    fn test_empty_document_gives_defaults() {
        let options = parse_options("").unwrap();
        assert_eq!(options, AssertOptions::default());
        assert_eq!(options.found_detection, FoundDetection::Sentinel);
        assert_eq!(options.not_called_scope, NotCalledScope::Registry);
    }

    #[test]
    fn test_both_modes_parse() {
        let options = parse_options(
            r#"
found_detection = "explicit"
not_called_scope = "labels"
"#,
        )
        .unwrap();
        assert_eq!(options.found_detection, FoundDetection::Explicit);
        assert_eq!(options.not_called_scope, NotCalledScope::Labels);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = parse_options(r#"found_detection = "fuzzy""#).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse assertion options"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(parse_options("strict = true").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "promcheck-options-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "not_called_scope = \"labels\"\n").unwrap();

        let options = load_options(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(options.not_called_scope, NotCalledScope::Labels);
        assert_eq!(options.found_detection, FoundDetection::Sentinel);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_options("/nonexistent/promcheck.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/promcheck.toml"));
    }
}
