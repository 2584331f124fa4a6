use thiserror::Error;

use crate::models::SectionId;

/// Errors surfaced by store operations.
///
/// Free-text input is never rejected; these cover structural mistakes by the
/// caller only.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Index {index} out of range for {list} ({len} items)")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invalid patch for section '{section}': {source}")]
    InvalidPatch {
        section: SectionId,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

/// Parse a section identifier such as `swot` or `action_plan`.
pub fn parse_section(s: &str) -> Result<SectionId, StoreError> {
    SectionId::from_str(s).ok_or_else(|| StoreError::UnknownSection(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_sections() {
        assert_eq!(parse_section("action_plan").unwrap(), SectionId::ActionPlan);
    }

    #[test]
    fn rejects_document_keys_that_are_not_section_ids() {
        let err = parse_section("projectName").unwrap_err();
        assert_eq!(err.to_string(), "Unknown section: projectName");
    }
}
