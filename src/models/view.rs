use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{AnsoffDirection, SectionContent, SectionId};

/// What a section view reads: identity, label and a snapshot of its content.
///
/// The strategy view also carries the Ansoff options to choose from and the
/// direction matching the stored label, if any.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub id: SectionId,
    pub number: usize,
    pub label: String,
    pub content: SectionContent,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ansoff_options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansoff_direction: Option<AnsoffDirection>,
}

/// One entry of the navigation sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectionSummary {
    pub id: SectionId,
    pub number: usize,
    pub label: String,
    /// Whether this is the section currently shown.
    pub active: bool,
    pub filled: u32,
    pub total: u32,
}

/// The active section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NavigationState {
    pub current: SectionId,
    pub label: String,
}

impl NavigationState {
    pub fn new(current: SectionId) -> Self {
        Self {
            current,
            label: current.label().to_string(),
        }
    }
}

/// Input for switching the active section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SetSectionInput {
    pub section: SectionId,
}
