//! Partial updates for the strategy document.
//!
//! Every patch is a one-level shallow merge: a field present in the patch
//! replaces the whole value at that field, nested records included. Patching
//! `external` with `pest: { political: "x" }` therefore replaces all four PEST
//! fields; callers that want to change one of them copy the current `Pest`,
//! override the field and send the whole record back.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::document::*;
use super::SectionId;

/// A record that can absorb a partial copy of itself.
pub trait Patchable: Sized {
    type Patch;

    /// Shallow-merge `patch` into `self`, keeping every field the patch leaves out.
    fn apply_patch(self, patch: Self::Patch) -> Self;
}

/// Declare the partial type for a record and its [`Patchable`] impl.
///
/// The field list must name every field of the record, otherwise the generated
/// struct literal does not compile.
macro_rules! partial_record {
    (
        $(#[$meta:meta])*
        $patch:ident for $record:ty {
            $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
        #[serde(default, deny_unknown_fields, rename_all = "camelCase")]
        pub struct $patch {
            $(
                $(#[$field_meta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl Patchable for $record {
            type Patch = $patch;

            fn apply_patch(self, patch: $patch) -> Self {
                Self {
                    $( $field: patch.$field.unwrap_or(self.$field), )+
                }
            }
        }
    };
}

partial_record! {
    /// Root-level patch: each present key replaces that whole section.
    DocumentPatch for StrategyDocument {
        project_name: String,
        intro: Intro,
        external: ExternalAudit,
        internal: InternalAudit,
        swot: Swot,
        strategy: StrategyChoice,
        action_plan: Vec<ActionItem>,
    }
}

partial_record! {
    IntroPatch for Intro {
        mission: String,
        vision: String,
        smart_goal: String,
    }
}

partial_record! {
    ExternalPatch for ExternalAudit {
        pest: Pest,
        market_size: String,
        competitors: Vec<Competitor>,
    }
}

partial_record! {
    InternalPatch for InternalAudit {
        #[serde(rename = "audit4P")]
        audit_4p: FourP,
        abc_analysis: String,
    }
}

partial_record! {
    /// Each quadrant is replaced as a whole list.
    SwotPatch for Swot {
        strengths: Vec<String>,
        weaknesses: Vec<String>,
        opportunities: Vec<String>,
        threats: Vec<String>,
    }
}

partial_record! {
    StrategyPatch for StrategyChoice {
        ansoff: String,
        target_audience: String,
        positioning: String,
    }
}

/// A patch addressed to exactly one section.
///
/// The action plan is a bare list, so its patch is the complete replacement list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "section", content = "patch", rename_all = "snake_case")]
pub enum SectionPatch {
    Intro(IntroPatch),
    External(ExternalPatch),
    Internal(InternalPatch),
    Swot(SwotPatch),
    Strategy(StrategyPatch),
    ActionPlan(Vec<ActionItem>),
}

impl SectionPatch {
    pub fn section(&self) -> SectionId {
        match self {
            Self::Intro(_) => SectionId::Intro,
            Self::External(_) => SectionId::External,
            Self::Internal(_) => SectionId::Internal,
            Self::Swot(_) => SectionId::Swot,
            Self::Strategy(_) => SectionId::Strategy,
            Self::ActionPlan(_) => SectionId::ActionPlan,
        }
    }

    /// Interpret an untyped JSON body as a patch for `section`.
    pub fn from_value(
        section: SectionId,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match section {
            SectionId::Intro => Self::Intro(serde_json::from_value(value)?),
            SectionId::External => Self::External(serde_json::from_value(value)?),
            SectionId::Internal => Self::Internal(serde_json::from_value(value)?),
            SectionId::Swot => Self::Swot(serde_json::from_value(value)?),
            SectionId::Strategy => Self::Strategy(serde_json::from_value(value)?),
            SectionId::ActionPlan => Self::ActionPlan(serde_json::from_value(value)?),
        })
    }
}

impl StrategyDocument {
    /// Merge a section patch one level into its section. Other sections move
    /// through untouched.
    pub fn with_section_patch(self, patch: SectionPatch) -> Self {
        match patch {
            SectionPatch::Intro(p) => Self {
                intro: self.intro.apply_patch(p),
                ..self
            },
            SectionPatch::External(p) => Self {
                external: self.external.apply_patch(p),
                ..self
            },
            SectionPatch::Internal(p) => Self {
                internal: self.internal.apply_patch(p),
                ..self
            },
            SectionPatch::Swot(p) => Self {
                swot: self.swot.apply_patch(p),
                ..self
            },
            SectionPatch::Strategy(p) => Self {
                strategy: self.strategy.apply_patch(p),
                ..self
            },
            SectionPatch::ActionPlan(rows) => Self {
                action_plan: rows,
                ..self
            },
        }
    }
}
