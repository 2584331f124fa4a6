use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The marketing-strategy document filled in by the wizard.
///
/// The shape is fixed: every section is always present, and "empty" means an
/// empty string or an empty list. Missing keys deserialize as empty values, so
/// a partially written JSON snapshot still yields a complete document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StrategyDocument {
    pub project_name: String,
    pub intro: Intro,
    pub external: ExternalAudit,
    pub internal: InternalAudit,
    pub swot: Swot,
    pub strategy: StrategyChoice,
    /// Rows have no identity beyond their position.
    pub action_plan: Vec<ActionItem>,
}

/// Mission, vision and the SMART goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Intro {
    pub mission: String,
    pub vision: String,
    pub smart_goal: String,
}

/// External audit: PEST factors, market size and the competitor table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalAudit {
    pub pest: Pest,
    pub market_size: String,
    pub competitors: Vec<Competitor>,
}

/// Political, economic, social and technological factors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Pest {
    pub political: String,
    pub economic: String,
    pub social: String,
    pub tech: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Competitor {
    pub name: String,
    pub share: String,
    pub strength: String,
    pub weakness: String,
}

/// Internal audit: the 4P marketing mix and the ABC portfolio analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct InternalAudit {
    #[serde(rename = "audit4P")]
    pub audit_4p: FourP,
    pub abc_analysis: String,
}

/// Product, price, place and promotion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct FourP {
    pub product: String,
    pub price: String,
    pub place: String,
    pub promotion: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// The chosen growth direction, audience and positioning.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StrategyChoice {
    /// One of [`super::ansoff_options`] when set from the wizard.
    pub ansoff: String,
    pub target_audience: String,
    pub positioning: String,
}

impl StrategyChoice {
    pub fn ansoff_direction(&self) -> Option<super::AnsoffDirection> {
        super::AnsoffDirection::from_label(&self.ansoff)
    }
}

/// One row of the action plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct ActionItem {
    pub activity: String,
    pub deadline: String,
    pub owner: String,
    pub budget: String,
}

/// A read-only snapshot of one section, handed to section views and exports.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum SectionContent {
    Intro(Intro),
    External(ExternalAudit),
    Internal(InternalAudit),
    Swot(Swot),
    Strategy(StrategyChoice),
    ActionPlan(Vec<ActionItem>),
}

impl StrategyDocument {
    /// Clone out the slice of the document a section view reads.
    pub fn section(&self, id: super::SectionId) -> SectionContent {
        use super::SectionId;
        match id {
            SectionId::Intro => SectionContent::Intro(self.intro.clone()),
            SectionId::External => SectionContent::External(self.external.clone()),
            SectionId::Internal => SectionContent::Internal(self.internal.clone()),
            SectionId::Swot => SectionContent::Swot(self.swot.clone()),
            SectionId::Strategy => SectionContent::Strategy(self.strategy.clone()),
            SectionId::ActionPlan => SectionContent::ActionPlan(self.action_plan.clone()),
        }
    }
}
