use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of the six wizard sections, in navigation order.
///
/// The identifier space is closed: navigation controls only ever produce these
/// values, so the store never has to recover from an unknown section. The
/// ungrouped `projectName` field is edited from the header and has no id.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    #[default]
    Intro,
    External,
    Internal,
    Swot,
    Strategy,
    ActionPlan,
}

impl SectionId {
    /// All sections in wizard order.
    pub const ALL: [SectionId; 6] = [
        Self::Intro,
        Self::External,
        Self::Internal,
        Self::Swot,
        Self::Strategy,
        Self::ActionPlan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::External => "external",
            Self::Internal => "internal",
            Self::Swot => "swot",
            Self::Strategy => "strategy",
            Self::ActionPlan => "action_plan",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "intro" => Some(Self::Intro),
            "external" => Some(Self::External),
            "internal" => Some(Self::Internal),
            "swot" => Some(Self::Swot),
            "strategy" => Some(Self::Strategy),
            "action_plan" => Some(Self::ActionPlan),
            _ => None,
        }
    }

    /// Navigation label shown in the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intro => "Вводная часть",
            Self::External => "Внешний аудит",
            Self::Internal => "Внутренний аудит",
            Self::Swot => "SWOT-анализ",
            Self::Strategy => "Стратегия",
            Self::ActionPlan => "План и Бюджет",
        }
    }

    /// 1-based position in the wizard.
    pub fn number(&self) -> usize {
        self.position() + 1
    }

    /// The following section; stays on the last one.
    pub fn next(&self) -> Self {
        let idx = (self.position() + 1).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }

    /// The preceding section; stays on the first one.
    pub fn previous(&self) -> Self {
        Self::ALL[self.position().saturating_sub(1)]
    }

    fn position(&self) -> usize {
        match self {
            Self::Intro => 0,
            Self::External => 1,
            Self::Internal => 2,
            Self::Swot => 3,
            Self::Strategy => 4,
            Self::ActionPlan => 5,
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four growth directions of the Ansoff matrix.
///
/// `strategy.ansoff` is stored as free text so it can be cleared; this enum
/// only supplies the fixed option list and the label lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnsoffDirection {
    MarketPenetration,
    ProductDevelopment,
    MarketDevelopment,
    Diversification,
}

impl AnsoffDirection {
    pub const ALL: [AnsoffDirection; 4] = [
        Self::MarketPenetration,
        Self::ProductDevelopment,
        Self::MarketDevelopment,
        Self::Diversification,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::MarketPenetration => "Проникновение на рынок",
            Self::ProductDevelopment => "Развитие продукта",
            Self::MarketDevelopment => "Развитие рынка",
            Self::Diversification => "Диверсификация",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}

/// Labels offered for `strategy.ansoff`, in display order.
pub fn ansoff_options() -> [&'static str; 4] {
    AnsoffDirection::ALL.map(|d| d.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_section_is_intro() {
        assert_eq!(SectionId::default(), SectionId::Intro);
    }

    #[test]
    fn ids_round_trip_through_strings() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_str(id.as_str()), Some(id));
        }
        assert_eq!(SectionId::from_str("actionPlan"), None);
    }

    #[test]
    fn serializes_action_plan_as_snake_case() {
        let json = serde_json::to_string(&SectionId::ActionPlan).unwrap();
        assert_eq!(json, "\"action_plan\"");
    }

    #[test]
    fn navigation_saturates_at_both_ends() {
        assert_eq!(SectionId::Intro.previous(), SectionId::Intro);
        assert_eq!(SectionId::Intro.next(), SectionId::External);
        assert_eq!(SectionId::Strategy.next(), SectionId::ActionPlan);
        assert_eq!(SectionId::ActionPlan.next(), SectionId::ActionPlan);
    }

    #[test]
    fn numbers_follow_wizard_order() {
        let numbers: Vec<usize> = SectionId::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn ansoff_labels_match_option_list() {
        assert_eq!(
            ansoff_options(),
            ["Проникновение на рынок", "Развитие продукта", "Развитие рынка", "Диверсификация"]
        );
        assert_eq!(
            AnsoffDirection::from_label("Развитие рынка"),
            Some(AnsoffDirection::MarketDevelopment)
        );
        assert_eq!(AnsoffDirection::from_label(""), None);
    }
}
