//! Completion tracking over the strategy document.
//!
//! The walk is typed rather than reflective, but keeps three rules:
//! a string is one field, filled when it has non-whitespace content; a list is
//! one field, filled when it has at least one element (its items are not
//! inspected); a nested record contributes only through its own leaves.
//! The overall figure covers intro, external, internal, swot and strategy.
//! The project name and the action plan are not counted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::*;

/// Filled and total field counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Tally {
    pub filled: u32,
    pub total: u32,
}

impl Tally {
    /// Rounded percentage of filled fields. An empty tally reads as 0.
    pub fn percent(&self) -> u8 {
        let total = f64::from(self.total.max(1));
        ((f64::from(self.filled) / total) * 100.0).round() as u8
    }

    fn leaf(&mut self, filled: bool) {
        self.total += 1;
        if filled {
            self.filled += 1;
        }
    }
}

/// Something that contributes fields to a [`Tally`].
pub trait Completion {
    fn tally(&self, tally: &mut Tally);

    fn tallied(&self) -> Tally {
        let mut tally = Tally::default();
        self.tally(&mut tally);
        tally
    }
}

impl Completion for String {
    fn tally(&self, tally: &mut Tally) {
        tally.leaf(!self.trim().is_empty());
    }
}

impl<T> Completion for Vec<T> {
    fn tally(&self, tally: &mut Tally) {
        tally.leaf(!self.is_empty());
    }
}

impl Completion for Intro {
    fn tally(&self, tally: &mut Tally) {
        self.mission.tally(tally);
        self.vision.tally(tally);
        self.smart_goal.tally(tally);
    }
}

impl Completion for Pest {
    fn tally(&self, tally: &mut Tally) {
        self.political.tally(tally);
        self.economic.tally(tally);
        self.social.tally(tally);
        self.tech.tally(tally);
    }
}

impl Completion for ExternalAudit {
    fn tally(&self, tally: &mut Tally) {
        self.pest.tally(tally);
        self.market_size.tally(tally);
        self.competitors.tally(tally);
    }
}

impl Completion for FourP {
    fn tally(&self, tally: &mut Tally) {
        self.product.tally(tally);
        self.price.tally(tally);
        self.place.tally(tally);
        self.promotion.tally(tally);
    }
}

impl Completion for InternalAudit {
    fn tally(&self, tally: &mut Tally) {
        self.audit_4p.tally(tally);
        self.abc_analysis.tally(tally);
    }
}

impl Completion for Swot {
    fn tally(&self, tally: &mut Tally) {
        self.strengths.tally(tally);
        self.weaknesses.tally(tally);
        self.opportunities.tally(tally);
        self.threats.tally(tally);
    }
}

impl Completion for StrategyChoice {
    fn tally(&self, tally: &mut Tally) {
        self.ansoff.tally(tally);
        self.target_audience.tally(tally);
        self.positioning.tally(tally);
    }
}

impl Completion for StrategyDocument {
    fn tally(&self, tally: &mut Tally) {
        self.intro.tally(tally);
        self.external.tally(tally);
        self.internal.tally(tally);
        self.swot.tally(tally);
        self.strategy.tally(tally);
    }
}

/// Whether a section takes part in the overall percentage.
pub fn counts_toward_progress(section: SectionId) -> bool {
    !matches!(section, SectionId::ActionPlan)
}

/// Counters for a single section. The action plan is tallied as one list
/// field here even though it never reaches the overall figure.
pub fn section_tally(document: &StrategyDocument, section: SectionId) -> Tally {
    match section {
        SectionId::Intro => document.intro.tallied(),
        SectionId::External => document.external.tallied(),
        SectionId::Internal => document.internal.tallied(),
        SectionId::Swot => document.swot.tallied(),
        SectionId::Strategy => document.strategy.tallied(),
        SectionId::ActionPlan => document.action_plan.tallied(),
    }
}

/// Overall completion, 0 to 100.
pub fn progress(document: &StrategyDocument) -> u8 {
    document.tallied().percent()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SectionProgress {
    pub id: SectionId,
    pub label: String,
    pub filled: u32,
    pub total: u32,
    pub percent: u8,
    /// False for sections left out of the overall percentage.
    pub counted: bool,
}

/// Overall completion plus a per-section breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgressReport {
    pub percent: u8,
    pub filled: u32,
    pub total: u32,
    pub sections: Vec<SectionProgress>,
}

impl ProgressReport {
    pub fn for_document(document: &StrategyDocument) -> Self {
        let overall = document.tallied();
        let sections = SectionId::ALL
            .into_iter()
            .map(|id| {
                let tally = section_tally(document, id);
                SectionProgress {
                    id,
                    label: id.label().to_string(),
                    filled: tally.filled,
                    total: tally.total,
                    percent: tally.percent(),
                    counted: counts_toward_progress(id),
                }
            })
            .collect();

        Self {
            percent: overall.percent(),
            filled: overall.filled,
            total: overall.total,
            sections,
        }
    }
}
