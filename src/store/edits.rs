//! Form-level edits, each turned into a section patch.
//!
//! A section patch only merges one level deep, so changing one PEST factor or
//! one competitor cell means copying the current sub-record or list, changing
//! the target and sending the whole value back. [`Edit`] does that copy against
//! the current document; the result goes through the ordinary section patch.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::models::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PestField {
    Political,
    Economic,
    Social,
    Tech,
}

impl PestField {
    fn slot(self, pest: &mut Pest) -> &mut String {
        match self {
            Self::Political => &mut pest.political,
            Self::Economic => &mut pest.economic,
            Self::Social => &mut pest.social,
            Self::Tech => &mut pest.tech,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FourPField {
    Product,
    Price,
    Place,
    Promotion,
}

impl FourPField {
    fn slot(self, four_p: &mut FourP) -> &mut String {
        match self {
            Self::Product => &mut four_p.product,
            Self::Price => &mut four_p.price,
            Self::Place => &mut four_p.place,
            Self::Promotion => &mut four_p.promotion,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompetitorField {
    Name,
    Share,
    Strength,
    Weakness,
}

impl CompetitorField {
    fn slot(self, competitor: &mut Competitor) -> &mut String {
        match self {
            Self::Name => &mut competitor.name,
            Self::Share => &mut competitor.share,
            Self::Strength => &mut competitor.strength,
            Self::Weakness => &mut competitor.weakness,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionField {
    Activity,
    Deadline,
    Owner,
    Budget,
}

impl ActionField {
    fn slot(self, item: &mut ActionItem) -> &mut String {
        match self {
            Self::Activity => &mut item.activity,
            Self::Deadline => &mut item.deadline,
            Self::Owner => &mut item.owner,
            Self::Budget => &mut item.budget,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SwotQuadrant {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl SwotQuadrant {
    fn items(self, swot: &Swot) -> &Vec<String> {
        match self {
            Self::Strengths => &swot.strengths,
            Self::Weaknesses => &swot.weaknesses,
            Self::Opportunities => &swot.opportunities,
            Self::Threats => &swot.threats,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Strengths => "swot.strengths",
            Self::Weaknesses => "swot.weaknesses",
            Self::Opportunities => "swot.opportunities",
            Self::Threats => "swot.threats",
        }
    }

    fn patch(self, items: Vec<String>) -> SwotPatch {
        let mut patch = SwotPatch::default();
        match self {
            Self::Strengths => patch.strengths = Some(items),
            Self::Weaknesses => patch.weaknesses = Some(items),
            Self::Opportunities => patch.opportunities = Some(items),
            Self::Threats => patch.threats = Some(items),
        }
        patch
    }
}

/// A single change made from a section form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    SetPestField {
        field: PestField,
        value: String,
    },
    AddCompetitor,
    UpdateCompetitor {
        index: usize,
        field: CompetitorField,
        value: String,
    },
    RemoveCompetitor {
        index: usize,
    },
    SetFourPField {
        field: FourPField,
        value: String,
    },
    AddSwotItem {
        quadrant: SwotQuadrant,
    },
    UpdateSwotItem {
        quadrant: SwotQuadrant,
        index: usize,
        value: String,
    },
    RemoveSwotItem {
        quadrant: SwotQuadrant,
        index: usize,
    },
    AddAction,
    UpdateAction {
        index: usize,
        field: ActionField,
        value: String,
    },
    RemoveAction {
        index: usize,
    },
}

impl Edit {
    /// Build the section patch that carries this edit, reading the current
    /// sub-record or list from `document`.
    pub fn into_patch(self, document: &StrategyDocument) -> Result<SectionPatch, StoreError> {
        let patch = match self {
            Self::SetPestField { field, value } => {
                let mut pest = document.external.pest.clone();
                *field.slot(&mut pest) = value;
                SectionPatch::External(ExternalPatch {
                    pest: Some(pest),
                    ..Default::default()
                })
            }
            Self::AddCompetitor => {
                let mut competitors = document.external.competitors.clone();
                competitors.push(Competitor::default());
                competitors_patch(competitors)
            }
            Self::UpdateCompetitor {
                index,
                field,
                value,
            } => {
                let mut competitors = document.external.competitors.clone();
                let len = competitors.len();
                let row = competitors
                    .get_mut(index)
                    .ok_or(out_of_range("external.competitors", index, len))?;
                *field.slot(row) = value;
                competitors_patch(competitors)
            }
            Self::RemoveCompetitor { index } => {
                let mut competitors = document.external.competitors.clone();
                check_index("external.competitors", index, competitors.len())?;
                competitors.remove(index);
                competitors_patch(competitors)
            }
            Self::SetFourPField { field, value } => {
                let mut audit = document.internal.audit_4p.clone();
                *field.slot(&mut audit) = value;
                SectionPatch::Internal(InternalPatch {
                    audit_4p: Some(audit),
                    ..Default::default()
                })
            }
            Self::AddSwotItem { quadrant } => {
                let mut items = quadrant.items(&document.swot).clone();
                items.push(String::new());
                SectionPatch::Swot(quadrant.patch(items))
            }
            Self::UpdateSwotItem {
                quadrant,
                index,
                value,
            } => {
                let mut items = quadrant.items(&document.swot).clone();
                check_index(quadrant.name(), index, items.len())?;
                items[index] = value;
                SectionPatch::Swot(quadrant.patch(items))
            }
            Self::RemoveSwotItem { quadrant, index } => {
                let mut items = quadrant.items(&document.swot).clone();
                check_index(quadrant.name(), index, items.len())?;
                items.remove(index);
                SectionPatch::Swot(quadrant.patch(items))
            }
            Self::AddAction => {
                let mut rows = document.action_plan.clone();
                rows.push(ActionItem::default());
                SectionPatch::ActionPlan(rows)
            }
            Self::UpdateAction {
                index,
                field,
                value,
            } => {
                let mut rows = document.action_plan.clone();
                let len = rows.len();
                let row = rows
                    .get_mut(index)
                    .ok_or(out_of_range("actionPlan", index, len))?;
                *field.slot(row) = value;
                SectionPatch::ActionPlan(rows)
            }
            Self::RemoveAction { index } => {
                let mut rows = document.action_plan.clone();
                check_index("actionPlan", index, rows.len())?;
                rows.remove(index);
                SectionPatch::ActionPlan(rows)
            }
        };
        Ok(patch)
    }
}

fn competitors_patch(competitors: Vec<Competitor>) -> SectionPatch {
    SectionPatch::External(ExternalPatch {
        competitors: Some(competitors),
        ..Default::default()
    })
}

fn out_of_range(list: &'static str, index: usize, len: usize) -> StoreError {
    StoreError::IndexOutOfRange { list, index, len }
}

fn check_index(list: &'static str, index: usize, len: usize) -> Result<(), StoreError> {
    if index < len {
        Ok(())
    } else {
        Err(out_of_range(list, index, len))
    }
}
