//! Domain models for Strategio.
//!
//! # Core Concepts
//!
//! - [`StrategyDocument`]: the fixed-shape marketing strategy. Six sections
//!   (intro, external, internal, swot, strategy, action plan) plus the ungrouped
//!   project name. Nothing is ever absent; empty means `""` or `[]`.
//! - [`SectionId`]: the closed set of wizard sections used for navigation and
//!   for addressing section patches.
//! - [`SectionPatch`] / [`DocumentPatch`]: one-level partial updates. A field
//!   present in a patch replaces that whole value.
//! - [`seed_document`]: the sample content a new session starts with.

mod document;
mod patch;
mod section;
mod seed;
mod view;

pub use document::*;
pub use patch::*;
pub use section::*;
pub use seed::*;
pub use view::*;
