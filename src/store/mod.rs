//! The wizard's view state: the strategy document and the active section.
//!
//! [`Store::apply`] is a pure reducer that consumes the state and returns the
//! next one; every operation replaces whole values, and sections a patch does
//! not address are moved through unchanged. [`SharedStore`] wraps a store for
//! the HTTP and MCP surfaces so their requests run one at a time.

mod edits;
mod error;
mod progress;
mod shared;

pub use edits::*;
pub use error::*;
pub use progress::*;
pub use shared::*;

use crate::models::*;

/// A state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Make `id` the active section. Never touches the document.
    SetCurrentSection(SectionId),
    /// Replace each root key present in the patch.
    PatchDocument(DocumentPatch),
    /// Shallow-merge a patch one level into a single section.
    PatchSection(SectionPatch),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    current_section: SectionId,
    document: StrategyDocument,
}

impl Store {
    /// A store on `document`, positioned on the first section.
    pub fn new(document: StrategyDocument) -> Self {
        Self {
            current_section: SectionId::default(),
            document,
        }
    }

    /// A store holding the sample strategy.
    pub fn seeded() -> Self {
        Self::new(seed_document())
    }

    pub fn current_section(&self) -> SectionId {
        self.current_section
    }

    pub fn document(&self) -> &StrategyDocument {
        &self.document
    }

    /// Read-only snapshot of one section.
    pub fn section(&self, id: SectionId) -> SectionContent {
        self.document.section(id)
    }

    /// Apply `action` and return the resulting state.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SetCurrentSection(id) => {
                tracing::debug!(section = %id, "Setting current section");
                Self {
                    current_section: id,
                    ..self
                }
            }
            Action::PatchDocument(patch) => {
                tracing::debug!("Patching document");
                Self {
                    document: self.document.apply_patch(patch),
                    ..self
                }
            }
            Action::PatchSection(patch) => {
                tracing::debug!(section = %patch.section(), "Patching section");
                Self {
                    document: self.document.with_section_patch(patch),
                    ..self
                }
            }
        }
    }

    /// Apply `action` in place.
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(self);
        *self = state.apply(action);
    }

    pub fn set_current_section(&mut self, id: SectionId) {
        self.dispatch(Action::SetCurrentSection(id));
    }

    pub fn patch_document(&mut self, patch: DocumentPatch) {
        self.dispatch(Action::PatchDocument(patch));
    }

    pub fn patch_section(&mut self, patch: SectionPatch) {
        self.dispatch(Action::PatchSection(patch));
    }

    /// Patch `section` from an untyped JSON body.
    pub fn patch_section_json(
        &mut self,
        section: SectionId,
        value: serde_json::Value,
    ) -> Result<(), StoreError> {
        let patch = SectionPatch::from_value(section, value)
            .map_err(|source| StoreError::InvalidPatch { section, source })?;
        self.patch_section(patch);
        Ok(())
    }

    /// Apply a form edit through the section patch it produces. On error the
    /// document is left as it was.
    pub fn apply_edit(&mut self, edit: Edit) -> Result<SectionId, StoreError> {
        let patch = edit.into_patch(&self.document)?;
        let section = patch.section();
        self.patch_section(patch);
        Ok(section)
    }

    pub fn section_view(&self, id: SectionId) -> SectionView {
        let (options, direction) = match id {
            SectionId::Strategy => (
                ansoff_options().map(String::from).to_vec(),
                self.document.strategy.ansoff_direction(),
            ),
            _ => (Vec::new(), None),
        };
        SectionView {
            id,
            number: id.number(),
            label: id.label().to_string(),
            content: self.section(id),
            ansoff_options: options,
            ansoff_direction: direction,
        }
    }

    /// Sidebar entries in wizard order, with per-section fill counts.
    pub fn sections(&self) -> Vec<SectionSummary> {
        SectionId::ALL
            .into_iter()
            .map(|id| {
                let tally = section_tally(&self.document, id);
                SectionSummary {
                    id,
                    number: id.number(),
                    label: id.label().to_string(),
                    active: id == self.current_section,
                    filled: tally.filled,
                    total: tally.total,
                }
            })
            .collect()
    }

    pub fn navigation(&self) -> NavigationState {
        NavigationState::new(self.current_section)
    }

    /// Overall completion percentage, 0 to 100.
    pub fn progress(&self) -> u8 {
        progress(&self.document)
    }

    pub fn progress_report(&self) -> ProgressReport {
        ProgressReport::for_document(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_starts_on_first_section() {
        let store = Store::seeded();
        assert_eq!(store.current_section(), SectionId::Intro);
    }

    #[test]
    fn set_current_section_leaves_document_alone() {
        let store = Store::seeded();
        let document = store.document().clone();

        let store = store.apply(Action::SetCurrentSection(SectionId::Swot));

        assert_eq!(store.current_section(), SectionId::Swot);
        assert_eq!(store.document(), &document);
    }

    #[test]
    fn patch_document_replaces_project_name_only() {
        let mut store = Store::seeded();
        let before = store.document().clone();

        store.patch_document(DocumentPatch {
            project_name: Some("Новый проект".into()),
            ..Default::default()
        });

        assert_eq!(store.document().project_name, "Новый проект");
        assert_eq!(store.document().intro, before.intro);
        assert_eq!(store.document().action_plan, before.action_plan);
    }

    #[test]
    fn sections_mark_only_the_current_one_active() {
        let store = Store::seeded().apply(Action::SetCurrentSection(SectionId::Internal));
        let active: Vec<SectionId> = store
            .sections()
            .into_iter()
            .filter(|s| s.active)
            .map(|s| s.id)
            .collect();

        assert_eq!(active, vec![SectionId::Internal]);
        assert_eq!(store.navigation().label, "Внутренний аудит");
    }

    #[test]
    fn invalid_json_patch_leaves_store_untouched() {
        let mut store = Store::seeded();
        let before = store.clone();

        let err = store
            .patch_section_json(SectionId::Swot, serde_json::json!({ "strengths": "nope" }))
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::InvalidPatch {
                section: SectionId::Swot,
                ..
            }
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn failed_edit_leaves_store_untouched() {
        let mut store = Store::seeded();
        let before = store.clone();

        let result = store.apply_edit(Edit::RemoveCompetitor { index: 2 });

        assert!(result.is_err());
        assert_eq!(store, before);
    }
}
