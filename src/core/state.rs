//! Application state shared by the dispatcher and the renderer.

use crate::core::crud::Action;
use crate::core::layout::Layout;
use crate::core::selection::Selection;
use crate::core::store::RecordStore;
use egui::Pos2;

/// What a text prompt's answer will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    Create,
    Update { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Collects a label. `initial` pre-fills the text field.
    Input { purpose: InputPurpose, initial: String },
    /// Informational message with a single OK.
    Notice,
}

/// A modal dialog. While one is open the canvas ignores pointer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub message: String,
    pub kind: PromptKind,
}

impl Prompt {
    pub fn input(
        title: impl Into<String>,
        message: impl Into<String>,
        purpose: InputPurpose,
        initial: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: PromptKind::Input {
                purpose,
                initial: initial.into(),
            },
        }
    }

    pub fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: PromptKind::Notice,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self.kind, PromptKind::Input { .. })
    }
}

/// Everything the demo knows at a point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub store: RecordStore,
    pub selection: Selection,
    pub pointer: Option<Pos2>,
    pub prompt: Option<Prompt>,
    pub status: String,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            selection: Selection::none(),
            pointer: None,
            prompt: None,
            status: "Ready".to_string(),
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn hovered_button(&self, layout: &Layout) -> Option<Action> {
        self.pointer.and_then(|pos| layout.hovered_button(pos))
    }

    /// The selected index, if it still refers to a record.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.resolve(self.store.len())
    }
}
