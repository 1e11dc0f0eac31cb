//! The four CRUD operations.
//!
//! Create and Update are two-step: the first step opens a text prompt, the
//! second applies the answer. Read, Update and Delete need a selection; without
//! one they answer with a guidance notice instead of touching the store.

use crate::core::state::{AppState, InputPurpose, Prompt};
use std::fmt;
use thiserror::Error;

/// One of the four toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    /// Toolbar order, left to right.
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    pub fn label(self) -> &'static str {
        match self {
            Action::Create => "Create",
            Action::Read => "Read",
            Action::Update => "Update",
            Action::Delete => "Delete",
        }
    }

    /// Slot in the toolbar.
    pub fn position(self) -> usize {
        match self {
            Action::Create => 0,
            Action::Read => 1,
            Action::Update => 2,
            Action::Delete => 3,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons an operation made no change. None of these are faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrudError {
    #[error("No item selected. Click an item, then press {0}.")]
    NoSelection(Action),
    #[error("Label cannot be empty")]
    EmptyLabel,
    #[error("Cancelled")]
    Cancelled,
    #[error("No item at position {0}")]
    NoSuchRecord(usize),
}

impl CrudError {
    /// Guidance shown to the user when an operation is refused.
    pub fn guidance(&self, action: Action) -> Prompt {
        Prompt::notice(action.label(), self.to_string())
    }
}

/// Run the first step of `action`, returning the prompt to show.
pub fn perform(action: Action, state: &mut AppState) -> Prompt {
    let result = match action {
        Action::Create => Ok(request_create()),
        Action::Read => read(state),
        Action::Update => request_update(state),
        Action::Delete => delete(state),
    };

    result.unwrap_or_else(|e| {
        tracing::debug!("{} refused: {}", action, e);
        state.status = e.to_string();
        e.guidance(action)
    })
}

pub fn request_create() -> Prompt {
    Prompt::input(
        "Create",
        "Enter a name for the new item:",
        InputPurpose::Create,
        "",
    )
}

/// Apply a create prompt's answer. `None` means the prompt was cancelled.
pub fn finish_create(state: &mut AppState, input: Option<&str>) -> Result<u64, CrudError> {
    let outcome = input
        .ok_or(CrudError::Cancelled)
        .and_then(|text| state.store.create(text).map(|record| record.id));
    match &outcome {
        Ok(id) => {
            tracing::info!("Created item {}", id);
            state.status = format!("Created item {}", id);
        }
        Err(e) => record_no_change(state, Action::Create, e),
    }
    outcome
}

pub fn read(state: &mut AppState) -> Result<Prompt, CrudError> {
    let index = state
        .selected_index()
        .ok_or(CrudError::NoSelection(Action::Read))?;
    let record = state
        .store
        .get(index)
        .ok_or(CrudError::NoSuchRecord(index))?;
    let message = format!("Item ID {} - Label: {}", record.id, record.label);
    state.status = format!("Read item {}", record.id);
    Ok(Prompt::notice("Read", message))
}

pub fn request_update(state: &AppState) -> Result<Prompt, CrudError> {
    let index = state
        .selected_index()
        .ok_or(CrudError::NoSelection(Action::Update))?;
    let record = state
        .store
        .get(index)
        .ok_or(CrudError::NoSuchRecord(index))?;
    Ok(Prompt::input(
        "Update",
        format!("New label for item {} (currently: {}):", record.id, record.label),
        InputPurpose::Update { index },
        record.label.clone(),
    ))
}

/// Apply an update prompt's answer to the record at `index`.
pub fn finish_update(
    state: &mut AppState,
    index: usize,
    input: Option<&str>,
) -> Result<u64, CrudError> {
    let outcome = input
        .ok_or(CrudError::Cancelled)
        .and_then(|text| state.store.relabel(index, text).map(|record| record.id));
    match &outcome {
        Ok(id) => {
            tracing::info!("Updated item {}", id);
            state.status = format!("Updated item {}", id);
        }
        Err(e) => record_no_change(state, Action::Update, e),
    }
    outcome
}

/// Remove the selected record and clear the selection.
pub fn delete(state: &mut AppState) -> Result<Prompt, CrudError> {
    let index = state
        .selected_index()
        .ok_or(CrudError::NoSelection(Action::Delete))?;
    let record = state.store.remove(index)?;
    state.selection.clear();

    tracing::info!("Deleted item {} ({:?})", record.id, record.label);
    state.status = format!("Deleted item {}", record.id);
    Ok(Prompt::notice(
        "Delete",
        format!("Item ID {} deleted.", record.id),
    ))
}

fn record_no_change(state: &mut AppState, action: Action, error: &CrudError) {
    tracing::debug!("{} made no change: {}", action, error);
    state.status = format!("{}: {}", action, error);
}
