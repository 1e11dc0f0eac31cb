//! Input dispatcher.
//!
//! `dispatch` folds one event into the state and reports what the shell has to
//! do afterwards. It never touches egui, so every interaction can be replayed
//! in tests.

use crate::core::crud::{self, Action};
use crate::core::layout::{Hit, Layout};
use crate::core::state::{AppState, InputPurpose, PromptKind};
use egui::Pos2;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Click(Pos2),
    PointerMoved(Pos2),
    PointerLeft,
    PromptSubmitted(String),
    PromptCancelled,
}

/// Work for the shell after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Repaint,
    /// A prompt was opened; its text buffer should be reset.
    PromptOpened,
    PromptClosed,
}

pub fn dispatch(mut state: AppState, event: Event, layout: &Layout) -> (AppState, Vec<Effect>) {
    let effects = match event {
        Event::Click(_) | Event::PointerMoved(_) | Event::PointerLeft if state.is_modal_open() => {
            Vec::new()
        }
        Event::Click(pos) => on_click(&mut state, pos, layout),
        Event::PointerMoved(pos) => on_pointer(&mut state, Some(pos), layout),
        Event::PointerLeft => on_pointer(&mut state, None, layout),
        Event::PromptSubmitted(text) => on_prompt_closed(&mut state, Some(&text)),
        Event::PromptCancelled => on_prompt_closed(&mut state, None),
    };
    (state, effects)
}

fn on_click(state: &mut AppState, pos: Pos2, layout: &Layout) -> Vec<Effect> {
    match layout.hit_test(pos, state.store.len()) {
        Hit::Button(action) => {
            tracing::debug!("Click: {} button", action);
            open_prompt(state, action)
        }
        Hit::Item(index) => {
            tracing::debug!("Click: item at {}", index);
            state.selection.select(index, state.store.len());
            vec![Effect::Repaint]
        }
        Hit::Canvas => {
            if let Some(previous) = state.selection.index() {
                tracing::debug!("Click: outside items, clearing selection {}", previous);
            }
            state.selection.clear();
            vec![Effect::Repaint]
        }
    }
}

fn open_prompt(state: &mut AppState, action: Action) -> Vec<Effect> {
    let prompt = crud::perform(action, state);
    state.prompt = Some(prompt);
    vec![Effect::PromptOpened, Effect::Repaint]
}

fn on_pointer(state: &mut AppState, pos: Option<Pos2>, layout: &Layout) -> Vec<Effect> {
    let before = state.hovered_button(layout);
    state.pointer = pos;
    if state.hovered_button(layout) != before {
        vec![Effect::Repaint]
    } else {
        Vec::new()
    }
}

/// `input` is `None` when the prompt was cancelled.
fn on_prompt_closed(state: &mut AppState, input: Option<&str>) -> Vec<Effect> {
    let Some(prompt) = state.prompt.take() else {
        tracing::debug!("Prompt answer with no prompt open");
        return Vec::new();
    };

    if let PromptKind::Input { purpose, .. } = prompt.kind {
        let outcome = match purpose {
            InputPurpose::Create => crud::finish_create(state, input),
            InputPurpose::Update { index } => crud::finish_update(state, index, input),
        };
        // Refusals are already recorded in the status line.
        if let Err(e) = outcome {
            tracing::trace!("Prompt answer for {:?} refused: {}", purpose, e);
        }
    }
    vec![Effect::PromptClosed, Effect::Repaint]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::RecordStore;

    fn seeded() -> AppState {
        AppState::new(RecordStore::seeded(["Item A", "Item B", "Item C"]))
    }

    fn run(state: AppState, events: Vec<Event>) -> AppState {
        let layout = Layout::default();
        events
            .into_iter()
            .fold(state, |state, event| dispatch(state, event, &layout).0)
    }

    fn click_item(index: usize) -> Event {
        Event::Click(Layout::default().item_rect(index).center())
    }

    fn click_button(action: Action) -> Event {
        Event::Click(Layout::default().button_rect(action).center())
    }

    fn records(state: &AppState) -> Vec<(u64, String)> {
        state.store.iter().map(|r| (r.id, r.label.clone())).collect()
    }

    #[test]
    fn test_click_item_selects_and_outside_clears() {
        let state = run(seeded(), vec![click_item(2)]);
        assert_eq!(state.selection.index(), Some(2));

        let state = run(state, vec![Event::Click(Pos2::new(780.0, 500.0))]);
        assert_eq!(state.selection.index(), None);
    }

    #[test]
    fn test_button_click_keeps_selection() {
        let state = run(seeded(), vec![click_item(0), click_button(Action::Read)]);
        assert_eq!(state.selection.index(), Some(0));
        let prompt = state.prompt.as_ref().unwrap();
        assert_eq!(prompt.message, "Item ID 1 - Label: Item A");
    }

    #[test]
    fn test_select_delete_then_create() {
        let state = run(
            seeded(),
            vec![
                click_item(1),
                click_button(Action::Delete),
                Event::PromptSubmitted(String::new()),
                click_button(Action::Create),
                Event::PromptSubmitted("Item D".to_string()),
            ],
        );
        assert_eq!(
            records(&state),
            vec![
                (1, "Item A".to_string()),
                (3, "Item C".to_string()),
                (4, "Item D".to_string()),
            ]
        );
        assert_eq!(state.selection.index(), None);
        assert!(state.prompt.is_none());
    }

    #[test]
    fn test_delete_shifts_following_items() {
        let layout = Layout::default();
        let state = run(seeded(), vec![click_item(0), click_button(Action::Delete)]);
        assert_eq!(records(&state)[0].0, 2);
        let state = run(state, vec![Event::PromptSubmitted(String::new()), click_item(0)]);
        assert_eq!(state.selection.index(), Some(0));
        assert_eq!(
            layout.hit_test(layout.item_rect(2).center(), state.store.len()),
            Hit::Canvas
        );
    }

    #[test]
    fn test_cancelled_create_leaves_store() {
        let before = seeded();
        let state = run(
            before.clone(),
            vec![click_button(Action::Create), Event::PromptCancelled],
        );
        assert_eq!(state.store, before.store);
        assert!(state.prompt.is_none());
    }

    #[test]
    fn test_update_through_prompt() {
        let state = run(
            seeded(),
            vec![
                click_item(2),
                click_button(Action::Update),
                Event::PromptSubmitted("  Third  ".to_string()),
            ],
        );
        assert_eq!(records(&state)[2], (3, "Third".to_string()));
        assert_eq!(state.selection.index(), Some(2));
    }

    #[test]
    fn test_update_with_blank_label_is_noop() {
        let before = seeded();
        let state = run(
            before.clone(),
            vec![
                click_item(0),
                click_button(Action::Update),
                Event::PromptSubmitted("   ".to_string()),
            ],
        );
        assert_eq!(state.store, before.store);
    }

    #[test]
    fn test_pointer_ignored_while_prompt_open() {
        let layout = Layout::default();
        let state = run(seeded(), vec![click_button(Action::Create)]);
        assert!(state.is_modal_open());

        let (state, effects) = dispatch(state, click_item(1), &layout);
        assert!(effects.is_empty());
        assert_eq!(state.selection.index(), None);

        let (state, effects) =
            dispatch(state, Event::PointerMoved(layout.item_rect(0).center()), &layout);
        assert!(effects.is_empty());
        assert_eq!(state.pointer, None);
    }

    #[test]
    fn test_button_click_reports_prompt_opened() {
        let (state, effects) = dispatch(seeded(), click_button(Action::Delete), &Layout::default());
        assert_eq!(effects, vec![Effect::PromptOpened, Effect::Repaint]);
        assert_eq!(state.prompt.unwrap().kind, PromptKind::Notice);
    }

    #[test]
    fn test_hover_repaints_only_on_change() {
        let layout = Layout::default();
        let create = layout.button_rect(Action::Create);

        let (state, effects) = dispatch(seeded(), Event::PointerMoved(create.center()), &layout);
        assert_eq!(effects, vec![Effect::Repaint]);
        assert_eq!(state.hovered_button(&layout), Some(Action::Create));

        let (state, effects) = dispatch(state, Event::PointerMoved(create.min), &layout);
        assert!(effects.is_empty());

        let (state, effects) = dispatch(state, Event::PointerLeft, &layout);
        assert_eq!(effects, vec![Effect::Repaint]);
        assert_eq!(state.hovered_button(&layout), None);
    }

    #[test]
    fn test_prompt_answer_without_prompt_is_ignored() {
        let before = seeded();
        let (state, effects) = dispatch(
            before.clone(),
            Event::PromptSubmitted("x".to_string()),
            &Layout::default(),
        );
        assert!(effects.is_empty());
        assert_eq!(state, before);
    }
}
