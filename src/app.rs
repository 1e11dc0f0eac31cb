//! Application state and eframe integration.
//!
//! Main application structure implementing eframe::App trait.

use crate::config::Config;
use crate::core::dispatch::{dispatch, Effect, Event};
use crate::core::layout::Layout;
use crate::core::state::AppState;
use crate::core::store::RecordStore;
use crate::ui::canvas;
use crate::ui::prompt::PromptDialog;
use crate::ui::theme::Theme;
use eframe::egui;

/// Main application state.
pub struct CrudApp {
    state: AppState,
    layout: Layout,
    theme: Theme,
    dialog: PromptDialog,
}

impl CrudApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config, theme: Theme) -> Self {
        let store = RecordStore::seeded(&config.seed_labels);
        tracing::info!(
            "Starting with {} seed records, next id {}",
            store.len(),
            store.next_id()
        );

        Self {
            state: AppState::new(store),
            layout: Layout::for_canvas(config.canvas_width, config.canvas_height),
            theme,
            dialog: PromptDialog::default(),
        }
    }

    fn handle(&mut self, ctx: &egui::Context, event: Event) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = dispatch(state, event, &self.layout);
        self.state = state;

        for effect in effects {
            match effect {
                Effect::Repaint => ctx.request_repaint(),
                Effect::PromptOpened => {
                    if let Some(prompt) = &self.state.prompt {
                        self.dialog.reset(prompt);
                    }
                }
                Effect::PromptClosed => self.dialog.clear(),
            }
        }
    }
}

impl eframe::App for CrudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.background))
            .show(ctx, |ui| {
                events = canvas::show(ui, &self.state, &self.layout, &self.theme);
            });

        if let Some(prompt) = &self.state.prompt {
            if let Some(response) = self.dialog.show(ctx, prompt) {
                events.push(response.into_event());
            }
        }

        for event in events {
            self.handle(ctx, event);
        }
    }
}
