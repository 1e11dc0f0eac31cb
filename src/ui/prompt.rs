//! Modal prompt window.

use crate::core::dispatch::Event;
use crate::core::state::{Prompt, PromptKind};
use egui::{Align2, Key, TextEdit};

/// How the user closed a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Submitted(String),
    Cancelled,
}

impl PromptResponse {
    pub fn into_event(self) -> Event {
        match self {
            PromptResponse::Submitted(text) => Event::PromptSubmitted(text),
            PromptResponse::Cancelled => Event::PromptCancelled,
        }
    }
}

/// Text buffer and focus state for the open prompt.
#[derive(Debug, Default)]
pub struct PromptDialog {
    buffer: String,
    focus_requested: bool,
}

impl PromptDialog {
    /// Prepare for a freshly opened prompt.
    pub fn reset(&mut self, prompt: &Prompt) {
        self.buffer = match &prompt.kind {
            PromptKind::Input { initial, .. } => initial.clone(),
            PromptKind::Notice => String::new(),
        };
        self.focus_requested = false;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.focus_requested = false;
    }

    /// Show `prompt` centred on screen. Returns a response once it closes.
    pub fn show(&mut self, ctx: &egui::Context, prompt: &Prompt) -> Option<PromptResponse> {
        let mut response = None;

        egui::Window::new(prompt.title.as_str())
            .id(egui::Id::new("crud_prompt"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(prompt.message.as_str());
                ui.add_space(6.0);

                if prompt.is_input() {
                    let edit = ui.add(TextEdit::singleline(&mut self.buffer).desired_width(280.0));
                    // The first frame is a sizing pass with a disabled ui
                    if !self.focus_requested && !ui.is_sizing_pass() {
                        edit.request_focus();
                        self.focus_requested = true;
                    }
                    if edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        response = Some(PromptResponse::Submitted(self.buffer.clone()));
                    }

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() {
                            response = Some(PromptResponse::Submitted(self.buffer.clone()));
                        }
                        if ui.button("Cancel").clicked() {
                            response = Some(PromptResponse::Cancelled);
                        }
                    });
                } else if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(Key::Enter)) {
                    response = Some(PromptResponse::Submitted(String::new()));
                }
            });

        if response.is_none() && ctx.input(|i| i.key_pressed(Key::Escape)) {
            response = Some(PromptResponse::Cancelled);
        }
        response
    }
}
