//! Scene builder.
//!
//! Turns the current state into a flat list of shapes in canvas coordinates.
//! The whole scene is rebuilt for every frame; nothing is cached between calls.

use crate::core::crud::Action;
use crate::core::layout::Layout;
use crate::core::state::AppState;
use crate::ui::theme::Theme;
use egui::{pos2, Align2, Color32, Pos2, Rect, Stroke};

pub const TITLE: &str = "Visual CRUD (Create Read Update Delete)";
pub const SUBTITLE: &str = "Click a button above, click an item to select it";
pub const HINTS: &str =
    "Hints: Click an item box to select. Use buttons to perform CRUD. Create uses text input.";

const TITLE_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 14.0;
const HINT_SIZE: f32 = 12.0;
const BUTTON_ROUNDING: f32 = 8.0;
const ITEM_TEXT_INSET: f32 = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        rect: Rect,
        rounding: f32,
        fill: Color32,
        stroke: Stroke,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        size: f32,
        color: Color32,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    fn text(
        &mut self,
        pos: Pos2,
        anchor: Align2,
        text: impl Into<String>,
        size: f32,
        color: Color32,
    ) {
        self.shapes.push(Shape::Text {
            pos,
            anchor,
            text: text.into(),
            size,
            color,
        });
    }

    fn rect(&mut self, rect: Rect, rounding: f32, fill: Color32, stroke: Stroke) {
        self.shapes.push(Shape::Rect {
            rect,
            rounding,
            fill,
            stroke,
        });
    }

    /// All text strings in drawing order.
    #[cfg(test)]
    pub fn texts(&self) -> Vec<&str> {
        self.shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text { text, .. } => Some(text.as_str()),
                Shape::Rect { .. } => None,
            })
            .collect()
    }
}

/// Build the full scene: title, buttons, records, status and hints.
pub fn build(state: &AppState, layout: &Layout, theme: &Theme) -> Scene {
    let mut scene = Scene::default();
    let center_x = layout.canvas.x / 2.0;
    let outline = Stroke::new(1.0, theme.text);

    scene.text(
        pos2(center_x, layout.title_y),
        Align2::CENTER_CENTER,
        TITLE,
        TITLE_SIZE,
        theme.text,
    );

    let hovered = state.hovered_button(layout);
    for action in Action::ALL {
        let rect = layout.button_rect(action);
        let fill = if hovered == Some(action) {
            theme.button_hover
        } else {
            theme.button
        };
        scene.rect(rect, BUTTON_ROUNDING, fill, outline);
        scene.text(
            rect.center(),
            Align2::CENTER_CENTER,
            action.label(),
            BODY_SIZE,
            theme.text,
        );
    }

    scene.text(
        pos2(center_x, layout.subtitle_y),
        Align2::CENTER_CENTER,
        SUBTITLE,
        BODY_SIZE,
        theme.text,
    );

    let border = Stroke::new(1.5, theme.item_border);
    for (index, record) in state.store.records().iter().enumerate() {
        let rect = layout.item_rect(index);
        let fill = if state.selection.is_selected(index) {
            theme.selected
        } else {
            theme.item_fill
        };
        scene.rect(rect, 0.0, fill, border);
        scene.text(
            pos2(rect.min.x + ITEM_TEXT_INSET, rect.center().y),
            Align2::LEFT_CENTER,
            record.display_text(),
            BODY_SIZE,
            theme.text,
        );
    }

    if !state.status.is_empty() {
        scene.text(
            pos2(20.0, layout.status_y),
            Align2::LEFT_CENTER,
            state.status.as_str(),
            BODY_SIZE,
            theme.text,
        );
    }

    scene.text(
        pos2(20.0, layout.footer_y),
        Align2::LEFT_CENTER,
        HINTS,
        HINT_SIZE,
        theme.hint_text,
    );

    scene
}
