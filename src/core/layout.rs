//! Canvas geometry and hit-testing.
//!
//! All coordinates are canvas-local: origin at the top-left corner, y growing
//! downwards. Containment checks include every edge.

use crate::core::crud::Action;
use egui::{pos2, vec2, Pos2, Rect, Vec2};

/// What a pointer coordinate lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Button(Action),
    Item(usize),
    Canvas,
}

/// Fixed positions of everything drawn on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub canvas: Vec2,
    pub title_y: f32,
    pub subtitle_y: f32,
    pub button_top: f32,
    pub button_size: Vec2,
    pub button_gap: f32,
    pub item_origin: Pos2,
    pub item_size: Vec2,
    pub item_gap: f32,
    pub rows_per_column: usize,
    pub column_gap: f32,
    pub status_y: f32,
    pub footer_y: f32,
}

impl Layout {
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas: vec2(width, height),
            title_y: 24.0,
            subtitle_y: 108.0,
            button_top: 52.0,
            button_size: vec2(140.0, 32.0),
            button_gap: 20.0,
            item_origin: pos2(40.0, 140.0),
            item_size: vec2(220.0, 40.0),
            item_gap: 12.0,
            rows_per_column: 5,
            column_gap: 260.0,
            status_y: height - 56.0,
            footer_y: height - 30.0,
        }
    }

    /// Buttons sit in one row, centred horizontally.
    pub fn button_rect(&self, action: Action) -> Rect {
        let count = Action::ALL.len() as f32;
        let row_width = count * self.button_size.x + (count - 1.0) * self.button_gap;
        let left = (self.canvas.x - row_width) / 2.0;
        let x = left + action.position() as f32 * (self.button_size.x + self.button_gap);
        Rect::from_min_size(pos2(x, self.button_top), self.button_size)
    }

    /// Items fill columns top to bottom, then move right.
    pub fn item_rect(&self, index: usize) -> Rect {
        let rows = self.rows_per_column.max(1);
        let col = (index / rows) as f32;
        let row = (index % rows) as f32;
        let x = self.item_origin.x + col * self.column_gap;
        let y = self.item_origin.y + row * (self.item_size.y + self.item_gap);
        Rect::from_min_size(pos2(x, y), self.item_size)
    }

    pub fn hovered_button(&self, pos: Pos2) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|&action| self.button_rect(action).contains(pos))
    }

    /// Buttons win over items; items are checked in list order.
    pub fn hit_test(&self, pos: Pos2, record_count: usize) -> Hit {
        if let Some(action) = self.hovered_button(pos) {
            return Hit::Button(action);
        }
        (0..record_count)
            .find(|&i| self.item_rect(i).contains(pos))
            .map_or(Hit::Canvas, Hit::Item)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::for_canvas(800.0, 600.0)
    }
}
