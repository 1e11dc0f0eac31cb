//! Canvas widget: paints a scene and turns pointer input into events.

use crate::core::dispatch::Event;
use crate::core::layout::Layout;
use crate::core::state::AppState;
use crate::ui::scene::{self, Shape};
use crate::ui::theme::Theme;
use egui::{FontId, Painter, Sense, Ui, Vec2};

/// Draw the canvas and collect this frame's pointer events in canvas
/// coordinates.
pub fn show(ui: &mut Ui, state: &AppState, layout: &Layout, theme: &Theme) -> Vec<Event> {
    let (response, painter) = ui.allocate_painter(layout.canvas, Sense::click());
    let offset = response.rect.min.to_vec2();

    paint(&painter, &scene::build(state, layout, theme), offset);

    let mut events = Vec::new();
    match response.hover_pos() {
        Some(pos) => {
            let local = pos - offset;
            if state.pointer != Some(local) {
                events.push(Event::PointerMoved(local));
            }
        }
        None if state.pointer.is_some() => events.push(Event::PointerLeft),
        None => {}
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(Event::Click(pos - offset));
        }
    }

    events
}

fn paint(painter: &Painter, scene: &scene::Scene, offset: Vec2) {
    for shape in &scene.shapes {
        match shape {
            Shape::Rect {
                rect,
                rounding,
                fill,
                stroke,
            } => {
                painter.rect(rect.translate(offset), *rounding, *fill, *stroke);
            }
            Shape::Text {
                pos,
                anchor,
                text,
                size,
                color,
            } => {
                painter.text(*pos + offset, *anchor, text, FontId::proportional(*size), *color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::RecordStore;
    use egui::{Pos2, Rect};

    const SPACER: f32 = 24.0;

    fn seeded() -> AppState {
        AppState::new(RecordStore::seeded(["Item A", "Item B", "Item C"]))
    }

    fn primary(pos: Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Runs frames with the canvas below a spacer inside a padded panel, so the
    /// canvas origin is away from the screen origin.
    struct Harness {
        ctx: egui::Context,
        layout: Layout,
        theme: Theme,
        origin: Pos2,
    }

    impl Harness {
        fn new() -> Self {
            let mut harness = Self {
                ctx: egui::Context::default(),
                layout: Layout::default(),
                theme: Theme::default(),
                origin: Pos2::ZERO,
            };
            harness.frame(&seeded(), Vec::new());
            harness
        }

        fn frame(&mut self, state: &AppState, events: Vec<egui::Event>) -> Vec<Event> {
            let input = egui::RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1000.0, 800.0))),
                events,
                ..Default::default()
            };
            let mut collected = Vec::new();
            let mut origin = Pos2::ZERO;
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.add_space(SPACER);
                    origin = ui.cursor().min;
                    collected = show(ui, state, &self.layout, &self.theme);
                });
            });
            self.origin = origin;
            collected
        }

        fn screen(&self, local: Pos2) -> Pos2 {
            local + self.origin.to_vec2()
        }
    }

    #[test]
    fn test_canvas_is_offset_from_screen() {
        let harness = Harness::new();
        assert!(harness.origin.x > 0.0);
        assert!(harness.origin.y >= SPACER);
    }

    #[test]
    fn test_click_reported_in_canvas_coordinates() {
        let mut harness = Harness::new();
        let state = seeded();
        let target = harness.layout.item_rect(1).center();
        let pos = harness.screen(target);

        let moved = harness.frame(&state, vec![egui::Event::PointerMoved(pos)]);
        assert_eq!(moved, vec![Event::PointerMoved(target)]);

        harness.frame(&state, vec![primary(pos, true)]);
        let released = harness.frame(&state, vec![primary(pos, false)]);
        assert!(released.contains(&Event::Click(target)), "{released:?}");
    }

    #[test]
    fn test_unchanged_pointer_sends_nothing() {
        let mut harness = Harness::new();
        let target = harness.layout.button_rect(crate::core::crud::Action::Read).center();
        let pos = harness.screen(target);

        let mut state = seeded();
        harness.frame(&state, vec![egui::Event::PointerMoved(pos)]);
        state.pointer = Some(target);
        assert!(harness.frame(&state, Vec::new()).is_empty());
    }

    #[test]
    fn test_pointer_gone_reports_left() {
        let mut harness = Harness::new();
        let target = harness.layout.item_rect(0).center();
        let pos = harness.screen(target);

        let mut state = seeded();
        harness.frame(&state, vec![egui::Event::PointerMoved(pos)]);
        state.pointer = Some(target);
        let events = harness.frame(&state, vec![egui::Event::PointerGone]);
        assert_eq!(events, vec![Event::PointerLeft]);

        state.pointer = None;
        assert!(harness.frame(&state, Vec::new()).is_empty());
    }
}
