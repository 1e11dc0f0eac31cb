//! egui front end: theme, scene building, canvas painting and prompts.

pub mod canvas;
pub mod prompt;
pub mod scene;
pub mod theme;
