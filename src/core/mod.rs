//! Core modules: record storage, selection, geometry and the CRUD dispatcher.

pub mod crud;
pub mod dispatch;
pub mod layout;
pub mod selection;
pub mod state;
pub mod store;
