//! Terminal screens: info, search and recipe detail.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod navigation;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod terminal_guard;
pub mod theme;
