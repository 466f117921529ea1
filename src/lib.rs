//! Terminal client for a public cocktail recipe catalog.
//!
//! Search by name, browse the matches, open a recipe's preparation text.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod search;
pub mod ui;
