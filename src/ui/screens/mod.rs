//! Body renderers, one per route.

pub mod info;
pub mod recipe;
pub mod search;
