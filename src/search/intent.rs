//! Intents for the search lifecycle.

use crate::api::Cocktail;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// A request was issued.
    Started,

    /// The catalog returned a list (possibly empty).
    Succeeded { items: Vec<Cocktail> },

    /// Null list or non-success status.
    NoResults,

    /// Transport or decoding failure, with the underlying message.
    Failed { message: String },
}

impl Intent for SearchIntent {}
