//! Remote catalog access.
//!
//! One read-only endpoint: `GET <base>/search.php?s=<query>` returning a
//! JSON envelope `{"drinks": [...] | null}`.
//!
//! - `model.rs` - catalog entry type and the envelope decoder
//! - `client.rs` - `CatalogClient` seam and the reqwest implementation
//! - `error.rs` - failure taxonomy surfaced to the controller

mod client;
mod error;
mod model;

pub use client::{CatalogClient, HttpCatalogClient, TimeoutConfig, DEFAULT_BASE_URL};
pub use error::{ErrorKind, SearchError};
pub use model::{decode_envelope, decode_search, Cocktail, SearchEnvelope, SearchOutcome};
