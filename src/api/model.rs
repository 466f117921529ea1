use serde::{Deserialize, Serialize};

/// One catalog entry as returned by the search endpoint.
///
/// Field names follow the wire format exactly; nothing is coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cocktail {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb")]
    pub thumbnail_url: String,
    #[serde(rename = "strInstructions")]
    pub instructions: String,
}

/// Top-level response object.
///
/// `drinks` is `None` both when the key holds JSON `null` and when it is
/// missing altogether; the catalog uses `null` to say "no matches".
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub drinks: Option<Vec<Cocktail>>,
}

impl SearchEnvelope {
    pub fn into_outcome(self) -> SearchOutcome {
        match self.drinks {
            Some(items) => SearchOutcome::Found(items),
            None => SearchOutcome::NoResults,
        }
    }
}

/// Successful completion of a search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The catalog returned a list. It may still be empty.
    Found(Vec<Cocktail>),
    /// The catalog answered with a null or absent list.
    NoResults,
}

impl SearchOutcome {
    pub fn into_items(self) -> Vec<Cocktail> {
        match self {
            SearchOutcome::Found(items) => items,
            SearchOutcome::NoResults => Vec::new(),
        }
    }
}

/// Decode a raw response body into its envelope.
pub fn decode_envelope(body: &[u8]) -> Result<SearchEnvelope, serde_json::Error> {
    serde_json::from_slice(body)
}

/// Decode a raw response body into the item list.
///
/// A null or absent `drinks` decodes to an empty list, not an error.
pub fn decode_search(body: &[u8]) -> Result<Vec<Cocktail>, serde_json::Error> {
    decode_envelope(body).map(|envelope| envelope.into_outcome().into_items())
}
