use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use url::form_urlencoded;

const INFO: &str = "info";
const SEARCH: &str = "search";
const RECIPE: &str = "recipe";

/// A screen destination.
///
/// The recipe route carries copies of the entry's name and instructions;
/// there is no reference back to the search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Info,
    Search,
    Recipe { name: String, instructions: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route '{0}'")]
    Unknown(String),

    #[error("route '{route}' takes {expected} parameter(s), got {actual}")]
    Arity {
        route: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("malformed route parameter '{0}'")]
    MalformedParameter(String),
}

impl Route {
    pub fn recipe(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Route::Recipe {
            name: name.into(),
            instructions: instructions.into(),
        }
    }

    /// Route name as used in the path pattern.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Info => INFO,
            Route::Search => SEARCH,
            Route::Recipe { .. } => RECIPE,
        }
    }

    /// Header title for the screen.
    pub fn title(&self) -> &str {
        match self {
            Route::Info => "Welcome",
            Route::Search => "Search",
            Route::Recipe { name, .. } => name,
        }
    }

    /// Path form. Recipe parameters are form-urlencoded so catalog text
    /// containing `/`, `%` or spaces survives a round trip.
    pub fn path(&self) -> String {
        match self {
            Route::Info => INFO.to_string(),
            Route::Search => SEARCH.to_string(),
            Route::Recipe { name, instructions } => format!(
                "{}/{}/{}",
                RECIPE,
                encode_segment(name),
                encode_segment(instructions)
            ),
        }
    }

    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let mut segments = path.split('/');
        let head = segments.next().unwrap_or_default();
        let params: Vec<&str> = segments.collect();

        let expect = |route: &'static str, expected: usize| {
            if params.len() == expected {
                Ok(())
            } else {
                Err(RouteError::Arity {
                    route,
                    expected,
                    actual: params.len(),
                })
            }
        };

        match head {
            INFO => expect(INFO, 0).map(|_| Route::Info),
            SEARCH => expect(SEARCH, 0).map(|_| Route::Search),
            RECIPE => {
                expect(RECIPE, 2)?;
                Ok(Route::Recipe {
                    name: decode_segment(params[0])?,
                    instructions: decode_segment(params[1])?,
                })
            }
            other => Err(RouteError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

fn encode_segment(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn decode_segment(segment: &str) -> Result<String, RouteError> {
    // Encoded segments never hold a raw '&' or '=', so the form parser
    // sees the whole segment as a single key.
    if segment.contains(['&', '=']) || !has_valid_escapes(segment) {
        return Err(RouteError::MalformedParameter(segment.to_string()));
    }
    Ok(form_urlencoded::parse(segment.as_bytes())
        .map(|(key, _)| key.into_owned())
        .next()
        .unwrap_or_default())
}

/// Every `%` must start a two-hex-digit escape. The form parser would
/// otherwise pass a stray `%` through unchanged.
fn has_valid_escapes(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
