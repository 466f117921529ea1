use std::time::Duration;

use thiserror::Error;

/// Failures a catalog search can end in.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {status}")]
    Status { status: u16 },

    /// Connection, DNS or body transfer failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// No complete response within the configured request timeout.
    #[error("request timed out after {}ms", .after.as_millis())]
    Timeout { after: Duration },

    /// The body was not a valid search envelope.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse bucket used when presenting a failure to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoResults,
    Transport,
}

impl SearchError {
    /// Display text followed by each distinct cause in the source chain.
    ///
    /// reqwest keeps the actual failure (refused connection, DNS, TLS) in
    /// `source()`, not in its own message.
    pub fn detailed_message(&self) -> String {
        describe_chain(self)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::Status { .. } => ErrorKind::NoResults,
            SearchError::Transport(_) | SearchError::Timeout { .. } | SearchError::Decode(_) => {
                ErrorKind::Transport
            }
        }
    }
}

fn describe_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // Some errors already embed their cause in their own message.
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
