//! Crate-wide error type.
//!
//! Two failure families matter to callers: a missing credential (the user
//! never set a key — recoverable via the setup prompt) and a transport
//! failure (the Gemini call itself broke — surfaced verbatim in an error
//! dialog). A malformed *successful* response is never an error; the
//! classifier degrades to the "unsure" verdict instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// No API key configured — checked before any network I/O.
    #[error("no Gemini API key configured")]
    MissingApiKey,

    /// Gemini returned a non-success status. The body is kept as
    /// diagnostic text for the user-facing error dialog.
    #[error("Gemini API returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The HTTP request did not complete (DNS, connect, timeout, ...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// OS keychain access failed while saving or loading the key.
    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

impl ScanError {
    /// True for failures caused by a missing credential rather than a
    /// broken call — the pipeline routes these to the setup prompt.
    pub fn is_auth(&self) -> bool {
        matches!(self, ScanError::MissingApiKey)
    }
}
