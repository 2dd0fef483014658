//! Classification result types — Verdict and Rating.
//!
//! The model replies with free text; everything here is about forcing
//! that text into a closed set. Any rating string outside the known
//! three collapses to `Unsure`, so downstream code never branches on
//! raw model output.

use serde::{Deserialize, Serialize};

/// Default reason when the model gives none (or the response is malformed).
pub const NO_REASON: &str = "No reason provided.";

/// Risk rating for a scanned message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Safe,
    Caution,
    Scam,
    /// Catch-all: unknown rating string, empty response, or the model
    /// declining to commit.
    Unsure,
}

impl Rating {
    /// Normalize a raw model rating string. Case-insensitive; anything
    /// unrecognized becomes `Unsure` rather than an error.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "safe" => Rating::Safe,
            "caution" => Rating::Caution,
            "scam" => Rating::Scam,
            _ => Rating::Unsure,
        }
    }
}

/// The classification result for a single message.
///
/// Built fresh per scan; never cached or compared across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub rating: Rating,
    pub reason: String,
}

impl Verdict {
    /// Fallback verdict for an empty or missing model response.
    pub fn fallback() -> Self {
        Self {
            rating: Rating::Unsure,
            reason: NO_REASON.to_string(),
        }
    }

    /// Parse the model's `rating|reason` reply text.
    ///
    /// Splits on the *first* `|` only, trims both sides. A missing or
    /// empty reason segment gets the default reason; a missing delimiter
    /// means the whole text is treated as the rating.
    pub fn parse(text: &str) -> Self {
        let (raw_rating, raw_reason) = match text.split_once('|') {
            Some((r, rest)) => (r, rest),
            None => (text, ""),
        };
        let reason = raw_reason.trim();
        Self {
            rating: Rating::parse(raw_rating),
            reason: if reason.is_empty() {
                NO_REASON.to_string()
            } else {
                reason.to_string()
            },
        }
    }
}
