//! LLM domain — Gemini scam classification.
//!
//! One provider, one call shape: a non-streaming `generateContent` POST
//! that returns a `rating|reason` text pair.
//!
//!   - gemini.rs  — HTTP client + response extraction
//!   - prompts.rs — model constant, prompt builder, safety settings
//!   - types.rs   — Verdict + Rating

mod gemini;
pub mod prompts;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{Rating, Verdict};
