//! message-scan — scam detection for chat messages via Gemini AI.
//!
//! The host chat client owns the UI; this crate owns the scan workflow:
//! send a message's text to Gemini, get back a rating + one-sentence
//! reason, and translate that into a visual treatment on the message.
//!
//! Layers:
//!   - llm/         — Gemini classification client (prompt, HTTP, parsing)
//!   - annotate.rs  — verdict → color/label mapping + surface mutation
//!   - settings.rs  — API key storage (env var + OS keychain)
//!   - pipeline.rs  — scan orchestration, wired to the host via traits

pub mod annotate;
mod error;
pub mod llm;
pub mod pipeline;
pub mod settings;

pub use annotate::{annotate, style_for, MessageSurface, Theme, VerdictStyle};
pub use error::ScanError;
pub use llm::{GeminiClient, Rating, Verdict};
pub use pipeline::{ApiKeyProvider, Dialogs, KeyringProvider, NoDialogs, Scanner};

/// One-time startup: load `.env.local` → `.env` from the project root,
/// then initialize logging.
///
/// Uses CARGO_MANIFEST_DIR (compile-time path to the crate) to reliably
/// find the project root regardless of the host's working directory.
/// Hosts that manage their own env/logging can skip this.
pub fn init() {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));

    'env_load: for env_file in [".env.local", ".env"] {
        let path = manifest_dir.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    let _ = env_logger::try_init();
    log::info!("message-scan initialized");
}
