//! Scan pipeline — credential → classify → annotate-or-notify.
//!
//! The host supplies its collaborators explicitly instead of the crate
//! reading ambient globals: an `ApiKeyProvider` for the credential and a
//! `Dialogs` implementation for user-facing prompts. Every failure path
//! ends in a dialog; nothing here panics or retries.

use crate::annotate::{annotate, MessageSurface, Theme};
use crate::llm::{GeminiClient, Verdict};
use crate::settings;

/// Where to get an API key: <https://makersuite.google.com/app/apikey>.
/// Shown in the first-run setup prompt.
pub const GET_KEY_URL: &str = "https://makersuite.google.com/app/apikey";

/// Source of the Gemini credential. Read on every scan, never written.
pub trait ApiKeyProvider {
    fn api_key(&self) -> Option<String>;
}

/// Default provider: env var + OS keychain via the settings module.
#[derive(Debug, Default)]
pub struct KeyringProvider;

impl ApiKeyProvider for KeyringProvider {
    fn api_key(&self) -> Option<String> {
        settings::resolve_api_key()
    }
}

/// Host dialog primitives. Result-returning rather than callback-based;
/// the host decides how to render them (modal, toast, terminal prompt).
pub trait Dialogs {
    fn alert(&self, title: &str, body: &str);
    /// Returns true when the user picks the confirm option.
    fn confirm(&self, title: &str, body: &str, confirm_label: &str, cancel_label: &str) -> bool;
}

/// One scan workflow instance. Scans are independent: no shared mutable
/// state, no de-duplication of concurrent scans of the same message.
pub struct Scanner<P: ApiKeyProvider, D: Dialogs> {
    client: GeminiClient,
    keys: P,
    dialogs: D,
    theme: Theme,
}

impl Scanner<KeyringProvider, NoDialogs> {
    /// Headless scanner with the default key source and no dialogs.
    /// Mostly useful for hosts that only want verdicts, not prompts.
    pub fn headless() -> Self {
        Scanner::new(GeminiClient::default(), KeyringProvider, NoDialogs, Theme::Dark)
    }
}

impl<P: ApiKeyProvider, D: Dialogs> Scanner<P, D> {
    pub fn new(client: GeminiClient, keys: P, dialogs: D, theme: Theme) -> Self {
        Self {
            client,
            keys,
            dialogs,
            theme,
        }
    }

    /// Scan one message and annotate its surface with the verdict.
    ///
    /// Returns the verdict on success. On a missing key the first-run
    /// setup prompt is shown instead of calling the network; on a
    /// transport failure the error text goes to an alert dialog. Both
    /// return `None` — the host process is never taken down by a scan.
    pub async fn scan(&self, surface: &mut dyn MessageSurface, content: &str) -> Option<Verdict> {
        let api_key = match self.keys.api_key() {
            Some(key) => key,
            None => {
                self.show_setup_prompt();
                return None;
            }
        };

        match self.client.classify(content, &api_key).await {
            Ok(verdict) => {
                annotate(surface, &verdict, self.theme);
                Some(verdict)
            }
            Err(e) => {
                log::error!("[SCAN] Scan failed: {}", e);
                self.dialogs.alert("Message Scan Error", &e.to_string());
                None
            }
        }
    }

    /// First-run guidance: tell the user a key is required and where to
    /// get one.
    pub fn show_setup_prompt(&self) {
        let wants_key = self.dialogs.confirm(
            "Message Scan Setup",
            "You need a Google Gemini API key to scan messages.\n\n\
             Get an API key, then paste it into the scan settings.",
            "Get API Key",
            "I already have one",
        );
        if wants_key {
            self.dialogs.alert("Get an API Key", GET_KEY_URL);
        } else {
            log::info!("[SCAN] User chose to enter an existing key");
        }
    }
}

/// No-op dialog sink for headless use.
#[derive(Debug, Default)]
pub struct NoDialogs;

impl Dialogs for NoDialogs {
    fn alert(&self, _title: &str, _body: &str) {}
    fn confirm(&self, _title: &str, _body: &str, _confirm: &str, _cancel: &str) -> bool {
        false
    }
}
