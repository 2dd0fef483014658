//! API key storage — env var + OS keychain.
//!
//! The only persisted setting. Resolution order: the `GEMINI_API_KEY`
//! env var wins (explicit override, also how tests and `.env.local`
//! supply a key), then the OS keychain. A keychain hit is exported into
//! env so later calls in the same session skip the keychain round trip.

use crate::error::ScanError;

const KEYRING_SERVICE: &str = "message-scan";
const KEYRING_USER: &str = "gemini";
const ENV_KEY: &str = "GEMINI_API_KEY";

/// Look up the Gemini API key. Returns `None` when no key is configured
/// anywhere (the caller should walk the user through setup).
pub fn resolve_api_key() -> Option<String> {
    if let Ok(key) = std::env::var(ENV_KEY) {
        if !key.is_empty() {
            return Some(key);
        }
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER) {
        if let Ok(key) = entry.get_password() {
            if !key.is_empty() {
                // Load into env so this session doesn't hit the keychain again
                std::env::set_var(ENV_KEY, &key);
                log::info!("[SETTINGS] Loaded Gemini key from OS keychain");
                return Some(key);
            }
        }
    }

    None
}

/// Save the API key to the OS keychain, and into env so the current
/// session picks it up immediately.
pub fn save_api_key(api_key: &str) -> Result<(), ScanError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER)?;
    entry.set_password(api_key)?;
    std::env::set_var(ENV_KEY, api_key);
    log::info!("[SETTINGS] Gemini API key saved");
    Ok(())
}

/// True when a key is available from any source.
pub fn has_api_key() -> bool {
    resolve_api_key().is_some()
}
