//! Prompt and request-body constants for the scan call.

pub const GEMINI_MODEL: &str = "gemini-2.5-flash-lite";

/// Builds the single-turn scan prompt, embedding the message verbatim.
///
/// The reply contract is plain text, not JSON: one rating word and one
/// sentence, joined by a single `|`. Keeping the format this small makes
/// the parse side trivial and survives models that ignore JSON-mode hints.
pub fn build_scan_prompt(content: &str) -> String {
    format!(
        "The following message is from a chat conversation: \"{content}\". \
         Rate it as exactly one of: safe, caution, or scam, and give a \
         one-sentence reason. Reply with only the rating and the reason, \
         separated by a single '|' character."
    )
}

/// Safety settings disabling all content-category blocking.
///
/// The classifier has to be able to quote and reason about scam,
/// harassment, and phishing content; with default thresholds Gemini
/// refuses exactly the messages most worth scanning.
pub fn safety_settings() -> serde_json::Value {
    serde_json::json!([
        { "category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_NONE" },
        { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_NONE" },
        { "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_NONE" },
        { "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_NONE" }
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_content_verbatim() {
        let p = build_scan_prompt("Click here to claim your prize!");
        assert!(p.contains("\"Click here to claim your prize!\""));
        assert!(p.contains("safe, caution, or scam"));
        assert!(p.contains('|'));
    }

    #[test]
    fn all_four_categories_unblocked() {
        let settings = safety_settings();
        let arr = settings.as_array().unwrap();
        assert_eq!(arr.len(), 4);
        for entry in arr {
            assert_eq!(entry["threshold"], "BLOCK_NONE");
        }
    }
}
