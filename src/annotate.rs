//! Verdict annotator — translates a Verdict into a visual treatment.
//!
//! Pure mapping from (rating, theme) to a color/label pair, plus the
//! mutation routine that applies it to a host-owned message surface.
//! The crate never touches a real UI toolkit; hosts implement
//! `MessageSurface` over whatever element they render messages with.

use crate::llm::{Rating, Verdict};
use serde::Serialize;

/// Host theme. Palettes differ to preserve contrast: dark text colors on
/// light backgrounds, bright ones on dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// The visual treatment for one rating: accent color (hex) + banner label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerdictStyle {
    pub color: &'static str,
    pub label: &'static str,
}

/// Fixed style table. `Unsure` doubles as the default branch — rating
/// normalization guarantees unknown model output lands here.
pub fn style_for(rating: Rating, theme: Theme) -> VerdictStyle {
    let light = theme == Theme::Light;
    match rating {
        Rating::Safe => VerdictStyle {
            color: if light { "#008000" } else { "#40ff40" },
            label: "THIS MESSAGE IS VERY LIKELY SAFE",
        },
        Rating::Caution => VerdictStyle {
            color: if light { "#808000" } else { "#ffff40" },
            label: "PROCEED WITH CAUTION",
        },
        Rating::Scam => VerdictStyle {
            color: if light { "#800000" } else { "#ff4040" },
            label: "THIS MESSAGE IS VERY LIKELY A SCAM",
        },
        Rating::Unsure => VerdictStyle {
            color: if light { "#000000" } else { "#ffffff" },
            label: "UNABLE TO DETERMINE SCAM LIKELIHOOD",
        },
    }
}

/// Handle to a rendered message element, owned by the host UI.
pub trait MessageSurface {
    /// Paint a left-edge accent stripe in the given hex color.
    fn set_accent(&mut self, color: &str);
    /// Tint the background with the given hex color (includes alpha).
    fn set_tint(&mut self, color: &str);
    /// Append a small-print note block beneath the message.
    fn append_note(&mut self, color: &str, text: &str);
}

/// Apply a verdict's visual treatment to a message surface.
///
/// Accent stripe + ~20% background tint + appended label/reason note.
/// Calling twice for the same surface appends a second note; callers are
/// expected to annotate once per verdict.
pub fn annotate(surface: &mut dyn MessageSurface, verdict: &Verdict, theme: Theme) {
    let style = style_for(verdict.rating, theme);

    surface.set_accent(style.color);
    // "33" hex alpha = ~20% opacity tint over the message background.
    surface.set_tint(&format!("{}33", style.color));

    let note = if verdict.reason.is_empty() {
        style.label.to_string()
    } else {
        format!("{}\nReason: {}", style.label, verdict.reason)
    };
    surface.append_note(style.color, &note);

    log::info!("[ANNOTATE] {:?} → {}", verdict.rating, style.color);
}
