//! Live contrast check of the configured button against its background.

use glaze_color::{ContrastVerdict, contrast_ratio};
#[cfg(feature = "tracing")]
use tracing::debug;

use crate::background::Background;
use crate::button::ButtonConfig;

/// Shown under a failing verdict.
pub const LOW_CONTRAST_ADVICE: &str =
    "Contrast ratio is below 4.5. Try adjusting transparency or text colour.";
/// Shown instead of a verdict while a video plays behind the button.
pub const VIDEO_DISABLED_MESSAGE: &str = "Contrast ratio is disabled during video";

/// Result of [`evaluate_contrast`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContrastOutcome {
    /// Worst-case verdict across all background samples.
    Verdict(ContrastVerdict),
    /// The background is video.
    Disabled,
    /// Nothing to compare against yet (image still loading).
    Unavailable,
}

impl ContrastOutcome {
    #[must_use]
    pub const fn verdict(&self) -> Option<&ContrastVerdict> {
        match self {
            Self::Verdict(verdict) => Some(verdict),
            _ => None,
        }
    }

    /// Status line for the preview; `None` when nothing should be shown.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Verdict(verdict) => Some(verdict.to_string()),
            Self::Disabled => Some(VIDEO_DISABLED_MESSAGE.to_string()),
            Self::Unavailable => None,
        }
    }

    /// Remediation hint for failing verdicts.
    #[must_use]
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::Verdict(verdict) if !verdict.passes() => Some(LOW_CONTRAST_ADVICE),
            _ => None,
        }
    }
}

/// Contrast of the button's text against what the eye sees behind it.
///
/// - video background: [`ContrastOutcome::Disabled`]
/// - flat surface: text color against the button color
/// - glass surface: the minimum over every background sample, each sample
///   seen through the surface; with no samples the outcome is
///   [`ContrastOutcome::Unavailable`]
#[must_use]
pub fn evaluate_contrast(button: &ButtonConfig, background: &Background) -> ContrastOutcome {
    if background.is_video() {
        return ContrastOutcome::Disabled;
    }

    let text = button.text_color();
    let base = button.background_color();

    let outcome = if button.surface.is_glass() {
        let samples = background.samples();
        ContrastVerdict::worst_of(samples.iter().map(|&sample| {
            contrast_ratio(text, button.surface.effective_color(base, sample))
        }))
        .map_or(ContrastOutcome::Unavailable, ContrastOutcome::Verdict)
    } else {
        ContrastOutcome::Verdict(ContrastVerdict::between(text, base))
    };

    #[cfg(feature = "tracing")]
    debug!(
        surface = %button.surface,
        background = background.kind(),
        outcome = ?outcome,
        "contrast evaluated"
    );

    outcome
}
