#![forbid(unsafe_code)]

//! Button style model for Glaze.
//!
//! Layered on [`glaze_color`], this crate describes one configurable button
//! and everything derived from it:
//!
//! - [`Palette`] of [`NamedColor`]s seeded with the brand colors
//! - [`SurfaceStyle`] (flat or glass, matte or glossy)
//! - [`Background`] the button is previewed against, including
//!   [`sample_center_region`] for imagery
//! - [`evaluate_contrast`], the live WCAG verdict for the current setup
//! - [`ButtonSnippet`], the exported HTML/CSS
//!
//! All functions are pure. State lives in the studio that drives them.

pub mod background;
pub mod button;
pub mod evaluate;
pub mod palette;
pub mod snippet;
pub mod surface;

pub use background::{Background, DEFAULT_PREVIEW_FILL, SAMPLE_COUNT, sample_center_region};
pub use button::{ButtonConfig, DEFAULT_FOCUS_RING, FALLBACK_BUTTON_COLOR, FALLBACK_TEXT_COLOR};
pub use evaluate::{ContrastOutcome, LOW_CONTRAST_ADVICE, VIDEO_DISABLED_MESSAGE, evaluate_contrast};
pub use palette::{NamedColor, Palette, PaletteError};
pub use snippet::ButtonSnippet;
pub use surface::{DEFAULT_BLUR_PX, DEFAULT_GLASS_ALPHA, DEFAULT_GRADIENT_ALPHA, Finish, SurfaceStyle};

pub use glaze_color::{ContrastLevel, ContrastVerdict, Rgb};
