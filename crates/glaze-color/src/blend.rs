//! Alpha compositing of translucent surfaces.
//!
//! A glass surface shows its base color at `alpha_pct` percent opacity over
//! whatever sits behind it. Each channel is blended independently:
//!
//! ```text
//! out = round(base * a + background * (1 - a))    a = alpha_pct / 100
//! ```
//!
//! The glossy finish adds a white highlight layer between the background and
//! the base color, so it blends twice: highlight over background first, then
//! base over that intermediate.

use crate::color::Rgb;

/// Composite `base` at `alpha_pct` percent opacity over `background`.
///
/// Values above 100 are treated as fully opaque; callers clamp the lower
/// bound (the UI never offers less than 1).
#[must_use]
pub fn composite_over(base: Rgb, background: Rgb, alpha_pct: u8) -> Rgb {
    let alpha = f64::from(alpha_pct.min(100)) / 100.0;
    let blend = |fg: u8, bg: u8| -> u8 {
        let value = f64::from(fg) * alpha + f64::from(bg) * (1.0 - alpha);
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        blend(base.r, background.r),
        blend(base.g, background.g),
        blend(base.b, background.b),
    )
}

/// Glossy finish: a white highlight at `gradient_alpha_pct` over `background`,
/// then `base` at `alpha_pct` over the result.
#[must_use]
pub fn composite_glossy(base: Rgb, background: Rgb, alpha_pct: u8, gradient_alpha_pct: u8) -> Rgb {
    let highlighted = composite_over(Rgb::WHITE, background, gradient_alpha_pct);
    composite_over(base, highlighted, alpha_pct)
}
