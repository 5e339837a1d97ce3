//! Surface treatment of the button.

use std::fmt;

use glaze_color::{Rgb, composite_glossy, composite_over};

/// Glass opacity in percent.
pub const DEFAULT_GLASS_ALPHA: u8 = 60;
/// `backdrop-filter` blur radius in pixels.
pub const DEFAULT_BLUR_PX: u16 = 4;
/// Opacity of the glossy highlight in percent.
pub const DEFAULT_GRADIENT_ALPHA: u8 = 20;

#[inline]
fn clamp_pct(value: u8) -> u8 {
    value.clamp(1, 100)
}

/// Finish of a glass surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Finish {
    #[default]
    Matte,
    /// White highlight gradient over the translucent fill.
    Glossy { gradient_alpha: u8 },
}

impl Finish {
    /// Glossy finish; the highlight opacity is clamped to 1-100.
    #[must_use]
    pub fn glossy(gradient_alpha: u8) -> Self {
        Self::Glossy {
            gradient_alpha: clamp_pct(gradient_alpha),
        }
    }

    #[must_use]
    pub const fn is_glossy(self) -> bool {
        matches!(self, Self::Glossy { .. })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Matte => "matte",
            Self::Glossy { .. } => "glossy",
        }
    }
}

/// How the button surface is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceStyle {
    /// Opaque fill with the button color.
    #[default]
    Flat,
    /// Translucent fill showing the background through it.
    Glass { alpha: u8, blur_px: u16, finish: Finish },
}

impl SurfaceStyle {
    /// Matte glass with the default opacity and blur.
    #[must_use]
    pub const fn glass() -> Self {
        Self::Glass {
            alpha: DEFAULT_GLASS_ALPHA,
            blur_px: DEFAULT_BLUR_PX,
            finish: Finish::Matte,
        }
    }

    /// Set the glass opacity (clamped to 1-100). No effect on a flat surface.
    #[must_use]
    pub fn with_alpha(self, alpha: u8) -> Self {
        match self {
            Self::Glass { blur_px, finish, .. } => Self::Glass {
                alpha: clamp_pct(alpha),
                blur_px,
                finish,
            },
            Self::Flat => Self::Flat,
        }
    }

    /// Set the blur radius. No effect on a flat surface.
    #[must_use]
    pub const fn with_blur(self, blur_px: u16) -> Self {
        match self {
            Self::Glass { alpha, finish, .. } => Self::Glass {
                alpha,
                blur_px,
                finish,
            },
            Self::Flat => Self::Flat,
        }
    }

    /// Set the finish. No effect on a flat surface.
    #[must_use]
    pub const fn with_finish(self, finish: Finish) -> Self {
        match self {
            Self::Glass { alpha, blur_px, .. } => Self::Glass {
                alpha,
                blur_px,
                finish,
            },
            Self::Flat => Self::Flat,
        }
    }

    #[must_use]
    pub const fn is_glass(self) -> bool {
        matches!(self, Self::Glass { .. })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Glass { .. } => "glass",
        }
    }

    /// The color the eye sees where the button sits over `background`.
    ///
    /// Flat surfaces ignore the background. Glass composites the base color
    /// over it, with the glossy highlight blended in first.
    #[must_use]
    pub fn effective_color(self, base: Rgb, background: Rgb) -> Rgb {
        match self {
            Self::Flat => base,
            Self::Glass {
                alpha,
                finish: Finish::Matte,
                ..
            } => composite_over(base, background, alpha),
            Self::Glass {
                alpha,
                finish: Finish::Glossy { gradient_alpha },
                ..
            } => composite_glossy(base, background, alpha, gradient_alpha),
        }
    }
}

impl fmt::Display for SurfaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())?;
        if let Self::Glass {
            alpha,
            blur_px,
            finish,
        } = self
        {
            write!(f, " {alpha}% blur {blur_px}px {}", finish.as_str())?;
            if let Finish::Glossy { gradient_alpha } = finish {
                write!(f, " {gradient_alpha}%")?;
            }
        }
        Ok(())
    }
}
