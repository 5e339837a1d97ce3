//! What the preview shows behind the button.
//!
//! Contrast for a glass button depends on what shows through it, so the
//! background is reduced to a small set of pixel samples: nine copies of a
//! solid fill, or the 3x3 neighborhood at the center of an image. Video
//! frames change constantly and are not sampled at all.

use std::borrow::Cow;

use glaze_color::Rgb;

/// Fill of the preview area when no background color was chosen.
pub const DEFAULT_PREVIEW_FILL: Rgb = Rgb::new(0xf0, 0xf0, 0xf0);

/// Samples taken from a solid fill or an image center.
pub const SAMPLE_COUNT: usize = 9;

const BYTES_PER_PIXEL: usize = 4;

/// Preview background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Solid(Rgb),
    /// Pixel samples from imagery. Empty while the image is still loading.
    Sampled(Vec<Rgb>),
    Video,
}

impl Default for Background {
    fn default() -> Self {
        Self::Solid(DEFAULT_PREVIEW_FILL)
    }
}

impl Background {
    /// Sample the center of a decoded RGBA image.
    #[must_use]
    pub fn from_image(width: usize, height: usize, rgba: &[u8]) -> Self {
        Self::Sampled(sample_center_region(width, height, rgba))
    }

    #[must_use]
    pub const fn is_video(&self) -> bool {
        matches!(self, Self::Video)
    }

    /// Colors the button is evaluated against. Video yields none.
    #[must_use]
    pub fn samples(&self) -> Cow<'_, [Rgb]> {
        match self {
            Self::Solid(color) => Cow::Owned(vec![*color; SAMPLE_COUNT]),
            Self::Sampled(samples) => Cow::Borrowed(samples),
            Self::Video => Cow::Borrowed(&[]),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Solid(_) => "color",
            Self::Sampled(_) => "image",
            Self::Video => "video",
        }
    }
}

/// The 3x3 pixel neighborhood around `(width / 2, height / 2)`.
///
/// Samples are ordered column by column (x offset outer, y offset inner).
/// Coordinates past an edge are clamped onto it, so a 1x1 image yields nine
/// copies of its only pixel. A zero-sized image or a buffer shorter than
/// `width * height * 4` bytes yields no samples. Alpha is ignored.
#[must_use]
pub fn sample_center_region(width: usize, height: usize, rgba: &[u8]) -> Vec<Rgb> {
    let Some(needed) = width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
    else {
        return Vec::new();
    };
    if needed == 0 || rgba.len() < needed {
        return Vec::new();
    }

    let cx = width / 2;
    let cy = height / 2;
    let mut region = Vec::with_capacity(SAMPLE_COUNT);
    for dx in [-1isize, 0, 1] {
        for dy in [-1isize, 0, 1] {
            let x = cx.saturating_add_signed(dx).min(width - 1);
            let y = cy.saturating_add_signed(dy).min(height - 1);
            let offset = (y * width + x) * BYTES_PER_PIXEL;
            region.push(Rgb::new(rgba[offset], rgba[offset + 1], rgba[offset + 2]));
        }
    }
    region
}
