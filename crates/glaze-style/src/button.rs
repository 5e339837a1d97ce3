//! Configuration of the single button component.

use glaze_color::Rgb;

use crate::surface::SurfaceStyle;

/// Used when no button color is set.
pub const FALLBACK_BUTTON_COLOR: Rgb = Rgb::new(0x34, 0x98, 0xdb);
/// Used when no text color is set.
pub const FALLBACK_TEXT_COLOR: Rgb = Rgb::WHITE;
/// Focus outline when the ring is forced on without a color.
pub const DEFAULT_FOCUS_RING: Rgb = Rgb::new(0x22, 0x22, 0x22);

const DEFAULT_LABEL: &str = "Button";

/// A button being designed.
///
/// Colors are optional so an unset value can fall back the same way the
/// preview and the exported CSS do.
///
/// # Example
/// ```
/// use glaze_style::{ButtonConfig, Rgb, SurfaceStyle};
///
/// let button = ButtonConfig::default()
///     .label("Sign up")
///     .background(Rgb::new(0x6f, 0x00, 0xff))
///     .surface(SurfaceStyle::glass());
/// assert_eq!(button.text_color(), Rgb::new(255, 255, 251));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonConfig {
    pub label: String,
    pub background: Option<Rgb>,
    pub text: Option<Rgb>,
    pub focus: Option<Rgb>,
    /// Force the focus ring in the exported CSS even without a focus color.
    pub show_focus: bool,
    pub surface: SurfaceStyle,
}

impl Default for ButtonConfig {
    /// Brand black button with brand white text, flat.
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            background: Some(Rgb::new(0x07, 0x06, 0x00)),
            text: Some(Rgb::new(0xff, 0xff, 0xfb)),
            focus: None,
            show_focus: false,
            surface: SurfaceStyle::Flat,
        }
    }
}

impl ButtonConfig {
    /// Button with every color unset.
    #[must_use]
    pub fn unstyled() -> Self {
        Self {
            background: None,
            text: None,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn text(mut self, color: Rgb) -> Self {
        self.text = Some(color);
        self
    }

    #[must_use]
    pub fn focus(mut self, color: Rgb) -> Self {
        self.focus = Some(color);
        self
    }

    #[must_use]
    pub fn show_focus(mut self, show: bool) -> Self {
        self.show_focus = show;
        self
    }

    #[must_use]
    pub fn surface(mut self, surface: SurfaceStyle) -> Self {
        self.surface = surface;
        self
    }

    #[must_use]
    pub fn background_color(&self) -> Rgb {
        self.background.unwrap_or(FALLBACK_BUTTON_COLOR)
    }

    #[must_use]
    pub fn text_color(&self) -> Rgb {
        self.text.unwrap_or(FALLBACK_TEXT_COLOR)
    }

    /// Outline color for `:focus`, if any.
    #[must_use]
    pub fn focus_ring(&self) -> Option<Rgb> {
        self.focus
            .or_else(|| self.show_focus.then_some(DEFAULT_FOCUS_RING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_brand_colors() {
        let button = ButtonConfig::default();
        assert_eq!(button.label, "Button");
        assert_eq!(button.background_color(), Rgb::new(7, 6, 0));
        assert_eq!(button.text_color(), Rgb::new(255, 255, 251));
        assert_eq!(button.surface, SurfaceStyle::Flat);
        assert_eq!(button.focus_ring(), None);
    }

    #[test]
    fn unset_colors_fall_back() {
        let button = ButtonConfig::unstyled();
        assert_eq!(button.background_color(), Rgb::new(0x34, 0x98, 0xdb));
        assert_eq!(button.text_color(), Rgb::WHITE);
    }

    #[test]
    fn focus_ring_prefers_explicit_color() {
        let forced = ButtonConfig::default().show_focus(true);
        assert_eq!(forced.focus_ring(), Some(DEFAULT_FOCUS_RING));
        let explicit = forced.focus(Rgb::new(0xfc, 0xe1, 0x14));
        assert_eq!(explicit.focus_ring(), Some(Rgb::new(0xfc, 0xe1, 0x14)));
    }
}
