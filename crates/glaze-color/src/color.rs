use std::fmt;
use std::str::FromStr;

use crate::parse::{ColorFormat, ParseColorError, parse_color};

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 3- or 6-digit hex string, with or without a leading `#`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex_to_rgb(hex)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// CSS functional notation without spaces, e.g. `rgb(7,6,0)`.
    #[must_use]
    pub fn to_css_rgb(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// CSS `rgba()` with the alpha given as a percentage (`60` -> `0.6`).
    #[must_use]
    pub fn to_css_rgba(self, alpha_pct: u8) -> String {
        let alpha = f64::from(alpha_pct.min(100)) / 100.0;
        format!("rgba({},{},{},{alpha})", self.r, self.g, self.b)
    }

    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgba> for Rgb {
    fn from(color: Rgba) -> Self {
        color.rgb()
    }
}

/// Parses any supported notation; the format is detected from the prefix and
/// a bare hex string may omit the `#`.
impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Rgba>().map(Rgba::rgb)
    }
}

/// RGB color with an 8-bit alpha channel, produced by 4- and 8-digit hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn opaque(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, u8::MAX)
    }

    #[must_use]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            self.rgb().to_hex()
        } else {
            format!("{}{:02x}", self.rgb(), self.a)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::opaque(rgb)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseColorError::Empty);
        }
        let format = ColorFormat::detect(trimmed);
        if format == ColorFormat::Hex && !trimmed.starts_with('#') {
            parse_color(&format!("#{trimmed}"), format)
        } else {
            parse_color(trimmed, format)
        }
    }
}

/// HSL color. Hue in degrees, saturation and lightness in percent.
///
/// Components keep full precision; [`Hsl::rounded`] and `Display` round to
/// whole degrees/percent the way the picker shows them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    /// Nearest whole `(hue, saturation, lightness)`; a hue of 360 wraps to 0.
    #[must_use]
    pub fn rounded(self) -> (u16, u8, u8) {
        let h = (self.h.round().clamp(0.0, 360.0) as u16) % 360;
        let s = self.s.round().clamp(0.0, 100.0) as u8;
        let l = self.l.round().clamp(0.0, 100.0) as u8;
        (h, s, l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, s, l) = self.rounded();
        write!(f, "hsl({h},{s}%,{l}%)")
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

#[inline]
fn nibble(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|d| d as u8)
}

/// Decode 3-, 4-, 6- or 8-digit hex (leading `#` optional).
///
/// Short forms duplicate each digit (`abc` -> `aabbcc`). Forms without an
/// alpha digit pair come back fully opaque.
#[must_use]
pub fn hex_to_rgba(hex: &str) -> Option<Rgba> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    let mut channels = [u8::MAX; 4];
    match digits.len() {
        3 | 4 => {
            for (slot, &digit) in channels.iter_mut().zip(digits) {
                *slot = nibble(digit)? * 17;
            }
        }
        6 | 8 => {
            for (slot, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
                *slot = (nibble(pair[0])? << 4) | nibble(pair[1])?;
            }
        }
        _ => return None,
    }
    let [r, g, b, a] = channels;
    Some(Rgba::new(r, g, b, a))
}

/// Decode 3- or 6-digit hex (leading `#` optional). Any other length is `None`.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    match digits.len() {
        3 | 6 => hex_to_rgba(digits).map(Rgba::rgb),
        _ => None,
    }
}

#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(sector * 60.0, s * 100.0, l * 100.0)
}

#[inline]
fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert hue (degrees, `[0, 360]`), saturation and lightness (percent) to RGB.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let s = s / 100.0;
    let l = l / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(
        unit_to_channel(r + m),
        unit_to_channel(g + m),
        unit_to_channel(b + m),
    )
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse()
            .map_err(|err: ParseColorError| serde::de::Error::custom(format!("{err}: {text:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- hex decoding ---

    #[test]
    fn hex_six_digits() {
        assert_eq!(hex_to_rgb("#FFFFFB"), Some(Rgb::new(255, 255, 251)));
        assert_eq!(hex_to_rgb("070600"), Some(Rgb::new(7, 6, 0)));
    }

    #[test]
    fn hex_three_digits_duplicates_each_digit() {
        assert_eq!(hex_to_rgb("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(hex_to_rgb("fff"), Some(Rgb::WHITE));
    }

    #[test]
    fn hex_other_lengths_rejected() {
        for bad in ["", "#", "#ab", "#abcd", "#abcde", "#abcdef0", "#abcdef00"] {
            assert_eq!(hex_to_rgb(bad), None, "{bad}");
        }
    }

    #[test]
    fn hex_non_digits_rejected() {
        assert_eq!(hex_to_rgb("#gggggg"), None);
        assert_eq!(hex_to_rgb("+fffff"), None);
        assert_eq!(hex_to_rgb("#ééé"), None);
    }

    #[test]
    fn hex_with_alpha() {
        assert_eq!(hex_to_rgba("#11223344"), Some(Rgba::new(0x11, 0x22, 0x33, 0x44)));
        assert_eq!(hex_to_rgba("#1234"), Some(Rgba::new(0x11, 0x22, 0x33, 0x44)));
        assert_eq!(hex_to_rgba("#123"), Some(Rgba::new(0x11, 0x22, 0x33, 0xff)));
        assert_eq!(hex_to_rgba("#12345"), None);
    }

    #[test]
    fn rgb_to_hex_is_lowercase_and_padded() {
        assert_eq!(rgb_to_hex(7, 6, 0), "#070600");
        assert_eq!(rgb_to_hex(255, 255, 251), "#fffffb");
        assert_eq!(Rgb::new(0x6f, 0, 0xff).to_string(), "#6f00ff");
    }

    #[test]
    fn rgba_hex_drops_opaque_alpha() {
        assert_eq!(Rgba::new(1, 2, 3, 255).to_hex(), "#010203");
        assert_eq!(Rgba::new(1, 2, 3, 128).to_hex(), "#01020380");
    }

    // --- HSL ---

    #[test]
    fn hsl_of_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0).to_string(), "hsl(0,100%,50%)");
        assert_eq!(rgb_to_hsl(0, 255, 0).to_string(), "hsl(120,100%,50%)");
        assert_eq!(rgb_to_hsl(0, 0, 255).to_string(), "hsl(240,100%,50%)");
    }

    #[test]
    fn hsl_of_achromatic_has_zero_saturation() {
        assert_eq!(rgb_to_hsl(0, 0, 0).to_string(), "hsl(0,0%,0%)");
        assert_eq!(rgb_to_hsl(255, 255, 255).to_string(), "hsl(0,0%,100%)");
        assert_eq!(rgb_to_hsl(118, 118, 118).to_string(), "hsl(0,0%,46%)");
    }

    #[test]
    fn hsl_red_sector_wraps_when_blue_exceeds_green() {
        // Magenta-ish red: max is red, g < b.
        let hsl = rgb_to_hsl(255, 0, 128);
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "{hsl:?}");
    }

    #[test]
    fn hsl_hue_rounding_to_360_wraps_to_zero() {
        let hsl = Hsl::new(359.8, 50.0, 50.0);
        assert_eq!(hsl.rounded(), (0, 50, 50));
    }

    #[test]
    fn hsl_to_rgb_sectors() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0), Rgb::new(255, 255, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(180.0, 100.0, 50.0), Rgb::new(0, 255, 255));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(300.0, 100.0, 50.0), Rgb::new(255, 0, 255));
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hsl_to_rgb_extremes() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Rgb::BLACK);
        assert_eq!(hsl_to_rgb(200.0, 100.0, 100.0), Rgb::WHITE);
        assert_eq!(hsl_to_rgb(200.0, 0.0, 50.0), Rgb::new(128, 128, 128));
    }

    #[test]
    fn brand_purple_round_trips_through_hsl() {
        let purple = Rgb::new(0x6f, 0x00, 0xff);
        assert_eq!(purple.to_hsl().to_rgb(), purple);
    }

    // --- FromStr ---

    #[test]
    fn from_str_detects_notation() {
        assert_eq!("#fce114".parse::<Rgb>(), Ok(Rgb::new(0xfc, 0xe1, 0x14)));
        assert_eq!("fce114".parse::<Rgb>(), Ok(Rgb::new(0xfc, 0xe1, 0x14)));
        assert_eq!("rgb(1, 2, 3)".parse::<Rgb>(), Ok(Rgb::new(1, 2, 3)));
        assert_eq!("hsl(0,100%,50%)".parse::<Rgb>(), Ok(Rgb::new(255, 0, 0)));
        assert!("nope".parse::<Rgb>().is_err());
    }

    #[test]
    fn from_str_blank_is_empty() {
        assert_eq!("".parse::<Rgba>(), Err(ParseColorError::Empty));
        assert_eq!(" \t ".parse::<Rgba>(), Err(ParseColorError::Empty));
        assert_eq!("  ".parse::<Rgb>(), Err(ParseColorError::Empty));
    }

    #[test]
    fn css_rgba_formats_alpha_fraction() {
        let c = Rgb::new(7, 6, 0);
        assert_eq!(c.to_css_rgba(60), "rgba(7,6,0,0.6)");
        assert_eq!(c.to_css_rgba(100), "rgba(7,6,0,1)");
        assert_eq!(c.to_css_rgba(5), "rgba(7,6,0,0.05)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Rgb::new(7, 6, 0)).unwrap();
        assert_eq!(json, "\"#070600\"");
        let back: Rgb = serde_json::from_str("\"rgb(7,6,0)\"").unwrap();
        assert_eq!(back, Rgb::new(7, 6, 0));
        assert!(serde_json::from_str::<Rgb>("\"#12\"").is_err());
    }
}
