//! Strict parsing of user-entered color text.
//!
//! The picker lets the user type a color in a declared notation. Input is
//! accepted only when it matches that notation exactly:
//!
//! | Format | Accepted shape | Ranges |
//! |--------|----------------|--------|
//! | `hex`  | `#` + 3, 4, 6 or 8 hex digits | 4/8 digits carry alpha |
//! | `rgb`  | `rgb(r, g, b)` | each 0-255, 1-3 digits |
//! | `hsl`  | `hsl(h, s%, l%)` | h 0-360, s/l 0-100, 1-3 digits |
//!
//! Whitespace is allowed around the whole text, around each value and around
//! the commas and parentheses. Function names match ignoring ASCII case.
//! Values with the right digit count but outside their range (`rgb(300,0,0)`)
//! are rejected. Failures are plain values; the caller shows
//! [`ParseColorError::MESSAGE`] to the user.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::color::{Rgb, Rgba, hex_to_rgba, hsl_to_rgb};

/// Notation of a free-form color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl ColorFormat {
    pub const ALL: [Self; 3] = [Self::Hex, Self::Rgb, Self::Hsl];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }

    /// Input hint shown in an empty text field.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Hex => "#RRGGBB",
            Self::Rgb => "rgb(0,0,0)",
            Self::Hsl => "hsl(0,0%,0%)",
        }
    }

    /// Guess the notation from the leading function name; anything else is hex.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        let text = text.trim_start();
        if starts_with_ignore_case(text, "rgb") {
            Self::Rgb
        } else if starts_with_ignore_case(text, "hsl") {
            Self::Hsl
        } else {
            Self::Hex
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| s.trim().eq_ignore_ascii_case(format.as_str()))
            .ok_or_else(|| ParseColorError::UnknownFormat(s.to_string()))
    }
}

/// Why a color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Nothing but whitespace.
    Empty,
    /// The text does not have the shape of the declared notation.
    Malformed { format: ColorFormat },
    /// A component has valid digits but lies outside its range.
    OutOfRange {
        component: &'static str,
        value: u16,
        max: u16,
    },
    /// The notation name itself is not one of `hex`, `rgb`, `hsl`.
    UnknownFormat(String),
}

impl ParseColorError {
    /// User-facing validation message for every malformed color.
    pub const MESSAGE: &'static str = "Invalid color format";

    /// Longer explanation for logs and CLI diagnostics.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Empty => "no color given".to_string(),
            Self::Malformed { format } => {
                format!("expected {format} notation like {}", format.placeholder())
            }
            Self::OutOfRange {
                component,
                value,
                max,
            } => format!("{component} {value} is out of range 0-{max}"),
            Self::UnknownFormat(name) => {
                format!("unknown color format {name:?} (expected hex, rgb or hsl)")
            }
        }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFormat(name) => write!(f, "unknown color format: {name}"),
            _ => f.write_str(Self::MESSAGE),
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Parse `text` as a color written in `format`.
///
/// # Errors
/// Returns [`ParseColorError`] when the text does not match the notation or a
/// component is out of range.
pub fn parse_color(text: &str, format: ColorFormat) -> Result<Rgba, ParseColorError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseColorError::Empty);
    }

    let parsed = match format {
        ColorFormat::Hex => parse_hex(text),
        ColorFormat::Rgb => parse_rgb(text),
        ColorFormat::Hsl => parse_hsl(text),
    };

    #[cfg(feature = "tracing")]
    match &parsed {
        Ok(color) => trace!(%format, input = text, hex = %color, "parsed color"),
        Err(err) => trace!(%format, input = text, reason = %err.detail(), "rejected color"),
    }

    parsed
}

/// Render `rgb` in the given notation: `#rrggbb`, `rgb(r,g,b)` or `hsl(h,s%,l%)`.
#[must_use]
pub fn format_color(rgb: Rgb, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => rgb.to_hex(),
        ColorFormat::Rgb => rgb.to_css_rgb(),
        ColorFormat::Hsl => rgb.to_hsl().to_string(),
    }
}

fn parse_hex(text: &str) -> Result<Rgba, ParseColorError> {
    let malformed = ParseColorError::Malformed {
        format: ColorFormat::Hex,
    };
    let digits = text.strip_prefix('#').ok_or_else(|| malformed.clone())?;
    if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(malformed);
    }
    hex_to_rgba(digits).ok_or(malformed)
}

fn parse_rgb(text: &str) -> Result<Rgba, ParseColorError> {
    const COMPONENTS: [(&str, u16, bool); 3] =
        [("red", 255, false), ("green", 255, false), ("blue", 255, false)];
    let [r, g, b] = parse_function(text, ColorFormat::Rgb, COMPONENTS)?;
    Ok(Rgba::opaque(Rgb::new(r as u8, g as u8, b as u8)))
}

fn parse_hsl(text: &str) -> Result<Rgba, ParseColorError> {
    const COMPONENTS: [(&str, u16, bool); 3] = [
        ("hue", 360, false),
        ("saturation", 100, true),
        ("lightness", 100, true),
    ];
    let [h, s, l] = parse_function(text, ColorFormat::Hsl, COMPONENTS)?;
    Ok(Rgba::opaque(hsl_to_rgb(
        f64::from(h),
        f64::from(s),
        f64::from(l),
    )))
}

/// Parse `name(a, b, c)` where each component is `(label, max, needs_percent)`.
fn parse_function(
    text: &str,
    format: ColorFormat,
    components: [(&'static str, u16, bool); 3],
) -> Result<[u16; 3], ParseColorError> {
    let malformed = || ParseColorError::Malformed { format };
    let name = format.as_str();

    if !starts_with_ignore_case(text, name) {
        return Err(malformed());
    }
    let args = text[name.len()..]
        .trim_start()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let mut parts = args.split(',');
    let mut values = [0u16; 3];
    for (slot, (label, max, needs_percent)) in values.iter_mut().zip(components) {
        let part = parts.next().ok_or_else(malformed)?.trim();
        let digits = if needs_percent {
            part.strip_suffix('%').ok_or_else(malformed)?
        } else {
            part
        };
        let value = parse_small_int(digits).ok_or_else(malformed)?;
        if value > max {
            return Err(ParseColorError::OutOfRange {
                component: label,
                value,
                max,
            });
        }
        *slot = value;
    }
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok(values)
}

/// One to three ASCII digits.
fn parse_small_int(digits: &str) -> Option<u16> {
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_of(text: &str, format: ColorFormat) -> Result<String, ParseColorError> {
        parse_color(text, format).map(|c| c.to_hex())
    }

    // --- hex ---

    #[test]
    fn hex_accepts_short_and_long_forms() {
        assert_eq!(hex_of("#FFFFFB", ColorFormat::Hex), Ok("#fffffb".into()));
        assert_eq!(hex_of("#abc", ColorFormat::Hex), Ok("#aabbcc".into()));
        assert_eq!(hex_of("  #070600 ", ColorFormat::Hex), Ok("#070600".into()));
    }

    #[test]
    fn hex_alpha_forms_keep_alpha() {
        assert_eq!(hex_of("#11223380", ColorFormat::Hex), Ok("#11223380".into()));
        assert_eq!(hex_of("#1238", ColorFormat::Hex), Ok("#11223388".into()));
        assert_eq!(hex_of("#112233ff", ColorFormat::Hex), Ok("#112233".into()));
    }

    #[test]
    fn hex_rejects_odd_lengths_and_missing_hash() {
        for bad in ["#12345", "#1234567", "#12", "#123456789", "123456", "#12345g"] {
            assert_eq!(
                parse_color(bad, ColorFormat::Hex),
                Err(ParseColorError::Malformed {
                    format: ColorFormat::Hex
                }),
                "{bad}"
            );
        }
    }

    // --- rgb ---

    #[test]
    fn rgb_accepts_whitespace_variants() {
        assert_eq!(hex_of("rgb(7,6,0)", ColorFormat::Rgb), Ok("#070600".into()));
        assert_eq!(
            hex_of("rgb ( 255 , 255 , 251 )", ColorFormat::Rgb),
            Ok("#fffffb".into())
        );
        assert_eq!(hex_of("RGB(0,0,0)", ColorFormat::Rgb), Ok("#000000".into()));
    }

    #[test]
    fn rgb_rejects_out_of_range_value() {
        assert_eq!(
            parse_color("rgb(300,0,0)", ColorFormat::Rgb),
            Err(ParseColorError::OutOfRange {
                component: "red",
                value: 300,
                max: 255
            })
        );
    }

    #[test]
    fn rgb_rejects_malformed_shapes() {
        for bad in [
            "rgb(1,2)",
            "rgb(1,2,3,4)",
            "rgb(1,2,3",
            "rgb(1000,0,0)",
            "rgb(-1,0,0)",
            "rgb(1.5,0,0)",
            "rgb(,0,0)",
            "rgba(1,2,3)",
            "x rgb(1,2,3)",
            "rgb(1,2,3) x",
            "rgb(1%,2,3)",
        ] {
            assert!(
                matches!(
                    parse_color(bad, ColorFormat::Rgb),
                    Err(ParseColorError::Malformed { .. })
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn declared_format_is_binding() {
        assert!(parse_color("#ffffff", ColorFormat::Rgb).is_err());
        assert!(parse_color("rgb(1,2,3)", ColorFormat::Hex).is_err());
        assert!(parse_color("rgb(1,2,3)", ColorFormat::Hsl).is_err());
    }

    // --- hsl ---

    #[test]
    fn hsl_accepts_percentages() {
        assert_eq!(hex_of("hsl(0,100%,50%)", ColorFormat::Hsl), Ok("#ff0000".into()));
        assert_eq!(
            hex_of("hsl( 240 , 100% , 50% )", ColorFormat::Hsl),
            Ok("#0000ff".into())
        );
        assert_eq!(hex_of("hsl(360,100%,50%)", ColorFormat::Hsl), Ok("#ff0000".into()));
    }

    #[test]
    fn hsl_rejects_out_of_range_and_missing_percent() {
        assert_eq!(
            parse_color("hsl(361,50%,50%)", ColorFormat::Hsl),
            Err(ParseColorError::OutOfRange {
                component: "hue",
                value: 361,
                max: 360
            })
        );
        assert_eq!(
            parse_color("hsl(10,101%,50%)", ColorFormat::Hsl),
            Err(ParseColorError::OutOfRange {
                component: "saturation",
                value: 101,
                max: 100
            })
        );
        assert!(matches!(
            parse_color("hsl(10,50,50)", ColorFormat::Hsl),
            Err(ParseColorError::Malformed { .. })
        ));
        assert!(matches!(
            parse_color("hsl(10%,50%,50%)", ColorFormat::Hsl),
            Err(ParseColorError::Malformed { .. })
        ));
    }

    // --- errors and helpers ---

    #[test]
    fn empty_input_is_its_own_error() {
        assert_eq!(parse_color("   ", ColorFormat::Hex), Err(ParseColorError::Empty));
    }

    #[test]
    fn every_rejection_shows_the_same_message() {
        let errors = [
            ParseColorError::Empty,
            ParseColorError::Malformed {
                format: ColorFormat::Rgb,
            },
            ParseColorError::OutOfRange {
                component: "red",
                value: 300,
                max: 255,
            },
        ];
        for err in errors {
            assert_eq!(err.to_string(), "Invalid color format");
        }
    }

    #[test]
    fn detail_names_the_component() {
        let err = parse_color("rgb(0,0,256)", ColorFormat::Rgb).unwrap_err();
        assert_eq!(err.detail(), "blue 256 is out of range 0-255");
    }

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!("HEX".parse::<ColorFormat>(), Ok(ColorFormat::Hex));
        assert_eq!(" rgb ".parse::<ColorFormat>(), Ok(ColorFormat::Rgb));
        assert_eq!("hsl".parse::<ColorFormat>(), Ok(ColorFormat::Hsl));
        assert!(matches!(
            "cmyk".parse::<ColorFormat>(),
            Err(ParseColorError::UnknownFormat(_))
        ));
    }

    #[test]
    fn detect_by_prefix() {
        assert_eq!(ColorFormat::detect("rgb(1,2,3)"), ColorFormat::Rgb);
        assert_eq!(ColorFormat::detect("  HSL(1,2%,3%)"), ColorFormat::Hsl);
        assert_eq!(ColorFormat::detect("#fff"), ColorFormat::Hex);
        assert_eq!(ColorFormat::detect("fff"), ColorFormat::Hex);
    }

    #[test]
    fn format_color_renders_each_notation() {
        let c = Rgb::new(255, 255, 251);
        assert_eq!(format_color(c, ColorFormat::Hex), "#fffffb");
        assert_eq!(format_color(c, ColorFormat::Rgb), "rgb(255,255,251)");
        assert_eq!(format_color(c, ColorFormat::Hsl), "hsl(60,100%,99%)");
    }

    #[test]
    fn formatted_text_parses_back() {
        let c = Rgb::new(0xfc, 0xe1, 0x14);
        for format in [ColorFormat::Hex, ColorFormat::Rgb] {
            let text = format_color(c, format);
            assert_eq!(parse_color(&text, format).map(Rgba::rgb), Ok(c));
        }
    }
}
