use std::fmt;

use crate::color::Rgb;

/// Ratios strictly above this pass AA.
pub const AA_THRESHOLD: f64 = 4.5;
/// Ratios strictly above this pass AAA.
pub const AAA_THRESHOLD: f64 = 7.0;

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG 2.x relative luminance in `[0, 1]`.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio in `[1, 21]`. Order of the arguments does not matter.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Conformance level for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContrastLevel {
    Fail,
    AA,
    AAA,
}

impl ContrastLevel {
    /// `> 7.0` is AAA, `> 4.5` is AA, anything else fails. Boundaries fail
    /// downward: exactly 4.5 is `Fail`, exactly 7.0 is `AA`.
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio > AAA_THRESHOLD {
            Self::AAA
        } else if ratio > AA_THRESHOLD {
            Self::AA
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn passes(self) -> bool {
        !matches!(self, Self::Fail)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }

    /// Badge text as shown next to the preview.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::AA => "Pass AA",
            Self::AAA => "Pass AAA",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contrast ratio together with its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastVerdict {
    pub ratio: f64,
    pub level: ContrastLevel,
}

impl ContrastVerdict {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            level: ContrastLevel::classify(ratio),
        }
    }

    #[must_use]
    pub fn between(foreground: Rgb, background: Rgb) -> Self {
        Self::from_ratio(contrast_ratio(foreground, background))
    }

    /// The worst verdict of a set of ratios, or `None` when there are none.
    #[must_use]
    pub fn worst_of(ratios: impl IntoIterator<Item = f64>) -> Option<Self> {
        ratios
            .into_iter()
            .min_by(f64::total_cmp)
            .map(Self::from_ratio)
    }

    #[must_use]
    pub const fn passes(&self) -> bool {
        self.level.passes()
    }
}

/// `Contrast: 5.43 Pass AA`
impl fmt::Display for ContrastVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contrast: {:.2} {}", self.ratio, self.level.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const US_BLACK: Rgb = Rgb::new(7, 6, 0);
    const US_WHITE: Rgb = Rgb::new(255, 255, 251);

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert!(approx(relative_luminance(Rgb::WHITE), 1.0, 1e-12));
    }

    #[test]
    fn black_on_white_is_21() {
        assert!(approx(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0, 1e-9));
    }

    #[test]
    fn same_color_is_1() {
        assert_eq!(contrast_ratio(US_BLACK, US_BLACK), 1.0);
    }

    #[test]
    fn order_independent() {
        let a = Rgb::new(0xfc, 0xe1, 0x14);
        let b = Rgb::new(0x6f, 0x00, 0xff);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn brand_black_on_brand_white_passes_aaa() {
        let ratio = contrast_ratio(US_WHITE, US_BLACK);
        assert!(approx(ratio, 20.24, 0.01), "{ratio}");
        assert_eq!(ContrastLevel::classify(ratio), ContrastLevel::AAA);
    }

    #[test]
    fn grey_on_white_is_just_above_aa() {
        let ratio = contrast_ratio(Rgb::new(0x76, 0x76, 0x76), Rgb::WHITE);
        assert!(approx(ratio, 4.54, 0.01), "{ratio}");
        assert_eq!(ContrastLevel::classify(ratio), ContrastLevel::AA);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(ContrastLevel::classify(4.5), ContrastLevel::Fail);
        assert_eq!(ContrastLevel::classify(4.500_001), ContrastLevel::AA);
        assert_eq!(ContrastLevel::classify(7.0), ContrastLevel::AA);
        assert_eq!(ContrastLevel::classify(7.000_001), ContrastLevel::AAA);
        assert_eq!(ContrastLevel::classify(1.0), ContrastLevel::Fail);
        assert_eq!(ContrastLevel::classify(21.0), ContrastLevel::AAA);
    }

    #[test]
    fn levels_order_by_strength() {
        assert!(ContrastLevel::Fail < ContrastLevel::AA);
        assert!(ContrastLevel::AA < ContrastLevel::AAA);
        assert!(!ContrastLevel::Fail.passes());
        assert!(ContrastLevel::AA.passes());
    }

    #[test]
    fn worst_of_picks_minimum() {
        let verdict = ContrastVerdict::worst_of([9.0, 3.2, 5.0]).unwrap();
        assert_eq!(verdict.ratio, 3.2);
        assert_eq!(verdict.level, ContrastLevel::Fail);
        assert!(ContrastVerdict::worst_of(std::iter::empty()).is_none());
    }

    #[test]
    fn verdict_display() {
        assert_eq!(
            ContrastVerdict::from_ratio(5.4293).to_string(),
            "Contrast: 5.43 Pass AA"
        );
        assert_eq!(
            ContrastVerdict::from_ratio(2.775).to_string(),
            "Contrast: 2.77 Fail"
        );
        assert_eq!(
            ContrastVerdict::from_ratio(20.2389).to_string(),
            "Contrast: 20.24 Pass AAA"
        );
    }
}
