//! Design files: a JSON description of the palette, the button, and the
//! preview background.
//!
//! ```json
//! {
//!   "palette": [{ "name": "US-Black", "value": "#070600" }],
//!   "button": {
//!     "label": "Sign up",
//!     "background": "#6f00ff",
//!     "text": "rgb(255,255,251)",
//!     "style": "glass",
//!     "alpha": 60,
//!     "finish": "glossy",
//!     "gradient_alpha": 20
//!   },
//!   "background": "#f0f0f0"
//! }
//! ```
//!
//! Every key is optional. Colors accept any notation the color parser
//! understands. `background` may also be `"video"`.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glaze_color::{ParseColorError, Rgb};
use glaze_style::{
    Background, ButtonConfig, DEFAULT_BLUR_PX, DEFAULT_GLASS_ALPHA, DEFAULT_GRADIENT_ALPHA,
    Finish, NamedColor, Palette, PaletteError, SurfaceStyle,
};
use serde::Deserialize;
use tracing::{debug, warn};

/// Why a design could not be loaded.
#[derive(Debug)]
pub enum DesignError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    InvalidColor {
        field: String,
        value: String,
        source: ParseColorError,
    },
    InvalidValue { field: &'static str, value: String },
    Palette { index: usize, source: PaletteError },
}

impl fmt::Display for DesignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json { path, source } => write!(f, "invalid design {}: {source}", path.display()),
            Self::InvalidColor {
                field,
                value,
                source,
            } => write!(f, "{field}: {source}: {value:?} ({})", source.detail()),
            Self::InvalidValue { field, value } => write!(f, "{field}: unsupported value {value:?}"),
            Self::Palette { index, source } => write!(f, "palette[{index}]: {source}"),
        }
    }
}

impl std::error::Error for DesignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidColor { source, .. } => Some(source),
            Self::Palette { source, .. } => Some(source),
            Self::InvalidValue { .. } => None,
        }
    }
}

/// Resolved design, ready to seed a [`crate::app::Studio`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Design {
    pub palette: Palette,
    pub button: ButtonConfig,
    pub background: Background,
}

impl Design {
    /// Read and resolve a design file.
    ///
    /// # Errors
    /// I/O, JSON and validation failures, each naming the offending file or
    /// field.
    pub fn load(path: &Path) -> Result<Self, DesignError> {
        let text = fs::read_to_string(path).map_err(|source| DesignError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: DesignFile = serde_json::from_str(&text).map_err(|source| DesignError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "design file loaded");
        file.resolve()
    }

    /// Resolve a design from JSON text.
    ///
    /// # Errors
    /// JSON and validation failures.
    pub fn from_json(text: &str) -> Result<Self, DesignError> {
        let file: DesignFile = serde_json::from_str(text).map_err(|source| DesignError::Json {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        file.resolve()
    }
}

/// On-disk shape of a design file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignFile {
    pub palette: Option<Vec<PaletteEntry>>,
    pub button: ButtonSection,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteEntry {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonSection {
    pub label: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
    pub focus: Option<String>,
    pub show_focus: bool,
    /// `flat` or `glass`.
    pub style: Option<String>,
    pub alpha: Option<u8>,
    pub blur: Option<u16>,
    /// `matte` or `glossy`.
    pub finish: Option<String>,
    pub gradient_alpha: Option<u8>,
}

fn color_field(field: impl Into<String>, value: &str) -> Result<Rgb, DesignError> {
    value.parse().map_err(|source| DesignError::InvalidColor {
        field: field.into(),
        value: value.to_string(),
        source,
    })
}

fn optional_color(field: &str, value: Option<&String>) -> Result<Option<Rgb>, DesignError> {
    value.map(|v| color_field(field, v)).transpose()
}

/// Parse a background description: a color or `video`.
///
/// # Errors
/// [`DesignError::InvalidColor`] when it is neither.
pub fn parse_background(field: &str, value: &str) -> Result<Background, DesignError> {
    if value.trim().eq_ignore_ascii_case("video") {
        Ok(Background::Video)
    } else {
        color_field(field, value).map(Background::Solid)
    }
}

/// Build a surface from loose settings, filling gaps with defaults.
///
/// # Errors
/// [`DesignError::InvalidValue`] for unknown style or finish names.
pub fn surface_from_parts(
    style: Option<&str>,
    alpha: Option<u8>,
    blur: Option<u16>,
    finish: Option<&str>,
    gradient_alpha: Option<u8>,
) -> Result<SurfaceStyle, DesignError> {
    let style = style.map(str::trim).unwrap_or("flat");
    if style.eq_ignore_ascii_case("flat") {
        if alpha.is_some() || blur.is_some() || finish.is_some() || gradient_alpha.is_some() {
            warn!("glass settings ignored for a flat button");
        }
        return Ok(SurfaceStyle::Flat);
    }
    if !style.eq_ignore_ascii_case("glass") {
        return Err(DesignError::InvalidValue {
            field: "button.style",
            value: style.to_string(),
        });
    }

    let finish = match finish.map(str::trim) {
        None => gradient_alpha.map_or(Finish::Matte, Finish::glossy),
        Some(name) if name.eq_ignore_ascii_case("matte") => {
            if let Some(gradient_alpha) = gradient_alpha {
                warn!(gradient_alpha, "button.gradient_alpha ignored for a matte finish");
            }
            Finish::Matte
        }
        Some(name) if name.eq_ignore_ascii_case("glossy") => {
            Finish::glossy(gradient_alpha.unwrap_or(DEFAULT_GRADIENT_ALPHA))
        }
        Some(other) => {
            return Err(DesignError::InvalidValue {
                field: "button.finish",
                value: other.to_string(),
            });
        }
    };
    Ok(SurfaceStyle::glass()
        .with_alpha(alpha.unwrap_or(DEFAULT_GLASS_ALPHA))
        .with_blur(blur.unwrap_or(DEFAULT_BLUR_PX))
        .with_finish(finish))
}

impl DesignFile {
    /// Validate every field and build the design.
    ///
    /// # Errors
    /// The first invalid color, name, or setting.
    pub fn resolve(self) -> Result<Design, DesignError> {
        let palette = match self.palette {
            None => Palette::brand(),
            Some(entries) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let value = color_field(format!("palette[{index}].value"), &entry.value)?;
                    NamedColor::new(entry.name.clone(), value)
                        .map_err(|source| DesignError::Palette { index, source })
                })
                .collect::<Result<Palette, _>>()?,
        };

        let section = self.button;
        let mut button = ButtonConfig::default();
        if let Some(label) = section.label {
            button.label = label;
        }
        if let Some(color) = optional_color("button.background", section.background.as_ref())? {
            button.background = Some(color);
        }
        if let Some(color) = optional_color("button.text", section.text.as_ref())? {
            button.text = Some(color);
        }
        button.focus = optional_color("button.focus", section.focus.as_ref())?;
        button.show_focus = section.show_focus;
        button.surface = surface_from_parts(
            section.style.as_deref(),
            section.alpha,
            section.blur,
            section.finish.as_deref(),
            section.gradient_alpha,
        )?;

        let background = match self.background {
            Some(value) => parse_background("background", &value)?,
            None => Background::default(),
        };

        Ok(Design {
            palette,
            button,
            background,
        })
    }
}
