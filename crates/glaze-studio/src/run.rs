//! Command execution: turn parsed options into studio messages and print
//! the requested report.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use glaze_color::{ColorFormat, ParseColorError, parse_color};
use glaze_style::{
    Background, ContrastOutcome, ContrastVerdict, DEFAULT_GRADIENT_ALPHA, Finish, SurfaceStyle,
};
use tracing::{debug, info, warn};

use crate::app::Studio;
use crate::cli::{BackgroundArg, Command, FinishArg, Opts, StyleArg};
use crate::design::{Design, DesignError};
use crate::msg::Msg;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// `check` found a failing contrast verdict.
    ContrastFailed,
}

impl Outcome {
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::ContrastFailed => 2,
        }
    }
}

/// Failures reported by the binary with exit code 1.
#[derive(Debug)]
pub enum RunError {
    Design(DesignError),
    InvalidColor {
        text: String,
        source: ParseColorError,
    },
    #[cfg(feature = "image")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },
    #[cfg(not(feature = "image"))]
    ImageUnsupported(PathBuf),
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Design(err) => write!(f, "{err}"),
            Self::InvalidColor { text, source } => {
                write!(f, "{source}: {text:?} ({})", source.detail())
            }
            #[cfg(feature = "image")]
            Self::Image { path, source } => {
                write!(f, "cannot decode image {}: {source}", path.display())
            }
            #[cfg(not(feature = "image"))]
            Self::ImageUnsupported(path) => write!(
                f,
                "cannot sample {}: built without the `image` feature",
                path.display()
            ),
            Self::Json(err) => write!(f, "JSON output failed: {err}"),
            Self::Io(err) => write!(f, "write failed: {err}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Design(err) => Some(err),
            Self::InvalidColor { source, .. } => Some(source),
            #[cfg(feature = "image")]
            Self::Image { source, .. } => Some(source),
            #[cfg(not(feature = "image"))]
            Self::ImageUnsupported(_) => None,
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<DesignError> for RunError {
    fn from(err: DesignError) -> Self {
        Self::Design(err)
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Run one command, writing its report to `out`.
///
/// # Errors
/// Design, image, and output failures.
pub fn run<W: Write>(opts: &Opts, out: &mut W) -> Result<Outcome, RunError> {
    match &opts.command {
        Command::Convert { text } => convert(text, opts.format, out),
        Command::Contrast {
            foreground,
            background,
        } => {
            let verdict = ContrastVerdict::between(*foreground, *background);
            write_verdict(out, &ContrastOutcome::Verdict(verdict))?;
            Ok(Outcome::Success)
        }
        Command::Check => check(&build_studio(opts)?, out),
        Command::Export => {
            let snippet = build_studio(opts)?.snippet();
            if opts.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&snippet)?)?;
            } else {
                writeln!(out, "{}\n\n{}", snippet.html, snippet.css)?;
            }
            Ok(Outcome::Success)
        }
        Command::Palette => {
            let studio = build_studio(opts)?;
            if opts.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&studio.palette)?)?;
            } else {
                for entry in &studio.palette {
                    let value = entry.value();
                    writeln!(
                        out,
                        "{:<16} {}  {}  {}",
                        entry.name(),
                        value,
                        value.to_css_rgb(),
                        value.to_hsl()
                    )?;
                }
            }
            Ok(Outcome::Success)
        }
    }
}

fn convert<W: Write>(
    text: &str,
    format: Option<ColorFormat>,
    out: &mut W,
) -> Result<Outcome, RunError> {
    let format = format.unwrap_or_else(|| ColorFormat::detect(text));
    let color = parse_color(text, format).map_err(|source| RunError::InvalidColor {
        text: text.to_string(),
        source,
    })?;
    let rgb = color.rgb();
    writeln!(out, "hex  {}", color.to_hex())?;
    writeln!(out, "rgb  {}", rgb.to_css_rgb())?;
    writeln!(out, "hsl  {}", rgb.to_hsl())?;
    if !color.is_opaque() {
        writeln!(out, "alpha {:.2}", f64::from(color.a) / 255.0)?;
    }
    Ok(Outcome::Success)
}

fn check<W: Write>(studio: &Studio, out: &mut W) -> Result<Outcome, RunError> {
    let button = &studio.button;
    writeln!(out, "label      {}", button.label)?;
    writeln!(out, "button     {}", button.background_color())?;
    writeln!(out, "text       {}", button.text_color())?;
    writeln!(out, "surface    {}", button.surface)?;
    match &studio.background {
        Background::Solid(color) => writeln!(out, "background {color}")?,
        other => writeln!(
            out,
            "background {} ({} samples)",
            other.kind(),
            other.samples().len()
        )?,
    }

    let outcome = studio.contrast();
    write_verdict(out, &outcome)?;
    info!(?outcome, "contrast checked");
    match outcome.verdict() {
        Some(verdict) if !verdict.passes() => Ok(Outcome::ContrastFailed),
        _ => Ok(Outcome::Success),
    }
}

fn write_verdict<W: Write>(out: &mut W, outcome: &ContrastOutcome) -> io::Result<()> {
    match outcome.message() {
        Some(message) => writeln!(out, "{message}")?,
        None => writeln!(out, "Contrast: unavailable (no background samples)")?,
    }
    if let Some(advice) = outcome.advice() {
        writeln!(out, "{advice}")?;
    }
    Ok(())
}

/// Start from the design file (or defaults) and apply command-line
/// overrides through the studio's update function.
///
/// # Errors
/// Design loading and image decoding failures.
pub fn build_studio(opts: &Opts) -> Result<Studio, RunError> {
    let mut studio = match &opts.design {
        Some(path) => Studio::from_design(Design::load(path)?),
        None => Studio::new(),
    };
    for msg in override_msgs(opts, studio.button.surface)? {
        debug!(?msg, "applying override");
        studio.update(msg);
    }
    Ok(studio)
}

fn override_msgs(opts: &Opts, current: SurfaceStyle) -> Result<Vec<Msg>, RunError> {
    let mut msgs = Vec::new();

    if let Some(label) = &opts.label {
        msgs.push(Msg::SetLabel(label.clone()));
    }
    if let Some(color) = opts.button {
        msgs.push(Msg::SetButtonColor(Some(color)));
    }
    if let Some(color) = opts.text {
        msgs.push(Msg::SetTextColor(Some(color)));
    }
    if let Some(color) = opts.focus {
        msgs.push(Msg::SetFocusColor(Some(color)));
    }
    if opts.show_focus {
        msgs.push(Msg::SetShowFocus(true));
    }

    let surface = match opts.style {
        Some(StyleArg::Flat) => SurfaceStyle::Flat,
        Some(StyleArg::Glass) if !current.is_glass() => SurfaceStyle::glass(),
        _ => current,
    };
    if surface != current {
        msgs.push(Msg::SetSurface(surface));
    }
    if let Some(alpha) = opts.alpha {
        msgs.push(Msg::SetGlassAlpha(alpha));
    }
    if let Some(blur) = opts.blur {
        msgs.push(Msg::SetBlur(blur));
    }
    let current_gradient = match surface {
        SurfaceStyle::Glass {
            finish: Finish::Glossy { gradient_alpha },
            ..
        } => Some(gradient_alpha),
        _ => None,
    };
    let finish = match (opts.finish, opts.gradient_alpha) {
        (Some(FinishArg::Matte), gradient) => {
            if let Some(gradient_alpha) = gradient {
                warn!(gradient_alpha, "gradient alpha ignored for a matte finish");
            }
            Some(Finish::Matte)
        }
        (Some(FinishArg::Glossy), gradient) => Some(Finish::glossy(
            gradient
                .or(current_gradient)
                .unwrap_or(DEFAULT_GRADIENT_ALPHA),
        )),
        // A highlight opacity alone asks for a glossy finish.
        (None, Some(gradient)) => Some(Finish::glossy(gradient)),
        (None, None) => None,
    };
    let glass_settings = opts.alpha.is_some()
        || opts.blur.is_some()
        || opts.finish.is_some()
        || opts.gradient_alpha.is_some();
    if glass_settings && !surface.is_glass() {
        warn!("glass settings ignored for a flat surface");
    }
    if let Some(finish) = finish {
        msgs.push(Msg::SetFinish(finish));
    }

    match &opts.background {
        None => {}
        Some(BackgroundArg::Color(color)) => msgs.push(Msg::SetPreviewColor(Some(*color))),
        Some(BackgroundArg::Video) => msgs.push(Msg::SetBackground(Background::Video)),
        Some(BackgroundArg::Image(path)) => {
            // Pending until decoded, as in the interactive flow.
            msgs.push(Msg::SetBackground(Background::Sampled(Vec::new())));
            msgs.push(decode_image(path)?);
        }
    }
    Ok(msgs)
}

#[cfg(feature = "image")]
fn decode_image(path: &Path) -> Result<Msg, RunError> {
    let image = image::open(path).map_err(|source| RunError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(path = %path.display(), width, height, "image decoded");
    Ok(Msg::ImageDecoded {
        width: width as usize,
        height: height as usize,
        rgba: rgba.into_raw(),
    })
}

#[cfg(not(feature = "image"))]
fn decode_image(path: &Path) -> Result<Msg, RunError> {
    Err(RunError::ImageUnsupported(path.to_path_buf()))
}
