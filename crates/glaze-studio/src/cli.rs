#![forbid(unsafe_code)]

//! Command-line argument parsing for `glaze`.
//!
//! Parses args manually to keep the binary lean. Environment variables with
//! the `GLAZE_` prefix override defaults; explicit flags override both.

use std::env;
use std::path::PathBuf;
use std::process;

use glaze_color::{ColorFormat, Rgb};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
Glaze - brand colors, glass buttons, and WCAG contrast

USAGE:
    glaze <COMMAND> [OPTIONS]

COMMANDS:
    convert <TEXT>       Show a color as hex, rgb and hsl
    contrast <FG> <BG>   Contrast ratio and WCAG level of two colors
    check                Evaluate the configured button against its background
                         (exit code 2 when it fails)
    export               Print the button HTML/CSS snippet
    palette              List the palette

OPTIONS:
    --design=PATH          Load palette, button and background from a JSON file
    --style=STYLE          Surface style: 'flat' or 'glass'
    --alpha=N              Glass opacity in percent, 1-100 (default: 60)
    --blur=N               Glass blur radius in px (default: 4)
    --finish=FINISH        Glass finish: 'matte' or 'glossy'
    --gradient-alpha=N     Glossy highlight opacity in percent (default: 20);
                           implies --finish=glossy unless a finish is given
    --button=COLOR         Button color
    --text=COLOR           Text color
    --focus=COLOR          Focus ring color
    --label=TEXT           Button label
    --show-focus           Emit a focus ring even without a focus color
    --background=BG        Preview background: a color, 'video', or 'image:PATH'
    --format=FORMAT        Input notation for convert: 'hex', 'rgb' or 'hsl'
    --json                 JSON output for export and palette
    --help, -h             Show this help message
    --version, -V          Show version

COLORS:
    #rgb  #rrggbb  #rrggbbaa  rgb(r,g,b)  hsl(h,s%,l%)

ENVIRONMENT VARIABLES:
    GLAZE_DESIGN           Override --design
    GLAZE_STYLE            Override --style
    GLAZE_ALPHA            Override --alpha
    GLAZE_FINISH           Override --finish
    GLAZE_GRADIENT_ALPHA   Override --gradient-alpha
    GLAZE_BACKGROUND       Override --background
    GLAZE_FORMAT           Override --format
    GLAZE_LOG              Log filter directives (default: warn)
    GLAZE_LOG_FORMAT       'json' for structured logs on stderr";

/// What to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Convert { text: String },
    Contrast { foreground: Rgb, background: Rgb },
    Check,
    Export,
    Palette,
}

/// Surface style requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    Flat,
    Glass,
}

/// Glass finish requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishArg {
    Matte,
    Glossy,
}

/// Preview background requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundArg {
    Color(Rgb),
    Video,
    Image(PathBuf),
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub command: Command,
    /// Design file to start from.
    pub design: Option<PathBuf>,
    pub style: Option<StyleArg>,
    pub alpha: Option<u8>,
    pub blur: Option<u16>,
    pub finish: Option<FinishArg>,
    pub gradient_alpha: Option<u8>,
    pub button: Option<Rgb>,
    pub text: Option<Rgb>,
    pub focus: Option<Rgb>,
    pub label: Option<String>,
    pub show_focus: bool,
    pub background: Option<BackgroundArg>,
    /// Declared notation for `convert`; detected from the text when unset.
    pub format: Option<ColorFormat>,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
    MissingArgument(&'static str),
}

impl Opts {
    fn new(command: Command) -> Self {
        Self {
            command,
            design: None,
            style: None,
            alpha: None,
            blur: None,
            finish: None,
            gradient_alpha: None,
            button: None,
            text: None,
            focus: None,
            label: None,
            show_focus: false,
            background: None,
            format: None,
            json: false,
        }
    }

    /// Parse command-line arguments and environment variables, exiting on
    /// `--help`, `--version` and usage errors.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("glaze {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(1);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
            Err(ParseError::MissingArgument(what)) => {
                eprintln!("Missing {what}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    pub fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::new(Command::Check);

        // Environment first; malformed values are ignored.
        if let Some(val) = get_env("GLAZE_DESIGN")
            && !val.trim().is_empty()
        {
            opts.design = Some(PathBuf::from(val));
        }
        if let Some(val) = get_env("GLAZE_STYLE")
            && let Ok(style) = parse_style(&val)
        {
            opts.style = Some(style);
        }
        if let Some(val) = get_env("GLAZE_ALPHA")
            && let Some(n) = parse_percent(&val)
        {
            opts.alpha = Some(n);
        }
        if let Some(val) = get_env("GLAZE_FINISH")
            && let Ok(finish) = parse_finish(&val)
        {
            opts.finish = Some(finish);
        }
        if let Some(val) = get_env("GLAZE_GRADIENT_ALPHA")
            && let Some(n) = parse_percent(&val)
        {
            opts.gradient_alpha = Some(n);
        }
        if let Some(val) = get_env("GLAZE_BACKGROUND")
            && let Some(background) = parse_background(&val)
        {
            opts.background = Some(background);
        }
        if let Some(val) = get_env("GLAZE_FORMAT")
            && let Ok(format) = val.parse()
        {
            opts.format = Some(format);
        }

        // Command-line args override env vars.
        let mut positional = Vec::new();
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                "--show-focus" => opts.show_focus = true,
                "--json" => opts.json = true,
                other => {
                    if let Some(val) = other.strip_prefix("--design=") {
                        opts.design = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--style=") {
                        opts.style = Some(parse_style(val).map_err(|()| invalid("--style", val))?);
                    } else if let Some(val) = other.strip_prefix("--alpha=") {
                        opts.alpha = Some(parse_percent(val).ok_or_else(|| invalid("--alpha", val))?);
                    } else if let Some(val) = other.strip_prefix("--blur=") {
                        opts.blur = Some(val.parse().map_err(|_| invalid("--blur", val))?);
                    } else if let Some(val) = other.strip_prefix("--finish=") {
                        opts.finish =
                            Some(parse_finish(val).map_err(|()| invalid("--finish", val))?);
                    } else if let Some(val) = other.strip_prefix("--gradient-alpha=") {
                        opts.gradient_alpha = Some(
                            parse_percent(val).ok_or_else(|| invalid("--gradient-alpha", val))?,
                        );
                    } else if let Some(val) = other.strip_prefix("--button=") {
                        opts.button = Some(parse_color_arg("--button", val)?);
                    } else if let Some(val) = other.strip_prefix("--text=") {
                        opts.text = Some(parse_color_arg("--text", val)?);
                    } else if let Some(val) = other.strip_prefix("--focus=") {
                        opts.focus = Some(parse_color_arg("--focus", val)?);
                    } else if let Some(val) = other.strip_prefix("--label=") {
                        opts.label = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--background=") {
                        opts.background =
                            Some(parse_background(val).ok_or_else(|| invalid("--background", val))?);
                    } else if let Some(val) = other.strip_prefix("--format=") {
                        opts.format = Some(val.parse().map_err(|_| invalid("--format", val))?);
                    } else if other.starts_with('-') && other.len() > 1 {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    } else {
                        positional.push(other.to_string());
                    }
                }
            }
        }

        opts.command = parse_command(positional)?;
        Ok(opts)
    }
}

fn parse_command(positional: Vec<String>) -> Result<Command, ParseError> {
    let mut rest = positional.into_iter();
    let name = rest.next().ok_or(ParseError::MissingArgument("command"))?;
    let command = match name.as_str() {
        "convert" => Command::Convert {
            text: rest.next().ok_or(ParseError::MissingArgument("<TEXT>"))?,
        },
        "contrast" => {
            let fg = rest.next().ok_or(ParseError::MissingArgument("<FG>"))?;
            let bg = rest.next().ok_or(ParseError::MissingArgument("<BG>"))?;
            Command::Contrast {
                foreground: parse_color_arg("<FG>", &fg)?,
                background: parse_color_arg("<BG>", &bg)?,
            }
        }
        "check" => Command::Check,
        "export" => Command::Export,
        "palette" => Command::Palette,
        _ => return Err(ParseError::UnknownArg(name)),
    };
    match rest.next() {
        Some(extra) => Err(ParseError::UnknownArg(extra)),
        None => Ok(command),
    }
}

fn invalid(flag: &'static str, value: &str) -> ParseError {
    ParseError::InvalidValue {
        flag,
        value: value.to_string(),
    }
}

fn parse_color_arg(flag: &'static str, value: &str) -> Result<Rgb, ParseError> {
    value.parse().map_err(|_| invalid(flag, value))
}

fn parse_style(raw: &str) -> Result<StyleArg, ()> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "flat" => Ok(StyleArg::Flat),
        "glass" => Ok(StyleArg::Glass),
        _ => Err(()),
    }
}

fn parse_finish(raw: &str) -> Result<FinishArg, ()> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "matte" => Ok(FinishArg::Matte),
        "glossy" => Ok(FinishArg::Glossy),
        _ => Err(()),
    }
}

/// Whole percent in 1-100.
fn parse_percent(raw: &str) -> Option<u8> {
    raw.trim().parse().ok().filter(|n| (1..=100).contains(n))
}

fn parse_background(raw: &str) -> Option<BackgroundArg> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("video") {
        return Some(BackgroundArg::Video);
    }
    if let Some(path) = trimmed.strip_prefix("image:") {
        return (!path.is_empty()).then(|| BackgroundArg::Image(PathBuf::from(path)));
    }
    trimmed.parse().ok().map(BackgroundArg::Color)
}
