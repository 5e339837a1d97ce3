//! Studio state and its update function.
//!
//! The studio owns the palette, the color editor, the button being designed
//! and the preview background. It changes only through [`Studio::update`];
//! contrast verdicts and snippets are derived on demand and never cached.

use glaze_color::{ColorFormat, Rgb, format_color, parse_color};
use glaze_style::{
    Background, ButtonConfig, ButtonSnippet, ContrastOutcome, DEFAULT_PREVIEW_FILL, NamedColor,
    Palette, evaluate_contrast,
};
use tracing::{debug, warn};

use crate::design::Design;
use crate::msg::Msg;

/// Color the editor starts with.
pub const DEFAULT_EDITOR_COLOR: Rgb = Rgb::new(0x34, 0x98, 0xdb);

/// Shown when saving while the typed color text is not valid.
pub const INVALID_SELECTION_MESSAGE: &str = "Please select a valid color";

/// Sections of the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    /// Brand colors.
    #[default]
    Foundations,
    /// Button styling and preview.
    Components,
    /// Exported snippet.
    Code,
}

/// In-progress color being picked, typed, and named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEditor {
    /// Last valid color.
    pub color: Rgb,
    pub format: ColorFormat,
    /// Raw text of the color field.
    pub input: String,
    pub name: String,
    pub error: Option<String>,
    editing: Option<usize>,
}

impl Default for ColorEditor {
    fn default() -> Self {
        Self {
            color: DEFAULT_EDITOR_COLOR,
            format: ColorFormat::Hex,
            input: DEFAULT_EDITOR_COLOR.to_hex(),
            name: String::new(),
            error: None,
            editing: None,
        }
    }
}

impl ColorEditor {
    fn for_entry(index: usize, entry: &NamedColor) -> Self {
        Self {
            color: entry.value(),
            input: entry.value().to_hex(),
            name: entry.name().to_string(),
            editing: Some(index),
            ..Self::default()
        }
    }

    /// Palette index being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<usize> {
        self.editing
    }

    fn pick(&mut self, color: Rgb) {
        self.color = color;
        self.input = format_color(color, self.format);
        self.error = None;
    }

    /// Valid text moves the color; invalid text only sets the error.
    fn type_input(&mut self, text: String) {
        match parse_color(&text, self.format) {
            Ok(color) => {
                self.color = color.rgb();
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        self.input = text;
    }

    fn select_format(&mut self, format: ColorFormat) {
        self.format = format;
        self.input = format_color(self.color, format);
        self.error = None;
    }

    /// Non-empty text that does not parse in the current format.
    fn has_invalid_input(&self) -> bool {
        !self.input.trim().is_empty() && parse_color(&self.input, self.format).is_err()
    }
}

/// The whole studio model.
#[derive(Debug, Clone, PartialEq)]
pub struct Studio {
    pub step: Step,
    pub palette: Palette,
    pub editor: ColorEditor,
    pub button: ButtonConfig,
    pub background: Background,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

impl Studio {
    /// Brand palette, default button, light grey preview.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: Step::Foundations,
            palette: Palette::brand(),
            editor: ColorEditor::default(),
            button: ButtonConfig::default(),
            background: Background::default(),
        }
    }

    #[must_use]
    pub fn from_design(design: Design) -> Self {
        Self {
            palette: design.palette,
            button: design.button,
            background: design.background,
            ..Self::new()
        }
    }

    /// Live contrast verdict for the current button and background.
    #[must_use]
    pub fn contrast(&self) -> ContrastOutcome {
        evaluate_contrast(&self.button, &self.background)
    }

    #[must_use]
    pub fn snippet(&self) -> ButtonSnippet {
        ButtonSnippet::generate(&self.button)
    }

    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::PickColor(color) => self.editor.pick(color),
            Msg::EditInput(text) => self.editor.type_input(text),
            Msg::SelectFormat(format) => self.editor.select_format(format),
            Msg::EditName(name) => self.editor.name = name,
            Msg::SaveColor => self.save_color(),
            Msg::EditEntry(index) => match self.palette.get(index) {
                Some(entry) => self.editor = ColorEditor::for_entry(index, entry),
                None => warn!(index, "edit requested for missing palette entry"),
            },
            Msg::CancelEdit => {
                if self.editor.editing.is_some() {
                    self.editor = ColorEditor::default();
                }
            }
            Msg::DeleteEntry(index) => self.delete_color(index),

            Msg::SetLabel(label) => self.button.label = label,
            Msg::SetButtonColor(color) => self.button.background = color,
            Msg::SetTextColor(color) => self.button.text = color,
            Msg::SetFocusColor(color) => self.button.focus = color,
            Msg::SetShowFocus(show) => self.button.show_focus = show,
            Msg::SetSurface(surface) => self.button.surface = surface,
            Msg::SetGlassAlpha(alpha) => self.button.surface = self.button.surface.with_alpha(alpha),
            Msg::SetBlur(blur) => self.button.surface = self.button.surface.with_blur(blur),
            Msg::SetFinish(finish) => {
                self.button.surface = self.button.surface.with_finish(finish);
            }

            Msg::SetPreviewColor(color) => {
                self.background = Background::Solid(color.unwrap_or(DEFAULT_PREVIEW_FILL));
            }
            Msg::SetBackground(background) => self.background = background,
            Msg::ImageDecoded {
                width,
                height,
                rgba,
            } => {
                self.background = Background::from_image(width, height, &rgba);
                if self.background.samples().is_empty() {
                    warn!(width, height, bytes = rgba.len(), "image too small to sample");
                }
            }

            Msg::GoTo(step) => self.step = step,
            Msg::GenerateCode => self.step = Step::Code,
        }
    }

    fn save_color(&mut self) {
        let named = match NamedColor::new(self.editor.name.clone(), self.editor.color) {
            Ok(named) => named,
            Err(err) => {
                self.editor.error = Some(err.to_string());
                return;
            }
        };
        if self.editor.has_invalid_input() {
            self.editor.error = Some(INVALID_SELECTION_MESSAGE.to_string());
            return;
        }

        match self.editor.editing {
            Some(index) => {
                if let Err(err) = self.palette.replace(index, named) {
                    warn!(%err, "edited palette entry disappeared");
                }
                self.editor = ColorEditor::default();
            }
            None => {
                debug!(name = named.name(), value = %named.value(), "color saved");
                self.palette.add(named);
                self.editor.name.clear();
                self.editor.input.clear();
                self.editor.error = None;
            }
        }
    }

    fn delete_color(&mut self, index: usize) {
        if let Err(err) = self.palette.remove(index) {
            warn!(%err, "delete ignored");
            return;
        }
        match self.editor.editing {
            Some(editing) if editing == index => self.editor = ColorEditor::default(),
            Some(editing) if editing > index => self.editor.editing = Some(editing - 1),
            _ => {}
        }
    }
}
