use glaze_color::{ColorFormat, Rgb};
use glaze_style::{Background, Finish, SurfaceStyle};

use crate::app::Step;

/// Everything that can change the studio state.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Color editor
    /// A color picked directly (color wheel).
    PickColor(Rgb),
    /// Text typed into the color field.
    EditInput(String),
    SelectFormat(ColorFormat),
    EditName(String),
    /// Save the editor color, or update the entry being edited.
    SaveColor,
    EditEntry(usize),
    CancelEdit,
    DeleteEntry(usize),

    // Button
    SetLabel(String),
    SetButtonColor(Option<Rgb>),
    SetTextColor(Option<Rgb>),
    SetFocusColor(Option<Rgb>),
    SetShowFocus(bool),
    SetSurface(SurfaceStyle),
    SetGlassAlpha(u8),
    SetBlur(u16),
    SetFinish(Finish),

    // Preview
    /// Solid preview fill; `None` restores the default fill.
    SetPreviewColor(Option<Rgb>),
    SetBackground(Background),
    /// Decoded RGBA pixels of the preview image.
    ImageDecoded {
        width: usize,
        height: usize,
        rgba: Vec<u8>,
    },

    GoTo(Step),
    GenerateCode,
}
