//! HTML/CSS export of the configured button.

use crate::button::ButtonConfig;
use crate::surface::{Finish, SurfaceStyle};

const GLASS_SHADOW: &str = "0 4px 32px 0 rgba(0,0,0,0.12), 0 1.5px 4px 0 rgba(0,0,0,0.10)";

/// Copy-pasteable markup and styles for one button.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ButtonSnippet {
    pub html: String,
    pub css: String,
    /// Always empty; the button needs no script.
    pub js: String,
}

impl ButtonSnippet {
    /// Render the snippet. Output depends only on `button`.
    #[must_use]
    pub fn generate(button: &ButtonConfig) -> Self {
        Self {
            html: format!(
                r#"<button class="custom-btn"><span class="btn-text">{}</span></button>"#,
                escape_html(&button.label)
            ),
            css: button_css(button),
            js: String::new(),
        }
    }
}

fn button_css(button: &ButtonConfig) -> String {
    let base = button.background_color();
    let mut css = String::from(".custom-btn {\n");
    let mut decl = |text: &str| {
        css.push_str("  ");
        css.push_str(text);
        css.push('\n');
    };

    match button.surface {
        SurfaceStyle::Flat => decl(&format!("background: {base};")),
        SurfaceStyle::Glass {
            alpha,
            finish: Finish::Matte,
            ..
        } => decl(&format!("background: {};", base.to_css_rgba(alpha))),
        SurfaceStyle::Glass {
            alpha,
            finish: Finish::Glossy { gradient_alpha },
            ..
        } => {
            let highlight = f64::from(gradient_alpha) / 100.0;
            decl(&format!(
                "background: linear-gradient(to bottom, rgba(255,255,255,{highlight}), rgba(0,0,0,0)), {};",
                base.to_css_rgba(alpha)
            ));
            decl("background-blend-mode: overlay, normal;");
        }
    }
    decl(&format!("color: {};", button.text_color()));
    decl("font-family: 'Roboto', Arial, sans-serif;");
    decl("font-size: 16px;");
    decl("font-weight: 700;");
    decl("padding: 16px 32px;");
    decl("border-radius: 26px;");

    match button.surface {
        SurfaceStyle::Flat => decl("border: none;"),
        SurfaceStyle::Glass {
            alpha,
            blur_px,
            finish,
        } => {
            decl("border: 1px solid rgba(255,255,255,0.25);");
            decl("border-left: none; border-right: none;");
            if finish.is_glossy() {
                decl(&format!(
                    "box-shadow: inset 0px 0px 10px 0px {}, {GLASS_SHADOW};",
                    base.to_css_rgba(alpha)
                ));
            } else {
                decl(&format!("box-shadow: {GLASS_SHADOW};"));
            }
            decl(&format!("backdrop-filter: blur({blur_px}px);"));
        }
    }
    decl("transition: background 0.2s;");

    css.push_str("}\n.custom-btn .btn-text {\n  display: inline-block;\n}\n");
    if let Some(ring) = button.focus_ring() {
        css.push_str(&format!(
            ".custom-btn:focus {{\n  outline: 2px solid {ring};\n  outline-offset: 1px;\n}}\n"
        ));
    }
    css
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
