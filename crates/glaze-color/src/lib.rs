#![forbid(unsafe_code)]

//! Color math for Glaze.
//!
//! # Role in Glaze
//! `glaze-color` is the stateless core. Everything above it (the style model
//! and the studio) calls into these functions on every change and never
//! caches the results.
//!
//! This crate provides:
//! - [`Rgb`], [`Rgba`] and [`Hsl`] with hex/RGB/HSL conversion
//! - [`parse_color`] for strict free-form color text in a declared [`ColorFormat`]
//! - [`composite_over`] and [`composite_glossy`] for translucent surfaces
//! - [`contrast_ratio`] and [`ContrastLevel`] for WCAG 2.x verdicts

/// Alpha compositing of translucent surfaces.
pub mod blend;
/// Color value types and conversions.
pub mod color;
/// WCAG relative luminance and contrast.
pub mod contrast;
/// Strict parsing of user-entered color text.
pub mod parse;

pub use blend::{composite_glossy, composite_over};
pub use color::{Hsl, Rgb, Rgba, hex_to_rgb, hex_to_rgba, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use contrast::{
    AA_THRESHOLD, AAA_THRESHOLD, ContrastLevel, ContrastVerdict, contrast_ratio,
    relative_luminance,
};
pub use parse::{ColorFormat, ParseColorError, format_color, parse_color};
