#![forbid(unsafe_code)]

//! Glaze studio.
//!
//! The message-driven model behind the `glaze` tool: a brand palette with a
//! color editor, a button being styled, and the preview background its
//! contrast is judged against. [`app::Studio`] holds the state and changes
//! only through [`app::Studio::update`]; the `glaze` binary parses options
//! ([`cli`]), loads an optional design file ([`design`]), turns overrides
//! into [`msg::Msg`]s and prints reports ([`run`]).

pub mod app;
pub mod cli;
pub mod design;
pub mod logging;
pub mod msg;
pub mod run;
