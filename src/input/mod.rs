//! Input pipeline
//!
//! Key events are translated into [`Action`] intents by the keymap; the
//! `App` is the single owner that applies them. Renderers never see raw
//! input and never mutate state.

pub mod action;
pub mod keymap;

pub use action::{Action, KeyContext};
