//! Terminal UI layer for the mockup.
//!
//! The UI module owns rendering, layout, keyboard handling, and loop control
//! for the text user interface.
//!
//! Key submodules include:
//! - [`chat_loop`]: the main interaction loop that dispatches user input to
//!   [`crate::core::app`] and paints each frame.
//! - [`renderer`], [`layout`], [`transcript`], and [`sidebar`]: view
//!   composition and frame output.
//! - [`theme`], [`appearance`], and [`builtin_themes`]: color/style policy.
//!
//! Ownership boundary: this layer presents and captures interaction state,
//! while [`crate::core`] owns the session data.

pub mod appearance;
pub mod builtin_themes;
pub mod chat_loop;
pub mod layout;
pub mod renderer;
pub mod sidebar;
pub mod theme;
pub mod transcript;
