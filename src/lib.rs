//! Maquette is a full-screen terminal mockup of a chat assistant interface.
//!
//! The conversation, the sidebar history, and the profile are canned data
//! compiled into the binary; nothing talks to a network. The crate is
//! organized around a small set of collaborating layers:
//! - [`core`] owns the session transcript, the seeded data, and the
//!   interface state that keybindings mutate.
//! - [`ui`] renders the terminal interface and runs the interactive event
//!   loop that drives user input and display updates.
//! - [`utils`] holds input sanitization and the styled line wrapper the
//!   transcript scroll math is built on.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which initializes logging and dispatches
//! into [`ui::chat_loop`] for interactive sessions.

pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;
