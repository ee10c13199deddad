//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod theme_list;

#[cfg(test)]
mod tests;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::theme_list::list_themes;
use crate::logging;
use crate::ui::chat_loop::run_chat;

#[derive(Parser)]
#[command(name = "maquette")]
#[command(about = "A terminal mockup of a chat assistant interface")]
#[command(
    long_about = "Maquette is a full-screen terminal rendition of a chat assistant interface. \
The conversation, the sidebar history, and the profile are canned; submitting a message \
appends it locally, and every action that would reach a backend is stubbed out and logged \
instead.\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  Alt+Enter         Insert a newline\n\
  Up/Down/Mouse     Scroll through chat history\n\
  Ctrl+B            Toggle the conversation sidebar\n\
  Ctrl+T            Switch between light and dark mode\n\
  Ctrl+N            New conversation (stub)\n\
  Ctrl+F            Send feedback (stub)\n\
  Ctrl+O            Attach an image by path (captured, never uploaded)\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Write debug logs to the specified file
    #[arg(short = 'd', long, global = true, value_name = "FILE")]
    pub debug_log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// List the built-in themes
    Themes,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init(args.debug_log.as_deref())?;

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(),
        Commands::Themes => list_themes(),
    }
}
