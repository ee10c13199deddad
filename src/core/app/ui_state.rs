use std::time::Instant;

use ratatui::prelude::Size;
use tui_textarea::{CursorMove, TextArea};

use crate::core::constants::{COMPOSER_MAX_ROWS, COMPOSER_MIN_ROWS, STATUS_TTL};
use crate::ui::appearance::Appearance;
use crate::ui::theme::Theme;

const COMPOSE_PLACEHOLDER: &str = "Type your message...";
const ATTACH_PLACEHOLDER: &str = "Path to an image file (Esc to cancel)";

/// Current composer mode.
#[derive(Debug, Clone)]
pub enum UiMode {
    /// Default typing mode for composing a message.
    Compose,

    /// One-shot prompt for an image path. The draft is stashed when the
    /// prompt opens and restored whenever it closes.
    AttachPrompt { stashed_draft: String },
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub appearance: Appearance,
    pub theme: Theme,
    pub sidebar_open: bool,
    pub mode: UiMode,
    pub scroll_offset: u16,
    pub auto_scroll: bool,
    pub status: Option<String>,
    pub status_set_at: Option<Instant>,
    pub exit_requested: bool,
    pub last_term_size: Size,
    /// Composer height in text rows, recomputed after draft edits.
    pub composer_rows: u16,
    input: String,
    textarea: TextArea<'static>,
}

impl UiState {
    pub fn new() -> Self {
        let appearance = Appearance::default();
        let mut state = Self {
            appearance,
            theme: Theme::for_appearance(appearance),
            sidebar_open: false,
            mode: UiMode::Compose,
            scroll_offset: 0,
            auto_scroll: true,
            status: None,
            status_set_at: None,
            exit_requested: false,
            last_term_size: Size::default(),
            composer_rows: COMPOSER_MIN_ROWS,
            input: String::new(),
            textarea: TextArea::default(),
        };
        state.textarea.set_placeholder_text(COMPOSE_PLACEHOLDER);
        state.configure_textarea();
        state
    }

    /// Single entry point for appearance changes. Flips the preference and
    /// swaps the resolved theme everything renders with.
    pub fn toggle_appearance(&mut self) {
        self.appearance = self.appearance.toggle();
        self.theme = Theme::for_appearance(self.appearance);
        self.configure_textarea();
    }

    fn configure_textarea(&mut self) {
        let textarea_style = self
            .theme
            .input_text_style
            .patch(ratatui::style::Style::default().bg(self.theme.background_color));
        self.textarea.set_style(textarea_style);
        self.textarea
            .set_cursor_style(self.theme.input_cursor_style);
        self.textarea
            .set_cursor_line_style(ratatui::style::Style::default());
        self.textarea
            .set_placeholder_style(self.theme.hint_style);
    }

    pub fn get_input_text(&self) -> &str {
        &self.input
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn set_input_text(&mut self, text: String) {
        self.input = text;
        let lines: Vec<String> = if self.input.is_empty() {
            Vec::new()
        } else {
            self.input.split('\n').map(|s| s.to_string()).collect()
        };
        self.textarea = TextArea::from(lines);
        if !self.input.is_empty() {
            let last_row = self.textarea.lines().len().saturating_sub(1) as u16;
            let last_col = self
                .textarea
                .lines()
                .last()
                .map(|l| l.chars().count() as u16)
                .unwrap_or(0);
            self.textarea
                .move_cursor(CursorMove::Jump(last_row, last_col));
        }
        self.textarea.set_placeholder_text(match self.mode {
            UiMode::Compose => COMPOSE_PLACEHOLDER,
            UiMode::AttachPrompt { .. } => ATTACH_PLACEHOLDER,
        });
        self.configure_textarea();
    }

    pub fn clear_input(&mut self) {
        self.set_input_text(String::new());
    }

    pub fn sync_input_from_textarea(&mut self) {
        self.input = self.textarea.lines().join("\n");
    }

    pub fn apply_textarea_edit<F>(&mut self, f: F)
    where
        F: FnOnce(&mut TextArea<'static>),
    {
        f(&mut self.textarea);
        self.sync_input_from_textarea();
    }

    /// Whether submitting now would append a message. Mirrors the disabled
    /// state of the send affordance.
    pub fn submit_enabled(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn in_attach_prompt(&self) -> bool {
        matches!(self.mode, UiMode::AttachPrompt { .. })
    }

    /// Stash the draft and turn the composer into a one-shot path prompt.
    pub fn enter_attach_prompt(&mut self) {
        if self.in_attach_prompt() {
            return;
        }
        let stashed = std::mem::take(&mut self.input);
        self.mode = UiMode::AttachPrompt {
            stashed_draft: stashed,
        };
        self.clear_input();
    }

    /// Leave the attach prompt, handing back the stashed draft. Returns None
    /// when no prompt was open.
    pub fn take_attach_prompt(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.mode, UiMode::Compose) {
            UiMode::AttachPrompt { stashed_draft } => Some(stashed_draft),
            other => {
                self.mode = other;
                None
            }
        }
    }

    /// Composer height for the current draft: one row for a single line,
    /// otherwise the line count within bounds.
    pub fn calculate_composer_height(&self) -> u16 {
        let line_count = self.textarea.lines().len() as u16;
        if line_count <= 1 {
            COMPOSER_MIN_ROWS
        } else {
            line_count.clamp(2, COMPOSER_MAX_ROWS)
        }
    }

    pub fn recompute_composer_height(&mut self) {
        self.composer_rows = self.calculate_composer_height();
    }

    pub fn set_status<S: Into<String>>(&mut self, s: S) {
        self.status = Some(s.into());
        self.status_set_at = Some(Instant::now());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
        self.status_set_at = None;
    }

    /// Drop the status note once it has been on screen long enough.
    pub fn maybe_expire_status(&mut self) {
        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed() >= STATUS_TTL {
                self.clear_status();
            }
        }
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
