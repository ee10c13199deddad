use ratatui::layout::Rect;
use ratatui::prelude::Size;
use tracing::debug;

use crate::core::message::Message;
use crate::core::seed::load_seed;
use crate::ui::layout::FrameLayout;
use crate::ui::transcript::transcript_lines;
use crate::utils::input::{extract_image_refs, is_image_reference, sanitize_text_input};
use crate::utils::scroll::ScrollCalculator;

pub mod session;
pub mod ui_state;


pub use session::SessionState;
pub use ui_state::{UiMode, UiState};

/// State mutations dispatched from the event loop. Every user interaction
/// that changes state routes through [`App::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    SubmitDraft,
    ToggleSidebar,
    CloseSidebar,
    ToggleAppearance,
    NewConversation,
    SendFeedback,
    OpenAttachPrompt,
    ConfirmAttachPrompt,
    CancelAttachPrompt,
    ScrollUp(u16),
    ScrollDown(u16),
    PageUp,
    PageDown,
    Quit,
}

/// Deferred layout adjustments. Handlers queue these instead of mutating
/// layout-dependent state inline; [`App::apply_effects`] runs once per loop
/// turn, after pending events are drained and with the terminal size the
/// next draw will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Re-engage follow-bottom so the transcript shows its newest lines.
    ScrollTranscript,

    /// Recompute the composer's row count from the current draft.
    ResizeComposer,
}

pub struct App {
    pub session: SessionState,
    pub ui: UiState,
    effects: Vec<Effect>,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: SessionState::from_seed(load_seed()),
            ui: UiState::new(),
            // The transcript opens pinned to its newest message.
            effects: vec![Effect::ScrollTranscript],
        }
    }

    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::SubmitDraft => self.submit_draft(),
            AppAction::ToggleSidebar => self.toggle_sidebar(),
            AppAction::CloseSidebar => self.close_sidebar(),
            AppAction::ToggleAppearance => self.ui.toggle_appearance(),
            AppAction::NewConversation => self.new_conversation(),
            AppAction::SendFeedback => self.send_feedback(),
            AppAction::OpenAttachPrompt => self.open_attach_prompt(),
            AppAction::ConfirmAttachPrompt => self.confirm_attach_prompt(),
            AppAction::CancelAttachPrompt => self.cancel_attach_prompt(),
            AppAction::ScrollUp(amount) => self.scroll_up(amount),
            AppAction::ScrollDown(amount) => self.scroll_down(amount),
            AppAction::PageUp => self.scroll_up(self.transcript_viewport().height.max(1)),
            AppAction::PageDown => self.scroll_down(self.transcript_viewport().height.max(1)),
            AppAction::Quit => self.ui.request_exit(),
        }
    }

    pub fn queue_effect(&mut self, effect: Effect) {
        if !self.effects.contains(&effect) {
            self.effects.push(effect);
        }
    }

    /// Apply queued effects against the size the next draw will use. Also
    /// re-pins the transcript after resizes while follow-bottom is engaged,
    /// and retires expired status notes.
    pub fn apply_effects(&mut self, term_size: Size) {
        self.ui.last_term_size = term_size;
        for effect in std::mem::take(&mut self.effects) {
            match effect {
                Effect::ResizeComposer => self.ui.recompute_composer_height(),
                Effect::ScrollTranscript => self.ui.auto_scroll = true,
            }
        }
        if self.ui.auto_scroll {
            self.ui.scroll_offset = self.max_scroll_offset();
        }
        self.ui.maybe_expire_status();
    }

    #[cfg(test)]
    pub(crate) fn pending_effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Whether submitting now would append a message.
    pub fn submit_enabled(&self) -> bool {
        self.ui.submit_enabled()
    }

    fn submit_draft(&mut self) {
        let trimmed = self.ui.get_input_text().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        self.session.push_message(Message::user(trimmed));
        self.ui.clear_input();
        self.queue_effect(Effect::ResizeComposer);
        self.queue_effect(Effect::ScrollTranscript);
    }

    /// Insert sanitized pasted text into the draft. Tokens that look like
    /// image references are captured for the log and the status line; they
    /// are not attached to any message and nothing is uploaded.
    pub fn handle_paste(&mut self, pasted: &str) {
        let sanitized = sanitize_text_input(pasted);
        let refs = extract_image_refs(&sanitized);
        for reference in &refs {
            debug!(reference = %reference, "image pasted");
        }
        match refs.len() {
            0 => {}
            1 => self.ui.set_status("Captured 1 pasted image reference; nothing is uploaded"),
            n => self.ui.set_status(format!(
                "Captured {n} pasted image references; nothing is uploaded"
            )),
        }
        self.ui.apply_textarea_edit(|ta| {
            ta.insert_str(&sanitized);
        });
        self.queue_effect(Effect::ResizeComposer);
    }

    fn toggle_sidebar(&mut self) {
        self.ui.sidebar_open = !self.ui.sidebar_open;
        debug!(open = self.ui.sidebar_open, "sidebar toggled");
    }

    fn close_sidebar(&mut self) {
        self.ui.sidebar_open = false;
    }

    fn new_conversation(&mut self) {
        debug!("new conversation requested");
        self.ui
            .set_status("New conversation isn't wired up in this mockup");
    }

    fn send_feedback(&mut self) {
        debug!("feedback requested");
        self.ui.set_status("Feedback isn't wired up in this mockup");
    }

    fn open_attach_prompt(&mut self) {
        self.ui.enter_attach_prompt();
        self.queue_effect(Effect::ResizeComposer);
    }

    fn confirm_attach_prompt(&mut self) {
        let path = self.ui.get_input_text().trim().to_string();
        let Some(stashed) = self.ui.take_attach_prompt() else {
            return;
        };
        self.ui.set_input_text(stashed);
        self.queue_effect(Effect::ResizeComposer);

        if path.is_empty() {
            return;
        }
        if is_image_reference(&path) {
            debug!(file = %path, "file selected");
            self.ui
                .set_status("Captured image path; nothing is uploaded");
        } else {
            self.ui.set_status("Attachments must be image files");
        }
    }

    fn cancel_attach_prompt(&mut self) {
        if let Some(stashed) = self.ui.take_attach_prompt() {
            self.ui.set_input_text(stashed);
            self.queue_effect(Effect::ResizeComposer);
        }
    }

    fn transcript_viewport(&self) -> Rect {
        let size = self.ui.last_term_size;
        let area = Rect::new(0, 0, size.width, size.height);
        FrameLayout::compute(area, &self.ui).transcript
    }

    pub fn max_scroll_offset(&self) -> u16 {
        let viewport = self.transcript_viewport();
        let lines = transcript_lines(&self.session.messages, &self.ui.theme);
        ScrollCalculator::max_scroll_offset(&lines, viewport.width, viewport.height)
    }

    fn scroll_up(&mut self, amount: u16) {
        let max = self.max_scroll_offset();
        self.ui.scroll_offset = self.ui.scroll_offset.min(max).saturating_sub(amount);
        self.ui.auto_scroll = self.ui.scroll_offset >= max;
    }

    fn scroll_down(&mut self, amount: u16) {
        let max = self.max_scroll_offset();
        self.ui.scroll_offset = self.ui.scroll_offset.saturating_add(amount).min(max);
        self.ui.auto_scroll = self.ui.scroll_offset >= max;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
