use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::core::app::{App, AppAction, Effect};
use crate::ui::layout::FrameLayout;

const WHEEL_SCROLL_LINES: u16 = 3;

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.apply(AppAction::Quit),
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => app.apply(AppAction::ToggleSidebar),
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => app.apply(AppAction::ToggleAppearance),
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => app.apply(AppAction::NewConversation),
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => app.apply(AppAction::SendFeedback),
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => app.apply(AppAction::OpenAttachPrompt),
        (KeyCode::Enter, KeyModifiers::ALT) => {
            if !app.ui.in_attach_prompt() {
                app.ui.apply_textarea_edit(|ta| {
                    ta.insert_newline();
                });
                app.queue_effect(Effect::ResizeComposer);
            }
        }
        (KeyCode::Enter, _) => {
            if app.ui.in_attach_prompt() {
                app.apply(AppAction::ConfirmAttachPrompt);
            } else {
                app.apply(AppAction::SubmitDraft);
            }
        }
        (KeyCode::Esc, _) => {
            if app.ui.in_attach_prompt() {
                app.apply(AppAction::CancelAttachPrompt);
            } else if app.ui.sidebar_open {
                app.apply(AppAction::CloseSidebar);
            }
        }
        (KeyCode::Up, KeyModifiers::NONE) => app.apply(AppAction::ScrollUp(1)),
        (KeyCode::Down, KeyModifiers::NONE) => app.apply(AppAction::ScrollDown(1)),
        (KeyCode::PageUp, _) => app.apply(AppAction::PageUp),
        (KeyCode::PageDown, _) => app.apply(AppAction::PageDown),
        _ => forward_to_textarea(app, key),
    }
}

/// Anything unbound edits the draft, in either composer mode.
fn forward_to_textarea(app: &mut App, key: KeyEvent) {
    app.ui.apply_textarea_edit(|ta| {
        ta.input(tui_textarea::Input::from(key));
    });
    app.queue_effect(Effect::ResizeComposer);
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.apply(AppAction::ScrollUp(WHEEL_SCROLL_LINES)),
        MouseEventKind::ScrollDown => app.apply(AppAction::ScrollDown(WHEEL_SCROLL_LINES)),
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, mouse.column, mouse.row),
        _ => {}
    }
}

fn handle_click(app: &mut App, column: u16, row: u16) {
    let size = app.ui.last_term_size;
    let layout = FrameLayout::compute(Rect::new(0, 0, size.width, size.height), &app.ui);
    let clicked = Position::new(column, row);

    if let Some(overlay) = layout.sidebar_overlay {
        // Clicks inside the open overlay are inert in this mockup; outside
        // clicks dismiss it.
        if !overlay.contains(clicked) {
            app.apply(AppAction::CloseSidebar);
        }
        return;
    }
    if let Some(glyph) = layout.menu_glyph {
        if glyph.contains(clicked) {
            app.apply(AppAction::ToggleSidebar);
        }
    }
}
