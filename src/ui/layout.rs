use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::app::UiState;
use crate::core::constants::{NARROW_LAYOUT_THRESHOLD, SIDEBAR_WIDTH};

/// Whether a terminal of the given width uses the narrow (overlay sidebar)
/// layout instead of the wide (fixed pane) layout.
pub fn is_narrow(width: u16) -> bool {
    width < NARROW_LAYOUT_THRESHOLD
}

/// Regions of one frame, computed up front so event handlers and the
/// renderer agree on geometry. On wide terminals the sidebar is a fixed
/// pane and `sidebar_overlay` is `None`; on narrow terminals the pane is
/// absent and, while open, the sidebar covers the chat column from the
/// left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub sidebar_pane: Option<Rect>,
    pub header: Rect,
    pub transcript: Rect,
    pub composer: Rect,
    pub sidebar_overlay: Option<Rect>,
    pub menu_glyph: Option<Rect>,
}

impl FrameLayout {
    pub fn compute(area: Rect, ui: &UiState) -> Self {
        let narrow = is_narrow(area.width);

        let (sidebar_pane, chat_column) = if narrow {
            (None, area)
        } else {
            let [pane, chat] =
                Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                    .areas(area);
            (Some(pane), chat)
        };

        // Composer block is bordered, so its height is the row count plus two.
        let composer_height = ui.composer_rows.saturating_add(2);
        let [header, transcript, composer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(composer_height),
        ])
        .areas(chat_column);

        let sidebar_overlay = if narrow && ui.sidebar_open {
            Some(Rect {
                x: area.x,
                y: area.y,
                width: SIDEBAR_WIDTH.min(area.width),
                height: area.height,
            })
        } else {
            None
        };

        let menu_glyph = if narrow {
            Some(Rect {
                x: header.x,
                y: header.y,
                width: 2.min(header.width),
                height: 1.min(header.height),
            })
        } else {
            None
        };

        Self {
            sidebar_pane,
            header,
            transcript,
            composer,
            sidebar_overlay,
            menu_glyph,
        }
    }
}
