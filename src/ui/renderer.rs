use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::core::app::{App, UiMode};
use crate::ui::layout::FrameLayout;
use crate::ui::sidebar::render_sidebar;
use crate::ui::transcript::transcript_lines;
use crate::utils::scroll::ScrollCalculator;

pub fn ui(f: &mut Frame, app: &App) {
    let theme = &app.ui.theme;
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background_color)),
        area,
    );

    let layout = FrameLayout::compute(area, &app.ui);
    if let Some(pane) = layout.sidebar_pane {
        render_sidebar(f, pane, app);
    }
    render_header(f, app, &layout);
    render_transcript(f, app, &layout);
    render_composer(f, app, &layout);

    // The overlay paints last so it sits above the chat column. The scrim
    // re-tints what is underneath without erasing it.
    if let Some(overlay) = layout.sidebar_overlay {
        f.render_widget(Block::default().style(theme.scrim_style), area);
        f.render_widget(Clear, overlay);
        render_sidebar(f, overlay, app);
    }
}

fn render_header(f: &mut Frame, app: &App, layout: &FrameLayout) {
    let theme = &app.ui.theme;
    let mut left = Vec::new();
    if layout.menu_glyph.is_some() {
        left.push(Span::styled("☰ ", theme.hint_style));
    }
    left.push(Span::styled(app.session.title.clone(), theme.title_style));
    let left = Line::from(left);

    let hint = Line::from(Span::styled(
        format!("Ctrl+T to {}", app.ui.appearance.toggle_hint()),
        theme.hint_style,
    ));
    let fits = left.width() + hint.width() + 1 <= layout.header.width as usize;

    f.render_widget(Paragraph::new(left), layout.header);
    if fits {
        f.render_widget(
            Paragraph::new(hint).alignment(Alignment::Right),
            layout.header,
        );
    }
}

fn render_transcript(f: &mut Frame, app: &App, layout: &FrameLayout) {
    let area = layout.transcript;
    let lines = transcript_lines(&app.session.messages, &app.ui.theme);
    let wrapped = ScrollCalculator::prewrap_lines(&lines, area.width);
    let max = ScrollCalculator::scroll_to_bottom(wrapped.len() as u16, area.height);
    let offset = app.ui.scroll_offset.min(max);
    f.render_widget(
        Paragraph::new(Text::from(wrapped)).scroll((offset, 0)),
        area,
    );
}

fn render_composer(f: &mut Frame, app: &App, layout: &FrameLayout) {
    let theme = &app.ui.theme;
    let input_title = match app.ui.mode {
        UiMode::Compose => {
            if app.submit_enabled() {
                "Type your message (Enter to send, Alt+Enter for new line, Ctrl+O to attach, Ctrl+C to quit)"
            } else {
                "Type your message (Alt+Enter for new line, Ctrl+O to attach, Ctrl+C to quit)"
            }
        }
        UiMode::AttachPrompt { .. } => "Attach an image (Enter to confirm, Esc to cancel)",
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.input_border_style)
        .title(Span::styled(input_title, theme.input_title_style));
    if let Some(status) = &app.ui.status {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {status} "),
            theme.status_style,
        )));
    }

    let inner = block.inner(layout.composer);
    f.render_widget(block, layout.composer);
    f.render_widget(app.ui.textarea(), inner);
}
