use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::core::app::App;

/// Render the conversation sidebar into `area`. The same content serves
/// both the fixed pane on wide terminals and the overlay on narrow ones;
/// the caller decides where it lands and what gets drawn underneath.
pub fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.ui.theme;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.sidebar_border_style)
        .style(Style::default().bg(theme.background_color));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.width == 0 || inner.height < 4 {
        return;
    }

    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(inner);
    f.render_widget(Paragraph::new(sidebar_body_lines(app, body.width)), body);
    f.render_widget(Paragraph::new(sidebar_footer_lines(app)), footer);
}

fn sidebar_body_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let theme = &app.ui.theme;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(" + New chat", theme.sidebar_text_style),
            Span::styled("  Ctrl+N", theme.sidebar_dim_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Recent conversations",
            theme.sidebar_dim_style,
        )),
        Line::from(""),
    ];
    for entry in &app.session.history {
        let title = truncate_with_ellipsis(&entry.title, width.saturating_sub(3));
        lines.push(Line::from(vec![
            Span::styled(" ▪ ", theme.sidebar_dim_style),
            Span::styled(title, theme.sidebar_text_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", entry.date),
            theme.sidebar_dim_style,
        )));
        lines.push(Line::from(""));
    }
    lines
}

fn sidebar_footer_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.ui.theme;
    let profile = &app.session.profile;
    vec![
        Line::from(Span::styled(
            format!(" {}", profile.name),
            theme.sidebar_text_style,
        )),
        Line::from(Span::styled(
            format!(" {}", profile.title),
            theme.sidebar_dim_style,
        )),
        Line::from(vec![
            Span::styled(" Send feedback", theme.sidebar_text_style),
            Span::styled("  Ctrl+F", theme.sidebar_dim_style),
        ]),
    ]
}

/// Clip to `max_width` display columns, replacing the tail with an
/// ellipsis when the text does not fit.
fn truncate_with_ellipsis(text: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    let mut width = 0usize;
    for (idx, ch) in text.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            let mut clipped: String = text[..idx].to_string();
            while !clipped.is_empty() && clipped_width(&clipped) + 1 > max_width {
                clipped.pop();
            }
            clipped.push('…');
            return clipped;
        }
    }
    text.to_string()
}

fn clipped_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::app::App;

    #[test]
    fn short_titles_pass_through_unchanged() {
        assert_eq!(truncate_with_ellipsis("Budget Planning", 28), "Budget Planning");
    }

    #[test]
    fn long_titles_get_an_ellipsis_within_budget() {
        let out = truncate_with_ellipsis("Marketing Strategy Discussion", 12);
        assert!(out.ends_with('…'));
        assert!(clipped_width(&out) <= 12);
    }

    #[test]
    fn zero_width_budget_yields_bare_ellipsis() {
        assert_eq!(truncate_with_ellipsis("abc", 1), "…");
    }

    #[test]
    fn body_lists_every_seeded_conversation() {
        let app = App::new();
        // Width of the fixed pane's interior, after the right border.
        let lines = sidebar_body_lines(&app, 31);
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(text[0], " + New chat  Ctrl+N");
        assert_eq!(text[2], " Recent conversations");
        for entry in &app.session.history {
            assert!(text.iter().any(|l| l.contains(&entry.title)));
            assert!(text.iter().any(|l| l.contains(&entry.date.to_string())));
        }
    }

    #[test]
    fn footer_shows_the_seeded_profile() {
        let app = App::new();
        let lines = sidebar_footer_lines(&app);
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(text[0], " Sarah Johnson");
        assert_eq!(text[1], " Product Manager");
        assert!(text[2].contains("Send feedback"));
    }
}
