use std::collections::VecDeque;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::core::message::Message;
use crate::ui::theme::Theme;

const USER_PREFIX: &str = "You: ";
const ASSISTANT_PREFIX: &str = "Assistant: ";

/// Flatten the conversation into styled lines ready for wrapping. Each
/// message starts with a role prefix on its first content line;
/// continuation lines are indented to the prefix width so the body forms
/// a column. Attachment references render after the content, and a blank
/// line separates messages.
pub fn transcript_lines(messages: &VecDeque<Message>, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in messages {
        append_message_lines(&mut lines, message, theme);
    }
    lines
}

fn append_message_lines(lines: &mut Vec<Line<'static>>, message: &Message, theme: &Theme) {
    let (prefix, prefix_style, text_style) = if message.role.is_user() {
        (USER_PREFIX, theme.user_prefix_style, theme.user_text_style)
    } else {
        (
            ASSISTANT_PREFIX,
            theme.assistant_prefix_style,
            theme.assistant_text_style,
        )
    };
    let indent = " ".repeat(prefix.chars().count());

    let mut first = true;
    for content_line in message.content.lines() {
        lines.push(body_line(
            if first { prefix } else { &indent },
            if first { prefix_style } else { text_style },
            content_line,
            text_style,
        ));
        first = false;
    }
    // A message whose content is empty still shows its prefix.
    if first {
        lines.push(Line::from(Span::styled(prefix.to_string(), prefix_style)));
    }

    for attachment in &message.attachments {
        lines.push(body_line(
            &indent,
            text_style,
            &format!("[image] {attachment}"),
            theme.attachment_style,
        ));
    }

    lines.push(Line::from(""));
}

fn body_line(lead: &str, lead_style: Style, text: &str, text_style: Style) -> Line<'static> {
    if text.is_empty() {
        return Line::from(Span::styled(lead.to_string(), lead_style));
    }
    Line::from(vec![
        Span::styled(lead.to_string(), lead_style),
        Span::styled(text.to_string(), text_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn lines_for(messages: Vec<Message>) -> Vec<String> {
        let theme = Theme::light();
        let deque: VecDeque<Message> = messages.into();
        transcript_lines(&deque, &theme)
            .iter()
            .map(line_text)
            .collect()
    }

    #[test]
    fn user_message_gets_inline_prefix() {
        let lines = lines_for(vec![Message::user("Hello")]);
        assert_eq!(lines, vec!["You: Hello".to_string(), String::new()]);
    }

    #[test]
    fn continuation_lines_align_under_the_body() {
        let lines = lines_for(vec![Message::assistant("first\nsecond")]);
        assert_eq!(lines[0], "Assistant: first");
        assert_eq!(lines[1], "           second");
    }

    #[test]
    fn attachments_render_after_the_content() {
        let message = Message::user("look")
            .with_attachments(vec!["https://example.com/pic.png".to_string()]);
        let lines = lines_for(vec![message]);
        assert_eq!(lines[0], "You: look");
        assert_eq!(lines[1], "     [image] https://example.com/pic.png");
    }

    #[test]
    fn messages_are_separated_by_a_blank_line() {
        let lines = lines_for(vec![Message::user("a"), Message::assistant("b")]);
        assert_eq!(
            lines,
            vec![
                "You: a".to_string(),
                String::new(),
                "Assistant: b".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn empty_content_still_shows_the_prefix() {
        let lines = lines_for(vec![Message::user("")]);
        assert_eq!(lines[0], "You: ");
    }

    #[test]
    fn interior_blank_lines_keep_the_indent_column() {
        let lines = lines_for(vec![Message::assistant("para one\n\npara two")]);
        assert_eq!(lines[0], "Assistant: para one");
        assert_eq!(lines[1], "           ");
        assert_eq!(lines[2], "           para two");
    }
}
