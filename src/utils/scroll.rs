use ratatui::text::{Line, Span};

/// Handles all scroll-related calculations for the transcript
pub struct ScrollCalculator;

impl ScrollCalculator {
    /// Pre-wrap the given lines to a specific width, preserving styles and wrapping at word
    /// boundaries consistent with the input wrapper (also breaks long tokens when needed).
    /// This allows rendering without ratatui's built-in wrapping, ensuring counts match output.
    pub fn prewrap_lines(lines: &[Line], terminal_width: u16) -> Vec<Line<'static>> {
        let width = terminal_width as usize;
        // Fast path: zero width, just clone as owned
        if width == 0 {
            let mut out = Vec::with_capacity(lines.len());
            for line in lines {
                if line.spans.is_empty() {
                    out.push(Line::from(""));
                } else {
                    let spans: Vec<Span<'static>> = line
                        .spans
                        .iter()
                        .map(|s| Span::styled(s.content.to_string(), s.style))
                        .collect();
                    out.push(Line::from(spans));
                }
            }
            return out;
        }

        let mut out: Vec<Line<'static>> = Vec::with_capacity(lines.len());

        for line in lines {
            if line.spans.is_empty() {
                out.push(Line::from(""));
                continue;
            }

            // Helpers to manage styled span appends
            let emit_line = |collector: &mut Vec<Span<'static>>, out: &mut Vec<Line<'static>>| {
                out.push(Line::from(std::mem::take(collector)));
            };
            let append_run = |collector: &mut Vec<Span<'static>>,
                              style: ratatui::style::Style,
                              text: &str| {
                if text.is_empty() {
                    return;
                }
                if let Some(last) = collector.last_mut() {
                    if last.style == style {
                        let mut combined = String::with_capacity(last.content.len() + text.len());
                        combined.push_str(&last.content);
                        combined.push_str(text);
                        let st = last.style;
                        *last = Span::styled(combined, st);
                        return;
                    }
                }
                collector.push(Span::styled(text.to_string(), style));
            };

            let mut cur_spans: Vec<Span<'static>> = Vec::with_capacity(line.spans.len() + 4);
            let mut cur_len: usize = 0;
            let mut emitted_any = false;

            // Current word accumulated as styled segments
            let mut word_segs: Vec<(Vec<char>, ratatui::style::Style)> =
                Vec::with_capacity(line.spans.len() + 4);
            let mut word_len: usize = 0;

            let flush_word = |cur_spans: &mut Vec<Span<'static>>,
                              out: &mut Vec<Line<'static>>,
                              cur_len: &mut usize,
                              emitted_any: &mut bool,
                              word_segs: &mut Vec<(Vec<char>, ratatui::style::Style)>,
                              word_len: &mut usize| {
                if *word_len == 0 {
                    return;
                }
                // Wrap before word if it doesn't fit
                if *cur_len > 0 && *cur_len + *word_len > width {
                    emit_line(cur_spans, out);
                    *emitted_any = true;
                    *cur_len = 0;
                }
                // Place the word, chunking if needed
                let mut seg_idx = 0usize;
                let mut seg_pos = 0usize;
                let mut remaining = *word_len;
                while remaining > 0 {
                    let space_left = width.saturating_sub(*cur_len);
                    let take = remaining.min(space_left.max(1));
                    let mut to_take = take;
                    while to_take > 0 && seg_idx < word_segs.len() {
                        let (seg_chars, seg_style) = &word_segs[seg_idx];
                        let seg_rem = seg_chars.len().saturating_sub(seg_pos);
                        let here = to_take.min(seg_rem);
                        if here > 0 {
                            let slice: String = seg_chars[seg_pos..seg_pos + here].iter().collect();
                            append_run(cur_spans, *seg_style, &slice);
                            *cur_len += here;
                            to_take -= here;
                            seg_pos += here;
                        }
                        if seg_pos >= seg_chars.len() {
                            seg_idx += 1;
                            seg_pos = 0;
                        }
                    }
                    remaining -= take;
                    if remaining > 0 {
                        emit_line(cur_spans, out);
                        *emitted_any = true;
                        *cur_len = 0;
                    }
                }
                word_segs.clear();
                *word_len = 0;
            };

            for s in &line.spans {
                for ch in s.content.chars() {
                    if ch == ' ' {
                        // Place accumulated word before handling space
                        flush_word(
                            &mut cur_spans,
                            &mut out,
                            &mut cur_len,
                            &mut emitted_any,
                            &mut word_segs,
                            &mut word_len,
                        );

                        // Add a single space if it fits; otherwise wrap and skip leading space
                        if cur_len < width {
                            append_run(&mut cur_spans, s.style, " ");
                            cur_len += 1;
                        } else {
                            emit_line(&mut cur_spans, &mut out);
                            emitted_any = true;
                            cur_len = 0;
                        }
                    } else {
                        // Accumulate into current word, merging by style
                        if let Some((last_text, last_style)) = word_segs.last_mut() {
                            if *last_style == s.style {
                                last_text.push(ch);
                            } else {
                                word_segs.push((vec![ch], s.style));
                            }
                        } else {
                            word_segs.push((vec![ch], s.style));
                        }
                        word_len += 1;
                    }
                }
            }

            // Flush any remaining word and finalize the line
            flush_word(
                &mut cur_spans,
                &mut out,
                &mut cur_len,
                &mut emitted_any,
                &mut word_segs,
                &mut word_len,
            );

            if !cur_spans.is_empty() {
                emit_line(&mut cur_spans, &mut out);
                emitted_any = true;
            }
            if !emitted_any {
                // Preserve a single empty visual line for whitespace-only inputs
                out.push(Line::from(""));
            }
        }

        out
    }

    /// Calculate how many visual lines the given lines take at the given width
    pub fn wrapped_line_count(lines: &[Line], terminal_width: u16) -> u16 {
        Self::prewrap_lines(lines, terminal_width).len() as u16
    }

    /// Scroll offset that shows the bottom of the transcript. Zero when the
    /// whole transcript fits.
    pub fn scroll_to_bottom(total_wrapped_lines: u16, available_height: u16) -> u16 {
        total_wrapped_lines.saturating_sub(available_height)
    }

    /// Maximum valid scroll offset for the given content and viewport. The
    /// bottom offset and the maximum are the same value.
    pub fn max_scroll_offset(lines: &[Line], terminal_width: u16, available_height: u16) -> u16 {
        Self::scroll_to_bottom(
            Self::wrapped_line_count(lines, terminal_width),
            available_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    #[test]
    fn test_prewrap_wraps_at_word_boundaries() {
        let lines = vec![Line::from("The quick brown fox jumps")];
        let pre = ScrollCalculator::prewrap_lines(&lines, 10);
        assert!(pre.len() > 1);
        for l in &pre {
            assert!(l.to_string().chars().count() <= 10);
            assert!(!l.to_string().starts_with(' '));
        }
        let joined: String = pre
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(joined.split_whitespace().count(), 5);
    }

    #[test]
    fn test_prewrap_chunks_overlong_tokens() {
        let lines = vec![Line::from("supercalifragilisticexpialidocious")];
        let pre = ScrollCalculator::prewrap_lines(&lines, 10);
        assert!(pre.len() > 1);
        for l in &pre {
            assert!(l.to_string().chars().count() <= 10);
        }
    }

    #[test]
    fn test_prewrap_preserves_styles() {
        let styled = Style::default().fg(Color::Blue);
        let lines = vec![Line::from(vec![
            Span::styled("You", styled),
            Span::raw(" say hello"),
        ])];
        let pre = ScrollCalculator::prewrap_lines(&lines, 80);
        assert_eq!(pre.len(), 1);
        assert_eq!(pre[0].spans[0].style, styled);
        assert_eq!(pre[0].spans[0].content, "You");
    }

    #[test]
    fn test_prewrap_zero_width_clones() {
        let lines = vec![Line::from("anything at all"), Line::from("")];
        let pre = ScrollCalculator::prewrap_lines(&lines, 0);
        assert_eq!(pre.len(), 2);
        assert_eq!(pre[0].to_string(), "anything at all");
    }

    #[test]
    fn test_wrapped_line_count_counts_empty_lines() {
        let lines = vec![Line::from(""), Line::from(""), Line::from("")];
        assert_eq!(ScrollCalculator::wrapped_line_count(&lines, 80), 3);
    }

    #[test]
    fn test_scroll_to_bottom_when_content_fits() {
        assert_eq!(ScrollCalculator::scroll_to_bottom(5, 20), 0);
    }

    #[test]
    fn test_scroll_to_bottom_when_content_overflows() {
        assert_eq!(ScrollCalculator::scroll_to_bottom(30, 20), 10);
    }

    #[test]
    fn test_max_scroll_offset_matches_bottom() {
        let lines: Vec<Line> = (0..30).map(|i| Line::from(format!("line {i}"))).collect();
        let max = ScrollCalculator::max_scroll_offset(&lines, 80, 10);
        assert_eq!(max, 20);
    }

    #[test]
    fn test_narrow_width_produces_more_lines() {
        let text = "This is a much longer line that will wrap depending on terminal width";
        let lines = vec![Line::from(text)];
        let wide = ScrollCalculator::wrapped_line_count(&lines, 100);
        let narrow = ScrollCalculator::wrapped_line_count(&lines, 20);
        assert!(narrow > wide);
        assert_eq!(wide, 1);
    }
}
