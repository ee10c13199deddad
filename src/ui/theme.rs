use crate::ui::appearance::Appearance;
use crate::ui::builtin_themes::ThemeSpec;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Chrome
    pub title_style: Style,
    pub hint_style: Style,
    pub status_style: Style,

    // Transcript
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_prefix_style: Style,
    pub assistant_text_style: Style,
    pub attachment_style: Style,

    // Sidebar
    pub sidebar_border_style: Style,
    pub sidebar_text_style: Style,
    pub sidebar_dim_style: Style,
    pub scrim_style: Style,

    // Composer
    pub input_border_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
    pub input_cursor_style: Style,
}

impl Theme {
    pub fn light() -> Self {
        // Prefer built-in spec for consistent RGB colors
        if let Some(spec) = crate::ui::builtin_themes::find_builtin_theme("light") {
            return Self::from_spec(&spec);
        }
        // Fallback palette-based theme
        Theme {
            background_color: Color::White,

            title_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            hint_style: Style::default().fg(Color::DarkGray),
            status_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::ITALIC),

            user_prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            assistant_prefix_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::Black),
            attachment_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::ITALIC),

            sidebar_border_style: Style::default().fg(Color::Gray),
            sidebar_text_style: Style::default().fg(Color::Black),
            sidebar_dim_style: Style::default().fg(Color::DarkGray),
            scrim_style: Style::default().fg(Color::Gray),

            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::DarkGray),
            input_text_style: Style::default().fg(Color::Black),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn dark() -> Self {
        // Prefer built-in spec for consistent RGB colors
        if let Some(spec) = crate::ui::builtin_themes::find_builtin_theme("dark") {
            return Self::from_spec(&spec);
        }
        // Fallback palette-based theme
        Theme {
            background_color: Color::Black,

            title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            hint_style: Style::default().fg(Color::Gray),
            status_style: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),

            user_prefix_style: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::LightBlue),
            assistant_prefix_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::White),
            attachment_style: Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::ITALIC),

            sidebar_border_style: Style::default().fg(Color::DarkGray),
            sidebar_text_style: Style::default().fg(Color::White),
            sidebar_dim_style: Style::default().fg(Color::Gray),
            scrim_style: Style::default().fg(Color::DarkGray),

            input_border_style: Style::default().fg(Color::DarkGray),
            input_title_style: Style::default().fg(Color::Gray),
            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    pub fn from_spec(spec: &ThemeSpec) -> Self {
        // Helper parsers
        fn parse_color(s: &str) -> Option<Color> {
            let lower = s.trim().to_ascii_lowercase();
            // Hex: #rgb or #rrggbb
            if let Some(c) = parse_hex_color(&lower) {
                return Some(c);
            }
            // rgb(r,g,b)
            if let Some(c) = parse_rgb_func(&lower) {
                return Some(c);
            }
            match lower.as_str() {
                "black" => Some(Color::Black),
                "white" => Some(Color::White),
                "gray" | "grey" => Some(Color::Gray),
                "dark_gray" | "dark-grey" | "darkgray" => Some(Color::DarkGray),
                "red" => Some(Color::Red),
                "light_red" | "light-red" => Some(Color::LightRed),
                "green" => Some(Color::Green),
                "light_green" | "light-green" => Some(Color::LightGreen),
                "blue" => Some(Color::Blue),
                "light_blue" | "light-blue" => Some(Color::LightBlue),
                "cyan" => Some(Color::Cyan),
                "light_cyan" | "light-cyan" => Some(Color::LightCyan),
                "magenta" => Some(Color::Magenta),
                "light_magenta" | "light-magenta" => Some(Color::LightMagenta),
                "yellow" => Some(Color::Yellow),
                "light_yellow" | "light-yellow" => Some(Color::LightYellow),
                "reset" => Some(Color::Reset),
                _ => None,
            }
        }

        fn parse_hex_color(s: &str) -> Option<Color> {
            if !s.starts_with('#') {
                return None;
            }
            let hex = &s[1..];
            if hex.len() == 3 {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                Some(Color::Rgb(r, g, b))
            } else if hex.len() == 6 {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb(r, g, b))
            } else {
                None
            }
        }

        fn parse_rgb_func(s: &str) -> Option<Color> {
            // Format: rgb(r,g,b)
            if !s.starts_with("rgb(") || !s.ends_with(')') {
                return None;
            }
            let content = &s[4..s.len() - 1];
            let parts: Vec<_> = content
                .split([',', ' '])
                .filter(|t| !t.is_empty())
                .collect();
            if parts.len() != 3 {
                return None;
            }
            let r = parts[0].parse::<u16>().ok()?;
            let g = parts[1].parse::<u16>().ok()?;
            let b = parts[2].parse::<u16>().ok()?;
            Some(Color::Rgb(
                r.min(255) as u8,
                g.min(255) as u8,
                b.min(255) as u8,
            ))
        }

        fn parse_style(s: &Option<String>) -> Style {
            let mut style = Style::default();
            if let Some(ref spec) = s {
                for tok in spec.split(',').map(|t| t.trim()).filter(|t| !t.is_empty()) {
                    if let Some(color) = parse_color(tok) {
                        style = style.fg(color);
                    } else {
                        match tok {
                            "bold" => style = style.add_modifier(Modifier::BOLD),
                            "reversed" => style = style.add_modifier(Modifier::REVERSED),
                            "italic" => style = style.add_modifier(Modifier::ITALIC),
                            _ => {}
                        }
                    }
                }
            }
            style
        }

        let background_color = spec
            .background
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(Color::Black);

        Theme {
            background_color,

            title_style: parse_style(&spec.title),
            hint_style: parse_style(&spec.hint),
            status_style: parse_style(&spec.status),

            user_prefix_style: parse_style(&spec.user_prefix),
            user_text_style: parse_style(&spec.user_text),
            assistant_prefix_style: parse_style(&spec.assistant_prefix),
            assistant_text_style: parse_style(&spec.assistant_text),
            attachment_style: parse_style(&spec.attachment),

            sidebar_border_style: parse_style(&spec.sidebar_border),
            sidebar_text_style: parse_style(&spec.sidebar_text),
            sidebar_dim_style: parse_style(&spec.sidebar_dim),
            scrim_style: parse_style(&spec.scrim),

            input_border_style: parse_style(&spec.input_border),
            input_title_style: parse_style(&spec.input_title),
            input_text_style: parse_style(&spec.input_text),
            input_cursor_style: {
                let mut s = Style::default();
                if let Some(ref mods) = spec.input_cursor_modifiers {
                    for tok in mods.split(',').map(|t| t.trim()) {
                        match tok.to_ascii_lowercase().as_str() {
                            "bold" => s = s.add_modifier(Modifier::BOLD),
                            "reversed" => s = s.add_modifier(Modifier::REVERSED),
                            "italic" => s = s.add_modifier(Modifier::ITALIC),
                            _ => {}
                        }
                    }
                }
                s
            },
        }
    }
}
