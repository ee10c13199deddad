/// Two-valued appearance preference used to choose the active theme.
/// Starts light on every run; there is no persistence and no OS detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Flip between light and dark. Toggling twice restores the original.
    pub fn toggle(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }

    /// Label for the theme toggle. Names the state the toggle switches to,
    /// not the current one.
    pub fn toggle_hint(self) -> &'static str {
        match self {
            Appearance::Light => "switch to dark mode",
            Appearance::Dark => "switch to light mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        assert_eq!(Appearance::default(), Appearance::Light);
    }

    #[test]
    fn toggle_is_an_involution() {
        let start = Appearance::default();
        assert_eq!(start.toggle(), Appearance::Dark);
        assert_eq!(start.toggle().toggle(), start);
    }

    #[test]
    fn hint_names_the_resulting_state() {
        assert!(Appearance::Light.toggle_hint().contains("dark"));
        assert!(Appearance::Dark.toggle_hint().contains("light"));
    }
}
