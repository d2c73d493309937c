use crate::sections::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTheme,
    Jump(Section),
}

impl Shortcut {
    /// `Ctrl+t`/`Cmd+t` toggles the theme; bare digits jump to a section
    /// unless the user is typing into a field.
    pub fn parse(key: &str, ctrl: bool, meta: bool, in_text_field: bool) -> Option<Self> {
        if ctrl || meta {
            return (key == "t").then_some(Shortcut::ToggleTheme);
        }
        if in_text_field {
            return None;
        }
        Section::from_digit(key).map(Shortcut::Jump)
    }

    /// Whether the browser's own handling of the key should be suppressed.
    pub fn prevents_default(self) -> bool {
        matches!(self, Shortcut::ToggleTheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_shortcut() {
        assert_eq!(
            Shortcut::parse("t", true, false, false),
            Some(Shortcut::ToggleTheme)
        );
        assert_eq!(
            Shortcut::parse("t", false, true, true),
            Some(Shortcut::ToggleTheme)
        );
        assert_eq!(Shortcut::parse("t", false, false, false), None);
        assert_eq!(Shortcut::parse("T", true, false, false), None);
        assert!(Shortcut::ToggleTheme.prevents_default());
    }

    #[test]
    fn test_digit_shortcuts() {
        assert_eq!(
            Shortcut::parse("1", false, false, false),
            Some(Shortcut::Jump(Section::Home))
        );
        assert_eq!(
            Shortcut::parse("5", false, false, false),
            Some(Shortcut::Jump(Section::Publications))
        );
        // only six sections
        assert_eq!(Shortcut::parse("7", false, false, false), None);
        assert_eq!(Shortcut::parse("2", false, false, true), None);
        assert_eq!(Shortcut::parse("2", true, false, false), None);
        assert!(!Shortcut::Jump(Section::Home).prevents_default());
    }
}
