use std::{cell::RefCell, fmt, rc::Rc, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ParseThemeError(String);

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Marker class carried by the document body.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-sun",
            Theme::Dark => "fas fa-moon",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Persistence for the user's explicit theme choice.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
    fn clear(&self);
}

/// In-memory store; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(value: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(value.to_string()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.slot.borrow().as_deref().and_then(|s| s.parse().ok())
    }

    fn save(&self, theme: Theme) {
        *self.slot.borrow_mut() = Some(theme.as_str().to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

pub struct ThemeController<S: ThemeStore> {
    store: S,
    active: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn new(store: S, system_prefers_dark: bool) -> Self {
        let active = store
            .load()
            .unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        Self { store, active }
    }

    pub fn active(&self) -> Theme {
        self.active
    }

    pub fn has_explicit_choice(&self) -> bool {
        self.store.load().is_some()
    }

    pub fn toggle(&mut self) -> Theme {
        self.active = self.active.toggled();
        self.store.save(self.active);
        self.active
    }

    /// Follows a system preference change unless the user has chosen
    /// explicitly. Returns the new theme if it was applied.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_choice() {
            return None;
        }
        self.active = Theme::from_system(prefers_dark);
        Some(self.active)
    }

    pub fn clear_preference(&mut self, system_prefers_dark: bool) -> Theme {
        self.store.clear();
        self.active = Theme::from_system(system_prefers_dark);
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_choice_beats_system() {
        let store = MemoryThemeStore::with_raw("light");
        let controller = ThemeController::new(store, true);
        assert_eq!(controller.active(), Theme::Light);
        assert!(controller.has_explicit_choice());
    }

    #[test]
    fn test_falls_back_to_system() {
        assert_eq!(
            ThemeController::new(MemoryThemeStore::new(), true).active(),
            Theme::Dark
        );
        assert_eq!(
            ThemeController::new(MemoryThemeStore::new(), false).active(),
            Theme::Light
        );
    }

    #[test]
    fn test_garbage_in_storage_is_ignored() {
        let store = MemoryThemeStore::with_raw("sepia");
        let controller = ThemeController::new(store, true);
        assert_eq!(controller.active(), Theme::Dark);
        assert!(!controller.has_explicit_choice());
    }

    #[test]
    fn test_toggle_persists_every_result() {
        let store = MemoryThemeStore::new();
        let mut controller = ThemeController::new(store.clone(), false);
        for _ in 0..5 {
            let theme = controller.toggle();
            assert_eq!(controller.active(), theme);
            assert_eq!(store.raw().as_deref(), Some(theme.as_str()));
        }
        // odd number of flips from light
        assert_eq!(controller.active(), Theme::Dark);
    }

    #[test]
    fn test_tracks_system_without_explicit_choice() {
        let mut controller = ThemeController::new(MemoryThemeStore::new(), false);
        assert_eq!(controller.system_changed(true), Some(Theme::Dark));
        assert_eq!(controller.active(), Theme::Dark);
        assert_eq!(controller.system_changed(false), Some(Theme::Light));
        assert_eq!(controller.active(), Theme::Light);
    }

    #[test]
    fn test_explicit_choice_pins_theme() {
        let mut controller = ThemeController::new(MemoryThemeStore::new(), false);
        controller.toggle();
        assert_eq!(controller.system_changed(false), None);
        assert_eq!(controller.active(), Theme::Dark);

        assert_eq!(controller.clear_preference(false), Theme::Light);
        assert_eq!(controller.system_changed(true), Some(Theme::Dark));
    }

    #[test]
    fn test_classes_and_icons() {
        assert_eq!(Theme::Dark.class_name(), "dark-mode");
        assert_eq!(Theme::Light.class_name(), "light-mode");
        assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
        assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
    }
}
