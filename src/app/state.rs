use leptos::prelude::*;

use super::browser::{
    set_body_theme, BrowserScheduler, BrowserSectionView, LocalStorageThemeStore,
};
use crate::{
    config::SITE,
    notify::{NotificationList, Toaster},
    sections::{Section, SectionRouter},
    theme::{Theme, ThemeController},
};

/// Handles shared by every component on the page. Controllers that need
/// the browser to initialise stay empty until the page hydrates.
#[derive(Clone, Copy)]
pub struct PageState {
    pub theme: RwSignal<Theme>,
    /// Whether the user has picked a theme rather than following the system.
    pub explicit_theme: RwSignal<bool>,
    pub active: RwSignal<Section>,
    pub nav_dot: RwSignal<Section>,
    pub title: RwSignal<String>,
    pub notifications: RwSignal<NotificationList>,
    system_dark: RwSignal<bool>,
    toaster: StoredValue<Toaster<BrowserScheduler>>,
    theme_controller: StoredValue<Option<ThemeController<LocalStorageThemeStore>>>,
    router: StoredValue<Option<SectionRouter<BrowserSectionView>>>,
}

impl PageState {
    pub fn new() -> Self {
        let notifications = RwSignal::new(NotificationList::default());
        let toaster = Toaster::new(
            BrowserScheduler,
            SITE.notification_lifetime,
            SITE.dismiss_animation,
            move |list| notifications.set(list.clone()),
        );
        Self {
            theme: RwSignal::new(Theme::Dark),
            explicit_theme: RwSignal::new(false),
            active: RwSignal::new(Section::Home),
            nav_dot: RwSignal::new(Section::Home),
            title: RwSignal::new(SITE.page_title(Section::Home)),
            notifications,
            system_dark: RwSignal::new(true),
            toaster: StoredValue::new(toaster),
            theme_controller: StoredValue::new(None),
            router: StoredValue::new(None),
        }
    }

    fn apply_theme(&self, theme: Theme) {
        self.theme.set(theme);
        set_body_theme(theme);
    }

    pub fn init_theme(&self, system_prefers_dark: bool) {
        let controller = ThemeController::new(
            LocalStorageThemeStore::new(SITE.theme_storage_key),
            system_prefers_dark,
        );
        self.system_dark.set(system_prefers_dark);
        self.explicit_theme.set(controller.has_explicit_choice());
        self.apply_theme(controller.active());
        self.theme_controller.set_value(Some(controller));
    }

    pub fn toggle_theme(&self) {
        let toggled = self
            .theme_controller
            .try_update_value(|c| c.as_mut().map(|c| c.toggle()))
            .flatten();
        if let Some(theme) = toggled {
            log::debug!("theme toggled to {theme}");
            self.explicit_theme.set(true);
            self.apply_theme(theme);
        }
    }

    /// Forgets the stored choice and goes back to following the system.
    pub fn reset_theme(&self) {
        let system_dark = self.system_dark.get_untracked();
        let reset = self
            .theme_controller
            .try_update_value(|c| c.as_mut().map(|c| c.clear_preference(system_dark)))
            .flatten();
        if let Some(theme) = reset {
            log::debug!("theme preference cleared, following system ({theme})");
            self.explicit_theme.set(false);
            self.apply_theme(theme);
        }
    }

    pub fn system_theme_changed(&self, prefers_dark: bool) {
        self.system_dark.set(prefers_dark);
        let followed = self
            .theme_controller
            .try_update_value(|c| c.as_mut().and_then(|c| c.system_changed(prefers_dark)))
            .flatten();
        if let Some(theme) = followed {
            self.apply_theme(theme);
        }
    }

    pub fn init_router(&self, fragment: &str) {
        let view = BrowserSectionView {
            active: self.active,
            nav_dot: self.nav_dot,
            title: self.title,
        };
        let router = SectionRouter::start(view, fragment);
        log::debug!("starting on section {}", router.current());
        self.router.set_value(Some(router));
    }

    fn with_router(&self, f: impl FnOnce(&mut SectionRouter<BrowserSectionView>) -> bool) {
        let handled = self
            .router
            .try_update_value(|r| r.as_mut().map(f))
            .flatten();
        if handled.is_none() {
            log::debug!("navigation before the router started");
        }
    }

    pub fn navigate(&self, id: &str) {
        self.with_router(|r| r.navigate(id));
    }

    pub fn jump(&self, section: Section) {
        self.with_router(|r| {
            r.jump(section);
            true
        });
    }

    pub fn restore(&self, fragment: &str) {
        self.with_router(|r| r.restore(fragment));
    }

    /// Scroll-spy only moves the nav indicator, never the active section.
    pub fn spy(&self, section: Section) {
        if self.nav_dot.get_untracked() != section {
            self.nav_dot.set(section);
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toaster.with_value(|t| t.dismiss(id));
    }

    pub fn toaster(&self) -> Toaster<BrowserScheduler> {
        self.toaster.with_value(Clone::clone)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
