use leptos::prelude::*;

use super::{browser::BrowserScheduler, state::PageState};
use crate::{config::SITE, sections::Section, timing::Scheduler};

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let (fading, set_fading) = signal(false);
    let (hidden, set_hidden) = signal(false);

    Effect::new(move |_| {
        BrowserScheduler.after(
            SITE.loading_visible,
            Box::new(move || {
                set_fading(true);
                BrowserScheduler.after(SITE.loading_fade, Box::new(move || set_hidden(true)));
            }),
        );
    });

    view! {
        <div
            class="loading"
            style:opacity=move || if fading.get() { "0" } else { "1" }
            style:display=move || if hidden.get() { "none" } else { "flex" }
        >
            <div class="loading-spinner"></div>
        </div>
    }
}

#[component]
fn ThemeToggle(id: &'static str, #[prop(optional)] compact: bool) -> impl IntoView {
    let state = expect_context::<PageState>();
    view! {
        <button
            id=id
            class=if compact { "theme-toggle theme-toggle-small" } else { "theme-toggle" }
            aria-label="Toggle theme"
            title="Toggle theme (Ctrl+T)"
            on:click=move |_| state.toggle_theme()
        >
            <i class=move || state.theme.get().icon_class()></i>
        </button>
    }
}

/// Only offered once the user has overridden the system theme.
#[component]
fn FollowSystemTheme() -> impl IntoView {
    let state = expect_context::<PageState>();
    view! {
        <Show when=move || state.explicit_theme.get()>
            <button
                class="theme-toggle theme-reset"
                aria-label="Use system theme"
                title="Use system theme"
                on:click=move |_| state.reset_theme()
            >
                <i class="fas fa-desktop"></i>
            </button>
        </Show>
    }
}

#[component]
pub fn Header(typed: ReadSignal<String>) -> impl IntoView {
    let state = expect_context::<PageState>();
    view! {
        <header class="site-header">
            <a
                class="logo"
                href="#home"
                on:click=move |ev| {
                    ev.prevent_default();
                    state.navigate(Section::Home.id());
                }
            >
                {SITE.owner}
            </a>
            <span class="header-role">
                <span id="typingText">{move || typed.get()}</span>
                <span class="cursor">"|"</span>
            </span>
            <ThemeToggle id="themeToggle" />
            <ThemeToggle id="themeToggleSmall" compact=true />
            <FollowSystemTheme />
        </header>
    }
}
