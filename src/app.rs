mod browser;
mod contact;
mod decor;
mod header;
mod nav;
mod notifications;
mod pages;
mod state;

use leptos::{ev, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_preferred_dark;

use crate::{
    config::SITE,
    keyboard::Shortcut,
    typing::{self, TypingAnimator, TypingSpeeds},
};
use browser::BrowserScheduler;
use header::{Header, LoadingScreen};
use nav::{FloatingNav, ProgressBar};
use notifications::NotificationStack;
use pages::{
    AboutSection, ExperienceSection, Footer, HomeSection, ProjectsSection, PublicationsSection,
};
use state::PageState;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="dark-mode">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole single-page site: wires the theme, typing, scroll and
/// section controllers to the browser once the page hydrates.
#[component]
fn Portfolio() -> impl IntoView {
    let state = PageState::new();
    provide_context(state);

    let (typed, set_typed) = signal(String::new());
    let prefers_dark = use_preferred_dark();

    Effect::new(move |_| {
        state.init_theme(prefers_dark.get_untracked());
        state.init_router(&browser::current_fragment());
        typing::drive(
            TypingAnimator::new(SITE.phrases, TypingSpeeds::default()),
            BrowserScheduler,
            move |text| set_typed.set(text.to_string()),
        );

        window_event_listener(ev::popstate, move |_| {
            state.restore(&browser::current_fragment());
        });

        window_event_listener(ev::keydown, move |ev| {
            let in_text_field = browser::is_text_field(ev.target());
            let Some(shortcut) =
                Shortcut::parse(&ev.key(), ev.ctrl_key(), ev.meta_key(), in_text_field)
            else {
                return;
            };
            if shortcut.prevents_default() {
                ev.prevent_default();
            }
            match shortcut {
                Shortcut::ToggleTheme => state.toggle_theme(),
                Shortcut::Jump(section) => state.jump(section),
            }
        });
    });

    Effect::watch(
        move || prefers_dark.get(),
        move |dark, _, _| state.system_theme_changed(*dark),
        false,
    );

    view! {
        <Title text=move || state.title.get() />
        <LoadingScreen />
        <ProgressBar />
        <Header typed />
        <FloatingNav />
        <main>
            <HomeSection typed />
            <AboutSection />
            <ExperienceSection />
            <ProjectsSection />
            <PublicationsSection />
            <contact::ContactSection />
        </main>
        <Footer />
        <NotificationStack />
    }
}
