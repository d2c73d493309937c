use leptos::{ev, prelude::*};

use super::{
    browser::{scroll_metrics, section_tops},
    state::PageState,
};
use crate::{
    config::SITE,
    scroll::scroll_spy,
    sections::Section,
    timing::{Debounce, FrameGate},
};

/// Page progress along the top edge, recomputed at most once per frame.
#[component]
pub fn ProgressBar() -> impl IntoView {
    let (progress, set_progress) = signal(0.0_f64);
    let gate = StoredValue::new(FrameGate::default());

    let update = move || {
        if let Some(metrics) = scroll_metrics() {
            set_progress(metrics.progress_percent());
        }
    };

    Effect::new(move |_| {
        update();
        window_event_listener(ev::scroll, move |_| {
            let schedule = gate.try_update_value(|g| g.request()).unwrap_or(false);
            if schedule {
                request_animation_frame(move || {
                    update();
                    gate.update_value(|g| g.release());
                });
            }
        });
    });

    view! {
        <div class="progress-container">
            <div id="progressBar" class="progress-bar" style:width=move || format!("{}%", progress.get())></div>
        </div>
    }
}

/// Section dots. Clicks route; scrolling only moves the highlight, after
/// the reader stops for a moment.
#[component]
pub fn FloatingNav() -> impl IntoView {
    let state = expect_context::<PageState>();
    let debounce = StoredValue::new(Debounce::default());

    let spy = move || {
        let Some(metrics) = scroll_metrics() else {
            return;
        };
        let current = scroll_spy(
            &section_tops(),
            metrics.scroll_y,
            SITE.header_offset,
            SITE.scroll_spy_lookahead,
        );
        state.spy(current);
    };

    Effect::new(move |_| {
        window_event_listener(ev::scroll, move |_| {
            let Some(ticket) = debounce.try_update_value(|d| d.trigger()) else {
                return;
            };
            set_timeout(
                move || {
                    if debounce.with_value(|d| d.is_current(ticket)) {
                        spy();
                    }
                },
                SITE.scroll_spy_debounce,
            );
        });
    });

    view! {
        <nav id="floatingNav" class="floating-nav" aria-label="Sections">
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <a
                            href=format!("#{}", section.id())
                            class="nav-dot"
                            class:active=move || state.nav_dot.get() == section
                            data-section=section.id()
                            title=format!("{} ({})", section.title(), section.position() + 1)
                            on:click=move |ev| {
                                ev.prevent_default();
                                state.navigate(section.id());
                            }
                        >
                            <span class="nav-label">{section.title()}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
