use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::state::PageState;
use crate::effects::{brand_color, floating_delay, hover_transform, logo_filter, reveal_class};

/// Font Awesome icon, tinted with its brand color when it has one.
#[component]
pub fn BrandIcon(class: &'static str) -> impl IntoView {
    let style = brand_color(class)
        .map(|c| format!("color: {c}"))
        .unwrap_or_default();
    view! { <i class=class style=style></i> }
}

/// Lifts its content while hovered.
#[component]
pub fn HoverLift(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);
    view! {
        <div
            class=class
            style:transform=move || hover_transform(hovered.get())
            style:transition="transform 0.3s ease"
            on:mouseenter=move |_| set_hovered(true)
            on:mouseleave=move |_| set_hovered(false)
        >
            {children()}
        </div>
    }
}

/// Fades its content in the first time it scrolls into view.
#[component]
pub fn Reveal(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node_ref);
    let revealed = RwSignal::new(false);

    Effect::new(move |_| {
        let (now_revealed, _) = reveal_class(revealed.get_untracked(), visible.get());
        if now_revealed != revealed.get_untracked() {
            revealed.set(now_revealed);
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=move || format!("{class} {}", reveal_class(revealed.get(), false).1)
        >
            {children()}
        </div>
    }
}

#[component]
pub fn FloatingIcons(icons: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="floating-icons">
            {icons
                .iter()
                .copied()
                .enumerate()
                .map(|(i, icon)| {
                    view! {
                        <span
                            class="floating-icon"
                            style=format!("animation-delay: {}", floating_delay(i))
                        >
                            <BrandIcon class=icon />
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Company logo that stays legible on a dark background.
#[component]
pub fn CompanyLogo(src: &'static str, alt: &'static str, invert: bool) -> impl IntoView {
    let state = expect_context::<PageState>();
    view! {
        <div class="company-logo">
            <img
                src=src
                alt=alt
                style:filter=move || if invert { logo_filter(state.theme.get()) } else { "none" }
            />
        </div>
    }
}
