use leptos::{ev::SubmitEvent, prelude::*};

use super::{
    decor::{BrandIcon, HoverLift, Reveal},
    pages::PageSection,
    state::PageState,
};
use crate::{
    contact::{ContactForm, SubmitButton},
    sections::Section,
};

#[cfg(feature = "hydrate")]
use super::browser::{BrowserScheduler, GlooRelay};
#[cfg(feature = "hydrate")]
use crate::{config::SITE, contact::ContactHandler};

const CONTACT_CARDS: &[(&str, &str, &str)] = &[
    ("fas fa-envelope", "Email", "Use the form below"),
    ("fab fa-linkedin", "LinkedIn", "linkedin.com"),
    ("fab fa-github", "GitHub", "github.com"),
    ("fas fa-map-marker-alt", "Location", "United States"),
];

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <PageSection section=Section::Contact>
            <h2 class="section-title">"Get in Touch"</h2>
            <div class="contact-cards">
                {CONTACT_CARDS
                    .iter()
                    .map(|(icon, label, value)| {
                        view! {
                            <Reveal>
                                <HoverLift class="contact-card">
                                    <BrandIcon class=*icon />
                                    <h3>{*label}</h3>
                                    <p>{*value}</p>
                                </HoverLift>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
            <ContactFormView />
        </PageSection>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let state = expect_context::<PageState>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let button = RwSignal::new(SubmitButton::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let mut form = ContactForm {
                name: name.get_untracked(),
                email: email.get_untracked(),
                subject: subject.get_untracked(),
                message: message.get_untracked(),
            };
            let handler = ContactHandler {
                relay: GlooRelay,
                notifier: state.toaster(),
                button,
                scheduler: BrowserScheduler,
                endpoint: SITE.relay_endpoint.to_string(),
                timeout: SITE.submit_timeout,
            };
            leptos::task::spawn_local(async move {
                if handler.submit(&mut form).await.clears_form() {
                    for field in [name, email, subject, message] {
                        field.set(String::new());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = state;
    };

    view! {
        <div class="contact-form">
            <form id="contactForm" on:submit=on_submit novalidate=true>
                <div class="form-row">
                    <input
                        id="name"
                        name="name"
                        type="text"
                        placeholder="Your Name"
                        bind:value=name
                    />
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="Your Email"
                        bind:value=email
                    />
                </div>
                <input
                    id="subject"
                    name="subject"
                    type="text"
                    placeholder="Subject"
                    bind:value=subject
                />
                <textarea
                    id="message"
                    name="message"
                    rows="6"
                    placeholder="Your Message"
                    bind:value=message
                ></textarea>
                <button
                    type="submit"
                    class="submit-btn btn-primary"
                    disabled=move || button.get().is_sending()
                >
                    <i class=move || {
                        if button.get().is_sending() {
                            "fas fa-spinner fa-spin"
                        } else {
                            "fas fa-paper-plane"
                        }
                    }></i>
                    " "
                    {move || button.get().label()}
                </button>
            </form>
        </div>
    }
}
