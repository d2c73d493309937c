//! Browser-backed implementations of the page's narrow interfaces.
//! Everything here touches the DOM, so it is only called from effects and
//! event handlers, never during server rendering.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};

use crate::{
    contact::{SubmitButton, SubmitControl},
    scroll::ScrollMetrics,
    sections::{Section, SectionView},
    theme::{Theme, ThemeStore},
    timing::{Scheduler, Task, Ticket},
};

#[cfg(feature = "hydrate")]
use crate::contact::{ContactError, FormRelay, RelayResponse};
#[cfg(feature = "hydrate")]
use gloo_net::http::Request;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay: Duration, task: Task) {
        set_timeout(task, delay);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[derive(Debug, Clone, Copy)]
pub struct LocalStorageThemeStore {
    key: &'static str,
}

impl LocalStorageThemeStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<Theme> {
        local_storage()
            .and_then(|s| s.get_item(self.key).ok().flatten())
            .and_then(|v| v.parse().ok())
    }

    fn save(&self, theme: Theme) {
        if let Some(storage) = local_storage() {
            if storage.set_item(self.key, theme.as_str()).is_err() {
                log::warn!("couldn't persist theme preference");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}

/// Swaps the body's theme marker so exactly one of them is present.
pub fn set_body_theme(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let _ = classes.remove_1(theme.toggled().class_name());
    let _ = classes.add_1(theme.class_name());
}

pub fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn section_element(section: Section) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(section.id())?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Document-order tops of every section present on the page.
pub fn section_tops() -> Vec<(Section, f64)> {
    Section::ALL
        .into_iter()
        .filter_map(|s| section_element(s).map(|el| (s, el.offset_top() as f64)))
        .collect()
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or_default(),
        document_height,
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

/// True when key presses are going into a form control.
pub fn is_text_field(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy)]
pub struct BrowserSectionView {
    pub active: RwSignal<Section>,
    pub nav_dot: RwSignal<Section>,
    pub title: RwSignal<String>,
}

impl SectionView for BrowserSectionView {
    fn set_active(&mut self, section: Section) {
        self.active.set(section);
        self.nav_dot.set(section);
    }

    fn push_fragment(&mut self, fragment: &str) {
        let pushed = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|h| h.push_state_with_url(&JsValue::NULL, "", Some(fragment)));
        if !matches!(pushed, Some(Ok(()))) {
            log::warn!("couldn't push history entry {fragment}");
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title.set(title.to_string());
    }

    fn scroll_to(&mut self, section: Section, header_offset: f64) {
        let (Some(window), Some(el)) = (web_sys::window(), section_element(section)) else {
            log::debug!("no element for section {section}");
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(el.offset_top() as f64 - header_offset);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

impl SubmitControl for RwSignal<SubmitButton> {
    fn begin(&self) -> Ticket {
        let mut button = self.get_untracked();
        let ticket = button.begin();
        self.set(button);
        ticket
    }

    fn finish(&self, ticket: Ticket) {
        let mut button = self.get_untracked();
        if button.finish(ticket) {
            self.set(button);
        }
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooRelay;

#[cfg(feature = "hydrate")]
impl FormRelay for GlooRelay {
    async fn post(
        &self,
        endpoint: &str,
        fields: &[(&'static str, String)],
    ) -> Result<RelayResponse, ContactError> {
        let params = web_sys::UrlSearchParams::new()
            .map_err(|e| ContactError::Transport(format!("{e:?}")))?;
        for (name, value) in fields {
            params.append(name, value);
        }
        let body = String::from(params.to_string());

        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ContactError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ContactError::Status(response.status()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ContactError::MalformedResponse(e.to_string()))?;
        RelayResponse::from_json(&text)
    }
}
