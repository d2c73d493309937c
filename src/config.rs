use std::time::Duration;

use crate::sections::Section;

const DEFAULT_RELAY_ENDPOINT: &str = "https://formsubmit.co/ajax/portfolio-contact";

/// Compile-time settings for the site. Server settings (address, reload
/// port, site root) come from `[package.metadata.leptos]` instead.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub phrases: &'static [&'static str],
    pub theme_storage_key: &'static str,
    pub relay_endpoint: &'static str,
    /// Height of the fixed header; section scroll targets sit just below it.
    pub header_offset: f64,
    pub scroll_spy_lookahead: f64,
    pub scroll_spy_debounce: Duration,
    pub notification_lifetime: Duration,
    pub dismiss_animation: Duration,
    pub submit_timeout: Duration,
    pub loading_visible: Duration,
    pub loading_fade: Duration,
}

pub const SITE: SiteConfig = SiteConfig {
    owner: "Sai Siri Chinta",
    phrases: &[
        "Software Development Engineer",
        "Android Developer",
        "Distributed Systems Enthusiast",
        "Machine Learning Researcher",
        "Full Stack Developer",
        "Problem Solver",
    ],
    theme_storage_key: "portfolio-theme",
    relay_endpoint: match option_env!("PORTFOLIO_RELAY_ENDPOINT") {
        Some(endpoint) => endpoint,
        None => DEFAULT_RELAY_ENDPOINT,
    },
    header_offset: 80.0,
    scroll_spy_lookahead: 100.0,
    scroll_spy_debounce: Duration::from_millis(50),
    notification_lifetime: Duration::from_secs(5),
    dismiss_animation: Duration::from_millis(300),
    submit_timeout: Duration::from_secs(5),
    loading_visible: Duration::from_millis(1000),
    loading_fade: Duration::from_millis(500),
};

impl SiteConfig {
    pub fn page_title(&self, section: Section) -> String {
        format!("{} | {}", self.owner, section.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(SITE.page_title(Section::Home), "Sai Siri Chinta | Home");
        assert_eq!(
            SITE.page_title(Section::Publications),
            "Sai Siri Chinta | Publications"
        );
    }

    #[test]
    fn test_relay_endpoint_is_https() {
        assert!(SITE.relay_endpoint.starts_with("https://"));
    }
}
