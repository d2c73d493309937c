use std::fmt;

use crate::config::SITE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Projects,
    Publications,
    Contact,
}

impl Section {
    /// Document order, which is also the order of the navigation dots.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Publications,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Publications => "publications",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Publications => "Publications",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn from_fragment(fragment: &str) -> Option<Self> {
        Self::from_id(fragment.strip_prefix('#').unwrap_or(fragment))
    }

    /// Maps keys '1'..='7' to nav positions.
    pub fn from_digit(key: &str) -> Option<Self> {
        let index = match key {
            "1" | "2" | "3" | "4" | "5" | "6" | "7" => key.parse::<usize>().ok()? - 1,
            _ => return None,
        };
        Self::ALL.get(index).copied()
    }

    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The parts of the page a section transition touches.
pub trait SectionView {
    /// Marks `section` and its nav dot active, every other one inactive.
    fn set_active(&mut self, section: Section);
    fn push_fragment(&mut self, fragment: &str);
    fn set_title(&mut self, title: &str);
    /// Smooth-scrolls so the section's top sits `header_offset` below the
    /// top of the viewport.
    fn scroll_to(&mut self, section: Section, header_offset: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Keep,
}

pub struct SectionRouter<V: SectionView> {
    view: V,
    current: Section,
}

impl<V: SectionView> SectionRouter<V> {
    /// Activates the section named by the initial URL fragment, or home.
    pub fn start(view: V, fragment: &str) -> Self {
        let initial = Section::from_fragment(fragment).unwrap_or(Section::Home);
        let mut router = Self {
            view,
            current: initial,
        };
        router.show(initial, HistoryMode::Keep);
        router
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Nav dot or in-page anchor click. Unknown ids are ignored.
    pub fn navigate(&mut self, id: &str) -> bool {
        match Section::from_fragment(id) {
            Some(section) => {
                self.jump(section);
                true
            }
            None => {
                log::debug!("ignoring navigation to unknown section {id:?}");
                false
            }
        }
    }

    /// Direct navigation, as from a digit shortcut.
    pub fn jump(&mut self, section: Section) {
        self.show(section, HistoryMode::Push);
    }

    /// Back/forward. An empty fragment means the entry before any section
    /// was chosen, which is home.
    pub fn restore(&mut self, fragment: &str) -> bool {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let section = if fragment.is_empty() {
            Some(Section::Home)
        } else {
            Section::from_id(fragment)
        };
        match section {
            Some(section) => {
                self.show(section, HistoryMode::Keep);
                true
            }
            None => {
                log::debug!("ignoring history entry for unknown section {fragment:?}");
                false
            }
        }
    }

    fn show(&mut self, section: Section, mode: HistoryMode) {
        let changed = section != self.current;
        self.current = section;
        self.view.set_active(section);
        if mode == HistoryMode::Push && changed {
            self.view.push_fragment(&format!("#{}", section.id()));
        }
        self.view.set_title(&SITE.page_title(section));
        self.view.scroll_to(section, SITE.header_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakePage {
        active: Vec<Section>,
        history: Vec<String>,
        title: String,
        scrolls: Vec<(Section, f64)>,
    }

    impl FakePage {
        fn active_count(&self) -> usize {
            self.active.len()
        }
    }

    impl SectionView for FakePage {
        fn set_active(&mut self, section: Section) {
            self.active.clear();
            self.active.push(section);
        }

        fn push_fragment(&mut self, fragment: &str) {
            self.history.push(fragment.to_string());
        }

        fn set_title(&mut self, title: &str) {
            self.title = title.to_string();
        }

        fn scroll_to(&mut self, section: Section, header_offset: f64) {
            self.scrolls.push((section, header_offset));
        }
    }

    #[test]
    fn test_initial_fragment() {
        let router = SectionRouter::start(FakePage::default(), "#projects");
        assert_eq!(router.current(), Section::Projects);
        assert_eq!(router.view().active, vec![Section::Projects]);
        assert!(router.view().history.is_empty());
        assert_eq!(router.view().title, "Sai Siri Chinta | Projects");
    }

    #[test]
    fn test_initial_fragment_defaults_home() {
        for fragment in ["", "#", "#nowhere", "about-me"] {
            let router = SectionRouter::start(FakePage::default(), fragment);
            assert_eq!(router.current(), Section::Home, "fragment {fragment:?}");
            assert_eq!(router.view().active_count(), 1);
        }
    }

    #[test]
    fn test_click_switches_section() {
        let mut router = SectionRouter::start(FakePage::default(), "#projects");
        assert!(router.navigate("about"));
        assert_eq!(router.current(), Section::About);
        assert_eq!(router.view().active, vec![Section::About]);
        assert_eq!(router.view().history, vec!["#about"]);
        assert_eq!(router.view().title, "Sai Siri Chinta | About");
        assert_eq!(
            router.view().scrolls.last(),
            Some(&(Section::About, SITE.header_offset))
        );
    }

    #[test]
    fn test_unknown_target_is_noop() {
        let mut router = SectionRouter::start(FakePage::default(), "#about");
        let scrolls = router.view().scrolls.len();
        assert!(!router.navigate("blog"));
        assert!(!router.navigate(""));
        assert_eq!(router.current(), Section::About);
        assert!(router.view().history.is_empty());
        assert_eq!(router.view().scrolls.len(), scrolls);
    }

    #[test]
    fn test_reselecting_current_does_not_push() {
        let mut router = SectionRouter::start(FakePage::default(), "");
        assert!(router.navigate("home"));
        assert!(router.view().history.is_empty());
        // still scrolls back to it
        assert_eq!(router.view().scrolls.len(), 2);
    }

    #[test]
    fn test_digit_navigation() {
        let mut router = SectionRouter::start(FakePage::default(), "");
        for key in ["3", "6", "7", "0", "a"] {
            if let Some(section) = Section::from_digit(key) {
                router.jump(section);
            }
        }
        assert_eq!(router.current(), Section::Contact);
        assert_eq!(router.view().history, vec!["#experience", "#contact"]);
        assert_eq!(router.view().title, "Sai Siri Chinta | Contact");
    }

    #[test]
    fn test_restore_from_history() {
        let mut router = SectionRouter::start(FakePage::default(), "");
        router.navigate("projects");
        router.navigate("contact");

        assert!(router.restore("#projects"));
        assert_eq!(router.current(), Section::Projects);
        assert!(router.restore(""));
        assert_eq!(router.current(), Section::Home);
        assert!(!router.restore("#gone"));
        assert_eq!(router.current(), Section::Home);
        // back/forward never adds entries
        assert_eq!(router.view().history, vec!["#projects", "#contact"]);
    }

    #[test]
    fn test_section_ids_round_trip_and_order() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(Section::from_id(section.id()), Some(section));
            assert_eq!(section.position(), i);
        }
        assert_eq!(Section::from_fragment("#contact"), Some(Section::Contact));
    }
}
