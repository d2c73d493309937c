use crate::sections::Section;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f64 {
        (self.document_height - self.viewport_height).max(0.0)
    }

    /// Percentage of the page scrolled, in `[0, 100]`.
    pub fn progress_percent(&self) -> f64 {
        let max = self.max_scroll();
        if self.scroll_y >= max {
            return 100.0;
        }
        (self.scroll_y / max * 100.0).clamp(0.0, 100.0)
    }
}

/// Picks the section the reader is in: the last one, in document order,
/// whose biased top has been reached. Home until the first threshold.
pub fn scroll_spy(
    tops: &[(Section, f64)],
    scroll_y: f64,
    header_offset: f64,
    lookahead: f64,
) -> Section {
    let position = scroll_y + lookahead;
    tops.iter()
        .rev()
        .find(|(_, top)| top - header_offset <= position)
        .map(|(section, _)| *section)
        .unwrap_or(Section::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            document_height: 3000.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(metrics(0.0).progress_percent(), 0.0);
        assert_eq!(metrics(1000.0).progress_percent(), 50.0);
        assert_eq!(metrics(2000.0).progress_percent(), 100.0);
        assert_eq!(metrics(2600.0).progress_percent(), 100.0);
        assert_eq!(metrics(-40.0).progress_percent(), 0.0);

        let mut s = 0.0;
        while s < 2000.0 {
            let p = metrics(s).progress_percent();
            assert!((0.0..100.0).contains(&p), "{s} -> {p}");
            s += 37.5;
        }
    }

    #[test]
    fn test_progress_short_page() {
        let m = ScrollMetrics {
            scroll_y: 0.0,
            document_height: 600.0,
            viewport_height: 800.0,
        };
        assert_eq!(m.max_scroll(), 0.0);
        assert_eq!(m.progress_percent(), 100.0);
    }

    #[test]
    fn test_scroll_spy() {
        let tops = [
            (Section::Home, 0.0),
            (Section::About, 900.0),
            (Section::Experience, 1800.0),
            (Section::Contact, 2700.0),
        ];
        let spy = |y| scroll_spy(&tops, y, 80.0, 100.0);

        assert_eq!(spy(0.0), Section::Home);
        // 900 - 80 <= 719 + 100 fails, 720 + 100 passes
        assert_eq!(spy(719.0), Section::Home);
        assert_eq!(spy(720.0), Section::About);
        assert_eq!(spy(1700.0), Section::Experience);
        assert_eq!(spy(9000.0), Section::Contact);
    }

    #[test]
    fn test_scroll_spy_defaults_home() {
        let tops = [(Section::About, 500.0), (Section::Projects, 1500.0)];
        assert_eq!(scroll_spy(&tops, 0.0, 80.0, 100.0), Section::Home);
        assert_eq!(scroll_spy(&[], 400.0, 80.0, 100.0), Section::Home);
    }
}
