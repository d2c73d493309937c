//! Decorative behavior: brand-colored icons, hover lift, staggered
//! floating icons, theme-aware logos and reveal-on-scroll.

use crate::theme::Theme;

const BRAND_COLORS: &[(&str, &str)] = &[
    ("fa-android", "#3ddc84"),
    ("fa-aws", "#ff9900"),
    ("fa-react", "#61dafb"),
    ("fa-docker", "#2496ed"),
    ("fa-node-js", "#339933"),
    ("fa-python", "#3776ab"),
    ("fa-java", "#007396"),
    ("fa-js", "#f7df1e"),
    ("fa-html5", "#e34f26"),
    ("fa-css3-alt", "#1572b6"),
    ("fa-git-alt", "#f05032"),
    ("fa-github", "#181717"),
    ("fa-linkedin", "#0a66c2"),
    ("fa-phone", "#25d366"),
    ("fa-envelope", "#ea4335"),
    ("fa-map-marker-alt", "#4285f4"),
];

/// Brand color for the first known icon class in a class list.
pub fn brand_color(class_list: &str) -> Option<&'static str> {
    let classes = class_list.split_whitespace().collect::<Vec<_>>();
    BRAND_COLORS
        .iter()
        .find(|(class, _)| classes.contains(class))
        .map(|(_, color)| *color)
}

pub fn hover_transform(hovered: bool) -> &'static str {
    if hovered {
        "translateY(-8px)"
    } else {
        "translateY(0)"
    }
}

pub fn floating_delay(index: usize) -> String {
    format!("{}s", index as f64 * 0.5)
}

/// Dark company logos are inverted to stay visible in dark mode.
pub fn logo_filter(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "brightness(0) invert(1)",
        Theme::Light => "brightness(1) invert(0)",
    }
}

/// Reveal is one-way: once shown, a card stays shown.
pub fn reveal_class(already_revealed: bool, visible: bool) -> (bool, &'static str) {
    let revealed = already_revealed || visible;
    (revealed, if revealed { "animate-in" } else { "" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_color() {
        assert_eq!(brand_color("fab fa-android"), Some("#3ddc84"));
        assert_eq!(brand_color("fas fa-envelope fa-lg"), Some("#ea4335"));
        // fa-js must not match fa-node-js by substring
        assert_eq!(brand_color("fab fa-node-js"), Some("#339933"));
        assert_eq!(brand_color("fas fa-moon"), None);
        assert_eq!(brand_color(""), None);
    }

    #[test]
    fn test_floating_delay() {
        assert_eq!(floating_delay(0), "0s");
        assert_eq!(floating_delay(3), "1.5s");
    }

    #[test]
    fn test_reveal_is_sticky() {
        assert_eq!(reveal_class(false, false), (false, ""));
        assert_eq!(reveal_class(false, true), (true, "animate-in"));
        assert_eq!(reveal_class(true, false), (true, "animate-in"));
    }

    #[test]
    fn test_logo_filter() {
        assert_eq!(logo_filter(Theme::Dark), "brightness(0) invert(1)");
        assert_eq!(hover_transform(true), "translateY(-8px)");
        assert_eq!(hover_transform(false), "translateY(0)");
    }
}
