//! Navigation State
//!
//! Link table, header look and the mobile menu overlay.

use crate::models::NavLink;

/// Shared by the header and the footer
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { path: "/", label: "Home" },
    NavLink { path: "/about", label: "About" },
    NavLink { path: "/menu", label: "Menu" },
    NavLink { path: "/book", label: "Reserve" },
];

/// Header background, blur and border for one scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub scrolled: bool,
}

impl HeaderStyle {
    /// Scrolled strictly past the threshold
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        Self { scrolled: scroll_y > threshold }
    }

    pub fn css(&self) -> &'static str {
        if self.scrolled {
            "background: rgba(12, 8, 4, 0.88); backdrop-filter: blur(12px); border-bottom: 1px solid rgba(201, 168, 76, 0.15);"
        } else {
            "background: linear-gradient(to bottom, rgba(12,8,4,0.7), transparent); backdrop-filter: none; border-bottom: 1px solid transparent;"
        }
    }
}

/// Full-screen mobile menu; closes whenever the route changes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MobileMenu {
    pub open: bool,
    path: String,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Record the current path, closing the menu if it changed
    pub fn on_route(&mut self, path: &str) {
        if self.path != path {
            self.path = path.to_string();
            self.open = false;
        }
    }
}

/// Link is the current page
pub fn is_current(link: &NavLink, pathname: &str) -> bool {
    link.path == pathname
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_iff_past_threshold() {
        for y in [0.0, 1.0, 59.0, 59.99, 60.0] {
            assert!(!HeaderStyle::for_scroll(y, 60.0).scrolled, "{}", y);
        }
        for y in [60.01, 61.0, 500.0, 10_000.0] {
            assert!(HeaderStyle::for_scroll(y, 60.0).scrolled, "{}", y);
        }
    }

    #[test]
    fn test_scrolled_property_over_range() {
        for step in 0..2_000 {
            let y = step as f64 * 0.1;
            assert_eq!(HeaderStyle::for_scroll(y, 60.0).scrolled, y > 60.0);
        }
    }

    #[test]
    fn test_css_differs_per_state() {
        let top = HeaderStyle::for_scroll(0.0, 60.0).css();
        let down = HeaderStyle::for_scroll(100.0, 60.0).css();
        assert!(top.contains("backdrop-filter: none"));
        assert!(down.contains("blur(12px)"));
    }

    #[test]
    fn test_menu_closes_on_route_change() {
        let mut menu = MobileMenu::default();
        menu.on_route("/");
        menu.toggle();
        assert!(menu.open);

        menu.on_route("/");
        assert!(menu.open);

        menu.on_route("/menu");
        assert!(!menu.open);
    }

    #[test]
    fn test_toggle_flips() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.toggle();
        assert!(!menu.open);
    }

    #[test]
    fn test_link_table() {
        let paths: Vec<&str> = NAV_LINKS.iter().map(|l| l.path).collect();
        assert_eq!(paths, vec!["/", "/about", "/menu", "/book"]);
        assert!(is_current(&NAV_LINKS[2], "/menu"));
        assert!(!is_current(&NAV_LINKS[0], "/menu"));
    }
}
