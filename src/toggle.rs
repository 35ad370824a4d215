/// Dark mode is on until the visitor turns it off.
pub const DARK_MODE_DEFAULT: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggle {
    dark: bool,
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self {
            dark: DARK_MODE_DEFAULT,
        }
    }
}

impl ThemeToggle {
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    /// Class set of the root container.
    pub fn root_class(&self) -> &'static str {
        if self.dark {
            "portfolio dark"
        } else {
            "portfolio"
        }
    }
}

/// In-page anchors shown in the header, as `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

/// Mobile navigation menu. Collapsed by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Following any nav link collapses the menu.
    pub fn select(&mut self, href: &str) {
        if self.open {
            log::debug!("menu closed by {href}");
        }
        self.close();
    }

    pub fn nav_class(&self) -> &'static str {
        if self.open {
            "nav open"
        } else {
            "nav"
        }
    }

    pub fn bar_class(&self) -> &'static str {
        if self.open {
            "bar open"
        } else {
            "bar"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_dark() {
        let theme = ThemeToggle::default();
        assert!(theme.is_dark());
        assert!(theme.root_class().split_whitespace().any(|c| c == "dark"));
    }

    #[test]
    fn test_theme_toggle_involution() {
        for start in [true, false] {
            let mut theme = ThemeToggle { dark: start };
            theme.toggle();
            assert_eq!(theme.is_dark(), !start);
            theme.toggle();
            assert_eq!(theme.is_dark(), start);
        }
    }

    #[test]
    fn test_theme_root_class_follows_toggle() {
        let has_dark = |t: &ThemeToggle| t.root_class().split_whitespace().any(|c| c == "dark");

        let mut theme = ThemeToggle::default();
        assert!(has_dark(&theme));
        theme.toggle();
        assert!(!has_dark(&theme));
        assert_eq!(theme.root_class(), "portfolio");
        theme.toggle();
        assert!(has_dark(&theme));
    }

    #[test]
    fn test_menu_toggle_involution() {
        let mut menu = MenuToggle::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_close_always_closes() {
        let mut menu = MenuToggle::default();
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.nav_class(), "nav");
        assert_eq!(menu.bar_class(), "bar");
    }

    #[test]
    fn test_nav_link_selection_closes_menu() {
        for (href, _) in NAV_LINKS {
            let mut menu = MenuToggle::default();
            menu.toggle();
            assert!(menu.is_open(), "menu should open before selecting {href}");
            menu.select(href);
            assert!(!menu.is_open(), "selecting {href} should close the menu");

            // selecting with the menu already closed leaves it closed
            menu.select(href);
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn test_menu_open_classes() {
        let mut menu = MenuToggle::default();
        menu.toggle();
        assert_eq!(menu.nav_class(), "nav open");
        assert_eq!(menu.bar_class(), "bar open");
    }
}
