use shared::content::{NavItem, NAV_ITEMS};

/// Near the top of the page the bar is always shown.
pub const ALWAYS_VISIBLE_BELOW: f64 = 100.0;

/// Floating navigation bar: hides while scrolling down, reappears when
/// scrolling up, and owns the mobile menu toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarState {
    visible: bool,
    last_scroll_y: f64,
    mobile_menu_open: bool,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self {
            visible: true,
            last_scroll_y: 0.0,
            mobile_menu_open: false,
        }
    }
}

impl NavbarState {
    pub fn items(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.visible = scroll_y < self.last_scroll_y || scroll_y < ALWAYS_VISIBLE_BELOW;
        self.last_scroll_y = scroll_y;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Link or backdrop clicked.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_visible_near_the_top() {
        let mut nav = NavbarState::default();
        nav.on_scroll(40.0);
        nav.on_scroll(99.0);
        assert!(nav.is_visible());
    }

    #[test]
    fn hides_on_scroll_down_and_returns_on_scroll_up() {
        let mut nav = NavbarState::default();
        nav.on_scroll(300.0);
        assert!(!nav.is_visible());
        nav.on_scroll(500.0);
        assert!(!nav.is_visible());
        nav.on_scroll(480.0);
        assert!(nav.is_visible());
    }

    #[test]
    fn holding_position_below_the_fold_keeps_it_hidden() {
        let mut nav = NavbarState::default();
        nav.on_scroll(300.0);
        nav.on_scroll(300.0);
        assert!(!nav.is_visible());
    }

    #[test]
    fn mobile_menu_toggles_and_closes() {
        let mut nav = NavbarState::default();
        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());
        nav.toggle_mobile_menu();
        assert!(!nav.is_mobile_menu_open());

        nav.toggle_mobile_menu();
        nav.close_mobile_menu();
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn lists_the_three_pages() {
        let labels: Vec<_> = NavbarState::default()
            .items()
            .iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, ["Home", "About", "Contact"]);
    }
}
