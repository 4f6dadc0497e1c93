use crate::config::{NAV_REVEAL_OFFSET, NAV_SCROLLED_OFFSET};

/// Header visibility driven by scroll direction.
///
/// The previous offset lives here rather than in a process-wide variable so
/// two headers never see each other's scroll history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavScrollState {
    pub last_scroll_y: f64,
    pub visible: bool,
    pub scrolled: bool,
    pub drawer_open: bool,
}

impl Default for NavScrollState {
    fn default() -> Self {
        Self {
            last_scroll_y: 0.0,
            visible: true,
            scrolled: false,
            drawer_open: false,
        }
    }
}

impl NavScrollState {
    pub fn on_scroll(&mut self, scroll_y: f64) {
        if scroll_y < NAV_REVEAL_OFFSET {
            self.visible = true;
        } else if scroll_y > self.last_scroll_y {
            self.visible = false;
            self.drawer_open = false;
        } else {
            self.visible = true;
        }

        self.scrolled = scroll_y > NAV_SCROLLED_OFFSET;
        self.last_scroll_y = scroll_y;
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_on_scroll_down_and_returns_on_scroll_up() {
        let mut nav = NavScrollState::default();
        nav.open_drawer();

        nav.on_scroll(0.0);
        assert!(nav.visible);
        assert!(!nav.scrolled);

        nav.on_scroll(50.0);
        assert!(nav.visible);
        assert!(nav.scrolled);
        assert!(nav.drawer_open);

        nav.on_scroll(120.0);
        assert!(!nav.visible);
        assert!(!nav.drawer_open);

        nav.on_scroll(90.0);
        assert!(nav.visible);
        assert!(nav.scrolled);
        assert_eq!(nav.last_scroll_y, 90.0);
    }

    #[test]
    fn near_top_is_always_visible_even_when_scrolling_down() {
        let mut nav = NavScrollState::default();
        nav.on_scroll(10.0);
        nav.on_scroll(79.0);
        assert!(nav.visible);
        assert!(nav.scrolled);
    }

    #[test]
    fn holding_position_counts_as_scrolling_up() {
        let mut nav = NavScrollState::default();
        nav.on_scroll(300.0);
        assert!(!nav.visible);
        nav.on_scroll(300.0);
        assert!(nav.visible);
    }

    #[test]
    fn scrolled_flag_ignores_direction() {
        let mut nav = NavScrollState::default();
        nav.on_scroll(21.0);
        assert!(nav.scrolled);
        nav.on_scroll(20.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn instances_do_not_share_scroll_history() {
        let mut first = NavScrollState::default();
        let mut second = NavScrollState::default();
        first.on_scroll(500.0);
        second.on_scroll(400.0);
        assert!(!second.visible);
        assert_eq!(first.last_scroll_y, 500.0);
    }
}
