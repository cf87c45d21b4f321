// Scroll-derived navigation state (navbar visibility, active link, back-to-top).

use std::rc::Rc;
use yew::Reducible;

use crate::config::NavConfig;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub hidden: bool,
    pub scrolled: bool,
    pub show_back_to_top: bool,
    pub active_section: Option<String>,
    last_scroll_top: f64,
    cfg: NavConfig,
}

/// A page section as laid out right now.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub offset_top: f64,
}

impl NavState {
    pub fn new(cfg: NavConfig) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    pub fn scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Recomputes everything that depends on the scroll position.
    pub fn on_scroll(&mut self, scroll_top: f64, sections: &[SectionOffset]) {
        let cfg = &self.cfg;
        self.hidden = scroll_top > self.last_scroll_top && scroll_top > cfg.hide_after_px;
        self.last_scroll_top = scroll_top;
        self.scrolled = scroll_top > cfg.scrolled_after_px;
        self.show_back_to_top = scroll_top > cfg.back_to_top_after_px;
        self.active_section = sections
            .iter()
            .filter(|s| scroll_top >= s.offset_top - cfg.active_link_offset_px)
            .last()
            .map(|s| s.id.clone());
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active_section.as_deref() == Some(section)
    }

    pub fn navbar_transform(&self) -> &'static str {
        if self.hidden { "translateY(-100%)" } else { "translateY(0)" }
    }
}

#[derive(Clone, Debug)]
pub enum NavAction {
    ToggleMenu,
    CloseMenu,
    Scrolled {
        scroll_top: f64,
        sections: Vec<SectionOffset>,
    },
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            NavAction::ToggleMenu => new.toggle_menu(),
            NavAction::CloseMenu => new.close_menu(),
            NavAction::Scrolled {
                scroll_top,
                sections,
            } => new.on_scroll(scroll_top, &sections),
        }
        if new == *self { self } else { Rc::new(new) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionOffset> {
        [("home", 0.0), ("menu", 800.0), ("about", 1600.0), ("contact", 2400.0)]
            .into_iter()
            .map(|(id, offset_top)| SectionOffset {
                id: id.to_string(),
                offset_top,
            })
            .collect()
    }

    #[test]
    fn navbar_hides_on_scroll_down_and_returns_on_scroll_up() {
        let mut nav = NavState::new(NavConfig::default());
        nav.on_scroll(50.0, &sections());
        assert!(!nav.hidden);
        nav.on_scroll(150.0, &sections());
        assert!(nav.hidden);
        assert_eq!(nav.navbar_transform(), "translateY(-100%)");
        nav.on_scroll(120.0, &sections());
        assert!(!nav.hidden);
        assert_eq!(nav.navbar_transform(), "translateY(0)");
    }

    #[test]
    fn scrolled_and_back_to_top_thresholds() {
        let mut nav = NavState::new(NavConfig::default());
        nav.on_scroll(10.0, &sections());
        assert!(!nav.scrolled);
        nav.on_scroll(11.0, &sections());
        assert!(nav.scrolled);
        assert!(!nav.show_back_to_top);
        nav.on_scroll(301.0, &sections());
        assert!(nav.show_back_to_top);
    }

    #[test]
    fn active_section_uses_lookahead_offset() {
        let mut nav = NavState::new(NavConfig::default());
        nav.on_scroll(0.0, &sections());
        assert!(nav.is_active("home"));
        nav.on_scroll(599.0, &sections());
        assert!(nav.is_active("home"));
        nav.on_scroll(600.0, &sections());
        assert!(nav.is_active("menu"));
        nav.on_scroll(5000.0, &sections());
        assert!(nav.is_active("contact"));
    }

    #[test]
    fn escape_close_is_a_no_op_when_already_closed() {
        let nav = Rc::new(NavState::new(NavConfig::default()));
        let same = nav.clone().reduce(NavAction::CloseMenu);
        assert!(Rc::ptr_eq(&nav, &same));
        let open = nav.reduce(NavAction::ToggleMenu);
        assert!(open.menu_open);
    }

    #[test]
    fn menu_toggle_and_close() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.close_menu();
        assert!(!nav.menu_open);
        nav.close_menu();
        assert!(!nav.menu_open);
    }
}
