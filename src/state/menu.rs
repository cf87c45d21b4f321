// Category display controller for the menu section.
//
// Owns which category is shown and the per-item entrance animation state.
// Rendering reads `item_view` / `container_display`; nothing here touches the DOM.

use std::rc::Rc;
use yew::Reducible;

use crate::model::{AnimationKind, MenuCatalog};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemState {
    #[default]
    Idle,
    /// Cleared and waiting for the reflow grace delay before the class goes on.
    Pending { delay_ms: u32 },
    Animating { delay_ms: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryState {
    pub id: String,
    pub animation: AnimationKind,
    pub items: Vec<ItemState>,
}

/// What an item element should carry right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub class: Option<&'static str>,
    pub delay_ms: Option<u32>,
}

impl ItemView {
    pub fn style(&self) -> Option<String> {
        self.delay_ms.map(|d| format!("animation-delay: {}ms;", d))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryController {
    categories: Vec<CategoryState>,
    active: Option<usize>,
    /// Id of the latest animate run; scheduled applies from older runs are dropped.
    run: u64,
    stagger_unit_ms: u32,
}

impl CategoryController {
    pub fn new(catalog: &MenuCatalog, stagger_unit_ms: u32) -> Self {
        let categories: Vec<CategoryState> = catalog
            .categories
            .iter()
            .map(|c| CategoryState {
                id: c.id.clone(),
                animation: c.animation,
                items: vec![ItemState::Idle; c.items.len()],
            })
            .collect();
        let active = if categories.is_empty() { None } else { Some(0) };
        Self {
            categories,
            active,
            run: 0,
            stagger_unit_ms,
        }
    }

    pub fn categories(&self) -> &[CategoryState] {
        &self.categories
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|i| self.categories[i].id.as_str())
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    pub fn run(&self) -> u64 {
        self.run
    }

    /// Run id to apply once the grace delay elapses, if any item is waiting.
    pub fn pending_run(&self) -> Option<u64> {
        let cat = &self.categories[self.active?];
        cat.items
            .iter()
            .any(|s| matches!(s, ItemState::Pending { .. }))
            .then_some(self.run)
    }

    /// Switch the visible category. Unknown ids leave everything untouched.
    pub fn select_category(&mut self, id: &str) -> Option<u64> {
        let Some(target) = self.index_of(id) else {
            log::debug!("menu: ignoring unknown category `{}`", id);
            return None;
        };
        self.active = Some(target);
        for (i, cat) in self.categories.iter_mut().enumerate() {
            if i != target {
                cat.items.fill(ItemState::Idle);
            }
        }
        self.animate_items(target);
        log::debug!(
            "menu: showing `{}` (run {})",
            self.active_id().unwrap_or_default(),
            self.run()
        );
        Some(self.run)
    }

    /// Replays the active category's entrance animation.
    pub fn on_section_visible(&mut self) -> Option<u64> {
        let active = self.active?;
        Some(self.animate_items(active))
    }

    /// Clears animation state everywhere so the next visit replays it. Visibility is kept.
    pub fn on_section_hidden(&mut self) {
        for cat in &mut self.categories {
            cat.items.fill(ItemState::Idle);
        }
    }

    /// Starts a staggered run over one category: each item is cleared and given
    /// `index * stagger_unit` of delay, pending until `apply_pending`.
    pub fn animate_items(&mut self, category: usize) -> u64 {
        self.run += 1;
        let unit = self.stagger_unit_ms;
        if let Some(cat) = self.categories.get_mut(category) {
            for (i, item) in cat.items.iter_mut().enumerate() {
                *item = ItemState::Pending {
                    delay_ms: (i as u32).saturating_mul(unit),
                };
            }
        }
        self.run
    }

    /// Moves pending items of `run` to animating. Returns false for stale runs.
    pub fn apply_pending(&mut self, run: u64) -> bool {
        if run != self.run {
            return false;
        }
        let mut changed = false;
        for cat in &mut self.categories {
            for item in &mut cat.items {
                if let ItemState::Pending { delay_ms } = *item {
                    *item = ItemState::Animating { delay_ms };
                    changed = true;
                }
            }
        }
        changed
    }

    /// End-of-animation for one item. Anything but an animating item ignores it.
    pub fn on_animation_end(&mut self, category: usize, item: usize) -> bool {
        match self
            .categories
            .get_mut(category)
            .and_then(|c| c.items.get_mut(item))
        {
            Some(state) if matches!(state, ItemState::Animating { .. }) => {
                *state = ItemState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn is_shown(&self, category: usize) -> bool {
        self.active == Some(category)
    }

    pub fn container_display(&self, category: usize) -> &'static str {
        if self.is_shown(category) { "grid" } else { "none" }
    }

    pub fn item_state(&self, category: usize, item: usize) -> ItemState {
        self.categories
            .get(category)
            .and_then(|c| c.items.get(item))
            .copied()
            .unwrap_or_default()
    }

    pub fn item_view(&self, category: usize, item: usize) -> ItemView {
        let kind = self
            .categories
            .get(category)
            .map(|c| c.animation)
            .unwrap_or_default();
        match self.item_state(category, item) {
            ItemState::Idle => ItemView {
                class: None,
                delay_ms: None,
            },
            ItemState::Pending { delay_ms } => ItemView {
                class: None,
                delay_ms: Some(delay_ms),
            },
            ItemState::Animating { delay_ms } => ItemView {
                class: Some(kind.class()),
                delay_ms: Some(delay_ms),
            },
        }
    }
}

#[derive(Clone, Debug)]
pub enum MenuAction {
    Select(String),
    SectionVisible,
    SectionHidden,
    ApplyPending { run: u64 },
    AnimationEnd { category: usize, item: usize },
}

impl Reducible for CategoryController {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use MenuAction::*;
        let mut new = (*self).clone();
        let changed = match action {
            Select(id) => new.select_category(&id).is_some(),
            SectionVisible => new.on_section_visible().is_some(),
            SectionHidden => {
                new.on_section_hidden();
                new != *self
            }
            ApplyPending { run } => new.apply_pending(run),
            AnimationEnd { category, item } => new.on_animation_end(category, item),
        };
        if changed { Rc::new(new) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, MenuItem};

    fn item(name: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            description: String::new(),
            price: String::new(),
            icon: String::new(),
        }
    }

    fn catalog() -> MenuCatalog {
        MenuCatalog {
            categories: vec![
                Category {
                    id: "mains".into(),
                    label: "Mains".into(),
                    animation: AnimationKind::FadeScale,
                    items: vec![item("a"), item("b")],
                },
                Category {
                    id: "starters".into(),
                    label: "Starters".into(),
                    animation: AnimationKind::Pop,
                    items: vec![item("c"), item("d"), item("e")],
                },
                Category {
                    id: "drinks".into(),
                    label: "Drinks".into(),
                    animation: AnimationKind::Flip,
                    items: vec![item("f")],
                },
            ],
        }
    }

    fn controller() -> CategoryController {
        CategoryController::new(&catalog(), 100)
    }

    fn delays(c: &CategoryController, cat: usize) -> Vec<Option<u32>> {
        (0..c.categories()[cat].items.len())
            .map(|i| c.item_view(cat, i).delay_ms)
            .collect()
    }

    #[test]
    fn first_category_is_active_by_default() {
        let c = controller();
        assert_eq!(c.active_id(), Some("mains"));
        assert_eq!(c.container_display(0), "grid");
        assert_eq!(c.container_display(1), "none");
        assert_eq!(c.pending_run(), None);
    }

    #[test]
    fn selecting_shows_exactly_that_category() {
        let mut c = controller();
        for id in ["mains", "starters", "drinks"] {
            c.select_category(id).unwrap();
            let target = c.index_of(id).unwrap();
            for i in 0..c.categories().len() {
                assert_eq!(c.is_shown(i), i == target);
                if i != target {
                    assert!(c.categories()[i].items.iter().all(|s| *s == ItemState::Idle));
                }
            }
        }
    }

    #[test]
    fn starters_pop_gets_staggered_delays() {
        let mut c = controller();
        let run = c.select_category("starters").unwrap();
        assert_eq!(delays(&c, 1), vec![Some(0), Some(100), Some(200)]);
        assert_eq!(c.item_view(1, 0).class, None);

        assert!(c.apply_pending(run));
        for i in 0..3 {
            assert_eq!(c.item_view(1, i).class, Some("anim-pop"));
        }
        assert_eq!(delays(&c, 1), vec![Some(0), Some(100), Some(200)]);
        assert_eq!(c.item_view(1, 2).style().as_deref(), Some("animation-delay: 200ms;"));
    }

    #[test]
    fn unknown_category_changes_nothing() {
        let mut c = controller();
        c.select_category("drinks");
        let before = c.clone();
        assert_eq!(c.select_category("brunch"), None);
        assert_eq!(c, before);
        assert_eq!(c.active_id(), Some("drinks"));
    }

    #[test]
    fn reselecting_restarts_without_stuck_items() {
        let mut c = controller();
        let first = c.select_category("starters").unwrap();
        c.apply_pending(first);
        let second = c.select_category("starters").unwrap();
        assert!(second > first);
        assert!(c.categories()[1]
            .items
            .iter()
            .all(|s| matches!(s, ItemState::Pending { .. })));
        assert!(!c.apply_pending(first));
        assert!(c.apply_pending(second));
        for i in 0..3 {
            assert!(c.on_animation_end(1, i));
        }
        assert!(c.categories()[1].items.iter().all(|s| *s == ItemState::Idle));
    }

    #[test]
    fn stale_apply_does_not_touch_new_selection() {
        let mut c = controller();
        let old = c.select_category("starters").unwrap();
        let new = c.select_category("mains").unwrap();
        assert!(!c.apply_pending(old));
        assert_eq!(c.pending_run(), Some(new));
        assert!(c.apply_pending(new));
        assert_eq!(c.item_view(0, 1).class, Some("anim-fade-scale"));
        assert_eq!(c.item_view(1, 0), ItemView { class: None, delay_ms: None });
    }

    #[test]
    fn section_reentry_replays_like_a_selection() {
        let mut selected = controller();
        let run = selected.select_category("starters").unwrap();
        selected.apply_pending(run);
        let after_select: Vec<_> = (0..3).map(|i| selected.item_view(1, i)).collect();

        let mut c = selected.clone();
        c.on_section_hidden();
        assert!(c.is_shown(1));
        assert!(c.categories().iter().all(|cat| cat.items.iter().all(|s| *s == ItemState::Idle)));

        let replay = c.on_section_visible().unwrap();
        assert_eq!(delays(&c, 1), vec![Some(0), Some(100), Some(200)]);
        c.apply_pending(replay);
        let after_replay: Vec<_> = (0..3).map(|i| c.item_view(1, i)).collect();
        assert_eq!(after_select, after_replay);
    }

    #[test]
    fn animation_end_returns_item_to_idle() {
        let mut c = controller();
        let run = c.select_category("drinks").unwrap();
        c.apply_pending(run);
        assert!(c.on_animation_end(2, 0));
        assert_eq!(c.item_view(2, 0), ItemView { class: None, delay_ms: None });
        // ready for the next trigger
        let again = c.on_section_visible().unwrap();
        assert!(c.apply_pending(again));
        assert_eq!(c.item_view(2, 0).class, Some("anim-flip"));
    }

    #[test]
    fn animation_end_is_scoped_to_one_item() {
        let mut c = controller();
        let run = c.select_category("starters").unwrap();
        c.apply_pending(run);
        c.on_animation_end(1, 1);
        assert_eq!(c.item_state(1, 1), ItemState::Idle);
        assert_eq!(c.item_state(1, 0), ItemState::Animating { delay_ms: 0 });
        assert_eq!(c.item_state(1, 2), ItemState::Animating { delay_ms: 200 });
    }

    #[test]
    fn animation_end_ignored_unless_animating() {
        let mut c = controller();
        c.select_category("starters");
        assert!(!c.on_animation_end(1, 0));
        assert!(!c.on_animation_end(9, 0));
        assert!(!c.on_animation_end(1, 9));
    }

    #[test]
    fn empty_catalog_is_inert() {
        let mut c = CategoryController::new(&MenuCatalog::default(), 100);
        assert_eq!(c.active_id(), None);
        assert_eq!(c.on_section_visible(), None);
        assert_eq!(c.select_category("anything"), None);
        assert_eq!(c.pending_run(), None);
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let c = Rc::new(controller());
        let same = c.clone().reduce(MenuAction::Select("nope".into()));
        assert!(Rc::ptr_eq(&c, &same));
        let same = c.clone().reduce(MenuAction::SectionHidden);
        assert!(Rc::ptr_eq(&c, &same));

        let next = c.clone().reduce(MenuAction::Select("drinks".into()));
        assert_eq!(next.active_id(), Some("drinks"));
        let run = next.run();
        let next = next.reduce(MenuAction::ApplyPending { run });
        assert_eq!(next.item_view(2, 0).class, Some("anim-flip"));
        let next = next.reduce(MenuAction::AnimationEnd { category: 2, item: 0 });
        assert_eq!(next.item_state(2, 0), ItemState::Idle);
    }
}
