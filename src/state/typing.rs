// Typewriter reveal for the hero title.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveals one more character. Returns false when nothing was left.
    pub fn tick(&mut self) -> bool {
        if self.shown < self.chars.len() {
            self.shown += 1;
            true
        } else {
            false
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }
}

impl Reducible for Typewriter {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.tick() { Rc::new(new) } else { self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_char_per_tick() {
        let mut t = Typewriter::new("Crème");
        assert_eq!(t.visible(), "");
        assert!(t.tick());
        assert_eq!(t.visible(), "C");
        while t.tick() {}
        assert_eq!(t.visible(), "Crème");
        assert!(t.is_done());
        assert!(!t.tick());
    }

    #[test]
    fn empty_text_is_done() {
        assert!(Typewriter::new("").is_done());
    }
}
