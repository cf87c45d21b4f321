// Statistics counters that count up to the number in their label.

use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter {
    pub target: u64,
    pub current: u64,
    suffix: &'static str,
}

impl Counter {
    /// "500+" counts to 500 and keeps the plus; non-digits are otherwise dropped.
    pub fn from_label(label: &str) -> Self {
        let digits: String = label.chars().filter(char::is_ascii_digit).collect();
        Self {
            target: digits.parse().unwrap_or(0),
            current: 0,
            suffix: if label.contains('+') { "+" } else { "" },
        }
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    /// One tick: adds `target / speed`, rounded up. Returns false once finished.
    pub fn step(&mut self, speed: u32) -> bool {
        if self.is_done() {
            return false;
        }
        let inc = self.target as f64 / f64::from(speed.max(1));
        let next = (self.current as f64 + inc).ceil() as u64;
        self.current = next.clamp(self.current + 1, self.target);
        true
    }

    pub fn display(&self) -> String {
        if self.is_done() {
            format!("{}{}", self.target, self.suffix)
        } else {
            self.current.to_string()
        }
    }
}

/// All counters of the stats block, ticked together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterBoard {
    pub counters: Vec<Counter>,
    speed: u32,
}

impl CounterBoard {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>, speed: u32) -> Self {
        Self {
            counters: labels.into_iter().map(Counter::from_label).collect(),
            speed,
        }
    }

    pub fn is_done(&self) -> bool {
        self.counters.iter().all(Counter::is_done)
    }

    pub fn tick(&mut self) -> bool {
        let speed = self.speed;
        self.counters
            .iter_mut()
            .fold(false, |moved, c| c.step(speed) || moved)
    }
}

impl Reducible for CounterBoard {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.tick() { Rc::new(new) } else { self }
    }
}
