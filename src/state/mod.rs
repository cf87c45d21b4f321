pub mod contact;
pub mod counter;
pub mod menu;
pub mod nav;
pub mod typing;

pub use counter::CounterBoard;
pub use menu::{CategoryController, MenuAction};
pub use nav::{NavAction, NavState, SectionOffset};
pub use typing::Typewriter;
