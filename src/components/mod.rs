pub mod about;
pub mod app;
pub mod back_to_top;
pub mod contact;
pub mod gallery;
pub mod hero;
pub mod menu_section;
pub mod navbar;
pub mod reveal;
pub mod toast;
