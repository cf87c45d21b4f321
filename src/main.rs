use std::rc::Rc;

mod components;
mod config;
mod dom;
mod model;
mod state;
mod util;

use components::app::{App, AppProps};
use config::SiteConfig;
use model::MenuCatalog;

fn main() {
    let (config, config_err) = SiteConfig::load();
    util::init_logging(config.level_filter().unwrap_or(log::LevelFilter::Info));
    if let Some(e) = config_err {
        log::warn!("using default site config: {}", e);
    }
    let catalog = MenuCatalog::embedded().unwrap_or_else(|e| {
        log::error!("menu catalog unavailable: {}", e);
        MenuCatalog::default()
    });
    log::info!("menu loaded with {} categories", catalog.categories.len());

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
        catalog: Rc::new(catalog),
    })
    .render();
}
