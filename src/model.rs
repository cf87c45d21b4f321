//! Core data models for the menu catalog.
//! The catalog is static page content; only its display state changes at runtime.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

const MENU_JSON: &str = include_str!("../assets/menu.json");

/// Entrance animation played by every item of a category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    #[default]
    FadeScale,
    SlideUp,
    Pop,
    Flip,
    ZoomIn,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 5] = [
        AnimationKind::FadeScale,
        AnimationKind::SlideUp,
        AnimationKind::Pop,
        AnimationKind::Flip,
        AnimationKind::ZoomIn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationKind::FadeScale => "fade-scale",
            AnimationKind::SlideUp => "slide-up",
            AnimationKind::Pop => "pop",
            AnimationKind::Flip => "flip",
            AnimationKind::ZoomIn => "zoom-in",
        }
    }

    /// CSS class carried by an item while the animation runs.
    pub fn class(self) -> &'static str {
        match self {
            AnimationKind::FadeScale => "anim-fade-scale",
            AnimationKind::SlideUp => "anim-slide-up",
            AnimationKind::Pop => "anim-pop",
            AnimationKind::Flip => "anim-flip",
            AnimationKind::ZoomIn => "anim-zoom-in",
        }
    }

    /// Unknown or missing names fall back to fade-scale.
    pub fn parse_or_default(name: Option<&str>) -> Self {
        let Some(name) = name.map(str::trim) else {
            return Self::default();
        };
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .unwrap_or_else(|| {
                log::debug!("menu: unknown animation `{}`, using fade-scale", name);
                Self::default()
            })
    }
}

impl<'de> Deserialize<'de> for AnimationKind {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(de)?;
        Ok(Self::parse_or_default(raw.as_deref()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub animation: AnimationKind,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCatalog {
    pub categories: Vec<Category>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("menu catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate category id `{0}`")]
    DuplicateCategory(String),
}

impl MenuCatalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: MenuCatalog = serde_json::from_str(raw)?;
        for (i, c) in catalog.categories.iter().enumerate() {
            if catalog.categories[..i].iter().any(|p| p.id == c.id) {
                return Err(CatalogError::DuplicateCategory(c.id.clone()));
            }
        }
        Ok(catalog)
    }

    /// The catalog shipped with the page.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(MENU_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_animation_falls_back_to_fade_scale() {
        assert_eq!(AnimationKind::parse_or_default(Some("wobble")), AnimationKind::FadeScale);
        assert_eq!(AnimationKind::parse_or_default(None), AnimationKind::FadeScale);
        assert_eq!(AnimationKind::parse_or_default(Some(" pop ")), AnimationKind::Pop);
    }

    #[test]
    fn animation_field_is_lenient() {
        let raw = r#"{ "categories": [
            { "id": "a", "label": "A", "animation": "spin", "items": [] },
            { "id": "b", "label": "B", "items": [] },
            { "id": "c", "label": "C", "animation": null },
            { "id": "d", "label": "D", "animation": "zoom-in" }
        ] }"#;
        let cat = MenuCatalog::from_json(raw).unwrap();
        let kinds: Vec<_> = cat.categories.iter().map(|c| c.animation).collect();
        assert_eq!(
            kinds,
            vec![
                AnimationKind::FadeScale,
                AnimationKind::FadeScale,
                AnimationKind::FadeScale,
                AnimationKind::ZoomIn
            ]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"{ "categories": [
            { "id": "a", "label": "A" },
            { "id": "a", "label": "Again" }
        ] }"#;
        assert!(matches!(
            MenuCatalog::from_json(raw),
            Err(CatalogError::DuplicateCategory(id)) if id == "a"
        ));
    }

    #[test]
    fn embedded_catalog_starts_with_starters() {
        let cat = MenuCatalog::embedded().unwrap();
        let first = &cat.categories[0];
        assert_eq!(first.id, "starters");
        assert_eq!(first.animation, AnimationKind::Pop);
        assert_eq!(first.items.len(), 3);
    }
}
