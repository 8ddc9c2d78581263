//! Frontend Models
//!
//! Static content records shared by the pages.

/// Menu item within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    /// Highlight line shown under the name
    pub note: Option<&'static str>,
}

/// Named group of menu items with shared intro text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub intro: &'static str,
    pub items: &'static [MenuItem],
}

/// Teaser card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewItem {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

/// Image card in the landing feature grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub image: FeatureImage,
    pub alt: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Which configured image a feature card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureImage {
    Latte,
    Interior,
    Pastry,
}

/// Numbered value on the about page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Value {
    pub number: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// Header and footer link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}
