//! Site Configuration
//!
//! Brand, contact, hours and image URLs, embedded from `assets/site.json`.

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

const SITE_JSON: &str = include_str!("../assets/site.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: Brand,
    pub contact: Contact,
    pub hours: Vec<OpeningHours>,
    pub images: Images,
    #[serde(default)]
    pub behaviour: Behaviour,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// First word of the logo, before the bolt
    pub name: String,
    /// Second word of the logo, after the bolt
    pub suffix: String,
    /// Name as used in running text
    pub full_name: String,
    pub tagline: String,
    pub established: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Compact label for the footer ("Mon – Fri")
    pub short_day: String,
    /// Full label for the booking sidebar ("Monday – Friday")
    pub long_day: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Images {
    pub landing_hero: String,
    pub atmosphere: String,
    pub latte: String,
    pub interior: String,
    pub pastry: String,
    pub about_hero: String,
    pub barista: String,
    pub window_seat: String,
    pub menu_hero: String,
    pub book_sidebar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behaviour {
    /// Header switches to its opaque look past this offset
    pub scroll_threshold_px: f64,
    /// Minutes a table is held past the booked time
    pub hold_minutes: u32,
    /// Parties of this size or more must contact the café directly
    pub large_group_size: u32,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 60.0,
            hold_minutes: 15,
            large_group_size: 9,
        }
    }
}

impl SiteConfig {
    /// Parse the embedded configuration
    pub fn load() -> Result<Self, SiteError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.brand.full_name, "BliksemCafe");
        assert_eq!(config.contact.address.len(), 3);
        assert_eq!(config.hours.len(), 3);
        assert_eq!(config.behaviour.scroll_threshold_px, 60.0);
        assert!(config.images.menu_hero.starts_with("https://"));
    }

    #[test]
    fn test_missing_behaviour_uses_defaults() {
        let mut value: serde_json::Value = serde_json::from_str(SITE_JSON).unwrap();
        value.as_object_mut().unwrap().remove("behaviour");
        let config = SiteConfig::from_json(&value.to_string()).unwrap();
        assert_eq!(config.behaviour, Behaviour::default());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{ \"brand\": 1 }").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().starts_with("site configuration is invalid"));
    }
}
