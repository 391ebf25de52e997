use log::Level;
use serde::Deserialize;
use thiserror::Error;

use crate::controllers::carousel::TestimonialEntry;
use crate::controllers::gallery::GalleryEntry;

const SITE_JSON: &str = include_str!("../content/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub auto_advance_ms: u32,
    pub submit_delay_ms: u32,
    pub notice_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            auto_advance_ms: 5000,
            submit_delay_ms: 1500,
            notice_ms: 5000,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Business {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServiceOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub business: Business,
    #[serde(default)]
    pub timing: Timing,
    #[serde(default)]
    pub services: Vec<ServiceOption>,
    #[serde(default)]
    pub gallery: Vec<GalleryEntry>,
    #[serde(default)]
    pub testimonials: Vec<TestimonialEntry>,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Content bundled into the binary at build time.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }
}
