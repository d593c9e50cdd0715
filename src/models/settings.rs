//! Site settings singleton.
//!
//! When the backing file is missing or unreadable the documented defaults
//! below are served instead, so the endpoint still answers 200.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub site_name: String,
    pub description: String,
    /// BCP 47 language tag of the primary UI language.
    pub language: String,
    pub items_per_page: u32,
    pub maintenance_mode: bool,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub telegram_url: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Shasha".to_string(),
            description: "Arabic movies and series catalog".to_string(),
            language: "ar".to_string(),
            items_per_page: 20,
            maintenance_mode: false,
            facebook_url: None,
            twitter_url: None,
            telegram_url: None,
        }
    }
}

/// Partial settings update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSettings {
    pub site_name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub items_per_page: Option<u32>,
    pub maintenance_mode: Option<bool>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub telegram_url: Option<String>,
}

impl SiteSettings {
    pub fn apply_update(&mut self, input: UpdateSettings) {
        if let Some(site_name) = input.site_name {
            self.site_name = site_name;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if let Some(language) = input.language {
            self.language = language;
        }
        if let Some(items_per_page) = input.items_per_page {
            self.items_per_page = items_per_page;
        }
        if let Some(maintenance_mode) = input.maintenance_mode {
            self.maintenance_mode = maintenance_mode;
        }
        if input.facebook_url.is_some() {
            self.facebook_url = input.facebook_url;
        }
        if input.twitter_url.is_some() {
            self.twitter_url = input.twitter_url;
        }
        if input.telegram_url.is_some() {
            self.telegram_url = input.telegram_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = SiteSettings::default();
        assert_eq!(settings.language, "ar");
        assert!(!settings.maintenance_mode);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: SiteSettings =
            serde_json::from_str(r#"{"site_name":"Aflam"}"#).unwrap();
        assert_eq!(settings.site_name, "Aflam");
        assert_eq!(settings.items_per_page, 20);
    }

    #[test]
    fn apply_update_merges() {
        let mut settings = SiteSettings::default();
        settings.apply_update(UpdateSettings {
            maintenance_mode: Some(true),
            ..Default::default()
        });
        assert!(settings.maintenance_mode);
        assert_eq!(settings.site_name, "Shasha");
    }
}
