use serde::Deserialize;

use crate::types::Lang;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        match std::env::var("APP_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }

    /// Default tracing filter for the server build.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            AppMode::Local => "debug",
            AppMode::Production => "info",
        }
    }
}

/// Everything the browser side needs to know about the page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub i18n: I18nConfig,
    pub page: PageConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub default_lang: Lang,
    pub storage_key: String,
    pub text_attr: String,
    pub html_attr: String,
    pub placeholder_attr: String,
    pub active_class: String,
    pub toggles: Vec<ToggleConfig>,
    pub variants: Vec<VariantRule>,
    pub default_base_path: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_lang: Lang::DEFAULT,
            storage_key: "advansys-lang".to_string(),
            text_attr: "data-i18n".to_string(),
            html_attr: "data-i18n-html".to_string(),
            placeholder_attr: "data-i18n-placeholder".to_string(),
            active_class: "active".to_string(),
            toggles: vec![
                ToggleConfig {
                    lang: Lang::Es,
                    ids: vec!["langEs".to_string(), "langEsMobile".to_string()],
                },
                ToggleConfig {
                    lang: Lang::En,
                    ids: vec!["langEn".to_string(), "langEnMobile".to_string()],
                },
            ],
            variants: vec![VariantRule {
                name: "sico".to_string(),
                marker: "/sico".to_string(),
                prefix: "sico-".to_string(),
                base_path: "/i18n/".to_string(),
            }],
            default_base_path: "/i18n/".to_string(),
        }
    }
}

/// A language option and the ids of every physical control for it
/// (desktop navbar, mobile panel, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToggleConfig {
    pub lang: Lang,
    pub ids: Vec<String>,
}

/// Maps a location path marker to a table-name prefix.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantRule {
    pub name: String,
    pub marker: String,
    pub prefix: String,
    pub base_path: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub navbar_id: String,
    pub scrolled_class: String,
    pub scroll_threshold: f64,
    pub nav_link_class: String,
    pub active_class: String,
    pub section_lookahead: f64,
    pub collapse_class: String,
    pub collapse_open_class: String,
    pub toggler_class: String,
    pub page_top_id: String,
    pub progress_class: String,
    pub lazy_src_attr: String,
    pub lazy_root_margin: String,
    pub lazy_threshold: f64,
    pub form_class: String,
    pub validated_class: String,
    pub skip_link_class: String,
    pub card_classes: Vec<String>,
    pub animations: AnimationSettings,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_id: "mainNav".to_string(),
            scrolled_class: "scrolled".to_string(),
            scroll_threshold: 50.0,
            nav_link_class: "nav-link".to_string(),
            active_class: "active".to_string(),
            section_lookahead: 100.0,
            collapse_class: "navbar-collapse".to_string(),
            collapse_open_class: "show".to_string(),
            toggler_class: "navbar-toggler".to_string(),
            page_top_id: "page-top".to_string(),
            progress_class: "scroll-progress".to_string(),
            lazy_src_attr: "data-src".to_string(),
            lazy_root_margin: "50px 0px".to_string(),
            lazy_threshold: 0.01,
            form_class: "needs-validation".to_string(),
            validated_class: "was-validated".to_string(),
            skip_link_class: "skip-link".to_string(),
            card_classes: vec![
                "service-card".to_string(),
                "tech-card".to_string(),
                "contact-card".to_string(),
            ],
            animations: AnimationSettings::default(),
        }
    }
}

/// Parameters handed to the scroll-animation library when it is on the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub duration: u32,
    pub easing: String,
    pub once: bool,
    pub offset: u32,
    pub delay: u32,
    pub disable: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration: 800,
            easing: "ease-out-cubic".to_string(),
            once: true,
            offset: 50,
            delay: 0,
            disable: false,
        }
    }
}
