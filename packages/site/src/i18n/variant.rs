use crate::config::I18nConfig;
use crate::types::Lang;

/// Page family derived from the location path; picks which tables to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageVariant {
    /// Empty for the default variant.
    pub name: String,
    pub prefix: String,
    pub base_path: String,
}

impl PageVariant {
    pub fn default_for(config: &I18nConfig) -> Self {
        Self {
            name: String::new(),
            prefix: String::new(),
            base_path: config.default_base_path.clone(),
        }
    }

    /// First rule whose marker occurs in `path`, else the default variant.
    pub fn resolve(path: &str, config: &I18nConfig) -> Self {
        config
            .variants
            .iter()
            .find(|rule| !rule.marker.is_empty() && path.contains(&rule.marker))
            .map(|rule| Self {
                name: rule.name.clone(),
                prefix: rule.prefix.clone(),
                base_path: rule.base_path.clone(),
            })
            .unwrap_or_else(|| Self::default_for(config))
    }

    pub fn is_default(&self) -> bool {
        self.name.is_empty()
    }

    /// Key under which the table for `lang` is cached, e.g. `sico-en`.
    pub fn cache_key(&self, lang: Lang) -> String {
        format!("{}{}", self.prefix, lang.code())
    }

    /// Where the table for `lang` is served from, e.g. `/i18n/sico-en.json`.
    pub fn table_url(&self, lang: Lang) -> String {
        format!("{}{}{}.json", self.base_path, self.prefix, lang.code())
    }
}
