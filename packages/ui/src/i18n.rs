use std::sync::OnceLock;

use site::{I18nConfig, Lang, PageVariant, TranslationTable};

const MAIN_ES: &str = include_str!("../../web/public/i18n/es.json");
const SICO_ES: &str = include_str!("../../web/public/i18n/sico-es.json");

/// Which family of translation tables a component reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tables {
    Main,
    Sico,
}

impl Tables {
    /// A path the family is served under.
    pub fn route(self) -> &'static str {
        match self {
            Tables::Main => "/",
            Tables::Sico => "/sico",
        }
    }

    /// Cache key the browser resolver uses for this family in `lang`,
    /// following the variant rules in `config`.
    pub fn cache_key(self, config: &I18nConfig, lang: Lang) -> String {
        PageVariant::resolve(self.route(), config).cache_key(lang)
    }

    fn raw(self) -> &'static str {
        match self {
            Tables::Main => MAIN_ES,
            Tables::Sico => SICO_ES,
        }
    }

    fn table(self) -> &'static TranslationTable {
        static MAIN: OnceLock<TranslationTable> = OnceLock::new();
        static SICO: OnceLock<TranslationTable> = OnceLock::new();
        let cell = match self {
            Tables::Main => &MAIN,
            Tables::Sico => &SICO,
        };
        cell.get_or_init(|| parse(self))
    }
}

fn parse(tables: Tables) -> TranslationTable {
    TranslationTable::from_json(tables.raw()).unwrap_or_else(|e| {
        tracing::error!("ui: bundled {tables:?} table is invalid: {e}");
        TranslationTable::default()
    })
}

/// Text for `key` in the language the server renders. Missing keys render
/// as the key itself so they are easy to spot.
pub fn t(tables: Tables, key: &str) -> String {
    tables
        .table()
        .resolve(key)
        .unwrap_or_else(|| key.to_string())
}

/// The Spanish tables compiled into the binary, keyed the way a resolver
/// built from `config` caches them. Registering them saves a fetch for
/// Spanish.
pub fn bundled_tables(config: &I18nConfig) -> Vec<(String, TranslationTable)> {
    [Tables::Main, Tables::Sico]
        .into_iter()
        .map(|tables| (tables.cache_key(config, Lang::Es), parse(tables)))
        .collect()
}
