//! This crate contains the browser-side behavior of the marketing site:
//! the localization engine and the page interaction handlers.

pub mod config;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod interactions;
pub mod task;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;


pub use config::{AppMode, I18nConfig, PageConfig, SiteConfig};
pub use error::LocalizationError;
pub use i18n::{
    ApplyReport, Localizer, MemoryPreferences, PageVariant, PreferenceStore, TableFetcher,
    TableResolver, TranslationTable,
};
pub use interactions::{InitSummary, PageController};
pub use types::Lang;
