//! Localization engine.

mod localizer;
mod prefs;
mod source;
mod table;
mod variant;

pub use localizer::{ApplyReport, Localizer};
pub use prefs::{MemoryPreferences, PreferenceStore};
pub use source::{HttpFetcher, TableFetcher, TableResolver};
pub use table::TranslationTable;
pub use variant::PageVariant;
