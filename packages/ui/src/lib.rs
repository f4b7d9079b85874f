//! This crate contains the server-rendered markup of the site. Every visible
//! string carries its translation key so the browser can swap languages.

mod i18n;
pub use i18n::{bundled_tables, t, Tables};

mod navbar;
pub use navbar::{NavItem, Navbar, SkipLink};

mod hero;
pub use hero::Hero;

mod services;
pub use services::{Services, Technologies};

mod contact;
pub use contact::{Contact, ContactCards, ContactField};

mod sico;
pub use sico::{Features, Plans};

mod footer;
pub use footer::Footer;
