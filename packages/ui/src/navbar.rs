use dioxus::prelude::*;

use crate::{t, Tables};

/// One entry of the collapsible menu.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub href: String,
    pub key: String,
}

impl NavItem {
    pub fn new(href: &str, key: &str) -> Self {
        Self {
            href: href.to_string(),
            key: key.to_string(),
        }
    }
}

#[component]
pub fn SkipLink(tables: Tables) -> Element {
    rsx! {
        a { class: "skip-link", href: "#content", "data-i18n": "a11y.skip", {t(tables, "a11y.skip")} }
    }
}

/// Fixed top bar. The language controls appear twice: next to the toggler
/// on small screens and inside the menu on large ones.
#[component]
pub fn Navbar(tables: Tables, brand_href: String, items: Vec<NavItem>) -> Element {
    rsx! {
        nav { id: "mainNav", class: "navbar navbar-expand-lg fixed-top",
            div { class: "container",
                a { class: "navbar-brand", href: "{brand_href}",
                    span { class: "brand-mark" }
                    "Advansys"
                }

                div { class: "lang-toggle d-lg-none",
                    LangButton { id: "langEsMobile", label: "ES" }
                    LangButton { id: "langEnMobile", label: "EN" }
                }

                button {
                    class: "navbar-toggler collapsed",
                    r#type: "button",
                    "data-bs-toggle": "collapse",
                    "data-bs-target": "#navbarContent",
                    "aria-controls": "navbarContent",
                    "aria-expanded": "false",
                    span { class: "visually-hidden", "data-i18n": "nav.menu", {t(tables, "nav.menu")} }
                    span { class: "navbar-toggler-icon" }
                }

                div { id: "navbarContent", class: "collapse navbar-collapse",
                    ul { class: "navbar-nav ms-auto",
                        for item in items {
                            li { key: "{item.href}", class: "nav-item",
                                a {
                                    class: "nav-link",
                                    href: "{item.href}",
                                    "data-i18n": "{item.key}",
                                    {t(tables, &item.key)}
                                }
                            }
                        }
                    }
                    div { class: "lang-toggle d-none d-lg-flex",
                        LangButton { id: "langEs", label: "ES" }
                        LangButton { id: "langEn", label: "EN" }
                    }
                }
            }
        }
    }
}

#[component]
fn LangButton(id: &'static str, label: &'static str) -> Element {
    rsx! {
        a { id, class: "lang-btn", href: "#", role: "button", {label} }
    }
}
