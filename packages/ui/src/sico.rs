use dioxus::prelude::*;

use crate::{t, Tables};

const MODULES: [(&str, &str); 3] = [
    ("inventory", "/img/sico/inventory.webp"),
    ("billing", "/img/sico/billing.webp"),
    ("reports", "/img/sico/reports.webp"),
];

#[component]
pub fn Features() -> Element {
    let tables = Tables::Sico;
    rsx! {
        section { id: "modulos", class: "section",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "features.title", {t(tables, "features.title")} }
                div { class: "row g-4",
                    for (name, image) in MODULES {
                        div { key: "{name}", class: "col-md-4", "data-aos": "fade-up",
                            article { class: "service-card", tabindex: "0",
                                img { "data-src": image, alt: "", width: "96", height: "96" }
                                h3 { "data-i18n": "features.{name}.title",
                                    {t(tables, &format!("features.{name}.title"))}
                                }
                                p { "data-i18n": "features.{name}.text",
                                    {t(tables, &format!("features.{name}.text"))}
                                }
                                a { href: "#contacto", "data-i18n": "hero.cta", {t(tables, "hero.cta")} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Plans() -> Element {
    let tables = Tables::Sico;
    rsx! {
        section { id: "planes", class: "section section-alt",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "plans.title", {t(tables, "plans.title")} }
                div { class: "row g-4",
                    for plan in ["basic", "pro"] {
                        div { key: "{plan}", class: "col-md-6",
                            div { class: "plan-card",
                                h3 { "data-i18n": "plans.{plan}", {t(tables, &format!("plans.{plan}"))} }
                                p { class: "plan-users",
                                    span { "data-i18n": "plans.users", {t(tables, "plans.users")} }
                                    " +"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
