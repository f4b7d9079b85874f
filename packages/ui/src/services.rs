use dioxus::prelude::*;

use crate::{t, Tables};

const SERVICES: [(&str, &str); 3] = [
    ("cloud", "/img/services/cloud.webp"),
    ("software", "/img/services/software.webp"),
    ("security", "/img/services/security.webp"),
];

const TECHNOLOGIES: [(&str, &str, &str); 6] = [
    ("AWS", "/img/tech/aws.svg", "https://aws.amazon.com"),
    ("Azure", "/img/tech/azure.svg", "https://azure.microsoft.com"),
    ("Linux", "/img/tech/linux.svg", "https://www.kernel.org"),
    ("PostgreSQL", "/img/tech/postgresql.svg", "https://www.postgresql.org"),
    ("Docker", "/img/tech/docker.svg", "https://www.docker.com"),
    ("Rust", "/img/tech/rust.svg", "https://www.rust-lang.org"),
];

#[component]
pub fn Services() -> Element {
    let tables = Tables::Main;
    rsx! {
        section { id: "servicios", class: "section",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "services.title", {t(tables, "services.title")} }
                p { class: "section-subtitle", "data-i18n": "services.subtitle",
                    {t(tables, "services.subtitle")}
                }
                div { class: "row g-4",
                    for (name, image) in SERVICES {
                        div { key: "{name}", class: "col-md-4", "data-aos": "fade-up",
                            article { class: "service-card", tabindex: "0",
                                img { "data-src": image, alt: "", width: "96", height: "96" }
                                h3 { "data-i18n": "services.{name}.title",
                                    {t(tables, &format!("services.{name}.title"))}
                                }
                                p { "data-i18n": "services.{name}.text",
                                    {t(tables, &format!("services.{name}.text"))}
                                }
                                a { href: "#contacto", "data-i18n": "services.more", {t(tables, "services.more")} }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Technologies() -> Element {
    let tables = Tables::Main;
    rsx! {
        section { id: "tecnologias", class: "section section-alt",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "technologies.title",
                    {t(tables, "technologies.title")}
                }
                p { class: "section-subtitle", "data-i18n": "technologies.subtitle",
                    {t(tables, "technologies.subtitle")}
                }
                div { class: "row g-3",
                    for (name, logo, url) in TECHNOLOGIES {
                        div { key: "{name}", class: "col-4 col-md-2",
                            div { class: "tech-card", tabindex: "0",
                                a { href: url, target: "_blank", rel: "noopener",
                                    img { "data-src": logo, alt: name, width: "64", height: "64" }
                                    span { {name} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
