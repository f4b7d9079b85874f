use dioxus::prelude::*;

use crate::{t, Tables};

#[component]
pub fn Hero(tables: Tables, section_id: String, cta_href: String) -> Element {
    rsx! {
        section { id: "{section_id}", class: "hero",
            div { class: "container", "data-aos": "fade-up",
                h1 {
                    class: "hero-title",
                    "data-i18n-html": "hero.title",
                    dangerous_inner_html: t(tables, "hero.title"),
                }
                p { class: "lead", "data-i18n": "hero.subtitle", {t(tables, "hero.subtitle")} }
                a { class: "btn btn-accent btn-lg", href: "{cta_href}", "data-i18n": "hero.cta",
                    {t(tables, "hero.cta")}
                }
            }
        }
    }
}
