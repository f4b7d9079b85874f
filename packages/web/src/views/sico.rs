use dioxus::prelude::*;
use ui::{Contact, ContactField, Features, Footer, Hero, NavItem, Navbar, Plans, SkipLink, Tables};

/// Product page for SICO. Served under `/sico`, which selects the `sico-`
/// translation tables in the browser.
#[component]
pub fn Sico() -> Element {
    let tables = Tables::Sico;
    let items = vec![
        NavItem::new("#inicio", "nav.home"),
        NavItem::new("#modulos", "nav.features"),
        NavItem::new("#planes", "nav.plans"),
        NavItem::new("#contacto", "nav.contact"),
        NavItem::new("/", "nav.back"),
    ];
    let fields = vec![
        ContactField::input("name", "text", "contact.name"),
        ContactField::input("email", "email", "contact.email"),
        ContactField::input("company", "text", "contact.company"),
    ];

    rsx! {
        div { id: "page-top",
            SkipLink { tables }
            Navbar { tables, brand_href: "/", items }
            main { id: "content",
                Hero { tables, section_id: "inicio", cta_href: "#contacto" }
                Features {}
                Plans {}
                Contact { tables, action: "/sico/demo", fields,
                    p { class: "section-subtitle", "data-i18n": "hero.subtitle",
                        {ui::t(tables, "hero.subtitle")}
                    }
                }
            }
            Footer { tables }
        }
    }
}
