use dioxus::prelude::*;
use ui::{Contact, ContactCards, ContactField, Footer, Hero, NavItem, Navbar, Services, SkipLink, Tables, Technologies};

#[component]
pub fn Home() -> Element {
    let tables = Tables::Main;
    let items = vec![
        NavItem::new("#inicio", "nav.home"),
        NavItem::new("#servicios", "nav.services"),
        NavItem::new("#tecnologias", "nav.technologies"),
        NavItem::new("#contacto", "nav.contact"),
        NavItem::new("/sico", "nav.sico"),
    ];
    let fields = vec![
        ContactField::input("name", "text", "contact.name"),
        ContactField::input("email", "email", "contact.email"),
        ContactField::textarea("message", "contact.message"),
    ];

    rsx! {
        div { id: "page-top",
            SkipLink { tables }
            Navbar { tables, brand_href: "#page-top", items }
            main { id: "content",
                Hero { tables, section_id: "inicio", cta_href: "#contacto" }
                Services {}
                Technologies {}
                Contact { tables, action: "/contact", fields,
                    p { class: "section-subtitle", "data-i18n": "contact.subtitle",
                        {ui::t(tables, "contact.subtitle")}
                    }
                    ContactCards {}
                }
            }
            Footer { tables }
        }
    }
}
