use dioxus::prelude::*;

use crate::{t, Tables};

#[component]
pub fn Footer(tables: Tables) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                p { class: "mb-0",
                    "© Advansys. "
                    span { "data-i18n": "footer.rights", {t(tables, "footer.rights")} }
                }
                a { class: "back-to-top", href: "#page-top",
                    span { "data-i18n": "footer.top", {t(tables, "footer.top")} }
                }
            }
        }
    }
}
