use dioxus::prelude::*;

use crate::{t, Tables};

/// A required input of the contact form. `key` is the placeholder's
/// translation key.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactField {
    pub name: String,
    pub input_type: String,
    pub key: String,
    pub multiline: bool,
}

impl ContactField {
    pub fn input(name: &str, input_type: &str, key: &str) -> Self {
        Self {
            name: name.to_string(),
            input_type: input_type.to_string(),
            key: key.to_string(),
            multiline: false,
        }
    }

    pub fn textarea(name: &str, key: &str) -> Self {
        Self {
            multiline: true,
            ..Self::input(name, "text", key)
        }
    }
}

/// Contact section with a form that the browser validates before sending.
#[component]
pub fn Contact(tables: Tables, action: String, fields: Vec<ContactField>, children: Element) -> Element {
    rsx! {
        section { id: "contacto", class: "section",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "contact.title", {t(tables, "contact.title")} }
                {children}
                form {
                    class: "needs-validation",
                    action: "{action}",
                    method: "post",
                    novalidate: true,
                    for field in fields {
                        div { key: "{field.name}", class: "mb-3",
                            if field.multiline {
                                textarea {
                                    class: "form-control",
                                    name: "{field.name}",
                                    rows: "5",
                                    required: true,
                                    "data-i18n-placeholder": "{field.key}",
                                    placeholder: t(tables, &field.key),
                                }
                            } else {
                                input {
                                    class: "form-control",
                                    name: "{field.name}",
                                    r#type: "{field.input_type}",
                                    required: true,
                                    "data-i18n-placeholder": "{field.key}",
                                    placeholder: t(tables, &field.key),
                                }
                            }
                            div { class: "invalid-feedback", "data-i18n": "contact.invalid",
                                {t(tables, "contact.invalid")}
                            }
                        }
                    }
                    button { class: "btn btn-accent", r#type: "submit", "data-i18n": "contact.send",
                        {t(tables, "contact.send")}
                    }
                }
            }
        }
    }
}

/// Phone, mail and office cards shown above the main contact form.
#[component]
pub fn ContactCards() -> Element {
    let tables = Tables::Main;
    let cards = [
        ("contact.phone", "tel:+525555555555", "+52 55 5555 5555"),
        ("contact.mail", "mailto:contacto@advansys.mx", "contacto@advansys.mx"),
        ("contact.office", "https://maps.google.com/?q=Advansys", "Ciudad de México"),
    ];
    rsx! {
        div { class: "row g-3 mb-4",
            for (key, href, value) in cards {
                div { key: "{key}", class: "col-md-4",
                    div { class: "contact-card", tabindex: "0",
                        h3 { "data-i18n": key, {t(tables, key)} }
                        a { href, {value} }
                    }
                }
            }
        }
    }
}
