use dioxus::prelude::*;

use super::spinner::Spinner;

/// Values collected by the shared auth form. Name fields stay empty unless
/// the form collects them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthSubmit {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Shared email/password form driving both the login and signup screens.
#[component]
pub fn AuthForm(
    title: String,
    button_label: String,
    collect_names: bool,
    busy: bool,
    error: Option<String>,
    on_submit: Callback<AuthSubmit>,
) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);

    rsx! {
        div { class: "auth-form",
            h2 { "{title}" }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(AuthSubmit {
                        email: email(),
                        password: password(),
                        first_name: first_name(),
                        last_name: last_name(),
                    });
                },
                div { class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if collect_names {
                    div { class: "form-field",
                        label { r#for: "first-name", "First Name" }
                        input {
                            id: "first-name",
                            r#type: "text",
                            value: "{first_name}",
                            oninput: move |evt| first_name.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "last-name", "Last Name" }
                        input {
                            id: "last-name",
                            r#type: "text",
                            value: "{last_name}",
                            oninput: move |evt| last_name.set(evt.value()),
                        }
                    }
                }
                if let Some(message) = error {
                    p { class: "error-text", "{message}" }
                }
                button { class: "submit-button", r#type: "submit", disabled: busy,
                    if busy {
                        Spinner {}
                    } else {
                        "{button_label}"
                    }
                }
            }
        }
    }
}
