use colloquy_api::{ApiClient, Session};
use dioxus::prelude::*;

use super::auth_form::{AuthForm, AuthSubmit};

#[component]
pub fn LoginScreen(on_authenticated: Callback<Session>, on_switch: Callback<()>) -> Element {
    let client = use_context::<ApiClient>();
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_submit = Callback::new(move |submit: AuthSubmit| {
        if busy() {
            return;
        }
        busy.set(true);
        error.set(None);
        let client = client.clone();
        spawn(async move {
            match Session::login(&client, &submit.email, &submit.password).await {
                Ok(session) => on_authenticated.call(session),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    });

    rsx! {
        AuthForm {
            title: "Login",
            button_label: "Login",
            collect_names: false,
            busy: busy(),
            error: error(),
            on_submit: handle_submit,
        }
        p { class: "auth-switch",
            "Need an account? "
            button { class: "link-button", onclick: move |_| on_switch.call(()), "Sign Up" }
        }
    }
}
