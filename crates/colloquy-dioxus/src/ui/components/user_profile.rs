use colloquy_api::{ApiClient, Session};
use colloquy_engine::models::User;
use dioxus::prelude::*;

use super::spinner::Spinner;

/// Profile screen: avatar initials, read-only view, and an edit mode that
/// PATCHes the name fields. The profile is refetched on mount so the screen
/// always shows the server's copy; updates flow back to the app through
/// `on_user_updated`.
#[component]
pub fn UserProfileScreen(session: Session, on_user_updated: Callback<User>) -> Element {
    let client = use_context::<ApiClient>();
    let mut email = use_signal(String::new);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut edit_mode = use_signal(|| false);

    use_future({
        let client = client.clone();
        let session = session.clone();
        move || {
            let client = client.clone();
            let session = session.clone();
            async move {
                match client.user_info(session.tokens()).await {
                    Ok(user) => {
                        email.set(user.email.clone());
                        first_name.set(user.first_name.clone());
                        last_name.set(user.last_name.clone());
                        on_user_updated.call(user);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            }
        }
    });

    let save = Callback::new(move |_: ()| {
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);
        let client = client.clone();
        let session = session.clone();
        spawn(async move {
            match client
                .update_user_info(session.tokens(), &first_name(), &last_name())
                .await
            {
                Ok(user) => {
                    email.set(user.email.clone());
                    first_name.set(user.first_name.clone());
                    last_name.set(user.last_name.clone());
                    on_user_updated.call(user);
                    edit_mode.set(false);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    });

    let initials = User {
        email: email(),
        first_name: first_name(),
        last_name: last_name(),
    }
    .initials();

    rsx! {
        div { class: "screen user-profile",
            div { class: "profile-header",
                div { class: "avatar", "{initials}" }
                div {
                    h2 { "{first_name} {last_name}" }
                    p { class: "profile-email", "{email}" }
                }
            }
            if loading() {
                div { class: "spinner-row", Spinner {} }
            } else {
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        if edit_mode() {
                            save.call(());
                        }
                    },
                    div { class: "form-field",
                        label { r#for: "first-name", "First Name" }
                        input {
                            id: "first-name",
                            r#type: "text",
                            value: "{first_name}",
                            disabled: !edit_mode(),
                            oninput: move |evt| first_name.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { r#for: "last-name", "Last Name" }
                        input {
                            id: "last-name",
                            r#type: "text",
                            value: "{last_name}",
                            disabled: !edit_mode(),
                            oninput: move |evt| last_name.set(evt.value()),
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "error-text", "{message}" }
                    }
                    if edit_mode() {
                        button { class: "submit-button", r#type: "submit", "Update Information" }
                    } else {
                        button {
                            class: "edit-button",
                            r#type: "button",
                            onclick: move |_| edit_mode.set(true),
                            "Edit Information"
                        }
                    }
                }
            }
        }
    }
}
