use colloquy_api::{ApiClient, Session};
use dioxus::events::Key;
use dioxus::prelude::*;
use uuid::Uuid;

use super::spinner::Spinner;

/// Creates a chat from a title and opens it.
#[component]
pub fn NewChatScreen(session: Session, on_created: Callback<Uuid>) -> Element {
    let client = use_context::<ApiClient>();
    let mut title = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let create = Callback::new(move |_: ()| {
        let name = title().trim().to_string();
        if name.is_empty() || busy() {
            return;
        }
        busy.set(true);
        error.set(None);
        let client = client.clone();
        let session = session.clone();
        spawn(async move {
            match client.create_chat(session.tokens(), &name).await {
                Ok(chat) => on_created.call(chat.uuid),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    });

    rsx! {
        div { class: "screen new-chat",
            h2 { "New Chat" }
            if let Some(message) = error() {
                p { class: "error-text", "{message}" }
            }
            input {
                class: "text-input",
                r#type: "text",
                placeholder: "Chat title...",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.key() == Key::Enter {
                        evt.prevent_default();
                        create.call(());
                    }
                },
            }
            button {
                class: "submit-button",
                disabled: busy(),
                onclick: move |_| create.call(()),
                if busy() {
                    Spinner {}
                } else {
                    "Create Chat"
                }
            }
        }
    }
}
