use colloquy_api::{ApiClient, Session};
use colloquy_engine::models::ChatSummary;
use dioxus::prelude::*;
use uuid::Uuid;

use super::spinner::Spinner;

/// Lists the user's chats; clicking an entry opens it.
#[component]
pub fn ChatHistoryScreen(session: Session, on_open: Callback<Uuid>) -> Element {
    let client = use_context::<ApiClient>();
    let mut history = use_signal(Vec::<ChatSummary>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_future(move || {
        let client = client.clone();
        let session = session.clone();
        async move {
            match client.chat_history(session.tokens()).await {
                Ok(chats) => history.set(chats),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    rsx! {
        div { class: "screen chat-history",
            h2 { "Chat History" }
            if loading() {
                div { class: "spinner-row", Spinner {} }
            } else {
                if let Some(message) = error() {
                    p { class: "error-text", "{message}" }
                }
                div { class: "history-list",
                    for chat in history() {
                        div {
                            key: "{chat.uuid}",
                            class: "history-entry",
                            onclick: move |_| on_open.call(chat.uuid),
                            p { class: "history-title", "{chat.title}" }
                        }
                    }
                }
            }
        }
    }
}
