use chrono::Utc;
use colloquy_api::{ApiClient, Session};
use colloquy_engine::models::{Chat, Message, Sender};
use dioxus::events::Key;
use dioxus::prelude::*;
use uuid::Uuid;

use super::message_content::MessageContent;
use super::spinner::Spinner;

/// One chat: its message log plus the input row.
///
/// Sending is optimistic: the drafted message appears immediately and is
/// replaced, matched by timestamp, with the server's authoritative copy
/// when the send completes.
#[component]
pub fn ChatScreen(session: Session, chat_id: Uuid) -> Element {
    let client = use_context::<ApiClient>();
    let mut chat = use_signal(|| None::<Chat>);
    let mut draft = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    use_future({
        let client = client.clone();
        let session = session.clone();
        move || {
            let client = client.clone();
            let session = session.clone();
            async move {
                match client.chat(session.tokens(), chat_id).await {
                    Ok(fetched) => chat.set(Some(fetched)),
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            }
        }
    });

    let send = Callback::new(move |_: ()| {
        let content = draft().trim().to_string();
        if content.is_empty() || sending() {
            return;
        }
        sending.set(true);
        error.set(None);

        let provisional = Message {
            sender: Sender::Human,
            content: content.clone(),
            timestamp: Utc::now(),
        };
        let sent_at = provisional.timestamp;
        if let Some(current) = chat.write().as_mut() {
            current.messages.push(provisional);
        }
        draft.set(String::new());

        let client = client.clone();
        let session = session.clone();
        spawn(async move {
            match client.send_message(session.tokens(), chat_id, &content).await {
                Ok(authoritative) => {
                    if let Some(current) = chat.write().as_mut() {
                        if let Some(slot) = current
                            .messages
                            .iter_mut()
                            .find(|m| m.timestamp == sent_at)
                        {
                            *slot = authoritative;
                        }
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            sending.set(false);
        });
    });

    let current_chat = chat.read().clone();
    let heading = current_chat
        .as_ref()
        .map(|c| c.title.clone())
        .unwrap_or_else(|| "Chat".to_string());

    rsx! {
        div { class: "chat-screen",
            div { class: "chat-header",
                h2 { "{heading}" }
            }
            if loading() {
                div { class: "spinner-row", Spinner {} }
            } else {
                div { class: "chat-messages",
                    if let Some(current) = current_chat {
                        for (i, msg) in current.messages.into_iter().enumerate() {
                            div {
                                key: "{i}",
                                class: "message {msg.sender}",
                                p { class: "message-sender", "{msg.sender}" }
                                MessageContent { text: msg.content }
                            }
                        }
                    }
                }
                if let Some(message) = error() {
                    p { class: "error-text", "{message}" }
                }
                div { class: "chat-input-row",
                    input {
                        class: "text-input",
                        r#type: "text",
                        placeholder: "Type a message...",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                evt.prevent_default();
                                send.call(());
                            }
                        },
                    }
                    button {
                        class: "send-button",
                        disabled: sending(),
                        onclick: move |_| send.call(()),
                        if sending() {
                            Spinner {}
                        } else {
                            "Send"
                        }
                    }
                }
            }
        }
    }
}
