use colloquy_api::{ApiClient, Session};
use colloquy_config::TokenStore;
use dioxus::prelude::*;
use uuid::Uuid;

use super::components::{
    ChatHistoryScreen, ChatScreen, HomeScreen, LoginScreen, NewChatScreen, SignupScreen,
    UserProfileScreen,
};

const APP_CSS: &str = include_str!("../assets/colloquy.css");

/// Which screen the app is showing. Navigation is plain view state; every
/// signed-in screen is reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Signup,
    Home,
    History,
    NewChat,
    Chat(Uuid),
    Profile,
}

#[component]
pub fn App(api_base_url: String) -> Element {
    let client = use_context_provider(move || ApiClient::new(api_base_url));
    let mut session = use_signal(|| None::<Session>);
    let mut view = use_signal(|| View::Login);

    // One-shot startup resume: revalidate persisted tokens, clearing the
    // store when the server rejects them.
    use_future(move || {
        let client = client.clone();
        async move {
            let store = TokenStore::default_store();
            let stored = match store.load() {
                Ok(stored) => stored,
                Err(e) => {
                    log::warn!("failed to read token store: {e}");
                    None
                }
            };
            let Some(tokens) = stored else { return };
            match Session::resume(&client, tokens).await {
                Ok(resumed) => {
                    view.set(View::Home);
                    session.set(Some(resumed));
                }
                Err(e) => {
                    log::warn!("stored tokens rejected: {e}");
                    if let Err(e) = store.clear() {
                        log::warn!("failed to clear token store: {e}");
                    }
                }
            }
        }
    });

    let on_authenticated = Callback::new(move |new_session: Session| {
        let store = TokenStore::default_store();
        if let Err(e) = store.save(new_session.tokens()) {
            log::warn!("failed to persist tokens: {e}");
        }
        view.set(View::Home);
        session.set(Some(new_session));
    });

    let on_logout = Callback::new(move |_: ()| {
        if let Err(e) = TokenStore::default_store().clear() {
            log::warn!("failed to clear token store: {e}");
        }
        session.set(None);
        view.set(View::Login);
    });

    let current_session = session.read().clone();

    rsx! {
        style { {APP_CSS} }
        if let Some(active) = current_session {
            div { class: "app-container",
                div { class: "sidebar",
                    h1 { class: "app-title", "colloquy" }
                    nav {
                        ul {
                            li {
                                button {
                                    class: "nav-link",
                                    onclick: move |_| view.set(View::Home),
                                    "Home"
                                }
                            }
                            li {
                                button {
                                    class: "nav-link",
                                    onclick: move |_| view.set(View::Profile),
                                    "Profile"
                                }
                            }
                            li {
                                button {
                                    class: "nav-link",
                                    onclick: move |_| view.set(View::NewChat),
                                    "New Chat"
                                }
                            }
                            li {
                                button {
                                    class: "nav-link",
                                    onclick: move |_| view.set(View::History),
                                    "Chat History"
                                }
                            }
                            li {
                                button {
                                    class: "logout-button",
                                    onclick: move |_| on_logout.call(()),
                                    "Logout"
                                }
                            }
                        }
                    }
                }
                div { class: "main-content", {signed_in_screen(view, active, session)} }
            }
        } else {
            div { class: "auth-container",
                if view() == View::Signup {
                    SignupScreen {
                        on_authenticated,
                        on_switch: Callback::new(move |_: ()| view.set(View::Login)),
                    }
                } else {
                    LoginScreen {
                        on_authenticated,
                        on_switch: Callback::new(move |_: ()| view.set(View::Signup)),
                    }
                }
            }
        }
    }
}

fn signed_in_screen(
    mut view: Signal<View>,
    active: Session,
    mut session: Signal<Option<Session>>,
) -> Element {
    match view() {
        View::History => rsx! {
            ChatHistoryScreen {
                session: active,
                on_open: Callback::new(move |uuid| view.set(View::Chat(uuid))),
            }
        },
        View::NewChat => rsx! {
            NewChatScreen {
                session: active,
                on_created: Callback::new(move |uuid| view.set(View::Chat(uuid))),
            }
        },
        View::Chat(id) => rsx! {
            ChatScreen { key: "{id}", session: active, chat_id: id }
        },
        View::Profile => rsx! {
            UserProfileScreen {
                session: active,
                on_user_updated: Callback::new(move |user| {
                    if let Some(current) = session.write().as_mut() {
                        current.set_user(user);
                    }
                }),
            }
        },
        // Login/Signup views are unreachable while a session exists.
        View::Home | View::Login | View::Signup => rsx! {
            HomeScreen { user: active.user().clone() }
        },
    }
}
