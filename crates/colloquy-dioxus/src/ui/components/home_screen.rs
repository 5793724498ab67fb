use colloquy_engine::models::User;
use dioxus::prelude::*;

/// Landing screen after sign-in.
#[component]
pub fn HomeScreen(user: User) -> Element {
    let greeting = if user.first_name.is_empty() {
        "Welcome back".to_string()
    } else {
        format!("Welcome back, {}", user.first_name)
    };

    rsx! {
        div { class: "screen home-screen",
            h2 { "{greeting}" }
            p { "Pick a chat from your history, or start a new one from the sidebar." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_greets_by_first_name() {
        let mut dom = VirtualDom::new_with_props(
            HomeScreen,
            HomeScreenProps {
                user: User {
                    email: "ada@example.com".to_string(),
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                },
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Welcome back, Ada"));
    }
}
