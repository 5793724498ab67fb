use colloquy_engine::render::{Block, Span, parse_message};
use dioxus::prelude::*;

/// Renders one message's text as its structured blocks.
///
/// The block sequence is recomputed from the text on every render pass and
/// never cached; parsing is pure, so equal text always renders identically.
#[component]
pub fn MessageContent(text: String) -> Element {
    let blocks = parse_message(&text);

    rsx! {
        for block in blocks.into_iter() {
            {render_block(block)}
        }
    }
}

fn render_block(block: Block) -> Element {
    match block {
        Block::Heading { level, text } => render_heading(level, text),
        Block::List { ordered, items } => render_list(ordered, items),
        Block::LinkParagraph { spans } | Block::Paragraph { spans } => rsx! {
            p { class: "message-paragraph",
                for span in spans.into_iter() {
                    {render_span(span)}
                }
            }
        },
    }
}

fn render_heading(level: u8, text: String) -> Element {
    match level {
        1 => rsx! { h1 { class: "message-heading", "{text}" } },
        2 => rsx! { h2 { class: "message-heading", "{text}" } },
        _ => rsx! { h3 { class: "message-heading", "{text}" } },
    }
}

fn render_list(ordered: bool, items: Vec<String>) -> Element {
    if ordered {
        rsx! {
            ol { class: "message-list",
                for (i, item) in items.into_iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }
        }
    } else {
        rsx! {
            ul { class: "message-list",
                for (i, item) in items.into_iter().enumerate() {
                    li { key: "{i}", "{item}" }
                }
            }
        }
    }
}

fn render_span(span: Span) -> Element {
    match span {
        Span::Text(text) => rsx! { span { "{text}" } },
        Span::Bold(text) => rsx! { strong { "{text}" } },
        Span::Link { label, url } => {
            let href = url.clone();
            rsx! {
                a {
                    class: "message-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        // The webview won't open a new browsing context
                        // itself; hand the URL to the system browser.
                        if let Err(e) = open_url(&href) {
                            log::warn!("failed to open URL {href}: {e}");
                        }
                    },
                    "{label}"
                }
            }
        }
    }
}

/// Opens a URL in the system's default browser.
fn open_url(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", url])
            .spawn()?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_message(text: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            MessageContent,
            MessageContentProps {
                text: text.to_string(),
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_heading_levels_map_to_heading_elements() {
        let html = render_message("# One\n\n## Two\n\n### Three");

        assert!(html.contains("<h1"));
        assert!(html.contains("<h2"));
        assert!(html.contains("<h3"));
        assert!(html.contains("One"));
        assert!(!html.contains("# One"));
    }

    #[test]
    fn test_bullet_list_renders_as_ul() {
        let html = render_message("- one\n- two");

        assert!(html.contains("<ul"));
        assert!(html.contains("<li"));
        assert!(html.contains("one"));
        assert!(!html.contains("- one"));
    }

    #[test]
    fn test_numbered_list_renders_as_ol() {
        let html = render_message("1. first\n2. second");

        assert!(html.contains("<ol"));
        assert!(html.contains("first"));
        assert!(!html.contains("1. first"));
    }

    #[test]
    fn test_bold_renders_as_strong() {
        let html = render_message("Hello **world**!");

        assert!(html.contains("<strong>world</strong>"));
        assert!(html.contains("Hello "));
    }

    #[test]
    fn test_link_renders_as_external_anchor() {
        let html = render_message("See [docs](http://example.com) now");

        assert!(html.contains(r#"href="http://example.com""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("docs"));
    }

    #[test]
    fn test_bold_markers_stay_literal_next_to_links() {
        let html = render_message("**loud** [a](http://b)");

        assert!(html.contains("**loud**"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_plain_text_renders_as_paragraph() {
        let html = render_message("just words");

        assert!(html.contains("<p"));
        assert!(html.contains("just words"));
    }
}
