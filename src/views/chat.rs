use crate::chat::ChatLog;
use crate::mocks::SUGGESTED_QUESTIONS;
use crate::types::Sender;
use crate::views::shared::{format_message_timestamp, markdown_to_html};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::time::Duration;

/// Fixed artificial latency before the canned assistant reply appears.
const AI_REPLY_DELAY: Duration = Duration::from_secs(1);

#[component]
pub fn ChatView() -> Element {
    let chat = use_signal(ChatLog::new);
    let mut input = use_signal(String::new);
    let pending = use_signal(|| false);

    let mut send_message = {
        let mut chat = chat;
        let mut pending_signal = pending;
        let mut input_signal = input;
        move |text: String| {
            if pending_signal() {
                return;
            }
            let accepted = chat.with_mut(|log| log.push_user(&text));
            if !accepted {
                return;
            }
            input_signal.set(String::new());
            pending_signal.set(true);
            spawn(async move {
                tokio::time::sleep(AI_REPLY_DELAY).await;
                chat.with_mut(|log| log.push_ai_reply());
                pending_signal.set(false);
            });
        }
    };

    let messages_snapshot = chat.with(|log| log.messages().to_vec());

    rsx! {
        div { class: "main-container chat-layout",
            div { class: "chat-wrap",
                div { class: "chat-header",
                    span { class: "chat-header-glyph", "\u{1F916}" }
                    h3 { "Chat with Your Knowledge" }
                }
                div { id: "chat-list", class: "chat-list",
                    for msg in messages_snapshot.iter() {
                        div {
                            key: "{msg.id}",
                            class: format_args!(
                                "message-row {}",
                                match msg.sender { Sender::User => "user", Sender::Ai => "ai" }
                            ),
                            if msg.sender == Sender::Ai {
                                div { class: "avatar ai", "\u{1F9E0}" }
                            }
                            div { class: "message-stack",
                                div {
                                    class: format_args!(
                                        "bubble {}",
                                        match msg.sender { Sender::User => "user", Sender::Ai => "ai" }
                                    ),
                                    if msg.sender == Sender::Ai {
                                        AiBubble { content: msg.text.clone() }
                                    } else {
                                        "{msg.text}"
                                    }
                                }
                                if let Some(ts) = format_message_timestamp(msg.timestamp) {
                                    div {
                                        class: format_args!(
                                            "message-meta {}",
                                            match msg.sender { Sender::User => "align-end", Sender::Ai => "align-start" }
                                        ),
                                        span { class: "message-timestamp", "{ts}" }
                                    }
                                }
                            }
                            if msg.sender == Sender::User {
                                div { class: "avatar user", "\u{1F464}" }
                            }
                        }
                    }
                    if pending() {
                        div { class: "message-row ai",
                            div { class: "avatar ai", "\u{1F9E0}" }
                            div { class: "shimmer-line",
                                span { class: "shimmer-text", "Thinking…" }
                            }
                        }
                    }
                }
                form { class: "composer",
                    div { class: "composer-inner hstack",
                        textarea {
                            rows: "1",
                            placeholder: "Ask about your knowledge...",
                            value: "{input}",
                            oninput: move |ev| input.set(ev.value()),
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    let text = input();
                                    send_message(text);
                                }
                            },
                            autofocus: true,
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: pending() || input().trim().is_empty(),
                            onclick: move |_| {
                                let text = input();
                                send_message(text);
                            },
                            "Send"
                        }
                    }
                }
            }
            div { class: "chat-sidebar",
                h3 { class: "section-title", "Suggested Questions" }
                div { class: "suggestion-list",
                    for question in SUGGESTED_QUESTIONS.iter() {
                        button {
                            class: "btn btn-ghost suggestion",
                            r#type: "button",
                            onclick: move |_| input.set(question.to_string()),
                            "{question}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AiBubble(content: String) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        div { class: "bubble-controls",
            button { class: "action-btn", title: "Copy", onclick: on_copy, "Copy" }
        }
        div { class: "md", dangerous_inner_html: "{content_html}" }
    }
}
