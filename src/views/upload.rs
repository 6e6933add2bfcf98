use crate::upload::{UPLOAD_CAP, apply_upload};
use crate::views::shared::file_glyph;
use dioxus::prelude::*;
use std::time::Duration;

/// Fixed artificial "processing" delay before names land in the list.
const PROCESSING_DELAY: Duration = Duration::from_millis(800);

#[component]
pub fn UploadView() -> Element {
    let files = use_signal(Vec::<String>::new);
    let mut dragging = use_signal(|| false);
    let processing = use_signal(|| false);

    let mut start_upload = {
        let mut files = files;
        let mut processing_signal = processing;
        move || {
            if processing_signal() {
                return;
            }
            processing_signal.set(true);
            spawn(async move {
                tokio::time::sleep(PROCESSING_DELAY).await;
                // No selection is forwarded; the canned demo names stand in.
                files.with_mut(|list| apply_upload(list, Vec::new()));
                processing_signal.set(false);
            });
        }
    };

    let uploaded = files();

    rsx! {
        div { class: "main-container",
            div {
                class: format_args!("upload-zone {}", if dragging() { "dragging" } else { "" }),
                ondragover: move |ev| {
                    ev.prevent_default();
                    dragging.set(true);
                },
                ondragleave: move |_| dragging.set(false),
                ondrop: move |ev| {
                    ev.prevent_default();
                    dragging.set(false);
                    start_upload();
                },
                div { class: "upload-zone-inner",
                    div { class: "upload-glyph", "\u{2B06}" }
                    h3 { "Upload Your Knowledge" }
                    p { class: "text-muted", "Drag & drop files here, or click to browse" }
                    p { class: "text-faint", "Supports: PDF, TXT, DOCX, MD files" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: processing(),
                        onclick: move |_| start_upload(),
                        if processing() { "Processing…" } else { "Choose Files" }
                    }
                }
            }

            if !uploaded.is_empty() {
                div { class: "uploaded-files",
                    h4 { class: "section-title", "Uploaded Files" }
                    for (index, name) in uploaded.iter().enumerate() {
                        div { class: "file-row", key: "{index}",
                            span { class: "file-glyph", {file_glyph(name)} }
                            div { class: "file-details",
                                p { class: "file-name", "{name}" }
                                p { class: "text-muted", "Processing complete" }
                            }
                            span { class: "file-check", "\u{2713}" }
                        }
                    }
                    if uploaded.len() >= UPLOAD_CAP {
                        p { class: "text-faint", "Upload limit reached ({UPLOAD_CAP} files)." }
                    }
                }
            }

            div { class: "card-grid three-columns",
                StatCard {
                    title: "Processing Power",
                    body: "Advanced AI analyzes your documents to extract key concepts and relationships",
                    value: format!("{} Files", uploaded.len()),
                    caption: "Processed this week",
                }
                StatCard {
                    title: "Knowledge Nodes",
                    body: "Unique concepts and ideas extracted from your documents",
                    value: "47 Nodes".to_string(),
                    caption: "Connected concepts",
                }
                StatCard {
                    title: "Smart Connections",
                    body: "AI-discovered relationships between different topics",
                    value: "23 Links".to_string(),
                    caption: "Cross-references found",
                }
            }
        }
    }
}

#[component]
fn StatCard(title: &'static str, body: &'static str, value: String, caption: &'static str) -> Element {
    rsx! {
        div { class: "card",
            h3 { class: "section-title", "{title}" }
            p { class: "text-muted", "{body}" }
            div { class: "stat-value", "{value}" }
            div { class: "text-muted", "{caption}" }
        }
    }
}
