use crate::generate;
use crate::types::{Mindmap, MindmapNode, Summary};
use crate::views::shared::{Toast, format_artifact_date, show_toast};
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LibraryTab {
    Summaries,
    Mindmaps,
}

#[component]
pub fn LibraryView(toast: Signal<Option<Toast>>) -> Element {
    let documents = use_signal(generate::fetch_documents);
    let summaries = use_signal(generate::fetch_summaries);
    let mindmaps = use_signal(generate::fetch_mindmaps);
    let loading = use_signal(|| false);
    let mut active_tab = use_signal(|| LibraryTab::Summaries);

    let request_summary = {
        let mut summaries = summaries;
        let mut loading_signal = loading;
        move |document_id: String| {
            if loading_signal() {
                return;
            }
            loading_signal.set(true);
            spawn(async move {
                match generate::generate_summary(&document_id).await {
                    Ok(summary) => {
                        summaries.with_mut(|list| list.push(summary));
                        show_toast(
                            toast,
                            Toast::info(
                                "Summary Generated!",
                                "Your document summary has been created successfully.",
                            ),
                        );
                    }
                    Err(err) => {
                        show_toast(
                            toast,
                            Toast::error("Error", format!("Failed to generate summary: {err}")),
                        );
                    }
                }
                loading_signal.set(false);
            });
        }
    };

    let request_mindmap = {
        let mut mindmaps = mindmaps;
        let mut loading_signal = loading;
        move |document_id: String| {
            if loading_signal() {
                return;
            }
            loading_signal.set(true);
            spawn(async move {
                match generate::generate_mindmap(&document_id).await {
                    Ok(mindmap) => {
                        mindmaps.with_mut(|list| list.push(mindmap));
                        show_toast(
                            toast,
                            Toast::info(
                                "Mindmap Generated!",
                                "Your visual mindmap has been created successfully.",
                            ),
                        );
                    }
                    Err(err) => {
                        show_toast(
                            toast,
                            Toast::error("Error", format!("Failed to generate mindmap: {err}")),
                        );
                    }
                }
                loading_signal.set(false);
            });
        }
    };

    let docs = documents();
    let summary_list = summaries();
    let mindmap_list = mindmaps();
    let busy = loading();

    rsx! {
        div { class: "main-container library-layout",
            div { class: "library-sidebar",
                h3 { class: "section-title", "Your Documents" }
                for doc in docs.iter().cloned() {
                    div { class: "card doc-card", key: "{doc.id}",
                        p { class: "file-name", "{doc.name}" }
                        p { class: "text-muted", "{doc.kind} \u{2022} {doc.size} \u{2022} {doc.uploaded_at}" }
                        div { class: "hstack",
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                disabled: busy,
                                onclick: {
                                    let mut request_summary = request_summary;
                                    let doc_id = doc.id.clone();
                                    move |_| request_summary(doc_id.clone())
                                },
                                "Summary"
                            }
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                disabled: busy,
                                onclick: {
                                    let mut request_mindmap = request_mindmap;
                                    let doc_id = doc.id.clone();
                                    move |_| request_mindmap(doc_id.clone())
                                },
                                "Mindmap"
                            }
                        }
                    }
                }
                if busy {
                    p { class: "shimmer-text", "Generating…" }
                }
            }

            div { class: "library-content",
                div { class: "tabs sub-tabs",
                    button {
                        class: format_args!(
                            "tab {}",
                            if active_tab() == LibraryTab::Summaries { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| active_tab.set(LibraryTab::Summaries),
                        "Summaries"
                    }
                    button {
                        class: format_args!(
                            "tab {}",
                            if active_tab() == LibraryTab::Mindmaps { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| active_tab.set(LibraryTab::Mindmaps),
                        "Mindmaps"
                    }
                }

                match active_tab() {
                    LibraryTab::Summaries => rsx! {
                        div { class: "card-stack",
                            for summary in summary_list.iter().cloned() {
                                SummaryCard { summary }
                            }
                        }
                    },
                    LibraryTab::Mindmaps => rsx! {
                        div { class: "card-stack",
                            for mindmap in mindmap_list.iter().cloned() {
                                MindmapCard { mindmap }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn SummaryCard(summary: Summary) -> Element {
    let created = format_artifact_date(&summary.created_at);
    rsx! {
        div { class: "card",
            div { class: "card-heading",
                h3 { "{summary.title}" }
                span { class: "text-faint", "{created}" }
            }
            p { "{summary.content}" }
            h4 { class: "section-title", "Key Points" }
            ul { class: "key-points",
                for (index, point) in summary.key_points.iter().enumerate() {
                    li { key: "{index}", "{point}" }
                }
            }
        }
    }
}

#[component]
fn MindmapCard(mindmap: Mindmap) -> Element {
    let created = format_artifact_date(&mindmap.created_at);
    let connectors = mindmap_connectors(&mindmap.nodes);
    rsx! {
        div { class: "card",
            div { class: "card-heading",
                h3 { "{mindmap.title}" }
                span { class: "text-faint", "{created}" }
            }
            svg {
                class: "mindmap-canvas",
                view_box: "0 0 800 560",
                g { class: "mindmap-edges",
                    for (parent, child) in connectors.iter() {
                        line {
                            key: "{parent.id}-{child.id}",
                            x1: "{parent.x}",
                            y1: "{parent.y}",
                            x2: "{child.x}",
                            y2: "{child.y}",
                            class: "mindmap-edge",
                        }
                    }
                }
                g { class: "mindmap-nodes",
                    for node in mindmap.nodes.iter().cloned() {
                        MindmapNodeShape { node }
                    }
                }
            }
        }
    }
}

#[component]
fn MindmapNodeShape(node: MindmapNode) -> Element {
    let radius = match node.level {
        0 => 28.0,
        1 => 20.0,
        _ => 14.0,
    };
    let label_y = node.y - radius - 8.0;
    rsx! {
        g { class: "mindmap-node",
            circle {
                cx: "{node.x}",
                cy: "{node.y}",
                r: "{radius}",
                fill: "{node.color}",
            }
            text {
                x: "{node.x}",
                y: "{label_y}",
                text_anchor: "middle",
                class: "mindmap-node-label",
                "{node.label}"
            }
        }
    }
}

/// Parent→child line segments resolved from `children` ids. Dangling ids are
/// skipped; the data is authored, not derived.
fn mindmap_connectors(nodes: &[MindmapNode]) -> Vec<(MindmapNode, MindmapNode)> {
    let mut connectors = Vec::new();
    for parent in nodes {
        for child_id in &parent.children {
            if let Some(child) = nodes.iter().find(|n| &n.id == child_id) {
                connectors.push((parent.clone(), child.clone()));
            }
        }
    }
    connectors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectors_follow_children_references() {
        let mindmap = crate::mocks::mock_mindmap("doc");
        let connectors = mindmap_connectors(&mindmap.nodes);
        // root(3) + architectures(3) + applications(3) + techniques(3)
        assert_eq!(connectors.len(), 12);
        assert!(
            connectors
                .iter()
                .all(|(parent, child)| parent.level + 1 == child.level)
        );
    }

    #[test]
    fn dangling_child_ids_are_skipped() {
        let mut mindmap = crate::mocks::mock_mindmap("doc");
        mindmap.nodes[0].children.push("missing".into());
        let connectors = mindmap_connectors(&mindmap.nodes);
        assert_eq!(connectors.len(), 12);
    }
}
