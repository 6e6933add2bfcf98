use crate::graph::{
    NODE_RADIUS, SCENE_HEIGHT, SCENE_WIDTH, edge_highlighted, hit_test, pulse, toggle_selection,
};
use crate::mocks::knowledge_graph_nodes;
use crate::types::GraphNode;
use dioxus::events::MouseEvent;
use dioxus::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

/// Animation tick driving the pulse; runs until the view unmounts.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

#[component]
pub fn GraphView() -> Element {
    let nodes = use_signal(knowledge_graph_nodes);
    let mut selected = use_signal(|| Option::<String>::None);
    let frame = use_signal(|| 0u64);

    use_future(move || {
        let mut frame = frame;
        async move {
            loop {
                tokio::time::sleep(FRAME_INTERVAL).await;
                frame.with_mut(|f| *f += 1);
            }
        }
    });

    let elapsed = frame() as f64 * FRAME_INTERVAL.as_secs_f64();
    let scene = nodes();
    let selection = selected();
    let edges = edge_list(&scene);

    let on_canvas_click = move |ev: MouseEvent| {
        let point = ev.element_coordinates();
        let next = {
            let scene = nodes.read();
            let current = selected.read();
            toggle_selection(current.as_deref(), hit_test(&scene, point.x, point.y))
        };
        selected.set(next);
    };

    rsx! {
        div { class: "main-container",
            div { class: "graph-panel",
                svg {
                    class: "graph-canvas",
                    width: "{SCENE_WIDTH}",
                    height: "{SCENE_HEIGHT}",
                    view_box: "0 0 {SCENE_WIDTH} {SCENE_HEIGHT}",
                    onclick: on_canvas_click,
                    g { class: "graph-edges",
                        for (from, to) in edges.iter() {
                            line {
                                key: "{from.id}-{to.id}",
                                x1: "{from.x}",
                                y1: "{from.y}",
                                x2: "{to.x}",
                                y2: "{to.y}",
                                class: format_args!(
                                    "graph-edge {}",
                                    if edge_highlighted(selection.as_deref(), &from.id, &to.id) { "highlighted" } else { "" }
                                ),
                            }
                        }
                    }
                    g { class: "graph-nodes",
                        for (index, node) in scene.iter().enumerate() {
                            GraphNodeShape {
                                node: node.clone(),
                                radius: NODE_RADIUS * pulse(elapsed, index),
                                selected: selection.as_deref() == Some(node.id.as_str()),
                            }
                        }
                    }
                }
                div { class: "graph-overlay",
                    h3 { "Knowledge Graph" }
                    p { class: "text-muted", "Interactive visualization of your connected knowledge" }
                }
            }
            div { class: "card-grid two-columns",
                div { class: "card",
                    h3 { class: "section-title", "Graph Insights" }
                    div { class: "stat-row",
                        span { class: "text-muted", "Total Concepts:" }
                        span { class: "stat-strong", "{scene.len()}" }
                    }
                    div { class: "stat-row",
                        span { class: "text-muted", "Connections:" }
                        span { class: "stat-strong", "{edges.len()}" }
                    }
                    div { class: "stat-row",
                        span { class: "text-muted", "Selected:" }
                        span { class: "stat-strong",
                            {selection
                                .as_deref()
                                .and_then(|id| scene.iter().find(|n| n.id == id))
                                .map(|n| n.label.clone())
                                .unwrap_or_else(|| "None".to_string())}
                        }
                    }
                }
                div { class: "card",
                    h3 { class: "section-title", "Key Clusters" }
                    for node in scene.iter() {
                        div { class: "cluster-row", key: "{node.id}",
                            span {
                                class: format_args!(
                                    "cluster-dot {}",
                                    if selection.as_deref() == Some(node.id.as_str()) { "active" } else { "" }
                                ),
                            }
                            span { "{node.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GraphNodeShape(node: GraphNode, radius: f64, selected: bool) -> Element {
    let label_y = node.y - 40.0;
    rsx! {
        g { class: "graph-node",
            circle {
                cx: "{node.x}",
                cy: "{node.y}",
                r: "{radius}",
                class: format_args!("graph-node-circle {}", if selected { "selected" } else { "" }),
            }
            text {
                x: "{node.x}",
                y: "{label_y}",
                text_anchor: "middle",
                class: "graph-node-label",
                "{node.label}"
            }
        }
    }
}

/// Deduplicated undirected edge pairs resolved from `connections` ids. The
/// authored data is not symmetric, so dedup is by unordered pair rather
/// than by which side lists the connection.
fn edge_list(nodes: &[GraphNode]) -> Vec<(GraphNode, GraphNode)> {
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for node in nodes {
        for target_id in &node.connections {
            let pair = if node.id.as_str() <= target_id.as_str() {
                (node.id.clone(), target_id.clone())
            } else {
                (target_id.clone(), node.id.clone())
            };
            if !seen.insert(pair) {
                continue;
            }
            if let Some(target) = nodes.iter().find(|n| &n.id == target_id) {
                edges.push((node.clone(), target.clone()));
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::knowledge_graph_nodes;

    #[test]
    fn every_authored_connection_is_drawn() {
        let nodes = knowledge_graph_nodes();
        let edges = edge_list(&nodes);
        for node in &nodes {
            for target_id in &node.connections {
                assert!(
                    edges.iter().any(|(a, b)| {
                        (a.id == node.id && &b.id == target_id)
                            || (&a.id == target_id && b.id == node.id)
                    }),
                    "edge {}-{} missing",
                    node.id,
                    target_id
                );
            }
        }
    }

    #[test]
    fn mutual_connections_yield_one_edge() {
        let nodes = knowledge_graph_nodes();
        let edges = edge_list(&nodes);
        // Nodes 1 and 2 both list each other; one line, not two.
        let between_1_and_2 = edges
            .iter()
            .filter(|(a, b)| {
                (a.id == "1" && b.id == "2") || (a.id == "2" && b.id == "1")
            })
            .count();
        assert_eq!(between_1_and_2, 1);
        assert_eq!(edges.len(), 6);
    }
}
