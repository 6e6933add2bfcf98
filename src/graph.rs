//! Knowledge-graph scene logic: the sinusoidal node pulse, click hit-testing,
//! and selection toggling. The node list itself is fixed (see
//! [`crate::mocks::knowledge_graph_nodes`]); there is no physics or derived
//! layout.

use crate::types::GraphNode;

/// Base node radius in pixels; also the click hit-test radius.
pub const NODE_RADIUS: f64 = 25.0;

/// Canvas dimensions the fixed layout was authored for.
pub const SCENE_WIDTH: f64 = 500.0;
pub const SCENE_HEIGHT: f64 = 400.0;

/// Time-based pulse factor for a node, phase-shifted by its index so the
/// scene does not breathe in lockstep. Ranges over [0.8, 1.2].
pub fn pulse(elapsed_secs: f64, index: usize) -> f64 {
    (elapsed_secs + index as f64).sin() * 0.2 + 1.0
}

/// Returns the node nearest to the click point, provided its center lies
/// within [`NODE_RADIUS`] pixels. Empty space yields `None`.
pub fn hit_test(nodes: &[GraphNode], x: f64, y: f64) -> Option<&GraphNode> {
    nodes
        .iter()
        .map(|node| {
            let dx = node.x - x;
            let dy = node.y - y;
            (node, dx * dx + dy * dy)
        })
        .filter(|(_, dist_sq)| *dist_sq <= NODE_RADIUS * NODE_RADIUS)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(node, _)| node)
}

/// Selection rules: clicking a node selects it, clicking the selected node
/// again deselects it, clicking empty space always clears.
pub fn toggle_selection(current: Option<&str>, hit: Option<&GraphNode>) -> Option<String> {
    match hit {
        Some(node) if current == Some(node.id.as_str()) => None,
        Some(node) => Some(node.id.clone()),
        None => None,
    }
}

/// Whether an edge between `a` and `b` touches the selected node.
pub fn edge_highlighted(selected: Option<&str>, a: &str, b: &str) -> bool {
    matches!(selected, Some(id) if id == a || id == b)
}
