//! Integration tests for the chat, upload, and knowledge-graph state rules.

use mindpal::chat::ChatLog;
use mindpal::graph::{NODE_RADIUS, hit_test, toggle_selection};
use mindpal::mocks::{AI_REPLY, CANNED_UPLOAD_NAMES, knowledge_graph_nodes};
use mindpal::types::Sender;
use mindpal::upload::{UPLOAD_CAP, apply_upload};

mod chat_history {
    use super::*;

    #[test]
    fn greeting_then_pairs() {
        let mut log = ChatLog::new();
        assert_eq!(log.len(), 1);

        for n in 1..=5 {
            assert!(log.push_user(&format!("message {n}")));
            log.push_ai_reply();
            assert_eq!(log.len(), 2 * n + 1, "history must be 2N+1 after {n} sends");
        }

        // Alternating senders after the seed greeting.
        let messages = log.messages();
        for pair in messages[1..].chunks(2) {
            assert_eq!(pair[0].sender, Sender::User);
            assert_eq!(pair[1].sender, Sender::Ai);
            assert_eq!(pair[1].text, AI_REPLY);
        }
    }

    #[test]
    fn ids_are_unique_and_ordered() {
        let mut log = ChatLog::new();
        log.push_user("one");
        log.push_ai_reply();
        log.push_user("two");
        let ids: Vec<&str> = log.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }
}

mod upload_cap {
    use super::*;

    #[test]
    fn eight_files_yield_exactly_five() {
        let mut files = Vec::new();
        let incoming: Vec<String> = (0..8).map(|i| format!("doc-{i}.pdf")).collect();
        apply_upload(&mut files, incoming);
        assert_eq!(files.len(), 5);
        assert_eq!(files.len(), UPLOAD_CAP);
    }

    #[test]
    fn cap_holds_across_repeated_canned_uploads() {
        let mut files = Vec::new();
        for _ in 0..4 {
            apply_upload(&mut files, Vec::new());
            assert!(files.len() <= UPLOAD_CAP);
        }
        assert_eq!(files.len(), UPLOAD_CAP);
        assert_eq!(&files[..3], CANNED_UPLOAD_NAMES);
    }
}

mod graph_selection {
    use super::*;

    #[test]
    fn clicking_a_node_twice_toggles_off_then_on() {
        let nodes = knowledge_graph_nodes();
        let ml = nodes.iter().find(|n| n.label == "Machine Learning").unwrap();
        let (x, y) = (ml.x, ml.y);

        let mut selection: Option<String> = None;
        selection = toggle_selection(selection.as_deref(), hit_test(&nodes, x, y));
        assert_eq!(selection.as_deref(), Some(ml.id.as_str()));
        selection = toggle_selection(selection.as_deref(), hit_test(&nodes, x, y));
        assert_eq!(selection, None);
        selection = toggle_selection(selection.as_deref(), hit_test(&nodes, x, y));
        assert_eq!(selection.as_deref(), Some(ml.id.as_str()));
    }

    #[test]
    fn empty_space_clears_any_selection() {
        let nodes = knowledge_graph_nodes();
        for node in &nodes {
            let cleared = toggle_selection(Some(&node.id), hit_test(&nodes, 499.0, 1.0));
            assert_eq!(cleared, None);
        }
    }

    #[test]
    fn clicking_a_different_node_moves_the_selection() {
        let nodes = knowledge_graph_nodes();
        let selection = toggle_selection(Some("1"), hit_test(&nodes, 300.0, 150.0));
        assert_eq!(selection.as_deref(), Some("2"));
    }

    #[test]
    fn hit_radius_matches_the_node_radius() {
        let nodes = knowledge_graph_nodes();
        assert!(hit_test(&nodes, 150.0 + NODE_RADIUS, 100.0).is_some());
        assert!(hit_test(&nodes, 150.0 + NODE_RADIUS + 0.5, 100.0).is_none());
    }
}
