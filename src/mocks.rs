//! Canned content standing in for real document ingestion and AI inference.
//!
//! Every "generated" artifact in MindPal comes from here: the generation
//! bridge serves these locally, and the `mindpal-api` endpoints return the
//! same payloads over HTTP. Constructors stamp a fresh uuid and timestamp so
//! repeated generations stay distinguishable in the UI.

use crate::types::{Document, GraphNode, Mindmap, MindmapNode, Quiz, QuizQuestion, Summary};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

pub const AI_GREETING: &str = "Hello! I'm your AI knowledge companion. I can help you understand your notes, find connections between concepts, and answer questions about your uploaded content. What would you like to explore?";

pub const AI_REPLY: &str = "I understand you're asking about that topic. Based on your uploaded knowledge, I can see connections to machine learning concepts and neural networks. Would you like me to show you the knowledge graph visualization or provide a detailed explanation?";

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "Summarize the key points from my neural networks research",
    "How does machine learning relate to AI ethics?",
    "Show me connections between my uploaded documents",
    "What are the main concepts I should remember?",
];

/// File names used when an upload is triggered without a real selection.
pub const CANNED_UPLOAD_NAMES: &[&str] = &[
    "Neural Networks Research.pdf",
    "Machine Learning Notes.txt",
    "AI Ethics Discussion.docx",
];

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

pub fn sample_documents() -> Vec<Document> {
    vec![
        Document {
            id: "1".into(),
            name: "Neural Networks Fundamentals.pdf".into(),
            kind: "PDF".into(),
            uploaded_at: "2024-01-15".into(),
            size: "2.3 MB".into(),
        },
        Document {
            id: "2".into(),
            name: "Machine Learning Ethics.pdf".into(),
            kind: "PDF".into(),
            uploaded_at: "2024-01-14".into(),
            size: "1.8 MB".into(),
        },
        Document {
            id: "3".into(),
            name: "Deep Learning Research.pdf".into(),
            kind: "PDF".into(),
            uploaded_at: "2024-01-13".into(),
            size: "3.1 MB".into(),
        },
    ]
}

pub fn initial_summaries() -> Vec<Summary> {
    vec![Summary {
        id: "1".into(),
        document_id: "1".into(),
        title: "Neural Networks Fundamentals Summary".into(),
        content: "Neural networks are computing systems inspired by biological neural networks. They consist of interconnected nodes (neurons) that process information through weighted connections...".into(),
        key_points: vec![
            "Neural networks mimic biological brain structure".into(),
            "Consist of interconnected nodes with weighted connections".into(),
            "Learn through backpropagation algorithm".into(),
            "Used for pattern recognition and classification".into(),
            "Can approximate any continuous function".into(),
        ],
        created_at: "2024-01-15T10:30:00Z".into(),
    }]
}

pub fn initial_mindmaps() -> Vec<Mindmap> {
    vec![Mindmap {
        id: "1".into(),
        document_id: "1".into(),
        title: "Neural Networks Concept Map".into(),
        nodes: vec![
            node("root", "Neural Networks", 400.0, 200.0, 0, &["neurons", "learning", "applications"], "#8B5CF6"),
            node("neurons", "Neurons", 200.0, 300.0, 1, &["activation", "weights"], "#06B6D4"),
            node("learning", "Learning", 400.0, 350.0, 1, &["backprop", "gradient"], "#10B981"),
            node("applications", "Applications", 600.0, 300.0, 1, &["vision", "nlp"], "#F59E0B"),
            node("activation", "Activation Functions", 100.0, 400.0, 2, &[], "#06B6D4"),
            node("weights", "Weights & Biases", 300.0, 400.0, 2, &[], "#06B6D4"),
            node("backprop", "Backpropagation", 350.0, 450.0, 2, &[], "#10B981"),
            node("gradient", "Gradient Descent", 450.0, 450.0, 2, &[], "#10B981"),
            node("vision", "Computer Vision", 550.0, 400.0, 2, &[], "#F59E0B"),
            node("nlp", "Natural Language", 650.0, 400.0, 2, &[], "#F59E0B"),
        ],
        created_at: "2024-01-15T11:00:00Z".into(),
    }]
}

/// The summary payload returned by `/generate-summary`, regardless of input.
pub fn mock_summary(document_id: &str) -> Summary {
    Summary {
        id: new_id(),
        document_id: document_id.to_string(),
        title: "Machine Learning Ethics Summary".into(),
        content: "Machine learning ethics has emerged as a crucial field addressing the responsible development and deployment of AI systems. As these technologies become more widespread, concerns about bias, privacy, transparency, and accountability have grown. The field focuses on ensuring that AI systems are developed and used in ways that benefit society while minimizing potential harms. Key areas include preventing algorithmic bias that could discriminate against certain groups, protecting user privacy and data, making AI decisions more transparent and explainable, establishing clear accountability frameworks, ensuring fairness across different populations, and maintaining safety and security standards.".into(),
        key_points: vec![
            "Algorithmic bias can perpetuate societal inequalities and must be actively prevented".into(),
            "Privacy protection requires careful handling of user data throughout the ML pipeline".into(),
            "Transparency in AI decision-making helps build trust and enables oversight".into(),
            "Clear accountability frameworks are needed to assign responsibility for AI outcomes".into(),
            "Fairness considerations must address equitable treatment across different groups".into(),
            "Safety and security measures prevent misuse and ensure robust system performance".into(),
            "Governance frameworks combine regulation, standards, and technical solutions".into(),
            "Ethical review boards provide oversight for AI development and deployment".into(),
        ],
        created_at: now_rfc3339(),
    }
}

/// The mindmap payload returned by `/generate-mindmap`, regardless of input.
pub fn mock_mindmap(document_id: &str) -> Mindmap {
    Mindmap {
        id: new_id(),
        document_id: document_id.to_string(),
        title: "Deep Learning & Computer Vision Map".into(),
        nodes: vec![
            node("root", "Deep Learning Vision", 400.0, 200.0, 0, &["architectures", "applications", "techniques"], "#8B5CF6"),
            node("architectures", "CNN Architectures", 200.0, 320.0, 1, &["lenet", "alexnet", "resnet"], "#06B6D4"),
            node("applications", "Applications", 400.0, 350.0, 1, &["classification", "detection", "medical"], "#10B981"),
            node("techniques", "Techniques", 600.0, 320.0, 1, &["convolution", "pooling", "dropout"], "#F59E0B"),
            node("lenet", "LeNet", 100.0, 450.0, 2, &[], "#06B6D4"),
            node("alexnet", "AlexNet", 200.0, 450.0, 2, &[], "#06B6D4"),
            node("resnet", "ResNet", 300.0, 450.0, 2, &[], "#06B6D4"),
            node("classification", "Image Classification", 350.0, 480.0, 2, &[], "#10B981"),
            node("detection", "Object Detection", 450.0, 480.0, 2, &[], "#10B981"),
            node("medical", "Medical Imaging", 400.0, 420.0, 2, &[], "#10B981"),
            node("convolution", "Convolution", 550.0, 450.0, 2, &[], "#F59E0B"),
            node("pooling", "Pooling", 650.0, 450.0, 2, &[], "#F59E0B"),
            node("dropout", "Dropout", 600.0, 380.0, 2, &[], "#F59E0B"),
        ],
        created_at: now_rfc3339(),
    }
}

/// The quiz payload returned by `/generate-quiz`, regardless of input.
pub fn mock_quiz(_document_id: &str) -> Quiz {
    Quiz {
        id: new_id(),
        title: "Neural Networks Fundamentals Quiz".into(),
        description: "Test your understanding of neural network concepts".into(),
        source_document: "Neural Networks Fundamentals.pdf".into(),
        questions: vec![
            question(
                "q1",
                "What is the basic unit of computation in a neural network?",
                &["Synapse", "Perceptron", "Dendrite", "Axon"],
                1,
                "A perceptron is the basic unit of computation in a neural network, inspired by biological neurons.",
            ),
            question(
                "q2",
                "Which activation function is most commonly used in modern deep learning?",
                &["Sigmoid", "Tanh", "ReLU", "Linear"],
                2,
                "ReLU (Rectified Linear Unit) is widely used because it helps avoid the vanishing gradient problem.",
            ),
            question(
                "q3",
                "What is the primary purpose of backpropagation?",
                &["Forward pass computation", "Weight adjustment", "Data preprocessing", "Model evaluation"],
                1,
                "Backpropagation is the algorithm used to adjust weights by propagating errors backward through the network.",
            ),
            question(
                "q4",
                "What characterizes deep learning?",
                &["Single layer networks", "Multiple hidden layers", "Linear activation only", "No training required"],
                1,
                "Deep learning uses neural networks with multiple hidden layers to learn complex patterns.",
            ),
            question(
                "q5",
                "Which of these is NOT a common application of neural networks?",
                &["Computer vision", "Natural language processing", "Database indexing", "Pattern recognition"],
                2,
                "Database indexing is a traditional computer science problem not typically solved with neural networks.",
            ),
        ],
    }
}

/// The six-node scene drawn by the knowledge-graph view.
pub fn knowledge_graph_nodes() -> Vec<GraphNode> {
    vec![
        graph_node("1", "Machine Learning", 150.0, 100.0, &["2", "3"]),
        graph_node("2", "Neural Networks", 300.0, 150.0, &["1", "4"]),
        graph_node("3", "Data Science", 100.0, 250.0, &["1", "4", "5"]),
        graph_node("4", "Deep Learning", 350.0, 300.0, &["2", "3"]),
        graph_node("5", "Statistics", 200.0, 350.0, &["3"]),
        graph_node("6", "AI Ethics", 450.0, 200.0, &["2"]),
    ]
}

fn node(
    id: &str,
    label: &str,
    x: f64,
    y: f64,
    level: u32,
    children: &[&str],
    color: &str,
) -> MindmapNode {
    MindmapNode {
        id: id.into(),
        label: label.into(),
        x,
        y,
        level,
        children: children.iter().map(|c| c.to_string()).collect(),
        color: color.into(),
    }
}

fn question(
    id: &str,
    text: &str,
    options: &[&str],
    correct_answer: usize,
    explanation: &str,
) -> QuizQuestion {
    QuizQuestion {
        id: id.into(),
        question: text.into(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
        explanation: explanation.into(),
    }
}

fn graph_node(id: &str, label: &str, x: f64, y: f64, connections: &[&str]) -> GraphNode {
    GraphNode {
        id: id.into(),
        label: label.into(),
        x,
        y,
        connections: connections.iter().map(|c| c.to_string()).collect(),
    }
}
