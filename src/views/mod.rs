pub mod chat;
pub mod graph;
pub mod library;
pub mod quiz;
pub mod shared;
pub mod upload;

pub use chat::ChatView;
pub use graph::GraphView;
pub use library::LibraryView;
pub use quiz::QuizView;
pub use upload::UploadView;
