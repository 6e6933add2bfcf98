pub mod chat;
pub mod generate;
pub mod graph;
pub mod mocks;
pub mod quiz;
pub mod theme;
pub mod types;
pub mod ui;
pub mod upload;
pub mod views;

#[cfg(feature = "server")]
pub mod server;
