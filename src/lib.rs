//! Partition - recursive split-pane canvas
//!
//! This crate provides the core types and logic for a canvas that is
//! recursively divided into colored panes, implementing the Elm Architecture
//! pattern. The partition tree is persistent: every edit returns a new root
//! that shares all untouched subtrees with the previous one.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PartitionConfig;
pub use messages::Msg;
pub use model::{AppModel, Node, NodeId, SplitDirection};
pub use theme::Theme;
