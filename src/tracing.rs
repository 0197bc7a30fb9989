//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging tree
//! edits and drag gestures.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=tree=debug,message=debug` - scoped filtering
//! - `RUST_LOG=partition::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/partition/logs/partition.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{Node, NodeId};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/partition/logs/partition.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "partition.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight summary of a tree for diffing across an update
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSnapshot {
    pub root_id: NodeId,
    pub leaf_count: usize,
    pub split_count: usize,
    pub depth: usize,
}

impl TreeSnapshot {
    pub fn from_tree(tree: &Node) -> Self {
        Self {
            root_id: tree.id(),
            leaf_count: tree.count_leaves(),
            split_count: tree.count_splits(),
            depth: tree.depth(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &TreeSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.root_id != other.root_id {
            changes.push(format!("root: {} → {}", self.root_id, other.root_id));
        }
        if self.leaf_count != other.leaf_count {
            changes.push(format!("leaves: {} → {}", self.leaf_count, other.leaf_count));
        }
        if self.split_count != other.split_count {
            changes.push(format!("splits: {} → {}", self.split_count, other.split_count));
        }
        if self.depth != other.depth {
            changes.push(format!("depth: {} → {}", self.depth, other.depth));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SplitDirection;
    use crate::theme::Color;

    #[test]
    fn test_diff_reports_split() {
        let leaf = Node::leaf(NodeId::from_u128(1), Color::rgb(0, 0, 0));
        let split = Node::split(
            NodeId::from_u128(2),
            SplitDirection::Vertical,
            0.5,
            leaf.clone(),
            Node::leaf(NodeId::from_u128(3), Color::rgb(0, 0, 0)),
        );

        let before = TreeSnapshot::from_tree(&leaf);
        let after = TreeSnapshot::from_tree(&split);
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("leaves: 1 → 2"));
        assert!(diff.contains("splits: 0 → 1"));
        assert!(diff.contains("root:"));
        assert_eq!(after.diff(&after), None);
    }
}
