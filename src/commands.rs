//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects returned from `update`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the canvas
    Redraw,
    /// Write a JSON dump of the current state
    DumpState,
    /// Multiple commands to execute
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::DumpState => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Combine two optional commands, keeping both side effects
    pub fn merge(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, None) => None,
            (Some(cmd), None) | (None, Some(cmd)) => Some(cmd),
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }
}
