use serde::{Deserialize, Serialize};

/// What part of the rendered result was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// A data cell carrying a value.
    Cell,
    /// A column header.
    Header,
}

/// Context for a click inside the visualization, as reported by the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickContext {
    pub target: ClickTarget,
}

impl ClickContext {
    pub fn cell() -> Self {
        Self { target: ClickTarget::Cell }
    }

    pub fn header() -> Self {
        Self { target: ClickTarget::Header }
    }
}

/// An action's applicability predicate over a click context, kept as data so
/// classification stays pure and serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickRule {
    /// Offered regardless of what was clicked (plain menu action).
    Always,
    /// Offered only for a clicked data cell.
    Cell,
    /// Offered only for a clicked column header.
    Header,
}

impl ClickRule {
    pub fn applies_to(self, click: &ClickContext) -> bool {
        match self {
            ClickRule::Always => true,
            ClickRule::Cell => click.target == ClickTarget::Cell,
            ClickRule::Header => click.target == ClickTarget::Header,
        }
    }
}
