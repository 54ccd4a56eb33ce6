use serde::Serialize;
use thiserror::Error;

use crate::mode::actions::{actions_for, Action};
use crate::mode::click::ClickContext;
use crate::mode::modes::Mode;
use crate::query::description::{QueryDescription, QueryKind, SemanticType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The query matches none of the classification rules. Surfaced instead
    /// of silently falling back to the default mode.
    #[error("unclassifiable query shape: {0}")]
    UnclassifiableQuery(String),
}

/// The outcome of classifying one query: the mode plus its ordered action
/// menu, fixed for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    mode: Mode,
    actions: Vec<Action>,
}

impl Classification {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Stable mode identifier, for display and analytics.
    pub fn name(&self) -> &'static str {
        self.mode.name()
    }

    /// The mode's full action menu, in stable order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Ordered subset of the menu applicable to a specific click.
    pub fn actions_for_click(&self, click: &ClickContext) -> Vec<Action> {
        self.actions
            .iter()
            .filter(|a| a.applies_to(click))
            .cloned()
            .collect()
    }
}

/// Classify a query description into a mode and its action menu.
///
/// Pure and deterministic: identical inputs always yield an identical
/// `Classification`.
pub fn classify(query: &QueryDescription) -> Result<Classification, ClassifyError> {
    let mode = mode_of(query)?;
    Ok(Classification {
        mode,
        actions: actions_for(mode, query),
    })
}

// Decision table over query shape; first match wins.
fn mode_of(query: &QueryDescription) -> Result<Mode, ClassifyError> {
    if query.kind == QueryKind::Native {
        return Ok(Mode::Native);
    }

    let breakouts = &query.breakouts;
    // Wide grouping sets get the shape-agnostic mode regardless of
    // aggregation count, whatever their types.
    if breakouts.len() >= 3 {
        return Ok(Mode::Default);
    }
    if query.aggregations.is_empty() {
        return Ok(Mode::Segment);
    }
    if breakouts.is_empty() {
        return Ok(Mode::Metric);
    }

    let dates = breakouts
        .iter()
        .filter(|b| b.semantic_type == SemanticType::Date)
        .count();
    let categorical = breakouts
        .iter()
        .filter(|b| b.semantic_type.is_categorical())
        .count();

    if breakouts.len() == 1 && dates == 1 {
        return Ok(Mode::Timeseries);
    }
    if breakouts.len() == 2 && dates == 1 && categorical == 1 {
        return Ok(Mode::Timeseries);
    }
    if breakouts.iter().any(|b| b.semantic_type == SemanticType::Address) {
        return Ok(Mode::Geo);
    }
    if categorical == breakouts.len() {
        return Ok(Mode::Pivot);
    }

    let first = &breakouts[0];
    if first.semantic_type != SemanticType::Date && !first.semantic_type.is_categorical() {
        return Ok(Mode::Default);
    }

    Err(ClassifyError::UnclassifiableQuery(format!(
        "{} aggregation(s) with breakout types {:?}",
        query.aggregations.len(),
        breakouts.iter().map(|b| b.semantic_type).collect::<Vec<_>>(),
    )))
}
