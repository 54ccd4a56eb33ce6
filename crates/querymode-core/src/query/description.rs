use serde::{Deserialize, Serialize};

/// Normalized description of a user-built question, handed over by the
/// query-building layer. Classification only reads this value and never
/// depends on how it was produced (metadata lookups, UI state, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescription {
    pub kind: QueryKind,
    #[serde(default)]
    pub aggregations: Vec<Aggregation>,
    #[serde(default)]
    pub breakouts: Vec<Breakout>,
    /// Raw query text; only meaningful when `kind` is native.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_query_text: Option<String>,
    /// Current visualization hint (e.g. "table"). Advisory only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl QueryDescription {
    pub fn structured(aggregations: Vec<Aggregation>, breakouts: Vec<Breakout>) -> Self {
        Self {
            kind: QueryKind::Structured,
            aggregations,
            breakouts,
            native_query_text: None,
            display: None,
        }
    }

    pub fn native(query_text: Option<String>) -> Self {
        Self {
            kind: QueryKind::Native,
            aggregations: Vec::new(),
            breakouts: Vec::new(),
            native_query_text: query_text,
            display: None,
        }
    }

    /// True when native query text is present and not just whitespace.
    pub fn has_native_text(&self) -> bool {
        self.native_query_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Structured,
    Native,
}

/// A summary computation applied to the result rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Summary function, e.g. "count", "sum", "avg".
    pub function: String,
    /// Field the function is applied to; absent for row counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// A grouping dimension applied to an aggregated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakout {
    pub field: String,
    pub semantic_type: SemanticType,
    /// Bucketing for date breakouts, e.g. "day", "month".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    Date,
    Category,
    Location,
    Address,
    Other,
}

impl SemanticType {
    /// Category and location both behave as categorical grouping dimensions.
    pub fn is_categorical(self) -> bool {
        matches!(self, Self::Category | Self::Location)
    }
}
