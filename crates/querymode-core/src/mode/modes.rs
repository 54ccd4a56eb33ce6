use serde::{Deserialize, Serialize};

/// The closed set of interactive modes a classified question can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Raw row-level data, no aggregation.
    Segment,
    /// Aggregated with no grouping.
    Metric,
    /// Grouped by a date dimension; date stays the primary axis.
    Timeseries,
    /// Grouped by an address dimension.
    Geo,
    /// Grouped by one or two categorical dimensions.
    Pivot,
    /// Recognized but shape-agnostic fallback.
    Default,
    /// Written in the data source's own query language.
    Native,
}

impl Mode {
    /// Stable identifier used for display and analytics.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Segment => "segment",
            Mode::Metric => "metric",
            Mode::Timeseries => "timeseries",
            Mode::Geo => "geo",
            Mode::Pivot => "pivot",
            Mode::Default => "default",
            Mode::Native => "native",
        }
    }
}
