use serde::Serialize;

use crate::mode::click::{ClickContext, ClickRule};
use crate::mode::modes::Mode;
use crate::query::description::QueryDescription;

/// One contextual action offered by a mode. Plain data only; the
/// presentation layer decides how name/icon/title get rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub name: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub click: ClickRule,
}

impl Action {
    const fn new(name: &'static str, icon: &'static str, title: &'static str, click: ClickRule) -> Self {
        Self { name, icon, title, click }
    }

    pub fn applies_to(&self, click: &ClickContext) -> bool {
        self.click.applies_to(click)
    }
}

const UNDERLYING_DATA: Action =
    Action::new("underlying-data", "table", "View this as a table", ClickRule::Always);
const COMMON_METRIC: Action =
    Action::new("common-metric", "metric", "View a common metric", ClickRule::Always);
const COUNT_BY_TIME: Action =
    Action::new("count-by-time", "line", "Count of rows by time", ClickRule::Always);
const SUMMARIZE: Action =
    Action::new("summarize", "sum", "Summarize this segment", ClickRule::Always);

// Pivot actions drill from a clicked aggregate cell.
const PIVOT_BY_TIME: Action =
    Action::new("pivot-by-time", "clock", "Break out by time", ClickRule::Cell);
const PIVOT_BY_CATEGORY: Action =
    Action::new("pivot-by-category", "label", "Break out by category", ClickRule::Cell);
const PIVOT_BY_LOCATION: Action =
    Action::new("pivot-by-location", "location", "Break out by location", ClickRule::Cell);

const WRITE_NATIVE_QUERY: Action =
    Action::new("write-native-query", "sql", "Write a native query", ClickRule::Always);

/// Fixed, ordered action menu for a mode. Pivot actions always come before
/// the drill-to-table action.
pub fn actions_for(mode: Mode, query: &QueryDescription) -> Vec<Action> {
    match mode {
        Mode::Segment => vec![UNDERLYING_DATA, COMMON_METRIC, COUNT_BY_TIME, SUMMARIZE],
        Mode::Metric => vec![PIVOT_BY_TIME, PIVOT_BY_CATEGORY, PIVOT_BY_LOCATION, UNDERLYING_DATA],
        Mode::Timeseries => vec![PIVOT_BY_CATEGORY, PIVOT_BY_LOCATION, UNDERLYING_DATA],
        Mode::Geo => vec![PIVOT_BY_TIME, PIVOT_BY_CATEGORY, UNDERLYING_DATA],
        Mode::Pivot => vec![PIVOT_BY_TIME, UNDERLYING_DATA],
        Mode::Default => vec![UNDERLYING_DATA],
        Mode::Native => {
            if query.has_native_text() {
                vec![UNDERLYING_DATA]
            } else {
                vec![WRITE_NATIVE_QUERY]
            }
        }
    }
}
