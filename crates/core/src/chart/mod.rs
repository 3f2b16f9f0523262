//! Chart definitions and figure construction.
//!
//! - `catalogue` - the canned chart per tab, each over one table
//! - `build` - table + definition to Plotly figure
//! - `cache` - built figures, kept for the process lifetime

pub mod build;
pub mod cache;
pub mod catalogue;
pub mod error;
pub mod figure;

pub use build::build_figure;
pub use cache::{FigureCache, FigureLookup};
pub use catalogue::{CHARTS, ChartKind, ChartSpec};
pub use error::ChartError;
pub use figure::{Axis, Figure, FigureLayout, Title, Trace};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_chart_ids_are_unique() {
        let ids: HashSet<_> = CHARTS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CHARTS.len());
    }

    #[test]
    fn test_charts_only_read_declared_columns() {
        for chart in &CHARTS {
            let declared = chart.dataset.schema().columns;
            for column in chart.columns() {
                assert!(declared.contains(&column), "{}: {column}", chart.id);
            }
        }
    }

    #[test]
    fn test_pies_have_one_value_column() {
        for chart in CHARTS.iter().filter(|c| c.kind == ChartKind::Pie) {
            assert_eq!(chart.y.len(), 1, "{}", chart.id);
        }
    }

    #[test]
    fn test_by_id() {
        assert_eq!(ChartSpec::by_id("budget-chart").map(|c| c.title), Some("Budget vs Actual"));
        assert!(ChartSpec::by_id("nope").is_none());
    }
}
