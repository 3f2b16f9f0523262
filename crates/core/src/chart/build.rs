//! Turns a chart definition and its table into a figure.

use serde_json::Value;

use super::catalogue::{ChartKind, ChartSpec};
use super::error::ChartError;
use super::figure::{Axis, Figure, FigureLayout, Title, Trace};
use crate::table::{Table, TableError};

/// Builds the figure for `spec` from `table`.
///
/// Rows keep their table order. With a colour column, each y column is split
/// into one trace per distinct colour value, in first-seen order.
///
/// # Errors
///
/// Returns `ChartError::MissingColumn` if the table lacks a plotted column and
/// `ChartError::InvalidSpec` for a pie without exactly one value column.
pub fn build_figure(spec: &ChartSpec, table: &Table) -> Result<Figure, ChartError> {
    for column in spec.columns() {
        table.require_column(column).map_err(missing_column)?;
    }

    let data = match spec.kind {
        ChartKind::Pie => vec![pie_trace(spec, table)?],
        ChartKind::Histogram => vec![Trace {
            trace_type: "histogram",
            x: Some(column_values(table, spec.x)?),
            ..Trace::default()
        }],
        ChartKind::Bar | ChartKind::Line | ChartKind::Scatter => xy_traces(spec, table)?,
    };

    Ok(Figure {
        data,
        layout: layout(spec),
    })
}

fn missing_column(e: TableError) -> ChartError {
    match e {
        TableError::UnknownColumn { table, column } => ChartError::MissingColumn { table, column },
        other => ChartError::MissingColumn {
            table: String::new(),
            column: other.to_string(),
        },
    }
}

fn column_values(table: &Table, column: &str) -> Result<Vec<Value>, ChartError> {
    Ok(table
        .column(column)
        .map_err(missing_column)?
        .map(|cell| cell.to_json())
        .collect())
}

fn pie_trace(spec: &ChartSpec, table: &Table) -> Result<Trace, ChartError> {
    let [value_column] = spec.y else {
        return Err(ChartError::InvalidSpec {
            id: spec.id,
            reason: "a pie needs exactly one value column",
        });
    };
    Ok(Trace {
        trace_type: "pie",
        labels: Some(column_values(table, spec.x)?),
        values: Some(column_values(table, value_column)?),
        ..Trace::default()
    })
}

const fn trace_style(kind: ChartKind) -> (&'static str, Option<&'static str>) {
    match kind {
        ChartKind::Line => ("scatter", Some("lines")),
        ChartKind::Scatter => ("scatter", Some("markers")),
        _ => ("bar", None),
    }
}

/// Row indices grouped by the display value of `column`, in first-seen order.
fn groups(table: &Table, column: &str) -> Result<Vec<(String, Vec<usize>)>, ChartError> {
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for (row, cell) in table.column(column).map_err(missing_column)?.enumerate() {
        let key = cell.to_string();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((key, vec![row])),
        }
    }
    Ok(groups)
}

fn xy_traces(spec: &ChartSpec, table: &Table) -> Result<Vec<Trace>, ChartError> {
    if spec.y.is_empty() {
        return Err(ChartError::InvalidSpec {
            id: spec.id,
            reason: "needs at least one y column",
        });
    }
    let (trace_type, mode) = trace_style(spec.kind);
    let x_idx = table.require_column(spec.x).map_err(missing_column)?;
    let all_rows: Vec<usize> = (0..table.len()).collect();

    let grouped = match spec.color {
        Some(color) => groups(table, color)?,
        None => vec![(String::new(), all_rows)],
    };

    let mut traces = Vec::with_capacity(spec.y.len() * grouped.len());
    for y_column in spec.y {
        let y_idx = table.require_column(y_column).map_err(missing_column)?;
        for (group, rows) in &grouped {
            let name = match (spec.color.is_some(), spec.y.len() > 1) {
                (true, true) => Some(format!("{y_column}, {group}")),
                (true, false) => Some(group.clone()),
                (false, true) => Some((*y_column).to_string()),
                (false, false) => None,
            };
            traces.push(Trace {
                trace_type,
                mode,
                name,
                x: Some(rows.iter().map(|&r| table.rows()[r][x_idx].to_json()).collect()),
                y: Some(rows.iter().map(|&r| table.rows()[r][y_idx].to_json()).collect()),
                ..Trace::default()
            });
        }
    }
    Ok(traces)
}

fn layout(spec: &ChartSpec) -> FigureLayout {
    let (xaxis, yaxis) = match spec.kind {
        ChartKind::Pie => (None, None),
        ChartKind::Histogram => (Some(Axis::titled(spec.x)), Some(Axis::titled("count"))),
        _ => {
            let y_title = match spec.y {
                [single] => *single,
                _ => "value",
            };
            (Some(Axis::titled(spec.x)), Some(Axis::titled(y_title)))
        }
    };
    let barmode = match (spec.kind, spec.y.len() > 1, spec.color.is_some()) {
        (ChartKind::Bar, true, _) => Some("group"),
        (ChartKind::Bar, false, true) => Some("relative"),
        _ => None,
    };
    FigureLayout {
        title: Title::new(spec.title),
        xaxis,
        yaxis,
        barmode,
    }
}
