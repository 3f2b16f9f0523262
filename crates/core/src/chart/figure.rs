//! Plotly-compatible figure description.
//!
//! The browser draws these with plotly.js; the server only decides which
//! values go into which trace.

use serde::Serialize;
use serde_json::Value;

/// A complete figure: `{ "data": [...], "layout": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Traces, drawn in order.
    pub data: Vec<Trace>,
    /// Titles, axes and bar mode.
    pub layout: FigureLayout,
}

/// One plotly trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    /// Plotly trace type (`bar`, `scatter`, `pie`, `histogram`).
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    /// Scatter mode (`lines` or `markers`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    /// Legend entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// X values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<Value>>,
    /// Y values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<Value>>,
    /// Pie slice labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
    /// Pie slice values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
}

impl Trace {
    /// Number of plotted points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x
            .as_ref()
            .or(self.labels.as_ref())
            .map_or(0, Vec::len)
    }

    /// Returns true if the trace plots nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Plotly layout subset used by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    /// Figure title.
    pub title: Title,
    /// X axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    /// Y axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    /// How bar traces share an x position (`group` or `relative`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<&'static str>,
}

/// Title text wrapper, as plotly expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    /// The text.
    pub text: String,
}

impl Title {
    /// Creates a title.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Axis with a title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    /// Axis title.
    pub title: Title,
}

impl Axis {
    /// Creates an axis titled `text`.
    #[must_use]
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}
