//! A single field of a loaded table.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde_json::{Number, Value};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// One field value. Money never travels as a float.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    /// SQL NULL / missing value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Exact decimal (numeric/money columns).
    Decimal(Decimal),
    /// Free text.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Timestamp without zone (zoned values are normalized to UTC).
    DateTime(NaiveDateTime),
}

impl Cell {
    /// Converts one field of a JSON-encoded database row.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::from_number(&n),
            Value::String(s) => Self::Text(s),
            other @ (Value::Array(_) | Value::Object(_)) => Self::Text(other.to_string()),
        }
    }

    // Numbers keep their source text, so NUMERIC digits and scale survive.
    fn from_number(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            return Self::Integer(i);
        }
        let text = n.to_string();
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_or(Self::Text(text), Self::Decimal)
    }

    /// JSON form used by chart figures and grid records.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Integer(i) => Value::from(*i),
            Self::Decimal(d) => Number::from_str(&d.normalize().to_string())
                .map_or_else(|_| Value::String(d.to_string()), Value::Number),
            Self::Text(s) => Value::String(s.clone()),
            Self::Date(_) | Self::DateTime(_) => Value::String(self.to_string()),
        }
    }

    /// Returns true for SQL NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric value, if the cell holds one.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Integer(i) => Some(Decimal::from(*i)),
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Timestamp view of date-like cells; dates map to midnight.
    #[must_use]
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(d) => Some(d.and_time(NaiveTime::MIN)),
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Coerces a textual date into a date cell.
    ///
    /// Date and null cells pass through. Returns `None` when the value cannot
    /// be read as a date.
    #[must_use]
    pub fn to_date(&self) -> Option<Self> {
        match self {
            Self::Null | Self::Date(_) | Self::DateTime(_) => Some(self.clone()),
            Self::Text(s) => parse_date_text(s.trim()),
            _ => None,
        }
    }

    /// Ordering used by the grid: numbers numerically, dates chronologically,
    /// anything else by its text form. Nulls compare equal to each other.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.as_decimal(), other.as_decimal()) {
            return a.cmp(&b);
        }
        if let (Some(a), Some(b)) = (self.as_datetime(), other.as_datetime()) {
            return a.cmp(&b);
        }
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

fn parse_date_text(s: &str) -> Option<Cell> {
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(Cell::Date(date));
    }
    if let Ok(zoned) = DateTime::parse_from_rfc3339(s) {
        return Some(Cell::DateTime(zoned.naive_utc()));
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(Cell::DateTime)
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for Cell {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}
