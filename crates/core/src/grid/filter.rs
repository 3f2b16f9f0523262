//! Filter queries in the `{column} op value` form.
//!
//! Clauses are joined with `&&`. Values may be single- or double-quoted.
//! Comparisons are numeric when both sides are numbers and textual otherwise.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::GridError;
use crate::table::Cell;

/// Comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// `=` / `eq`
    Eq,
    /// `!=` / `ne`
    Ne,
    /// `<` / `lt`
    Lt,
    /// `<=` / `le`
    Le,
    /// `>` / `gt`
    Gt,
    /// `>=` / `ge`
    Ge,
    /// Substring match.
    Contains,
    /// Prefix match on the text form, e.g. `2024-03`.
    DateStartsWith,
}

impl FilterOp {
    const SYMBOLS: [(&'static str, Self); 6] = [
        (">=", Self::Ge),
        ("<=", Self::Le),
        ("!=", Self::Ne),
        ("=", Self::Eq),
        (">", Self::Gt),
        ("<", Self::Lt),
    ];

    fn from_word(word: &str) -> Option<Self> {
        match word {
            "eq" => Some(Self::Eq),
            "ne" => Some(Self::Ne),
            "lt" => Some(Self::Lt),
            "le" => Some(Self::Le),
            "gt" => Some(Self::Gt),
            "ge" => Some(Self::Ge),
            "contains" => Some(Self::Contains),
            "datestartswith" => Some(Self::DateStartsWith),
            _ => None,
        }
    }
}

/// One `{column} op value` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Column name.
    pub column: String,
    /// Operator.
    pub op: FilterOp,
    /// Right-hand side, unquoted.
    pub value: String,
}

impl Condition {
    /// Whether `cell` satisfies the clause. Nulls satisfy only `!=`.
    #[must_use]
    pub fn matches(&self, cell: &Cell) -> bool {
        if cell.is_null() {
            return self.op == FilterOp::Ne;
        }
        let text = cell.to_string();
        match self.op {
            FilterOp::Contains => text.contains(&self.value),
            FilterOp::DateStartsWith => text.starts_with(&self.value),
            FilterOp::Eq => self.ordering(cell, &text) == Ordering::Equal,
            FilterOp::Ne => self.ordering(cell, &text) != Ordering::Equal,
            FilterOp::Lt => self.ordering(cell, &text) == Ordering::Less,
            FilterOp::Le => self.ordering(cell, &text) != Ordering::Greater,
            FilterOp::Gt => self.ordering(cell, &text) == Ordering::Greater,
            FilterOp::Ge => self.ordering(cell, &text) != Ordering::Less,
        }
    }

    fn ordering(&self, cell: &Cell, text: &str) -> Ordering {
        match (cell.as_decimal(), Decimal::from_str(self.value.trim())) {
            (Some(lhs), Ok(rhs)) => lhs.cmp(&rhs),
            _ => text.cmp(self.value.as_str()),
        }
    }
}

/// A conjunction of clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// All must hold.
    pub conditions: Vec<Condition>,
}

impl Filter {
    /// Returns true if the filter matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl FromStr for Filter {
    type Err = GridError;

    fn from_str(query: &str) -> Result<Self, Self::Err> {
        let conditions = split_clauses(query)
            .into_iter()
            .map(str::trim)
            .filter(|clause| !clause.is_empty())
            .map(parse_clause)
            .collect::<Result<_, _>>()?;
        Ok(Self { conditions })
    }
}

/// Splits on `&&` outside quoted values.
fn split_clauses(query: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut quote = None;
    let mut start = 0;
    let mut chars = query.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), _) if c == q => quote = None,
            (None, '&') if chars.peek().is_some_and(|(_, next)| *next == '&') => {
                clauses.push(&query[start..i]);
                chars.next();
                start = i + 2;
            }
            _ => {}
        }
    }
    clauses.push(&query[start..]);
    clauses
}

fn invalid(clause: &str, reason: &'static str) -> GridError {
    GridError::InvalidFilter {
        clause: clause.to_string(),
        reason,
    }
}

fn parse_clause(clause: &str) -> Result<Condition, GridError> {
    let rest = clause
        .strip_prefix('{')
        .ok_or_else(|| invalid(clause, "expected {column}"))?;
    let (column, rest) = rest
        .split_once('}')
        .ok_or_else(|| invalid(clause, "unterminated column name"))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(invalid(clause, "empty column name"));
    }

    let rest = rest.trim_start();
    let (op, rest) = FilterOp::SYMBOLS
        .iter()
        .find_map(|(symbol, op)| rest.strip_prefix(symbol).map(|r| (*op, r)))
        .or_else(|| {
            let (word, r) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            FilterOp::from_word(word).map(|op| (op, r))
        })
        .ok_or_else(|| invalid(clause, "unknown operator"))?;

    let value = unquote(rest.trim());
    if value.is_empty() {
        return Err(invalid(clause, "missing value"));
    }

    Ok(Condition {
        column: column.to_string(),
        op,
        value: value.to_string(),
    })
}

fn unquote(value: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|q| value.strip_prefix(*q).and_then(|v| v.strip_suffix(*q)))
        .unwrap_or(value)
}
