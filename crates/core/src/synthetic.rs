//! Mock tables for the case management, CRM and reports tabs.
//!
//! These tables have no database counterpart. They are generated once at
//! startup; pass a seed for reproducible output.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::schema::Dataset;
use crate::table::{Cell, Table, TableError};

/// Rows in the case management table.
pub const CASE_COUNT: usize = 100;
/// Rows in the CRM interaction table.
pub const CRM_COUNT: usize = 200;
/// Rows in the reports table.
pub const REPORT_COUNT: usize = 50;

/// Case statuses.
pub const CASE_STATUSES: [&str; 4] = ["Open", "In Progress", "Closed", "On Hold"];
/// Case assignees.
pub const CASE_USERS: [&str; 4] = ["User A", "User B", "User C", "User D"];
/// CRM interaction channels.
pub const INTERACTION_TYPES: [&str; 4] = ["Call", "Email", "Meeting", "Social Media"];
/// KPI names in the reports table.
pub const REPORT_METRICS: [&str; 4] = ["Revenue", "Expenses", "Profit", "Customer Growth"];

/// Engagement scores are drawn from `[1, 100)`.
pub const ENGAGEMENT_RANGE: std::ops::Range<i64> = 1..100;
/// Report values are drawn from `[1000, 100000)`.
pub const REPORT_VALUE_RANGE: std::ops::Range<i64> = 1_000..100_000;

fn series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn closed_series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 2, 1).unwrap_or(NaiveDate::MIN)
}

/// The three generated tables.
#[derive(Debug, Clone)]
pub struct SyntheticTables {
    /// Case management table.
    pub cases: Table,
    /// CRM interaction table.
    pub crm_interactions: Table,
    /// KPI report table.
    pub reports: Table,
}

impl SyntheticTables {
    /// Generates all three tables, seeded when `seed` is set.
    ///
    /// # Errors
    ///
    /// Returns `TableError` if a generated row does not fit its header.
    pub fn generate(seed: Option<u64>) -> Result<Self, TableError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::generate_with(&mut rng)
    }

    /// Generates all three tables from the given random source.
    ///
    /// # Errors
    ///
    /// Returns `TableError` if a generated row does not fit its header.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, TableError> {
        Ok(Self {
            cases: cases(rng)?,
            crm_interactions: crm_interactions(rng)?,
            reports: reports(rng)?,
        })
    }

    /// Pairs each table with its dataset.
    #[must_use]
    pub fn into_datasets(self) -> [(Dataset, Table); 3] {
        [
            (Dataset::Cases, self.cases),
            (Dataset::CrmInteractions, self.crm_interactions),
            (Dataset::Reports, self.reports),
        ]
    }
}

fn header(dataset: Dataset) -> Vec<String> {
    dataset
        .schema()
        .columns
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[&str]) -> Cell {
    Cell::from(choices[rng.random_range(0..choices.len())])
}

fn build(dataset: Dataset, rows: Vec<Vec<Cell>>) -> Result<Table, TableError> {
    Table::from_rows(dataset.table_name(), header(dataset), rows)
}

/// Case management table: ids, statuses, assignees, business-day dates.
pub fn cases<R: Rng + ?Sized>(rng: &mut R) -> Result<Table, TableError> {
    let opened = business_days(series_start(), CASE_COUNT);
    let closed = business_days(closed_series_start(), CASE_COUNT);
    let rows = (1..=CASE_COUNT)
        .zip(opened.into_iter().zip(closed))
        .map(|(i, (opened, closed))| {
            vec![
                id_cell(i),
                Cell::from(format!("Case {i}")),
                pick(rng, &CASE_STATUSES),
                pick(rng, &CASE_USERS),
                Cell::Date(opened),
                Cell::Date(closed),
            ]
        })
        .collect();
    build(Dataset::Cases, rows)
}

/// CRM table: one interaction per customer per day.
pub fn crm_interactions<R: Rng + ?Sized>(rng: &mut R) -> Result<Table, TableError> {
    let rows = (1..=CRM_COUNT)
        .zip(daily(series_start(), CRM_COUNT))
        .map(|(i, date)| {
            vec![
                id_cell(i),
                Cell::from(format!("Customer {i}")),
                pick(rng, &INTERACTION_TYPES),
                Cell::Date(date),
                Cell::Integer(rng.random_range(ENGAGEMENT_RANGE)),
            ]
        })
        .collect();
    build(Dataset::CrmInteractions, rows)
}

/// Reports table: weekly KPI snapshots.
pub fn reports<R: Rng + ?Sized>(rng: &mut R) -> Result<Table, TableError> {
    let rows = (1..=REPORT_COUNT)
        .zip(weekly_sundays(series_start(), REPORT_COUNT))
        .map(|(i, date)| {
            vec![
                id_cell(i),
                pick(rng, &REPORT_METRICS),
                Cell::Integer(rng.random_range(REPORT_VALUE_RANGE)),
                Cell::Date(date),
            ]
        })
        .collect();
    build(Dataset::Reports, rows)
}

fn id_cell(i: usize) -> Cell {
    Cell::Integer(i64::try_from(i).unwrap_or(i64::MAX))
}

fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn successors(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.checked_add_days(Days::new(1)))
}

/// `count` consecutive Monday-Friday dates on or after `start`.
#[must_use]
pub fn business_days(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    successors(start)
        .filter(|d| is_business_day(*d))
        .take(count)
        .collect()
}

/// `count` consecutive calendar days starting at `start`.
#[must_use]
pub fn daily(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    successors(start).take(count).collect()
}

/// `count` consecutive Sundays on or after `start`.
#[must_use]
pub fn weekly_sundays(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    successors(start)
        .filter(|d| d.weekday() == Weekday::Sun)
        .take(count)
        .collect()
}

#[cfg(test)]
#[path = "synthetic_tests.rs"]
mod tests;
