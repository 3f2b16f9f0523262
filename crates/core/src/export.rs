//! CSV export of a table.

use thiserror::Error;

use crate::table::Table;

/// Download name for the receivables grid export.
pub const AR_EXPORT_FILENAME: &str = "ar_data.csv";

/// CSV export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Record could not be encoded.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    /// Buffer could not be flushed.
    #[error("CSV flush failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the table as CSV.
///
/// The first column is an unnamed 0-based row index. Nulls are empty fields.
pub fn write_csv(table: &Table) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(std::iter::once("").chain(table.columns().iter().map(String::as_str)))?;
    for (index, row) in table.rows().iter().enumerate() {
        writer.write_record(
            std::iter::once(index.to_string()).chain(row.iter().map(ToString::to_string)),
        )?;
    }

    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use crate::schema::Dataset;

    #[test]
    fn test_receivables_export() {
        let table = sample::ledger(Dataset::Receivables).unwrap();
        let bytes = write_csv(&table).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                ",invoice_id,business_unit_id,customer_name,amount_due,due_date,status",
                "0,101,1,Acme Corp,1200.50,2024-03-01,Open",
                "1,102,2,Globex,300.00,2024-02-15,Overdue",
                "2,103,1,\"Initech, Inc.\",,2024-04-10,Open",
            ]
        );
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = Table::new("accountsreceivable", vec!["invoice_id".into()]);
        let text = String::from_utf8(write_csv(&table).unwrap()).unwrap();
        assert_eq!(text, ",invoice_id\n");
    }

    #[test]
    fn test_round_trips_through_csv_reader() {
        let table = sample::ledger(Dataset::Receivables).unwrap();
        let bytes = write_csv(&table).unwrap();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let records: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

        assert_eq!(records.len(), table.len());
        assert_eq!(&records[2][3], "Initech, Inc.");
        assert_eq!(&records[2][4], "");
    }
}
