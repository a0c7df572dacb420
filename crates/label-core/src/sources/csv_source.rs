//! CSV table reader

use crate::error::{LabelError, Result};
use crate::types::{Record, Table};

/// Parse headerless CSV; every field is kept as written
pub fn read_csv(source_name: &str, bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| LabelError::read(source_name, e))?;
        records.push(row.iter().collect::<Record>());
    }

    log::debug!("Parsed {} CSV rows from {}", records.len(), source_name);
    Ok(Table::new(source_name, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_rows_without_header() {
        let data = "0007,x,Nimal,\"12, Main Street, Colombo\"\n0008,y,Kamal,Kandy\n";
        let table = read_csv("paper.csv", data.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.records[0].field(0), "0007");
        assert_eq!(table.records[0].field(3), "12, Main Street, Colombo");
        assert_eq!(table.records[1].field(2), "Kamal");
        assert_eq!(table.source_name, "paper.csv");
    }

    #[test]
    fn test_ragged_rows_are_accepted() {
        let data = "1,a,b,c,d,e,f,g,h,i\n2,a\n";
        let table = read_csv("ragged.csv", data.as_bytes()).unwrap();

        assert_eq!(table.records[0].len(), 10);
        assert_eq!(table.records[1].len(), 2);
        assert_eq!(table.records[1].field(8), "");
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let data = b"1,\xff\xfe,abc\n";
        let err = read_csv("broken.csv", data).unwrap_err();
        assert!(matches!(err, LabelError::Read { .. }));
    }
}
