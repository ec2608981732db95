use super::{RosterEntry, RosterImportError};
use std::io::Read;

pub(crate) fn parse_roster<R: Read>(
    reader: R,
    column: &str,
) -> Result<Vec<RosterEntry>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let wanted = header_key(column);
    let index = csv_reader
        .headers()?
        .iter()
        .position(|header| header_key(header) == wanted)
        .ok_or_else(|| RosterImportError::MissingColumn {
            column: column.trim().to_string(),
        })?;

    let mut entries = Vec::new();
    for (offset, record) in csv_reader.records().enumerate() {
        let record = record?;
        let Some(name) = record.get(index).filter(|value| !value.is_empty()) else {
            continue;
        };

        entries.push(RosterEntry {
            row: offset + 1,
            name: name.to_string(),
        });
    }

    Ok(entries)
}

fn header_key(value: &str) -> String {
    value.replace('\u{feff}', "").trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_named_column_case_insensitively() {
        let csv = "Job ID,Customer Name,Crew\n\
101,Eben Woodall,North\n\
102,  Eben Woodbell ,South\n";

        let entries = parse_roster(csv.as_bytes(), "customer name").expect("roster parses");
        assert_eq!(
            entries,
            vec![
                RosterEntry { row: 1, name: "Eben Woodall".to_string() },
                RosterEntry { row: 2, name: "Eben Woodbell".to_string() },
            ]
        );
    }

    #[test]
    fn blank_and_short_rows_are_skipped_but_keep_numbering() {
        let csv = "\u{feff}Name,Phone\nDan Howard,555\n,556\nDaniel Howard,557\nShort\n";

        let entries = parse_roster(csv.as_bytes(), "Name").expect("roster parses");
        let rows: Vec<_> = entries.iter().map(|entry| entry.row).collect();
        assert_eq!(rows, vec![1, 3, 4]);
        assert_eq!(entries[2].name, "Short");
    }

    #[test]
    fn missing_column_is_reported() {
        let err = parse_roster("Job,Crew\n1,North\n".as_bytes(), "Name")
            .expect_err("column lookup fails");
        assert!(matches!(err, RosterImportError::MissingColumn { ref column } if column == "Name"));
        assert_eq!(err.to_string(), "roster export has no 'Name' column");
    }
}
