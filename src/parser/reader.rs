use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use log::debug;

use super::cell::{Cell, Grid, Row};

/// Reads the first sheet of an uploaded file into a grid.
///
/// `.csv` names go through the CSV reader; everything else is handed to the
/// workbook reader, which sniffs xlsx/xlsb/xls/ods from the content.
pub fn read_grid(file_name: &str, bytes: &[u8]) -> Result<Grid> {
    if is_csv(file_name) {
        read_csv(bytes).with_context(|| format!("Failed to read CSV file {}", file_name))
    } else {
        read_workbook(bytes).with_context(|| format!("Failed to read workbook {}", file_name))
    }
}

fn is_csv(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn read_workbook(bytes: &[u8]) -> Result<Grid> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .context("Workbook has no sheets")?;
    debug!("Reading sheet {}", sheet_name);

    let range = workbook.worksheet_range(&sheet_name)?;
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    // Cells before the used range keep their sheet positions
    let leading_rows = (0..start_row).map(|_| Row::new());
    let used_rows = range.rows().map(|cells| {
        let padding = (0..start_col).map(|_| Cell::Empty);
        padding.chain(cells.iter().map(convert_cell)).collect::<Row>()
    });

    Ok(Grid::new(leading_rows.chain(used_rows).collect()))
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Float(n) => Cell::Number(*n),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

fn read_csv(bytes: &[u8]) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let rows = reader
        .records()
        .map(|record| {
            record.map(|fields| {
                fields
                    .iter()
                    .map(|field| match field.trim() {
                        "" => Cell::Empty,
                        _ => Cell::Text(field.to_string()),
                    })
                    .collect::<Row>()
            })
        })
        .collect::<Result<Vec<_>, csv::Error>>()?;

    Ok(Grid::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_csv_grid() {
        let data = "Tournament export\nSpring Open\nRk.,Name,Rtg,TB1\n1,\"Kowalski, Jan\",2101,21.5\n";

        let grid = read_grid("standings.CSV", data.as_bytes()).unwrap();

        assert_eq!(grid.rows()[1][0].text(), "Spring Open");
        assert_eq!(grid.rows()[2].len(), 4);
        assert_eq!(grid.rows()[3][1].text(), "Kowalski, Jan");
    }

    #[test]
    fn test_csv_detection_uses_extension() {
        assert!(is_csv("results.csv"));
        assert!(!is_csv("results.xlsx"));
        assert!(!is_csv("csv"));
    }

    #[test]
    fn test_garbage_workbook_is_an_error() {
        let result = read_grid("results.xlsx", b"definitely not a spreadsheet");

        assert!(result.is_err());
    }

    #[test]
    fn test_convert_cell_variants() {
        assert_eq!(convert_cell(&Data::Int(7)), Cell::Number(7.0));
        assert_eq!(convert_cell(&Data::Bool(true)), Cell::Text("true".to_string()));
        assert_eq!(convert_cell(&Data::Empty), Cell::Empty);
    }
}
