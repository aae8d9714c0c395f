use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::{
    errors::AppError,
    logging::LogComponent,
    movie_data::{MovieDataset, MovieRecord},
};

const COLUMNS: [&str; 5] = ["year", "tickets_sold", "total_revenue", "ticket_price", "cinema_sites"];

/// Coerce one trimmed cell: empty is 0, anything unparsable is NaN.
pub fn coerce_number(cell: &str) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() {
        return 0.0;
    }
    cell.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the movie CSV body into a dataset.
///
/// Columns are looked up by header name, so their order does not matter and
/// extra columns are ignored. A header that is absent yields NaN for that
/// field on every row.
pub fn parse_movie_csv(text: &str) -> Result<MovieDataset, AppError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::Parse(format!("failed to read CSV header: {}", e)))?
        .clone();

    let positions: Vec<Option<usize>> = COLUMNS
        .iter()
        .map(|name| headers.iter().position(|h| h == *name))
        .collect();

    for (name, position) in COLUMNS.iter().zip(&positions) {
        if position.is_none() {
            crate::log_warn!(
                LogComponent::Infrastructure("CsvLoader"),
                "Column '{}' missing; values will be NaN",
                name
            );
        }
    }

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.map_err(|e| AppError::Parse(format!("CSV row {}: {}", line + 1, e)))?;
        records.push(to_record(&row, &positions));
    }

    MovieDataset::new(records)
}

fn to_record(row: &StringRecord, positions: &[Option<usize>]) -> MovieRecord {
    let field = |column: usize| match positions[column] {
        Some(index) => coerce_number(row.get(index).unwrap_or("")),
        None => f64::NAN,
    };
    MovieRecord::new(field(0), field(1), field(2), field(3), field(4))
}
