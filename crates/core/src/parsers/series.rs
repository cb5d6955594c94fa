use thiserror::Error;

use crate::model::Series;

/// Field separator of the controller's log rows.
pub const DELIMITER: char = ',';

#[derive(Debug, Error)]
pub enum SeriesParseError {
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("row {row}, column {column}: `{token}` is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        token: String,
    },
}

/// Parse a series log: one row per line, comma-separated decimal numbers.
///
/// Empty fields are dropped, so `1.0,2.0,` is `[1.0, 2.0]` and a blank line
/// is an empty row. A trailing newline does not add a row. Any other field
/// that is not a number fails the whole series; `row` and `column` in the
/// error are 1-based, `column` counting non-empty fields.
pub fn parse_series(name: &str, data: &[u8]) -> Result<Series, SeriesParseError> {
    let text = std::str::from_utf8(data)?;
    let mut rows = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        for token in line.split(DELIMITER).map(str::trim) {
            if token.is_empty() {
                continue;
            }
            let value: f64 = token
                .parse()
                .map_err(|_| SeriesParseError::InvalidNumber {
                    row: line_idx + 1,
                    column: row.len() + 1,
                    token: token.to_string(),
                })?;
            row.push(value);
        }
        rows.push(row);
    }

    Ok(Series::new(name, rows))
}
