/// One log file's contents: a row of samples per time step.
///
/// Rows keep the parsed values untouched and may differ in length.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    rows: Vec<Vec<f64>>,
}

impl Series {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<f64>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// File name the series was read from.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Number of rows (time steps).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
