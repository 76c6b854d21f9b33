use super::patterns;

/// A single spreadsheet cell as handed over by the grid reader
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Trimmed text of the cell. Empty cells yield an empty string.
    pub fn text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Number(_) => false,
            Cell::Text(s) => s.trim().is_empty(),
        }
    }
}

pub type Row = Vec<Cell>;

/// Rows of cells, immutable after construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Builds a grid, dropping trailing empty cells so that a row without
    /// content ends up with no cells at all.
    pub fn new(rows: Vec<Row>) -> Self {
        let rows = rows.into_iter().map(trim_trailing_empty).collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn trim_trailing_empty(mut row: Row) -> Row {
    while row.last().is_some_and(Cell::is_empty) {
        row.pop();
    }
    row
}

/// Text of the cell at `index`, empty when the row is shorter
pub fn cell_text(row: &[Cell], index: usize) -> String {
    row.get(index).map(Cell::text).unwrap_or_default()
}

/// Optional sign followed by the leading digits of the trimmed text
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };

    let digits_end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    rest[..digits_end].parse::<i64>().ok().map(|n| sign * n)
}

/// Whole trimmed text as a finite float
pub fn parse_float(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Tie-break value: a blank cell counts as zero, other text must be numeric
pub fn parse_tie_break(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return Some(0.0);
    }
    parse_float(text)
}

/// Longest numeric prefix of the trimmed text, e.g. `12.5` from `"12.5 pts"`
pub fn parse_leading_float(text: &str) -> Option<f64> {
    patterns::LEADING_FLOAT
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}
