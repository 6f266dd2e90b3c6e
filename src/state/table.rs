use std::fmt;

/// A single cell value as read from (or written to) a sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Interpret the cell as a number. Text is parsed after trimming.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Empty => None,
        }
    }

    /// Interpret the cell as a non-negative whole number.
    ///
    /// Spreadsheets store integers as floats, so `30.0` is accepted while
    /// `30.5` and negatives are not.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Cell::Number(n) => {
                if n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64 {
                    Some(*n as u32)
                } else {
                    None
                }
            }
            Cell::Text(s) => {
                let s = s.trim();
                s.parse::<u32>()
                    .ok()
                    .or_else(|| Cell::Number(s.parse().ok()?).as_u32())
            }
            Cell::Empty => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Empty => Ok(()),
        }
    }
}

/// A sheet: one header row of column names followed by data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Index of a column by name (trimmed, case-insensitive).
    pub fn column(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.header
            .iter()
            .position(|h| h.trim().to_lowercase() == wanted)
    }

    /// Cell at `row`/`col`, treating ragged rows as empty past their end.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a table from raw grid rows, taking the first row as the header.
    ///
    /// Trailing fully-empty rows are dropped.
    pub fn from_grid(mut grid: Vec<Vec<Cell>>) -> Self {
        while grid
            .last()
            .is_some_and(|row| row.iter().all(Cell::is_empty))
        {
            grid.pop();
        }

        if grid.is_empty() {
            return Table::default();
        }

        let header = grid.remove(0).iter().map(|c| c.to_string()).collect();
        Self { header, rows: grid }
    }
}
