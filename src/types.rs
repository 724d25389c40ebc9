use std::fmt;

//==============================================================================
// Sentinel Vocabulary
//==============================================================================

/// Horizontal table divider token
pub const HSPLIT_TOKEN: &str = "#HSPLIT";
/// Blank cell token
pub const EMPTY_TOKEN: &str = "#EMPTY";
/// Literal text line token
pub const STRING_LINE_TOKEN: &str = "#STR";
/// Vertical merge token
pub const VJOIN_TOKEN: &str = "#VJOIN";
/// Vertical table divider token (reserved, not acted on)
pub const VSPLIT_TOKEN: &str = "#VSPLIT";

/// Control token embedded in a cell to signal structural intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// Row closes the current sub-table
    HSplit,
    /// Cell renders as a blank
    Empty,
    /// Row is a literal text line; content is the next cell
    StringLine,
    /// Cell merges into the cell above
    VJoin,
    /// Reserved for vertical table splitting
    VSplit,
}

impl Sentinel {
    pub const ALL: [Sentinel; 5] = [
        Sentinel::HSplit,
        Sentinel::Empty,
        Sentinel::StringLine,
        Sentinel::VJoin,
        Sentinel::VSplit,
    ];

    /// Exact-match lookup of a raw cell value
    pub fn from_token(raw: &str) -> Option<Self> {
        match raw {
            HSPLIT_TOKEN => Some(Sentinel::HSplit),
            EMPTY_TOKEN => Some(Sentinel::Empty),
            STRING_LINE_TOKEN => Some(Sentinel::StringLine),
            VJOIN_TOKEN => Some(Sentinel::VJoin),
            VSPLIT_TOKEN => Some(Sentinel::VSplit),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Sentinel::HSplit => HSPLIT_TOKEN,
            Sentinel::Empty => EMPTY_TOKEN,
            Sentinel::StringLine => STRING_LINE_TOKEN,
            Sentinel::VJoin => VJOIN_TOKEN,
            Sentinel::VSplit => VSPLIT_TOKEN,
        }
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returns true if the raw value is exactly one of the reserved tokens
pub fn is_control_cell(cell: &str) -> bool {
    Sentinel::from_token(cell).is_some()
}

//==============================================================================
// Cells and Grids
//==============================================================================

/// A single cell, classified once at ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Sentinel(Sentinel),
    /// Plain content. The empty string marks a horizontal merge gap.
    Text(String),
}

impl Cell {
    /// Classify a raw cell value
    pub fn parse(raw: &str) -> Self {
        match Sentinel::from_token(raw) {
            Some(sentinel) => Cell::Sentinel(sentinel),
            None => Cell::Text(raw.to_string()),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Raw value as it appeared in the sheet (sentinels render as their token)
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Sentinel(sentinel) => sentinel.token(),
            Cell::Text(value) => value,
        }
    }

    pub fn is(&self, sentinel: Sentinel) -> bool {
        matches!(self, Cell::Sentinel(s) if *s == sentinel)
    }

    pub fn is_control(&self) -> bool {
        matches!(self, Cell::Sentinel(_))
    }

    /// True only for the empty string; a single space is content
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Text(value) if value.is_empty())
    }

    /// Already wrapped in bold markers
    pub fn is_bold(&self) -> bool {
        matches!(self, Cell::Text(value) if value.starts_with('*') && value.ends_with('*'))
    }
}

impl From<&str> for Cell {
    fn from(raw: &str) -> Self {
        Cell::parse(raw)
    }
}

impl From<String> for Cell {
    fn from(raw: String) -> Self {
        match Sentinel::from_token(&raw) {
            Some(sentinel) => Cell::Sentinel(sentinel),
            None => Cell::Text(raw),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Row = Vec<Cell>;

/// Ordered rows of cells. Rows may differ in length once vertical merging
/// has removed cells.
pub type Grid = Vec<Row>;

pub fn row_contains(row: &[Cell], sentinel: Sentinel) -> bool {
    row.iter().any(|cell| cell.is(sentinel))
}

/// Literal text rows are never split, styled or merged
pub fn is_string_line(row: &[Cell]) -> bool {
    row_contains(row, Sentinel::StringLine)
}

/// Build a grid from stringified rows
pub fn grid_from_strings<R, S>(rows: R) -> Grid
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = S>,
    S: Into<String>,
{
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|raw| Cell::from(Into::<String>::into(raw)))
                .collect()
        })
        .collect()
}

/// Raw values of a grid, mostly useful for assertions and debugging
pub fn grid_to_strings(grid: &[Row]) -> Vec<Vec<String>> {
    grid.iter()
        .map(|row| row.iter().map(|cell| cell.as_str().to_string()).collect())
        .collect()
}
