//! Row → Redmine table line

use crate::types::{row_contains, Cell, Sentinel, HSPLIT_TOKEN};

/// Value an `#EMPTY` cell renders as
const BLANK: &str = " ";

/// Render one row as a line of Redmine table markup.
///
/// `#EMPTY` cells are replaced in place first. Split rows render as the bare
/// `#HSPLIT` token for the table renderer to strip. A `#STR` row renders as
/// the cell after the token, or nothing when there is none. Runs of empty
/// cells fold into the next non-empty cell as `\N=.` where N counts the run
/// plus that cell; a run at the end of the row is dropped.
pub fn render_line(row: &mut [Cell]) -> String {
    for cell in row.iter_mut() {
        if cell.is(Sentinel::Empty) {
            *cell = Cell::text(BLANK);
        }
    }

    if row_contains(row, Sentinel::HSplit) {
        return format!("{HSPLIT_TOKEN}\n");
    }

    if let Some(pos) = row.iter().position(|cell| cell.is(Sentinel::StringLine)) {
        return match row.get(pos + 1) {
            Some(cell) => format!("{}\n", cell.as_str()),
            None => String::new(),
        };
    }

    if row.iter().any(Cell::is_blank) {
        let mut line = String::from("|");
        let mut span = 1usize;
        for cell in row.iter() {
            if cell.is_blank() {
                span += 1;
            } else if span > 1 {
                line.push_str(&format!("\\{}=.{}|", span, cell.as_str()));
                span = 1;
            } else {
                line.push_str(cell.as_str());
                line.push('|');
            }
        }
        line.push('\n');
        return line;
    }

    let cells: Vec<&str> = row.iter().map(Cell::as_str).collect();
    format!("|{}|\n", cells.join("|"))
}
