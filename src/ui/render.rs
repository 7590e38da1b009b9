//! Text rendering of the board
//!
//! Rows are drawn top to bottom (row 2 first), so cell 1 sits in the
//! bottom-left corner like the `1` key on a numeric keypad.

use crate::board::{Cell, Position, BOARD_SIZE};
use crate::rules;

const ROW_SEPARATOR: &str = "-----------";

/// Render a position as a 3x3 grid.
///
/// Computer marks are drawn as `@` and player marks as `X`. Free cells are
/// drawn as `.`, or as their 1-based number when `show_numbers` is set.
pub fn render_board(pos: &Position, show_numbers: bool) -> String {
    let mut out = String::with_capacity(64);

    for row in (0..BOARD_SIZE as u8).rev() {
        for col in 0..BOARD_SIZE as u8 {
            let cell = Cell::from_row_col(row, col);
            match pos.get(cell) {
                Some(side) => {
                    out.push(' ');
                    out.push(side.symbol());
                    out.push(' ');
                }
                None if show_numbers => out.push_str(&format!(" {cell} ")),
                None => out.push_str(" . "),
            }
            if (col as usize) < BOARD_SIZE - 1 {
                out.push('|');
            }
        }
        out.push('\n');
        if row > 0 {
            out.push_str(ROW_SEPARATOR);
            out.push('\n');
        }
    }

    out
}

/// Describe the completed line of a won game, e.g. `Winning line: 1 5 9`.
///
/// Returns `None` while nobody has a line.
pub fn describe_winning_line(pos: &Position) -> Option<String> {
    let side = rules::check_winner(pos)?;
    let line = rules::find_winning_line(pos, side)?;
    let cells: Vec<String> = line.iter_ones().map(|cell| cell.to_string()).collect();
    Some(format!("Winning line: {}", cells.join(" ")))
}
