//! Parsing of the human's console input

use crate::board::{Cell, Position, TOTAL_CELLS};
use crate::error::MoveError;

/// One line of input at the move prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark on a free cell
    Play(Cell),
    /// Take back the last move pair
    Undo,
    /// Leave the game
    Quit,
}

/// Parse a line typed at the move prompt.
///
/// Accepts a 1-based cell number, `u`/`undo` or `q`/`quit`.
pub fn parse_command(line: &str, pos: &Position) -> Result<Command, MoveError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "u" | "undo" => Ok(Command::Undo),
        "q" | "quit" => Ok(Command::Quit),
        _ => parse_cell(line, pos).map(Command::Play),
    }
}

/// Parse a 1-based cell number and check that the cell is free.
///
/// # Arguments
/// * `line` - raw input, surrounding whitespace is ignored
/// * `pos` - current position
///
/// # Returns
/// The 0-based cell, or the reason the input cannot be played
pub fn parse_cell(line: &str, pos: &Position) -> Result<Cell, MoveError> {
    let text = line.trim();
    let number: usize = text
        .parse()
        .map_err(|_| MoveError::InvalidInput(text.to_string()))?;

    if number == 0 || number > TOTAL_CELLS {
        return Err(MoveError::OutOfRange(number));
    }
    let cell = Cell::try_new(number - 1).ok_or(MoveError::OutOfRange(number))?;

    if !pos.is_free(cell) {
        return Err(MoveError::Occupied(cell));
    }
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    #[test]
    fn test_parse_valid_cells() {
        let pos = Position::empty();
        assert_eq!(parse_cell("1", &pos), Ok(Cell::new(0)));
        assert_eq!(parse_cell("9", &pos), Ok(Cell::new(8)));
        assert_eq!(parse_cell("  5\n", &pos), Ok(Cell::new(4)));
    }

    #[test]
    fn test_parse_out_of_range() {
        let pos = Position::empty();
        assert_eq!(parse_cell("0", &pos), Err(MoveError::OutOfRange(0)));
        assert_eq!(parse_cell("10", &pos), Err(MoveError::OutOfRange(10)));
    }

    #[test]
    fn test_parse_garbage() {
        let pos = Position::empty();
        assert_eq!(
            parse_cell("abc", &pos),
            Err(MoveError::InvalidInput("abc".to_string()))
        );
        assert_eq!(parse_cell("-3", &pos), Err(MoveError::InvalidInput("-3".to_string())));
        assert_eq!(parse_cell("", &pos), Err(MoveError::InvalidInput(String::new())));
    }

    #[test]
    fn test_parse_occupied() {
        let mut pos = Position::empty();
        pos.place(Cell::new(4), Side::Cpu).unwrap();
        assert_eq!(parse_cell("5", &pos), Err(MoveError::Occupied(Cell::new(4))));

        pos.place(Cell::new(0), Side::Player).unwrap();
        assert_eq!(parse_cell("1", &pos), Err(MoveError::Occupied(Cell::new(0))));
    }

    #[test]
    fn test_parse_commands() {
        let pos = Position::empty();
        assert_eq!(parse_command("u", &pos), Ok(Command::Undo));
        assert_eq!(parse_command(" Quit ", &pos), Ok(Command::Quit));
        assert_eq!(parse_command("3", &pos), Ok(Command::Play(Cell::new(2))));
        assert!(parse_command("x", &pos).is_err());
    }

    #[test]
    fn test_error_message_uses_display_number() {
        let mut pos = Position::empty();
        pos.place(Cell::new(2), Side::Cpu).unwrap();
        let err = parse_cell("3", &pos).unwrap_err();
        assert_eq!(err.to_string(), "cell 3 is already occupied");
    }
}
