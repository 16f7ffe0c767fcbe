//! Conversions between algebraic coordinates (for example "e4") and board
//! locations. Reused by the FEN utilities and by tests that want readable
//! square names.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{location_is_on_board, BoardLocation};

/// Convert an algebraic coordinate (for example "e4") to a board location.
#[inline]
pub fn algebraic_to_location(square: &str) -> ChessResult<BoardLocation> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicSquare(square.to_owned()));
    }

    Ok(((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert a board location to its algebraic coordinate.
#[inline]
pub fn location_to_algebraic(location: BoardLocation) -> ChessResult<String> {
    if !location_is_on_board(location) {
        return Err(ChessErrors::OutOfBounds(location));
    }

    let file_char = char::from(b'a' + location.0 as u8);
    let rank_char = char::from(b'1' + location.1 as u8);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_location, location_to_algebraic};
    use crate::chess_errors::ChessErrors;

    #[test]
    fn round_trip_corner_squares() {
        assert_eq!(algebraic_to_location("a1").expect("a1 parses"), (0, 0));
        assert_eq!(algebraic_to_location("h8").expect("h8 parses"), (7, 7));
        assert_eq!(location_to_algebraic((0, 0)).expect("a1 converts"), "a1");
        assert_eq!(location_to_algebraic((7, 7)).expect("h8 converts"), "h8");
    }

    #[test]
    fn malformed_input_is_rejected() {
        for bad in ["", "e", "e44", "i4", "e9", "44"] {
            assert_eq!(
                algebraic_to_location(bad),
                Err(ChessErrors::InvalidAlgebraicSquare(bad.to_owned()))
            );
        }
        assert_eq!(
            location_to_algebraic((8, 0)),
            Err(ChessErrors::OutOfBounds((8, 0)))
        );
    }
}
