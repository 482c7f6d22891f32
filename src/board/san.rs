//! Minimal algebraic notation for accepted moves.
//!
//! Produces strings like "e4", "Nf3", "exd6", "O-O", "e8=Q#". There is no
//! origin disambiguation beyond the pawn-capture file; the history this
//! feeds is a display record, not a parseable score sheet.

use super::{Move, MoveFlag, Piece, Square};

/// Build the notation for a move that has already been validated.
/// `check`/`mate` describe the opponent on the resulting board.
pub(crate) fn move_notation(
    piece: Piece,
    from: Square,
    mv: &Move,
    check: bool,
    mate: bool,
) -> String {
    let mut notation = String::new();

    match mv.flag {
        MoveFlag::CastleKingside => notation.push_str("O-O"),
        MoveFlag::CastleQueenside => notation.push_str("O-O-O"),
        _ => {
            if piece != Piece::Pawn {
                notation.push(piece.to_char().to_ascii_uppercase());
            } else if mv.captures {
                notation.push((b'a' + from.file() as u8) as char);
            }
            if mv.captures {
                notation.push('x');
            }
            notation.push_str(&mv.to.to_string());
            if let MoveFlag::Promotion(Some(kind)) = mv.flag {
                notation.push('=');
                notation.push(kind.to_char().to_ascii_uppercase());
            }
        }
    }

    if mate {
        notation.push('#');
    } else if check {
        notation.push('+');
    }

    notation
}
