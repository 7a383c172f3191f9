//! 基本型

mod color;
mod hand;
mod piece;
mod piece_type;
mod square;

pub use color::Color;
pub use hand::{Hand, HandPiece, MAX_HAND_COUNT};
pub use piece::Piece;
pub use piece_type::PieceType;
pub use square::Square;
