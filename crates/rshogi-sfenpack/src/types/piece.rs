//! 駒（Piece）

use super::{Color, PieceType};

/// 盤上の駒（駒種・手番・成り）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
    pub promoted: bool,
}

impl Piece {
    /// 生駒を生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece {
            piece_type,
            color,
            promoted: false,
        }
    }

    /// 成駒を生成（成れない駒種なら `None`）
    #[inline]
    pub const fn promoted(color: Color, piece_type: PieceType) -> Option<Piece> {
        if piece_type.can_promote() {
            Some(Piece {
                piece_type,
                color,
                promoted: true,
            })
        } else {
            None
        }
    }

    /// 玉か
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.piece_type, PieceType::King)
    }

    /// SFEN表記（成駒は "+" 付き）
    pub fn to_sfen(self) -> String {
        let c = self.piece_type.to_sfen_letter(self.color);
        if self.promoted { format!("+{c}") } else { c.to_string() }
    }
}
