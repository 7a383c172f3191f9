//! 駒種（PieceType）

use super::Color;

/// 駒種（先後・成りの区別なし）
///
/// 玉はハフマン符号を持たず、7bitの位置フィールドでのみ表現される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 0,
    Lance = 1,
    Knight = 2,
    Silver = 3,
    Gold = 4,
    Bishop = 5,
    Rook = 6,
    King = 7,
}

impl PieceType {
    /// ハフマン符号を持つ駒種（玉以外）
    pub const HUFFMAN: [PieceType; 7] = [
        PieceType::Pawn,
        PieceType::Lance,
        PieceType::Knight,
        PieceType::Silver,
        PieceType::Gold,
        PieceType::Bishop,
        PieceType::Rook,
    ];

    /// 成れる駒種か（金・玉以外）
    #[inline]
    pub const fn can_promote(self) -> bool {
        !matches!(self, PieceType::Gold | PieceType::King)
    }

    /// SFENの駒文字（先手=大文字）
    #[inline]
    pub const fn to_sfen_char(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Lance => 'L',
            PieceType::Knight => 'N',
            PieceType::Silver => 'S',
            PieceType::Gold => 'G',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::King => 'K',
        }
    }

    /// 手番に応じたSFENの駒文字（後手は小文字）
    #[inline]
    pub const fn to_sfen_letter(self, color: Color) -> char {
        let c = self.to_sfen_char();
        match color {
            Color::Black => c,
            Color::White => c.to_ascii_lowercase(),
        }
    }

    /// SFENの駒文字から駒種と手番を得る
    pub const fn from_sfen_letter(c: char) -> Option<(PieceType, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::Black
        } else {
            Color::White
        };
        let pt = match c.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'L' => PieceType::Lance,
            'N' => PieceType::Knight,
            'S' => PieceType::Silver,
            'G' => PieceType::Gold,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'K' => PieceType::King,
            _ => return None,
        };
        Some((pt, color))
    }
}
