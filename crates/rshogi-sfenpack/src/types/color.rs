//! 手番（Color）

use crate::error::{Result, SfenPackError};

/// 手番（先手/後手）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 先後フラグ (0=先手, 1=後手) から変換
    #[inline]
    pub const fn from_bit(bit: bool) -> Color {
        if bit { Color::White } else { Color::Black }
    }

    /// 先後フラグ (0=先手, 1=後手) に変換
    #[inline]
    pub const fn to_bit(self) -> bool {
        matches!(self, Color::White)
    }

    /// SFENの手番フィールド ("b" / "w") をパース
    pub fn from_sfen(s: &str) -> Result<Color> {
        match s {
            "b" => Ok(Color::Black),
            "w" => Ok(Color::White),
            _ => Err(SfenPackError::malformed(format!(
                "Expected 'b' or 'w' for side to move, got '{s}'"
            ))),
        }
    }

    /// SFENの手番文字
    #[inline]
    pub const fn to_sfen_char(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}
