//! マス（Square）
//!
//! マス番号は SFEN の記述順に `rank * 9 + file` で数える。
//! rank 0 は SFEN で最初に書かれる段、file 0 は各段で最初に書かれるマス。

/// マス（0-80）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// マスの数
    pub const NUM: usize = 81;

    /// 一辺のマス数
    pub const WIDTH: usize = 9;

    /// 段と筋（SFEN記述順）から生成
    #[inline]
    pub const fn new(rank: usize, file: usize) -> Option<Square> {
        if rank < Self::WIDTH && file < Self::WIDTH {
            Some(Square((rank * Self::WIDTH + file) as u8))
        } else {
            None
        }
    }

    /// u8からSquareに変換
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if (n as usize) < Self::NUM { Some(Square(n)) } else { None }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 段（SFEN記述順、0始まり）
    #[inline]
    pub const fn rank(self) -> usize {
        self.index() / Self::WIDTH
    }

    /// 筋（段内の記述順、0始まり）
    #[inline]
    pub const fn file(self) -> usize {
        self.index() % Self::WIDTH
    }

    /// 全マスを昇順に列挙
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::NUM as u8).map(Square)
    }
}
