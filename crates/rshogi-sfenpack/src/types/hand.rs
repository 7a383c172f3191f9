//! 手駒（Hand）
//!
//! 先後両方の手駒を、SFENに書かれた順（個数は展開済み）の列として保持する。
//! PackedSfen の手駒は1枚ずつの符号の並びなので、この順序がそのままビット列の順序になる。

use super::{Color, PieceType};
use crate::error::{Result, SfenPackError};

/// SFENの手駒で1トークンに書ける最大枚数
pub const MAX_HAND_COUNT: u32 = 255;

/// 手駒1枚
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandPiece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl HandPiece {
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> HandPiece {
        HandPiece { piece_type, color }
    }
}

/// 手駒（先後まとめて、記述順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    pieces: Vec<HandPiece>,
}

impl Hand {
    /// 空の手駒
    pub const fn new() -> Hand {
        Hand { pieces: Vec::new() }
    }

    /// 1枚追加
    pub fn push(&mut self, piece: HandPiece) {
        self.pieces.push(piece);
    }

    /// 手駒がないか
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// 総枚数
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// 1枚ずつ記述順に列挙
    pub fn iter(&self) -> impl Iterator<Item = &HandPiece> {
        self.pieces.iter()
    }

    /// 指定した駒種・手番の枚数
    pub fn count(&self, color: Color, piece_type: PieceType) -> usize {
        self.pieces
            .iter()
            .filter(|p| p.color == color && p.piece_type == piece_type)
            .count()
    }

    /// SFENの手駒フィールドをパースし、個数を展開する
    ///
    /// `"2Pb"` は 歩,歩,角(後手) の3枚になる。`"-"` は空。
    pub fn from_sfen(s: &str) -> Result<Hand> {
        let mut hand = Hand::new();
        if s == "-" {
            return Ok(hand);
        }
        if s.is_empty() {
            return Err(SfenPackError::malformed("Empty hand field"));
        }

        let mut count: Option<u32> = None;
        for c in s.chars() {
            if let Some(digit) = c.to_digit(10) {
                let n = count.unwrap_or(0) * 10 + digit;
                if n > MAX_HAND_COUNT {
                    return Err(SfenPackError::malformed(format!(
                        "Hand count too large in '{s}'"
                    )));
                }
                count = Some(n);
                continue;
            }

            let (pt, color) = PieceType::from_sfen_letter(c).ok_or_else(|| {
                SfenPackError::malformed(format!("Unknown hand piece: '{c}'"))
            })?;
            if pt == PieceType::King {
                return Err(SfenPackError::malformed(format!("King cannot be in hand: '{c}'")));
            }

            let n = count.take().unwrap_or(1);
            if n == 0 {
                return Err(SfenPackError::malformed(format!("Zero hand count for '{c}'")));
            }
            for _ in 0..n {
                hand.push(HandPiece::new(color, pt));
            }
        }

        if count.is_some() {
            return Err(SfenPackError::malformed(format!(
                "Hand count without piece in '{s}'"
            )));
        }
        Ok(hand)
    }

    /// SFENの手駒フィールドを生成する
    ///
    /// 同じ駒の連続は `<個数><駒文字>` にまとめる。手駒なしは `"-"`。
    pub fn to_sfen(&self) -> String {
        if self.pieces.is_empty() {
            return "-".to_string();
        }

        let mut result = String::new();
        for run in self.pieces.chunk_by(|a, b| a == b) {
            let p = run[0];
            if run.len() > 1 {
                result.push_str(&run.len().to_string());
            }
            result.push(p.piece_type.to_sfen_letter(p.color));
        }
        result
    }
}

impl FromIterator<HandPiece> for Hand {
    fn from_iter<I: IntoIterator<Item = HandPiece>>(iter: I) -> Hand {
        Hand {
            pieces: iter.into_iter().collect(),
        }
    }
}
