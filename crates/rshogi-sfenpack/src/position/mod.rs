//! 局面（盤面・手番・手駒・手数）

mod sfen;

pub use sfen::SFEN_HIRATE;

use crate::error::{Result, SfenPackError};
use crate::types::{Color, Hand, Piece, Square};

/// 盤面（81マス、SFEN記述順）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::NUM],
}

impl Board {
    /// 駒のない盤面
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::NUM],
        }
    }

    /// マス配列から生成
    pub const fn from_squares(squares: [Option<Piece>; Square::NUM]) -> Board {
        Board { squares }
    }

    /// マス上の駒
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// マスに駒を置く（`None` で取り除く）
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// 全マスを昇順に列挙
    pub fn iter(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(|sq| (sq, self.piece_on(sq)))
    }

    /// 先手玉・後手玉の位置を `[Black, White]` の順で返す
    ///
    /// 各手番ちょうど1枚でなければ `InvalidKingConfiguration`。
    pub fn king_squares(&self) -> Result<[Square; Color::NUM]> {
        let mut kings: [Option<Square>; Color::NUM] = [None; Color::NUM];
        for (sq, piece) in self.iter() {
            let Some(piece) = piece.filter(|p| p.is_king()) else {
                continue;
            };
            let slot = &mut kings[piece.color.index()];
            if let Some(prev) = slot {
                return Err(SfenPackError::InvalidKingConfiguration(format!(
                    "{:?} has more than one king (squares {} and {})",
                    piece.color,
                    prev.index(),
                    sq.index()
                )));
            }
            *slot = Some(sq);
        }

        match kings {
            [Some(black), Some(white)] => Ok([black, white]),
            [None, _] => Err(SfenPackError::InvalidKingConfiguration(
                "Black king not found".to_string(),
            )),
            [_, None] => Err(SfenPackError::InvalidKingConfiguration(
                "White king not found".to_string(),
            )),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

/// 局面
///
/// テキストのパースまたはビット列の復号で生成され、符号化の入力としては変更されない。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub hand: Hand,
    /// 手数（PackedSfen には含まれない）
    pub ply: u32,
}

impl Position {
    /// 平手初期局面
    pub fn hirate() -> Position {
        // SFEN_HIRATE は定数なので必ずパースできる
        match Position::from_sfen(SFEN_HIRATE) {
            Ok(pos) => pos,
            Err(e) => unreachable!("SFEN_HIRATE must be valid: {e}"),
        }
    }
}
