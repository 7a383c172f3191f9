//! SFEN形式の解析・出力

use std::fmt;
use std::str::FromStr;

use super::{Board, Position};
use crate::error::{Result, SfenPackError};
use crate::types::{Color, Hand, Piece, PieceType, Square};

/// 平手初期局面のSFEN
pub const SFEN_HIRATE: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

impl Board {
    /// SFENの盤面フィールドをパース
    pub fn from_sfen(board_str: &str) -> Result<Board> {
        let ranks: Vec<&str> = board_str.split('/').collect();
        if ranks.len() != Square::WIDTH {
            return Err(SfenPackError::malformed(format!(
                "Expected 9 ranks, got {}",
                ranks.len()
            )));
        }

        let mut board = Board::empty();
        for (rank, rank_str) in ranks.iter().enumerate() {
            let mut file = 0usize;
            let mut promoted = false;

            for c in rank_str.chars() {
                if c == '+' {
                    if promoted {
                        return Err(SfenPackError::malformed(format!(
                            "Repeated '+' in rank {rank}"
                        )));
                    }
                    promoted = true;
                    continue;
                }

                if let Some(digit) = c.to_digit(10) {
                    if promoted || digit == 0 {
                        return Err(SfenPackError::malformed(format!(
                            "Unexpected '{c}' in rank {rank}"
                        )));
                    }
                    file += digit as usize;
                    if file > Square::WIDTH {
                        return Err(SfenPackError::malformed(format!(
                            "Too many squares in rank {rank}"
                        )));
                    }
                    continue;
                }

                let sq = Square::new(rank, file).ok_or_else(|| {
                    SfenPackError::malformed(format!("Too many pieces in rank {rank}"))
                })?;
                board.set(sq, Some(sfen_char_to_piece(c, promoted)?));
                promoted = false;
                file += 1;
            }

            if promoted {
                return Err(SfenPackError::malformed(format!("Dangling '+' in rank {rank}")));
            }
            if file != Square::WIDTH {
                return Err(SfenPackError::malformed(format!(
                    "Rank {rank} has {file} squares, expected 9"
                )));
            }
        }

        Ok(board)
    }

    /// SFENの盤面フィールドを生成
    pub fn to_sfen(&self) -> String {
        let mut result = String::new();

        for rank in 0..Square::WIDTH {
            if rank > 0 {
                result.push('/');
            }
            let mut empty_count = 0;
            for file in 0..Square::WIDTH {
                let piece = Square::new(rank, file).and_then(|sq| self.piece_on(sq));
                match piece {
                    None => empty_count += 1,
                    Some(pc) => {
                        if empty_count > 0 {
                            result.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        result.push_str(&pc.to_sfen());
                    }
                }
            }
            if empty_count > 0 {
                result.push_str(&empty_count.to_string());
            }
        }

        result
    }
}

impl Position {
    /// SFEN文字列をパース
    ///
    /// 空白区切りでちょうど4フィールド（盤面・手番・手駒・手数）が必要。
    pub fn from_sfen(sfen: &str) -> Result<Position> {
        let parts: Vec<&str> = sfen.split_whitespace().collect();
        let [board, turn, hand, ply] = parts.as_slice() else {
            return Err(SfenPackError::malformed(format!(
                "Expected 4 fields, got {}",
                parts.len()
            )));
        };

        let board = Board::from_sfen(board)?;
        let side_to_move = Color::from_sfen(turn)?;
        let hand = Hand::from_sfen(hand)?;
        let ply = ply
            .parse::<u32>()
            .map_err(|_| SfenPackError::malformed(format!("Invalid ply: '{ply}'")))?;

        Ok(Position {
            board,
            side_to_move,
            hand,
            ply,
        })
    }

    /// SFEN文字列を生成
    pub fn to_sfen(&self) -> String {
        format!(
            "{} {} {} {}",
            self.board.to_sfen(),
            self.side_to_move.to_sfen_char(),
            self.hand.to_sfen(),
            self.ply
        )
    }
}

impl FromStr for Position {
    type Err = SfenPackError;

    fn from_str(s: &str) -> Result<Position> {
        Position::from_sfen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sfen())
    }
}

/// SFEN文字を駒に変換
fn sfen_char_to_piece(c: char, promoted: bool) -> Result<Piece> {
    let (pt, color) = PieceType::from_sfen_letter(c)
        .ok_or_else(|| SfenPackError::malformed(format!("Unknown piece: '{c}'")))?;

    if promoted {
        Piece::promoted(color, pt)
            .ok_or_else(|| SfenPackError::malformed(format!("Cannot promote: '{c}'")))
    } else {
        Ok(Piece::new(color, pt))
    }
}
