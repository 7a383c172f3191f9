//! 盤面の符号化
//!
//! 1. 先手玉位置 (7bit)
//! 2. 後手玉位置 (7bit)
//! 3. 玉以外の79マスを昇順に: 空升は `0`、駒は `1` + 駒レコード
//!
//! 玉のマスはビットを出力せず、プレースホルダも置かない。

use super::huffman::{self, PieceRecord};
use crate::bitstream::{BitReader, BitWriter};
use crate::error::{Result, Section, SfenPackError};
use crate::position::Board;
use crate::types::{Color, Piece, PieceType, Square};

/// 玉位置フィールドのビット数
pub const KING_SQUARE_BITS: usize = 7;

/// 玉以外のマス数
pub const NON_KING_SQUARES: usize = Square::NUM - Color::NUM;

/// 盤面を書き込む
///
/// 玉が各手番ちょうど1枚でなければ `InvalidKingConfiguration`。
pub fn encode(stream: &mut BitWriter, board: &Board) -> Result<()> {
    let kings = board.king_squares()?;
    for sq in kings {
        stream.write_n_bit(sq.index() as u32, KING_SQUARE_BITS);
    }

    for (_, piece) in board.iter() {
        match piece {
            Some(pc) if pc.is_king() => {}
            None => stream.write_one_bit(false),
            Some(pc) => {
                stream.write_one_bit(true);
                huffman::write_record(
                    stream,
                    PieceRecord {
                        piece_type: pc.piece_type,
                        promoted: pc.promoted,
                        color: pc.color,
                    },
                )?;
            }
        }
    }
    Ok(())
}

/// 盤面のビット数（玉位置フィールドを含む）
pub fn bit_len(board: &Board) -> usize {
    let squares: usize = board
        .iter()
        .map(|(_, piece)| match piece {
            Some(pc) if pc.is_king() => 0,
            None => 1,
            Some(pc) => 1 + huffman::record_len(pc.piece_type).unwrap_or(0),
        })
        .sum();
    KING_SQUARE_BITS * Color::NUM + squares
}

/// 盤面を読み込む
pub fn decode(stream: &mut BitReader) -> Result<Board> {
    let black = read_king_square(stream, Color::Black)?;
    let white = read_king_square(stream, Color::White)?;
    if black == white {
        return Err(SfenPackError::InvalidKingConfiguration(format!(
            "Both kings on square {}",
            black.index()
        )));
    }

    let mut squares = Vec::with_capacity(Square::NUM);
    for _ in 0..NON_KING_SQUARES {
        let occupied = stream
            .read_one_bit()
            .ok_or(SfenPackError::UnexpectedEndOfStream {
                section: Section::Board,
                offset: stream.cursor(),
            })?;
        let piece = if occupied {
            let record = huffman::read_record(stream, Section::Board)?;
            Some(Piece {
                piece_type: record.piece_type,
                color: record.color,
                promoted: record.promoted,
            })
        } else {
            None
        };
        squares.push(piece);
    }

    insert_kings(squares, [(black, Color::Black), (white, Color::White)])
}

fn read_king_square(stream: &mut BitReader, color: Color) -> Result<Square> {
    let start = stream.cursor();
    let raw = stream
        .read_n_bit(KING_SQUARE_BITS)
        .ok_or(SfenPackError::UnexpectedEndOfStream {
            section: Section::Board,
            offset: stream.cursor(),
        })?;
    Square::from_u8(raw as u8).ok_or_else(|| {
        SfenPackError::InvalidKingConfiguration(format!(
            "Invalid {color:?} king position {raw} at bit {start}"
        ))
    })
}

/// 玉を除いた79マスの列に、2枚の玉を絶対位置で挿入して81マスに戻す
///
/// 挿入は位置の昇順に行う。先に小さい位置へ挿入すると後続の要素が1つずつ後ろへずれるので、
/// 大きい位置の玉はそのずれを含めた正しい絶対位置に入る。
fn insert_kings(
    mut squares: Vec<Option<Piece>>,
    mut kings: [(Square, Color); Color::NUM],
) -> Result<Board> {
    kings.sort_by_key(|&(sq, _)| sq);
    for (sq, color) in kings {
        if sq.index() > squares.len() {
            return Err(SfenPackError::InvalidKingConfiguration(format!(
                "King square {} is out of range",
                sq.index()
            )));
        }
        squares.insert(sq.index(), Some(Piece::new(color, PieceType::King)));
    }

    let squares: [Option<Piece>; Square::NUM] = squares.try_into().map_err(|v: Vec<_>| {
        SfenPackError::InvalidKingConfiguration(format!(
            "Board has {} squares after inserting kings",
            v.len()
        ))
    })?;
    Ok(Board::from_squares(squares))
}
