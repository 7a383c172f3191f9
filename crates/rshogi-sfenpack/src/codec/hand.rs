//! 手駒の符号化
//!
//! 手駒1枚ごとに 駒種の符号 + 成りフラグ(金以外、常に0) + 先後フラグ を並べる。
//! 枚数や終端記号はなく、ビット列の終端で手駒の列が終わる。
//!
//! # 終端の扱い
//!
//! 各レコードを読む前に終端を確認し、終端ならそこで終了する。レコードの途中で終端に
//! 達した場合はエラーだが、最終バイトの端数（残り8ビット未満から始まり、全ビットが同じ値）
//! はパディングとみなす。成りフラグが立った手駒レコードは駒箱の駒（YaneuraOu の
//! パディング）として読み飛ばす。

use super::huffman::{self, PieceRecord};
use crate::bitstream::{BitReader, BitWriter};
use crate::error::{Result, Section, SfenPackError};
use crate::types::{Hand, HandPiece, PieceType};

/// 手駒を書き込む
pub fn encode(stream: &mut BitWriter, hand: &Hand) -> Result<()> {
    for piece in hand.iter() {
        if piece.piece_type == PieceType::King {
            return Err(SfenPackError::InvalidKingConfiguration(
                "King cannot be in hand".to_string(),
            ));
        }
        huffman::write_record(
            stream,
            PieceRecord {
                piece_type: piece.piece_type,
                promoted: false,
                color: piece.color,
            },
        )?;
    }
    Ok(())
}

/// 手駒のビット数
pub fn bit_len(hand: &Hand) -> usize {
    hand.iter()
        .map(|p| huffman::record_len(p.piece_type).unwrap_or(0))
        .sum()
}

/// 手駒をビット列の終端まで読み込む
pub fn decode(stream: &mut BitReader) -> Result<Hand> {
    let mut hand = Hand::new();

    while !stream.is_exhausted() {
        let start = stream.cursor();
        let remaining = stream.remaining();

        match huffman::read_record(stream, Section::Hand) {
            Ok(record) if record.promoted => {
                log::trace!("skipped piece-box record {:?} at bit {start}", record.piece_type);
            }
            Ok(record) => hand.push(HandPiece::new(record.color, record.piece_type)),
            Err(SfenPackError::UnexpectedEndOfStream { .. })
                if is_trailing_padding(stream, start, remaining) =>
            {
                log::trace!("treated {remaining} trailing bits at bit {start} as padding");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(hand)
}

/// 最終バイト内で始まり、全ビットが同じ値の不完全なレコードか
fn is_trailing_padding(stream: &BitReader, start: usize, remaining: usize) -> bool {
    remaining < 8 && stream.is_uniform_from(start)
}
