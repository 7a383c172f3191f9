//! 駒種のハフマン符号
//!
//! | 駒種 | コード   | ビット数 |
//! |------|----------|----------|
//! | 歩   | 0        | 1        |
//! | 香   | 100      | 3        |
//! | 桂   | 101      | 3        |
//! | 銀   | 110      | 3        |
//! | 金   | 1110     | 4        |
//! | 角   | 11110    | 5        |
//! | 飛   | 11111    | 5        |
//!
//! コードは左のビットから順にストリームへ書く。接頭符号なので復号は最長5ビットで確定する。

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{Result, Section, SfenPackError};
use crate::types::{Color, PieceType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HuffmanCode {
    code: u8,
    bits: u8,
}

/// `PieceType as usize` で引くハフマン符号表（玉を除く）
const HUFFMAN_TABLE: [HuffmanCode; 7] = [
    HuffmanCode {
        code: 0b0,
        bits: 1,
    }, // PAWN (歩)
    HuffmanCode {
        code: 0b100,
        bits: 3,
    }, // LANCE (香)
    HuffmanCode {
        code: 0b101,
        bits: 3,
    }, // KNIGHT (桂)
    HuffmanCode {
        code: 0b110,
        bits: 3,
    }, // SILVER (銀)
    HuffmanCode {
        code: 0b1110,
        bits: 4,
    }, // GOLD (金)
    HuffmanCode {
        code: 0b11110,
        bits: 5,
    }, // BISHOP (角)
    HuffmanCode {
        code: 0b11111,
        bits: 5,
    }, // ROOK (飛)
];

/// 最長の符号長
const MAX_CODE_BITS: u8 = 5;

fn huffman_code(pt: PieceType) -> Option<HuffmanCode> {
    HUFFMAN_TABLE.get(pt as usize).copied()
}

/// 駒種の符号長（玉は `None`）
pub fn code_len(pt: PieceType) -> Option<usize> {
    huffman_code(pt).map(|h| h.bits as usize)
}

/// 駒1枚分のレコード長: 符号 + 成りフラグ(金以外) + 先後フラグ
pub fn record_len(pt: PieceType) -> Option<usize> {
    code_len(pt).map(|n| n + usize::from(pt.can_promote()) + 1)
}

/// 駒種の符号を書き込む（上位ビットから）
pub fn write_piece_type(stream: &mut BitWriter, pt: PieceType) -> Result<()> {
    let huff = huffman_code(pt).ok_or_else(|| {
        SfenPackError::InvalidKingConfiguration("King has no piece code".to_string())
    })?;
    for i in (0..huff.bits).rev() {
        stream.write_one_bit((huff.code >> i) & 1 != 0);
    }
    Ok(())
}

/// 駒種の符号を読み込む
///
/// 読んだビットを上位から積み上げ、符号表と照合する。
pub fn read_piece_type(stream: &mut BitReader, section: Section) -> Result<PieceType> {
    let start = stream.cursor();
    let mut code = 0u8;
    let mut bits = 0u8;

    while bits < MAX_CODE_BITS {
        let bit = stream
            .read_one_bit()
            .ok_or(SfenPackError::UnexpectedEndOfStream {
                section,
                offset: stream.cursor(),
            })?;
        code = (code << 1) | u8::from(bit);
        bits += 1;

        let found = PieceType::HUFFMAN
            .into_iter()
            .find(|&pt| huffman_code(pt) == Some(HuffmanCode { code, bits }));
        if let Some(pt) = found {
            return Ok(pt);
        }
    }

    Err(SfenPackError::UnrecognizedPieceCode {
        section,
        offset: start,
    })
}

/// 駒1枚分のレコード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    pub piece_type: PieceType,
    pub promoted: bool,
    pub color: Color,
}

/// 駒種・成りフラグ(金以外)・先後フラグを書き込む
pub fn write_record(stream: &mut BitWriter, record: PieceRecord) -> Result<()> {
    write_piece_type(stream, record.piece_type)?;
    if record.piece_type.can_promote() {
        stream.write_one_bit(record.promoted);
    }
    stream.write_one_bit(record.color.to_bit());
    Ok(())
}

/// 駒種・成りフラグ(金以外)・先後フラグを読み込む
pub fn read_record(stream: &mut BitReader, section: Section) -> Result<PieceRecord> {
    let piece_type = read_piece_type(stream, section)?;
    let mut read_flag = || {
        stream.read_one_bit().ok_or(SfenPackError::UnexpectedEndOfStream {
            section,
            offset: stream.cursor(),
        })
    };
    let promoted = if piece_type.can_promote() { read_flag()? } else { false };
    let color = Color::from_bit(read_flag()?);

    Ok(PieceRecord {
        piece_type,
        promoted,
        color,
    })
}
