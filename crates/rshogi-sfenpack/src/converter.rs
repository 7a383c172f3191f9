//! SFEN ⇔ PackedSfen 変換
//!
//! ビット列は 手番 → 盤面 → 手駒 の順。手数はビット列に含まれないため、復号時に呼び出し側が与える。

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::bitstream::{BitReader, BitWriter};
use crate::codec::{board, hand, turn};
use crate::error::Result;
use crate::position::Position;

/// 復号時に手数を指定しない場合の手数
pub const DEFAULT_PLY: u32 = 1;

/// 最終バイトの端数ビットの埋め方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Padding {
    /// `1` で埋める。先手の歩(`000`)と誤読されない
    #[default]
    Filler,
    /// `0` のまま。3ビット以上余ると復号時に先手の歩として読まれる
    Zero,
}

impl FromStr for Padding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "filler" => Ok(Padding::Filler),
            "zero" => Ok(Padding::Zero),
            _ => Err(format!("unknown padding '{s}' (expected 'filler' or 'zero')")),
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Padding::Filler => "filler",
            Padding::Zero => "zero",
        })
    }
}

/// 符号化オプション
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackOptions {
    pub padding: Padding,
}

/// 局面の有効ビット数（パディングを含まない）
pub fn bit_len(pos: &Position) -> usize {
    1 + board::bit_len(&pos.board) + hand::bit_len(&pos.hand)
}

/// オプション付きの変換器
#[derive(Debug, Clone, Copy, Default)]
pub struct SfenPacker {
    options: PackOptions,
}

impl SfenPacker {
    pub fn new(options: PackOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> PackOptions {
        self.options
    }

    /// SFEN文字列をバイト列に変換
    pub fn pack(&self, sfen: &str) -> Result<Vec<u8>> {
        let pos = Position::from_sfen(sfen)?;
        self.pack_position(&pos)
    }

    /// 局面をバイト列に変換
    ///
    /// 出力は `ceil(bit_len / 8)` バイト。
    pub fn pack_position(&self, pos: &Position) -> Result<Vec<u8>> {
        let mut stream = BitWriter::new();
        turn::encode(&mut stream, pos.side_to_move);
        board::encode(&mut stream, &pos.board)?;
        hand::encode(&mut stream, &pos.hand)?;

        let bits = stream.bit_position();
        if self.options.padding == Padding::Filler {
            stream.fill_to_byte(true);
        }
        let data = stream.finish();
        log::debug!(
            "packed {} hand pieces into {bits} bits ({} bytes, {} padding)",
            pos.hand.len(),
            data.len(),
            self.options.padding
        );
        Ok(data)
    }

    /// バイト列を局面に復号
    ///
    /// 手駒はビット列の終端まで読む。パディングの形式は自動で判別する。
    pub fn unpack_position(&self, data: &[u8], ply: u32) -> Result<Position> {
        let mut stream = BitReader::new(data);
        let side_to_move = turn::decode(&mut stream)?;
        let board = board::decode(&mut stream)?;
        let hand = hand::decode(&mut stream)?;
        log::debug!(
            "unpacked {} bytes: {} hand pieces",
            data.len(),
            hand.len()
        );

        Ok(Position {
            board,
            side_to_move,
            hand,
            ply,
        })
    }

    /// バイト列をSFEN文字列に復号
    pub fn unpack(&self, data: &[u8], ply: u32) -> Result<String> {
        self.unpack_position(data, ply).map(|pos| pos.to_sfen())
    }
}

/// デフォルト設定で SFEN文字列をバイト列に変換
pub fn pack(sfen: &str) -> Result<Vec<u8>> {
    SfenPacker::default().pack(sfen)
}

/// デフォルト設定で バイト列をSFEN文字列に復号
pub fn unpack(data: &[u8], ply: u32) -> Result<String> {
    SfenPacker::default().unpack(data, ply)
}
