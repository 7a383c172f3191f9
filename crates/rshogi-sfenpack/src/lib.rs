//! SFEN ⇔ PackedSfen 変換ライブラリ
//!
//! SFEN文字列（盤面・手番・手駒・手数）と、YaneuraOu の PackedSfen と同じ
//! ハフマン符号化ビット列との相互変換を提供する。
//!
//! # ビット列の構成
//!
//! 1. 手番 (1bit): 0=先手, 1=後手
//! 2. 先手玉位置 (7bit, 下位ビットから)
//! 3. 後手玉位置 (7bit, 下位ビットから)
//! 4. 盤上の駒 (玉以外の79マス、ハフマン符号化)
//! 5. 手駒 (ハフマン符号化、個数フィールドなし。ビット列の終端で終了)
//!
//! 出力は `ceil(総ビット数 / 8)` バイトで、固定長へのパディングは行わない。
//!
//! # 使用例
//!
//! ```
//! use rshogi_sfenpack::{pack, unpack};
//!
//! let sfen = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";
//! let packed = pack(sfen).unwrap();
//! assert_eq!(packed.len(), 32);
//! assert_eq!(unpack(&packed, 1).unwrap(), sfen);
//! ```

pub mod bitstream;
pub mod codec;
pub mod converter;
pub mod error;
pub mod position;
pub mod types;

pub use converter::{DEFAULT_PLY, PackOptions, Padding, SfenPacker, bit_len, pack, unpack};
pub use error::{Result, Section, SfenPackError};
pub use position::{Board, Position, SFEN_HIRATE};
pub use types::{Color, Hand, HandPiece, Piece, PieceType, Square};
