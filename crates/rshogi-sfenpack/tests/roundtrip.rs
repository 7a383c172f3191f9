//! PackedSfen の変換結果と往復変換の結合テスト

use rshogi_sfenpack::bitstream::{BitReader, BitWriter};
use rshogi_sfenpack::{
    DEFAULT_PLY, Hand, PackOptions, Padding, Position, Section, SfenPackError, SfenPacker,
    bit_len, pack, unpack,
};

const HIRATE_WHITE: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL w - 1";
const HIRATE_BLACK: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";
const KINGS_ONLY: &str = "8k/9/9/9/9/9/9/9/K8 b - 1";

const HIRATE_WHITE_PACKED: [u8; 32] = [
    153, 132, 113, 61, 223, 247, 92, 71, 191, 224, 83, 102, 102, 102, 102, 2, 0, 0, 32, 34, 34,
    34, 34, 124, 128, 31, 195, 114, 60, 207, 177, 12,
];

const POSITIONS: &[&str] = &[
    HIRATE_WHITE,
    HIRATE_BLACK,
    KINGS_ONLY,
    "8k/9/9/9/9/9/9/9/K8 b 2Pb 1",
    "8k/9/9/9/9/9/9/9/K8 w RBGSNLPrbgsnlp 200",
    "8k/9/9/9/9/9/9/9/K8 b Pp2P 3",
    "8k/9/9/9/9/9/9/9/K8 b 18P 1",
    "k8/9/9/9/4+R4/9/9/9/8K w - 1",
    "ln1g3nl/1r3kg2/p2ppsbpp/2ps1pp2/1p5P1/2P3P2/PPSPPPS1P/1BG3R2/LN2KG1NL b - 37",
    "l+R5nl/4gk3/p1np+Ppp1p/2p2sg2/1p5P1/2P3p2/PP1+b1P2P/2G1S1G2/LN2K3L w BGS2Pr2sn3p 88",
];

fn zero_packer() -> SfenPacker {
    SfenPacker::new(PackOptions {
        padding: Padding::Zero,
    })
}

/// packed の先頭 `bits` ビットの後に `tail` を続けたバイト列
fn with_tail(packed: &[u8], bits: usize, tail: impl IntoIterator<Item = bool>) -> Vec<u8> {
    let mut w = BitWriter::new();
    w.extend(BitReader::new(packed).take(bits));
    w.extend(tail);
    w.finish()
}

#[test]
fn test_hirate_white_to_move() {
    let packed = pack(HIRATE_WHITE).unwrap();
    assert_eq!(packed, HIRATE_WHITE_PACKED);
    assert_eq!(unpack(&packed, 1).unwrap(), HIRATE_WHITE);
}

#[test]
fn test_hirate_black_to_move_differs_only_in_turn_bit() {
    let packed = pack(HIRATE_BLACK).unwrap();
    assert_eq!(packed[0], 152);
    assert_eq!(packed[1..], HIRATE_WHITE_PACKED[1..]);
    assert_eq!(unpack(&packed, 1).unwrap(), HIRATE_BLACK);
}

#[test]
fn test_byte_aligned_streams_ignore_padding_mode() {
    // 40枚の局面は256bitちょうどなので埋め方の違いが出ない
    assert_eq!(zero_packer().pack(HIRATE_WHITE).unwrap(), HIRATE_WHITE_PACKED);
    let pawn_in_hand = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPP1/1B5R1/LNSGKGSNL b P 1";
    assert_eq!(pack(pawn_in_hand).unwrap().len(), 32);
    assert_eq!(pack(pawn_in_hand).unwrap(), zero_packer().pack(pawn_in_hand).unwrap());
}

#[test]
fn test_roundtrip_canonical_positions() {
    for &sfen in POSITIONS {
        let pos = Position::from_sfen(sfen).unwrap();
        let packed = pack(sfen).unwrap();
        assert_eq!(packed.len(), bit_len(&pos).div_ceil(8), "{sfen}");
        assert_eq!(unpack(&packed, pos.ply).unwrap(), sfen);
    }
}

#[test]
fn test_ply_does_not_change_packed_bytes() {
    let a = pack("8k/9/9/9/9/9/9/9/K8 b 2Pb 1").unwrap();
    let b = pack("8k/9/9/9/9/9/9/9/K8 b 2Pb 4096").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_promoted_rook_keeps_prefix() {
    let sfen = "k8/9/9/9/4+R4/9/9/9/8K w - 1";
    let pos = Position::from_sfen(sfen).unwrap();
    // 1 + 14 + 78 空升以外 + 1 + 飛(5+1+1)
    assert_eq!(bit_len(&pos), 1 + 14 + 78 + 8);
    let unpacked = unpack(&pack(sfen).unwrap(), 1).unwrap();
    assert!(unpacked.contains("+R"), "{unpacked}");
}

#[test]
fn test_hand_expands_and_compresses() {
    let hand = Hand::from_sfen("2Pb").unwrap();
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.to_sfen(), "2Pb");

    let packed = pack("8k/9/9/9/9/9/9/9/K8 b 2Pb 1").unwrap();
    let pos = SfenPacker::default().unpack_position(&packed, 1).unwrap();
    assert_eq!(pos.hand, hand);
}

#[test]
fn test_non_canonical_hand_is_compressed() {
    let packed = pack("8k/9/9/9/9/9/9/9/K8 b PP 1").unwrap();
    assert_eq!(unpack(&packed, 1).unwrap(), "8k/9/9/9/9/9/9/9/K8 b 2P 1");
}

#[test]
fn test_empty_hand() {
    let packed = pack(KINGS_ONLY).unwrap();
    let pos = Position::from_sfen(KINGS_ONLY).unwrap();
    assert_eq!(bit_len(&pos), 94);
    assert_eq!(packed.len(), 12);
    assert_eq!(packed[11], 0b1100_0000);
    let unpacked = SfenPacker::default().unpack_position(&packed, DEFAULT_PLY).unwrap();
    assert!(unpacked.hand.is_empty());
    assert_eq!(unpacked.hand.to_sfen(), "-");
}

#[test]
fn test_zero_padded_bytes_from_legacy_converter() {
    let mut legacy = vec![144, 8];
    legacy.extend([0; 10]);
    assert_eq!(zero_packer().pack(KINGS_ONLY).unwrap(), legacy);
    assert_eq!(unpack(&legacy, 1).unwrap(), KINGS_ONLY);
}

#[test]
fn test_filler_keeps_single_pawn() {
    // 97bit: 最終バイトの残り7ビットは 1 で埋まり、駒箱の飛として読み飛ばされる
    let sfen = "8k/9/9/9/9/9/9/9/K8 b P 1";
    let packed = pack(sfen).unwrap();
    assert_eq!(packed.len(), 13);
    assert_eq!(packed[12], 0b1111_1110);
    assert_eq!(unpack(&packed, 1).unwrap(), sfen);
}

#[test]
fn test_zero_padding_adds_phantom_pawns() {
    let packed = zero_packer().pack("8k/9/9/9/9/9/9/9/K8 b P 1").unwrap();
    assert_eq!(packed[12], 0);
    assert_eq!(unpack(&packed, 1).unwrap(), "8k/9/9/9/9/9/9/9/K8 b 3P 1");
}

#[test]
fn test_piece_box_padding_to_256_bits() {
    // 盤面と手駒の後を駒箱の歩(0,1,0)で256bitまで埋めた形式
    let sfen = "8k/9/9/9/9/9/9/9/K8 b - 1";
    let packed = zero_packer().pack(sfen).unwrap();
    let piece_box_pawn = [false, true, false];
    let padded = with_tail(&packed, 94, piece_box_pawn.iter().copied().cycle().take(162));
    assert_eq!(padded.len(), 32);
    assert_eq!(unpack(&padded, 1).unwrap(), sfen);
}

#[test]
fn test_piece_box_after_real_hand_piece() {
    let sfen = "8k/9/9/9/9/9/9/9/K8 w G 1";
    let pos = Position::from_sfen(sfen).unwrap();
    let bits = bit_len(&pos);
    assert_eq!(bits, 99);
    let packed = pack(sfen).unwrap();
    // 金(1110,0) の後に 駒箱の銀(110,1,0) と 1 埋め
    let tail = [true, true, false, true, false].into_iter().chain([true; 8]);
    let padded = with_tail(&packed, bits, tail);
    assert_eq!(unpack(&padded, 1).unwrap(), sfen);
}

#[test]
fn test_truncated_board_reports_section() {
    let err = unpack(&HIRATE_WHITE_PACKED[..31], 1).unwrap_err();
    assert!(matches!(
        err,
        SfenPackError::UnexpectedEndOfStream {
            section: Section::Board,
            ..
        }
    ));
}

#[test]
fn test_truncated_hand_record_reports_section() {
    // 手駒の先頭で 1,0 と終端に達する
    let packed = zero_packer().pack(KINGS_ONLY).unwrap();
    let broken = with_tail(&packed, 94, [true, false]);
    assert_eq!(broken.len(), 12);
    assert_eq!(
        unpack(&broken, 1).unwrap_err(),
        SfenPackError::UnexpectedEndOfStream {
            section: Section::Hand,
            offset: 96
        }
    );
}

#[test]
fn test_pack_rejects_invalid_kings() {
    for sfen in [
        "9/9/9/9/9/9/9/9/K8 b - 1",
        "8k/9/9/9/9/9/9/9/KK7 b - 1",
    ] {
        assert!(
            matches!(pack(sfen), Err(SfenPackError::InvalidKingConfiguration(_))),
            "{sfen}"
        );
    }
}

#[test]
fn test_pack_rejects_malformed_text() {
    for sfen in [
        "",
        "8k/9/9/9/9/9/9/9/K8 b -",
        "8k/9/9/9/9/9/9/9/K8 x - 1",
        "8k/9/9/9/9/9/9/9/K7 b - 1",
        "8k/9/9/9/9/9/9/9/K8 b 0P 1",
        "8k/9/9/9/9/9/9/9/K8 b - -1",
        "8k/9/9/9/9/9/9/+G8/K8 b - 1",
    ] {
        assert!(matches!(pack(sfen), Err(SfenPackError::MalformedText(_))), "{sfen}");
    }
}
