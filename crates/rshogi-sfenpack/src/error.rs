//! Error types for SFEN packing and unpacking

use std::fmt;

/// ビット列のどの区間で復号に失敗したか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// 手番 (先頭1bit)
    Turn,
    /// 玉位置と盤上の駒
    Board,
    /// 手駒
    Hand,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Turn => "turn",
            Section::Board => "board",
            Section::Hand => "hand",
        };
        f.write_str(name)
    }
}

/// Errors raised while converting between SFEN text and packed bytes
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SfenPackError {
    /// SFEN text could not be parsed
    #[error("Malformed SFEN: {0}")]
    MalformedText(String),

    /// Bit pattern that matches no piece code
    #[error("Unrecognized piece code in {section} section at bit {offset}")]
    UnrecognizedPieceCode { section: Section, offset: usize },

    /// Bit source ran out in the middle of a field
    #[error("Unexpected end of stream in {section} section at bit {offset}")]
    UnexpectedEndOfStream { section: Section, offset: usize },

    /// Missing, duplicated or out-of-range king
    #[error("Invalid king configuration: {0}")]
    InvalidKingConfiguration(String),
}

impl SfenPackError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        SfenPackError::MalformedText(msg.into())
    }

    /// 復号エラーが発生した区間（テキスト解析エラーなどでは `None`）
    pub fn section(&self) -> Option<Section> {
        match self {
            SfenPackError::UnrecognizedPieceCode { section, .. }
            | SfenPackError::UnexpectedEndOfStream { section, .. } => Some(*section),
            _ => None,
        }
    }
}

/// Result type for SFEN packing operations
pub type Result<T> = std::result::Result<T, SfenPackError>;
