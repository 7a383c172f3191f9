//! バイト列のテキスト表記
//!
//! - `dec`: 空白区切りの10進数（例: `152 132 113`）
//! - `hex`: 小文字16進数の連結（例: `988471`）

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ByteFormat {
    /// 空白区切りの10進数
    #[default]
    Dec,
    /// 16進数文字列
    Hex,
}

pub fn format_bytes(data: &[u8], format: ByteFormat) -> String {
    match format {
        ByteFormat::Dec => data.iter().map(u8::to_string).collect::<Vec<_>>().join(" "),
        ByteFormat::Hex => data.iter().map(|b| format!("{b:02x}")).collect(),
    }
}

/// テキストをバイト列に変換
///
/// `dec` はカンマ区切りも受け付ける。`hex` は空白を無視し、大文字も受け付ける。
pub fn parse_bytes(text: &str, format: ByteFormat) -> Result<Vec<u8>> {
    match format {
        ByteFormat::Dec => text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|tok| !tok.is_empty())
            .map(|tok| tok.parse::<u8>().with_context(|| format!("invalid byte value '{tok}'")))
            .collect(),
        ByteFormat::Hex => {
            let digits: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if digits.len() % 2 != 0 {
                bail!("hex string has odd length {}", digits.len());
            }
            digits
                .chunks(2)
                .map(|pair| {
                    let s: String = pair.iter().collect();
                    u8::from_str_radix(&s, 16).with_context(|| format!("invalid hex byte '{s}'"))
                })
                .collect()
        }
    }
}
