//! sfen_converter の設定
//!
//! 優先順位は コマンドライン引数 > 設定ファイル (TOML) > 既定値。

use std::path::Path;

use anyhow::{Context, Result};
use rshogi_sfenpack::{DEFAULT_PLY, PackOptions, Padding};
use serde::Deserialize;

use crate::common::bytes::ByteFormat;

/// 設定ファイルの内容（未指定の項目は `None`）
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfigFile {
    #[serde(default)]
    pub padding: Option<Padding>,
    #[serde(default)]
    pub format: Option<ByteFormat>,
    #[serde(default)]
    pub default_ply: Option<u32>,
    #[serde(default)]
    pub json: Option<bool>,
}

pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ConverterConfigFile> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&data).with_context(|| format!("invalid config file {}", path.display()))
}

/// コマンドラインで指定された値
#[derive(Clone, Debug, Default)]
pub struct ConverterOverrides {
    pub padding: Option<Padding>,
    pub format: Option<ByteFormat>,
    pub ply: Option<u32>,
    pub json: bool,
}

/// 確定した設定
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConverterConfig {
    pub options: PackOptions,
    pub format: ByteFormat,
    pub default_ply: u32,
    pub json: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            options: PackOptions::default(),
            format: ByteFormat::default(),
            default_ply: DEFAULT_PLY,
            json: false,
        }
    }
}

impl ConverterConfig {
    pub fn resolve(file: Option<&ConverterConfigFile>, cli: &ConverterOverrides) -> Self {
        let base = ConverterConfig::default();
        let file = file.cloned().unwrap_or_default();
        Self {
            options: PackOptions {
                padding: cli.padding.or(file.padding).unwrap_or(base.options.padding),
            },
            format: cli.format.or(file.format).unwrap_or(base.format),
            default_ply: cli.ply.or(file.default_ply).unwrap_or(base.default_ply),
            // フラグは有効化しかできない
            json: cli.json || file.json.unwrap_or(base.json),
        }
    }
}
