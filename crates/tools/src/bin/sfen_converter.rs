//! SFEN ⇔ PackedSfen 変換ツール
//!
//! ```text
//! sfen_converter pack "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1"
//! sfen_converter unpack "152 132 113 ..." --ply 1
//! sfen_converter pack --input positions.sfen.gz --output packed.txt --format hex
//! ```
//!
//! `--input` を指定すると1行1レコードで一括変換する（空行と `#` 行は無視）。

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rshogi_sfenpack::{Padding, Position, SfenPacker, bit_len};
use serde::Serialize;
use tools::common::bytes::{ByteFormat, format_bytes, parse_bytes};
use tools::common::io::{open_reader, open_writer, records};
use tools::config::{ConverterConfig, ConverterOverrides, load_config_file};

#[derive(Parser, Debug)]
#[command(
    name = "sfen_converter",
    version,
    about = "SFEN文字列と PackedSfen バイト列を相互変換する"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,

    /// 設定ファイル (TOML: padding / format / default_ply / json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// バイト列の表記
    #[arg(long, global = true, value_enum)]
    format: Option<ByteFormat>,

    /// 最終バイトの埋め方: filler | zero
    #[arg(long, global = true)]
    padding: Option<Padding>,

    /// 1レコード1行の JSON で出力
    #[arg(long, global = true)]
    json: bool,

    /// 出力先（`-` は標準出力、`.gz` は圧縮）
    #[arg(short = 'o', long, global = true, default_value = "-")]
    output: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// SFEN をバイト列に変換
    Pack {
        /// SFEN（引用符で1引数にしても、空白区切りの複数引数でもよい）
        #[arg(required_unless_present = "input", conflicts_with = "input")]
        sfen: Vec<String>,

        /// 1行1局面の入力ファイル（`-` は標準入力）
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,
    },
    /// バイト列を SFEN に変換
    Unpack {
        /// バイト列（`--format` の表記）
        #[arg(required_unless_present = "input", conflicts_with = "input")]
        bytes: Vec<String>,

        /// 1行1レコードの入力ファイル（`-` は標準入力）
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// 出力する SFEN の手数
        #[arg(long)]
        ply: Option<u32>,
    },
}

/// `--json` 指定時の出力レコード
#[derive(Serialize, Debug)]
struct Record {
    sfen: String,
    packed: String,
    bits: usize,
}

struct Converter {
    packer: SfenPacker,
    config: ConverterConfig,
}

impl Converter {
    fn pack(&self, sfen: &str) -> Result<String> {
        let pos = Position::from_sfen(sfen)?;
        let packed = self.packer.pack_position(&pos)?;
        self.render(pos.to_sfen(), &packed, bit_len(&pos), true)
    }

    fn unpack(&self, text: &str) -> Result<String> {
        let data = parse_bytes(text, self.config.format)?;
        let pos = self.packer.unpack_position(&data, self.config.default_ply)?;
        self.render(pos.to_sfen(), &data, bit_len(&pos), false)
    }

    fn render(&self, sfen: String, packed: &[u8], bits: usize, packing: bool) -> Result<String> {
        let packed = format_bytes(packed, self.config.format);
        if self.config.json {
            return Ok(serde_json::to_string(&Record { sfen, packed, bits })?);
        }
        Ok(if packing { packed } else { sfen })
    }
}

fn convert_all(
    out: &mut impl Write,
    input: Option<PathBuf>,
    args: Vec<String>,
    convert: impl Fn(&str) -> Result<String>,
) -> Result<u64> {
    let Some(path) = input else {
        writeln!(out, "{}", convert(&args.join(" "))?)?;
        return Ok(1);
    };

    let reader =
        open_reader(&path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut count = 0u64;
    for record in records(reader) {
        let (line_no, text) = record?;
        let line = convert(&text).with_context(|| format!("{}:{line_no}", path.display()))?;
        writeln!(out, "{line}")?;
        count += 1;
    }
    Ok(count)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let file = cli.config.as_deref().map(load_config_file).transpose()?;
    let ply = match &cli.cmd {
        Cmd::Unpack { ply, .. } => *ply,
        Cmd::Pack { .. } => None,
    };
    let overrides = ConverterOverrides {
        padding: cli.padding,
        format: cli.format,
        ply,
        json: cli.json,
    };
    let config = ConverterConfig::resolve(file.as_ref(), &overrides);
    log::debug!("config: {config:?}");

    let converter = Converter {
        packer: SfenPacker::new(config.options),
        config,
    };

    let mut out = open_writer(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let count = match cli.cmd {
        Cmd::Pack { sfen, input } => convert_all(&mut out, input, sfen, |s| converter.pack(s))?,
        Cmd::Unpack { bytes, input, .. } => {
            convert_all(&mut out, input, bytes, |s| converter.unpack(s))?
        }
    };
    out.close().context("failed to finish output")?;
    log::info!("converted {count} records");

    Ok(())
}
