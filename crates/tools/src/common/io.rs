//! 入出力ユーティリティ
//!
//! パスが `-` なら標準入出力、拡張子が `.gz` なら gzip として透過的に読み書きする。

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const READER_BUF_CAP: usize = 64 * 1024; // 64 KiB

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn is_gz(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

pub fn open_reader<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let p = path.as_ref();
    if is_stdio(p) {
        return Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, io::stdin())));
    }
    let f = File::open(p)?;
    if is_gz(p) {
        let dec = flate2::read::GzDecoder::new(f);
        return Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, dec)));
    }
    Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, f)))
}

/// 出力先。gzip の終端処理のエラーを拾うため、最後に `close()` を呼ぶ
#[must_use = "call .close() to propagate compression/IO errors"]
pub enum Output {
    File(BufWriter<File>),
    Stdout(io::Stdout),
    Gzip(flate2::write::GzEncoder<BufWriter<File>>),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::File(w) => w.write(buf),
            Output::Stdout(w) => w.write(buf),
            Output::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::File(w) => w.flush(),
            Output::Stdout(w) => w.flush(),
            Output::Gzip(w) => w.flush(),
        }
    }
}

impl Output {
    /// ストリームを閉じる（gzip はフッタを書き出す）
    pub fn close(self) -> io::Result<()> {
        let mut inner = match self {
            Output::File(w) => w,
            Output::Stdout(mut w) => return w.flush(),
            Output::Gzip(w) => w.finish()?,
        };
        inner.flush()
    }
}

pub fn open_writer<P: AsRef<Path>>(path: P) -> io::Result<Output> {
    let p = path.as_ref();
    if is_stdio(p) {
        return Ok(Output::Stdout(io::stdout()));
    }
    let f = BufWriter::new(File::create(p)?);
    if is_gz(p) {
        return Ok(Output::Gzip(flate2::write::GzEncoder::new(
            f,
            flate2::Compression::default(),
        )));
    }
    Ok(Output::File(f))
}

/// 1行1レコードとして読む
///
/// 空行と `#` で始まる行は飛ばし、(1始まりの行番号, 前後の空白を除いた内容) を返す。
pub fn records<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<(usize, String)>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match line {
            Ok(line) => {
                let text = line.trim();
                if text.is_empty() || text.starts_with('#') {
                    None
                } else {
                    Some(Ok((i + 1, text.to_string())))
                }
            }
            Err(e) => Some(Err(e)),
        })
}
