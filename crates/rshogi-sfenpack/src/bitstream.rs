//! ビットストリーム（LSBファースト）
//!
//! i 番目のビットは i/8 バイト目の i&7 ビット目（最下位ビットから数える）に格納される。

/// ビットストリーム書き込み用構造体
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    data: Vec<u8>,
    bit_cursor: usize,
}

impl BitWriter {
    /// 新規作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 1ビット書き込む
    pub fn write_one_bit(&mut self, b: bool) {
        let bit_idx = self.bit_cursor & 7;
        if bit_idx == 0 {
            self.data.push(0);
        }
        if b {
            // bit_idx == 0 で push 済みなので data は空でない
            if let Some(last) = self.data.last_mut() {
                *last |= 1 << bit_idx;
            }
        }
        self.bit_cursor += 1;
    }

    /// nビット書き込む（下位ビットから順に）
    pub fn write_n_bit(&mut self, d: u32, n: usize) {
        for i in 0..n {
            self.write_one_bit((d >> i) & 1 != 0);
        }
    }

    /// 現在のバイトの残りを `b` で埋めてバイト境界に揃える
    pub fn fill_to_byte(&mut self, b: bool) {
        while self.bit_cursor & 7 != 0 {
            self.write_one_bit(b);
        }
    }

    /// 書き込んだビット数
    pub fn bit_position(&self) -> usize {
        self.bit_cursor
    }

    /// データを取得（端数バイトの上位ビットは0）
    pub fn finish(self) -> Vec<u8> {
        self.data
    }
}

impl Extend<bool> for BitWriter {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for b in iter {
            self.write_one_bit(b);
        }
    }
}

/// ビットストリーム読み込み用構造体
///
/// 終端を超えた読み込みは `None` を返す。終端は `is_exhausted()` で事前に確認できる。
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_cursor: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_cursor: 0,
        }
    }

    /// 1ビット読み込む（終端なら `None`、カーソルは進まない）
    pub fn read_one_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.bit_cursor / 8)?;
        let bit_idx = self.bit_cursor & 7;
        self.bit_cursor += 1;
        Some((byte >> bit_idx) & 1 != 0)
    }

    /// nビット読み込む (下位ビットから順に格納)
    ///
    /// 途中で終端に達した場合は `None`。
    pub fn read_n_bit(&mut self, n: usize) -> Option<u32> {
        let mut result = 0u32;
        for i in 0..n {
            result |= u32::from(self.read_one_bit()?) << i;
        }
        Some(result)
    }

    /// 全ビット数
    pub fn total_bits(&self) -> usize {
        self.data.len() * 8
    }

    /// 残りビット数
    pub fn remaining(&self) -> usize {
        self.total_bits().saturating_sub(self.bit_cursor)
    }

    /// 終端に達したか
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// 現在のカーソル位置
    pub fn cursor(&self) -> usize {
        self.bit_cursor
    }

    /// `from` ビット目から終端までが全て同じ値か
    ///
    /// 最終バイトのパディング判定に使う。範囲が空なら `true`。
    pub fn is_uniform_from(&self, from: usize) -> bool {
        let mut bits = (from..self.total_bits()).map(|i| (self.data[i / 8] >> (i & 7)) & 1);
        match bits.next() {
            Some(first) => bits.all(|b| b == first),
            None => true,
        }
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_one_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_lsb_first() {
        let data = [0b10101010u8, 0b01010101u8];
        let mut stream = BitReader::new(&data);

        assert_eq!(stream.read_one_bit(), Some(false));
        assert_eq!(stream.read_one_bit(), Some(true));
        assert_eq!(stream.read_one_bit(), Some(false));
        assert_eq!(stream.read_one_bit(), Some(true));
        assert_eq!(stream.cursor(), 4);
    }

    #[test]
    fn test_reader_exhaustion() {
        let data = [0b11111111u8];
        let mut stream = BitReader::new(&data);

        assert_eq!(stream.by_ref().take(8).filter(|&b| b).count(), 8);
        assert!(stream.is_exhausted());
        assert_eq!(stream.read_one_bit(), None);
        assert_eq!(stream.read_one_bit(), None);
        assert_eq!(stream.cursor(), 8);
    }

    #[test]
    fn test_reader_remaining() {
        let data = [0u8; 4];
        let mut stream = BitReader::new(&data);

        assert_eq!(stream.remaining(), 32);
        stream.read_one_bit();
        assert_eq!(stream.remaining(), 31);
        stream.read_n_bit(10);
        assert_eq!(stream.remaining(), 21);
        assert_eq!(stream.len(), 21);
    }

    #[test]
    fn test_read_n_bit_truncated() {
        let data = [0xFFu8];
        let mut stream = BitReader::new(&data);
        stream.read_n_bit(3);
        assert_eq!(stream.read_n_bit(7), None);
    }

    #[test]
    fn test_writer_basic() {
        let mut writer = BitWriter::new();
        writer.extend([false, true, false, true]);

        assert_eq!(writer.bit_position(), 4);
        // ビット順: 0, 1, 0, 1 → バイト[0] = 0b00001010 = 10
        assert_eq!(writer.finish(), vec![0b1010]);
    }

    #[test]
    fn test_writer_flushes_every_eight_bits() {
        let mut writer = BitWriter::new();
        writer.write_n_bit(0xFF, 8);
        writer.write_one_bit(true);
        assert_eq!(writer.finish(), vec![0xFF, 0x01]);
    }

    #[test]
    fn test_writer_empty() {
        assert!(BitWriter::new().finish().is_empty());
    }

    #[test]
    fn test_write_n_bit_lsb_first() {
        let mut writer = BitWriter::new();
        writer.write_one_bit(true);
        writer.write_n_bit(76, 7);
        // 手番1 + 76(0b1001100) → 0b1001_1001 = 153
        assert_eq!(writer.finish(), vec![153]);
    }

    #[test]
    fn test_fill_to_byte() {
        let mut writer = BitWriter::new();
        writer.write_n_bit(0b101, 3);
        writer.fill_to_byte(true);
        assert_eq!(writer.bit_position(), 8);
        writer.fill_to_byte(true);
        assert_eq!(writer.bit_position(), 8);
        assert_eq!(writer.finish(), vec![0b1111_1101]);
    }

    #[test]
    fn test_writer_reader_agree() {
        let bits = [true, false, false, true, true, true, false, true, false, true, true];
        let mut writer = BitWriter::new();
        writer.extend(bits);
        let data = writer.finish();
        assert_eq!(data.len(), 2);

        let read: Vec<bool> = BitReader::new(&data).take(bits.len()).collect();
        assert_eq!(read, bits);
    }

    #[test]
    fn test_is_uniform_from() {
        let data = [0b1110_0000u8];
        let reader = BitReader::new(&data);
        assert!(reader.is_uniform_from(5));
        assert!(!reader.is_uniform_from(4));
        assert!(!reader.is_uniform_from(0));
        assert!(reader.is_uniform_from(8));
    }
}
