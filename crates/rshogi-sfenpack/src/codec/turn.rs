//! 手番 (1bit): 0=先手, 1=後手

use crate::bitstream::{BitReader, BitWriter};
use crate::error::{Result, Section, SfenPackError};
use crate::types::Color;

pub fn encode(stream: &mut BitWriter, side_to_move: Color) {
    stream.write_one_bit(side_to_move.to_bit());
}

pub fn decode(stream: &mut BitReader) -> Result<Color> {
    stream
        .read_one_bit()
        .map(Color::from_bit)
        .ok_or(SfenPackError::UnexpectedEndOfStream {
            section: Section::Turn,
            offset: stream.cursor(),
        })
}
