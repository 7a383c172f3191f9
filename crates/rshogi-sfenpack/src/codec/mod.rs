//! 各区間（手番・盤面・手駒）の符号化と、駒種のハフマン符号

pub mod board;
pub mod hand;
pub mod huffman;
pub mod turn;
