//! sfen_converter の補助モジュール

pub mod common;
pub mod config;
