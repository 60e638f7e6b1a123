//! Helpers shared between puzzles

pub mod md5;
pub mod slice;

pub use self::md5::Md5Miner;
pub use self::slice::Scanner;
