#![deny(rust_2018_idioms)]

pub mod bubble_sort;
pub mod parse;
pub mod print;

pub use bubble_sort::{bubble_sort, bubble_sort_passes, swap};
pub use parse::{parse_ints, ParseError, TEST_NUMBERS};
pub use print::{format_line, write_line};
