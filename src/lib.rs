#![doc = include_str!("../README.md")]

mod error;
mod fit;
mod furigana;
mod mapping;
mod parser;
mod segmentation;
mod token;
mod utils;

pub use self::error::{FitError, ParseError};
pub use self::fit::{fit, Fit, Fitter, DEFAULT_SEPARATOR};
pub use self::furigana::{Furigana, FuriganaSegment, KanjiAccuracy};
pub use self::mapping::{
    map, map_naive, search, KanjiReadings, SearchExhausted, DEFAULT_SEARCH_LIMIT,
};
pub use self::parser::{parse, parse_with, ParseResult};
pub use self::token::{base_text, Token};
