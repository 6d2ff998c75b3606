//! Splits a Japanese word into the segments a reading is mapped onto.

use crate::utils;

/// Segment of a Japanese word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment<'a> {
    Kana(&'a str),
    Kanji(&'a str),
    Alphabetic(&'a str),
    Numeric(&'a str),
    Exception(&'a str),
    Other(&'a str),
}

impl<'a> Segment<'a> {
    /// Returns the inner string.
    pub fn inner(self) -> &'a str {
        match self {
            Self::Kana(s)
            | Self::Kanji(s)
            | Self::Alphabetic(s)
            | Self::Numeric(s)
            | Self::Exception(s)
            | Self::Other(s) => s,
        }
    }
}

/// How sequences of kanji are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Granularity {
    /// A run of kanji (including 々) is a single segment.
    Coarse,
    /// Every kanji is its own segment.
    Fine,
}

/// Iterator over a word's segments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segments<'a> {
    rest: &'a str,
    granularity: Granularity,
}

impl<'a> Segments<'a> {
    pub fn new(word: &'a str, granularity: Granularity) -> Self {
        Self {
            rest: word,
            granularity,
        }
    }

    pub fn coarse(word: &'a str) -> Self {
        Self::new(word, Granularity::Coarse)
    }

    pub fn fine(word: &'a str) -> Self {
        Self::new(word, Granularity::Fine)
    }

    // splits off the longest prefix whose characters all satisfy `keep`
    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> &'a str {
        let idx = self.rest.find(|c| !keep(c)).unwrap_or(self.rest.len());
        let (taken, rest) = self.rest.split_at(idx);
        self.rest = rest;
        taken
    }

    fn take_char(&mut self, c: char) -> &'a str {
        let (taken, rest) = self.rest.split_at(c.len_utf8());
        self.rest = rest;
        taken
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.rest.chars().next()?;
        let segment = match classify_char(next) {
            Char::Kana => Segment::Kana(self.take_while(|c| classify_char(c) == Char::Kana)),
            Char::Kanji => match self.granularity {
                // 々 is special cased so that it can be included in a kanji segment
                Granularity::Coarse => Segment::Kanji(
                    self.take_while(|c| classify_char(c) == Char::Kanji || c == '々'),
                ),
                Granularity::Fine => Segment::Kanji(self.take_char(next)),
            },
            class @ (Char::NumericWest | Char::NumericFullWidth) => {
                Segment::Numeric(self.take_while(|c| classify_char(c) == class))
            }
            Char::Alphabetic => Segment::Alphabetic(self.take_char(next)),
            Char::Exception => Segment::Exception(self.take_char(next)),
            Char::Other => Segment::Other(self.take_char(next)),
        };
        Some(segment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Char {
    Kanji,
    Kana,
    Alphabetic,
    NumericWest,
    NumericFullWidth,
    Exception,
    Other,
}

fn classify_char(c: char) -> Char {
    if c == 'ヶ' {
        // ヶ sits in the katakana block but reads like a counter kanji
        Char::Exception
    } else if utils::is_kanji(c) {
        Char::Kanji
    } else if utils::is_kana(c) {
        Char::Kana
    } else if utils::is_alphabetic(c) {
        Char::Alphabetic
    } else if utils::is_numeric_west(c) {
        Char::NumericWest
    } else if utils::is_numeric_fullwidth(c) {
        Char::NumericFullWidth
    } else {
        Char::Other
    }
}
