use crate::{segmentation::Segment, utils};
use std::fmt::Display;

/// A mapping of furigana to a word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Furigana<'a> {
    /// The original word split into segments with their furigana.
    pub furigana: Vec<FuriganaSegment<'a>>,
    /// A rough relative measure of this mapping's accuracy, the higher the more accurate.
    /// Only meaningful in comparison with other configurations for the same word.
    pub accuracy: i32,
}

impl<'a> Furigana<'a> {
    /// The readings of every segment, in order, joined with `separator`.
    pub fn fitted_reading(&self, separator: &str) -> String {
        self.furigana
            .iter()
            .map(|segment| segment.reading)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// The furigana configuration, ignoring the accuracy.
    pub fn same_segments(&self, other: &Self) -> bool {
        self.furigana == other.furigana
    }
}

/// Prints the word with its furigana using HTML ruby tags.
impl Display for Furigana<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<ruby>")?;
        for segment in &self.furigana {
            write!(f, "{}<rt>{}</rt>", segment.segment, segment.furigana.unwrap_or(""))?;
        }
        write!(f, "</ruby>")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FuriganaSegment<'a> {
    /// A segment of the original word.
    pub segment: &'a str,
    /// The part of the reading this segment consumed.
    pub reading: &'a str,
    /// The furigana to display over the segment, None if the segment already spells out its reading.
    pub furigana: Option<&'a str>,
}

/// Every way of continuing a mapping from some point in the word onwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FuriganaNode<'a> {
    /// The corresponding segment from the original word.
    pub segment: Segment<'a>,
    /// The reading of the segment.
    pub reading: &'a str,
    /// Possible ways to continue after this point.
    pub extensions: Vec<FuriganaNode<'a>>,
    /// The accuracy of this reading according to known kanji readings. None when inapplicable, such as for kana segments.
    pub kanji_accurate: Option<KanjiAccuracy>,
}

impl<'a> FuriganaNode<'a> {
    #[cfg(test)]
    pub fn leaf(
        segment: Segment<'a>,
        reading: &'a str,
        kanji_accurate: Option<KanjiAccuracy>,
    ) -> Self {
        Self {
            segment,
            reading,
            extensions: vec![],
            kanji_accurate,
        }
    }

    fn to_segment(&self) -> FuriganaSegment<'a> {
        let word = self.segment.inner();
        FuriganaSegment {
            segment: word,
            reading: self.reading,
            furigana: if matches!(self.segment, Segment::Kana(_))
                && utils::reading_equivalent(word, self.reading)
            {
                // no need for furigana here
                None
            } else {
                Some(self.reading)
            },
        }
    }
}

/// Flattens a forest of nodes into one `Furigana` per path from a root to a leaf.
pub fn flatten<'a>(nodes: &[FuriganaNode<'a>]) -> Vec<Furigana<'a>> {
    let mut flattened = vec![];
    for node in nodes {
        let head = node.to_segment();
        let score = node.kanji_accurate.map_or(0, KanjiAccuracy::score);
        if node.extensions.is_empty() {
            flattened.push(Furigana {
                furigana: vec![head],
                accuracy: score,
            });
            continue;
        }
        for tail in flatten(&node.extensions) {
            let mut furigana = Vec::with_capacity(tail.furigana.len() + 1);
            furigana.push(head);
            furigana.extend(tail.furigana);
            flattened.push(Furigana {
                furigana,
                accuracy: score + tail.accuracy,
            });
        }
    }
    flattened
}

/// The accuracy of a given reading for a kanji.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KanjiAccuracy {
    Accurate,
    AccurateWithRendaku,
    AccurateWithSokuonbin,
    Inaccurate,
}

impl KanjiAccuracy {
    pub fn score(self) -> i32 {
        match self {
            Self::Accurate => 2,
            Self::AccurateWithRendaku | Self::AccurateWithSokuonbin => 1,
            Self::Inaccurate => -2,
        }
    }
}
