//! Enumerates the ways a reading can be distributed over the segments of a word.

use crate::{
    furigana::{self, Furigana, FuriganaNode, FuriganaSegment, KanjiAccuracy},
    segmentation::{Segment, Segments},
    utils,
};
use std::{cell::Cell, collections::HashMap, iter::Peekable};

/// Known readings for each kanji, used to grade mappings.
pub type KanjiReadings = HashMap<String, Vec<String>>;

/// How many segment placements a search tries before giving up by default.
pub const DEFAULT_SEARCH_LIMIT: usize = 20_000;

/// A search for mappings tried more placements than it was allowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchExhausted;

/// Returns a list of all possible ways to map the reading to the text, matching the kana in the reading to the ones in the word.
/// Returns an empty list if the segments and readings are impossible to match,
/// or if there are too many ways to match them to enumerate.
pub fn map_naive<'a>(text: &'a str, reading: &'a str) -> Vec<Furigana<'a>> {
    search(text, reading, None, DEFAULT_SEARCH_LIMIT).unwrap_or_else(|SearchExhausted| {
        log::debug!("gave up mapping {reading} onto {text}");
        vec![]
    })
}

/// Returns a list of all possible ways to map the reading to the text, matching the kana in the reading to the ones in the text.
/// Uses the information in `kanji_to_readings` to approximate the accuracy of each mapping.
/// Returns an empty list if the segments and readings are impossible to match,
/// or if there are too many ways to match them to enumerate.
pub fn map<'a>(
    word: &'a str,
    reading: &'a str,
    kanji_to_readings: &KanjiReadings,
) -> Vec<Furigana<'a>> {
    search(word, reading, Some(kanji_to_readings), DEFAULT_SEARCH_LIMIT).unwrap_or_else(
        |SearchExhausted| {
            log::debug!("gave up mapping {reading} onto {word}");
            vec![]
        },
    )
}

/// Maps the reading to the word, trying at most `limit` segment placements.
/// Known kanji readings switch to fine segmentation and grade the mappings.
pub fn search<'a>(
    word: &'a str,
    reading: &'a str,
    kanji_to_readings: Option<&KanjiReadings>,
    limit: usize,
) -> Result<Vec<Furigana<'a>>, SearchExhausted> {
    if let Some(trivial) = map_trivial(word, reading) {
        return Ok(trivial);
    }
    let mapper = Mapper {
        known: kanji_to_readings,
        remaining: Cell::new(limit),
        exhausted: Cell::new(false),
    };
    match kanji_to_readings {
        // trying to assign a reading to each individual kanji, so use fine segmentation
        Some(_) => mapper.run(Segments::fine(word), reading),
        // need kanji information to assign readings to each individual kanji, so use coarse segmentation here
        None => mapper.run(Segments::coarse(word), reading),
    }
}

// words that need no searching: kana words and single characters
fn map_trivial<'a>(word: &'a str, reading: &'a str) -> Option<Vec<Furigana<'a>>> {
    let single = |furigana| {
        vec![Furigana {
            accuracy: 1,
            furigana: vec![FuriganaSegment {
                segment: word,
                reading,
                furigana,
            }],
        }]
    };
    if word.chars().all(utils::is_kana) {
        // a kana word can only be read as itself
        return Some(if utils::reading_equivalent(word, reading) {
            single(None)
        } else {
            vec![]
        });
    }
    let mut chars = word.chars();
    if let (Some(_), None) = (chars.next(), chars.next()) {
        return Some(if reading.is_empty() {
            vec![]
        } else {
            single(Some(reading))
        });
    }
    None
}

/// Where the previous segment left off.
#[derive(Debug, Clone, Copy, Default)]
struct Context<'a> {
    // the previous kanji character, if any, which 々 repeats
    previous_kanji: Option<&'a str>,
    // if the next segment is a kanji, its reading may be affected by rendaku
    // this is true when there is a preceding kana or kanji segment
    can_be_rendaku: bool,
}

impl<'a> Context<'a> {
    fn after_kanji(kanji: &'a str) -> Self {
        Self {
            previous_kanji: Some(kanji),
            can_be_rendaku: true,
        }
    }

    fn after_kana() -> Self {
        Self {
            previous_kanji: None,
            can_be_rendaku: true,
        }
    }
}

#[derive(Debug, Clone)]
struct Mapper<'k> {
    known: Option<&'k KanjiReadings>,
    // placements left before the search is abandoned
    remaining: Cell<usize>,
    exhausted: Cell<bool>,
}

impl<'k> Mapper<'k> {
    fn run<'a>(
        &self,
        segments: Segments<'a>,
        reading: &'a str,
    ) -> Result<Vec<Furigana<'a>>, SearchExhausted> {
        let nodes = self.explore(segments.peekable(), reading, Context::default());
        if self.exhausted.get() {
            return Err(SearchExhausted);
        }
        // every leaf cost a placement, so the paths are bounded by the limit
        Ok(furigana::flatten(&nodes.unwrap_or_default()))
    }

    // takes one placement from the budget, false once it is spent
    fn spend(&self) -> bool {
        match self.remaining.get().checked_sub(1) {
            Some(remaining) => {
                self.remaining.set(remaining);
                true
            }
            None => {
                self.exhausted.set(true);
                false
            }
        }
    }

    fn readings_of(&self, kanji: &str) -> Option<&'k [String]> {
        self.known.and_then(|km| km.get(kanji)).map(Vec::as_slice)
    }

    // explores the branches of ways to assign the rest of the reading to the rest of the segments
    // short-circuits by returning None on invalid mappings
    fn explore<'a, I>(
        &self,
        mut segments: Peekable<I>,
        reading: &'a str,
        context: Context<'a>,
    ) -> Option<Vec<FuriganaNode<'a>>>
    where
        I: Iterator<Item = Segment<'a>> + Clone,
    {
        if !self.spend() {
            return None;
        }
        let Some(segment) = segments.next() else {
            // out of segments, valid only if the reading ran out as well
            return reading.is_empty().then(Vec::new);
        };
        match segment {
            Segment::Kana(kana) => {
                let matched = reading.get(..kana.len())?;
                if !utils::kana_equivalent(matched, kana) {
                    return None;
                }
                let extensions =
                    self.explore(segments, &reading[kana.len()..], Context::after_kana())?;
                Some(vec![node(segment, matched, extensions, None)])
            }
            Segment::Kanji("大") if reading.starts_with("おとな") => {
                // 大人 is read おとな as a whole
                let mut lookahead = segments.clone();
                if lookahead.next() == Some(Segment::Kanji("人")) {
                    let (matched, rest) = reading.split_at("おとな".len());
                    let extensions = self.explore(lookahead, rest, Context::after_kana())?;
                    Some(vec![node(
                        Segment::Kanji("大人"),
                        matched,
                        extensions,
                        Some(KanjiAccuracy::Accurate),
                    )])
                } else {
                    self.explore_kanji(segment, "大", segments, reading, context)
                }
            }
            Segment::Kanji(kanji) => self.explore_kanji(segment, kanji, segments, reading, context),
            Segment::Other("々") => {
                let kanji = context.previous_kanji?;
                self.explore_kanji(segment, kanji, segments, reading, context)
            }
            Segment::Alphabetic(alpha) => {
                let alpha_reading = alpha.chars().next().and_then(utils::alphabet_reading)?;
                let matched = reading.get(..alpha_reading.len())?;
                if !utils::kana_equivalent(matched, alpha_reading) {
                    return None;
                }
                let extensions = self.explore(
                    segments,
                    &reading[alpha_reading.len()..],
                    Context::after_kana(),
                )?;
                Some(vec![node(segment, matched, extensions, None)])
            }
            Segment::Numeric(number) => self.explore_number(segment, number, segments, reading),
            Segment::Exception("ヶ") => {
                // ヶ is read as か, or が when voiced
                let matched = reading.get(..'か'.len_utf8())?;
                if !matches!(matched, "か" | "が" | "カ" | "ガ") {
                    return None;
                }
                let extensions = self.explore(segments, &reading[matched.len()..], context)?;
                Some(vec![node(segment, matched, extensions, None)])
            }
            Segment::Exception(_) | Segment::Other(_) => None,
        }
    }

    // tries to use up varying lengths of the remaining reading for the kanji segment
    fn explore_kanji<'a, I>(
        &self,
        segment: Segment<'a>,
        kanji: &'a str,
        segments: Peekable<I>,
        reading: &'a str,
        context: Context<'a>,
    ) -> Option<Vec<FuriganaNode<'a>>>
    where
        I: Iterator<Item = Segment<'a>> + Clone,
    {
        let kanji_readings = self.readings_of(kanji);
        let can_be_sokuonbin = segments.clone().peek().is_some();
        let nodes: Vec<_> = reading
            .char_indices()
            .map(|(idx, c)| idx + c.len_utf8())
            .filter_map(|end| {
                let (used, rest) = reading.split_at(end);
                let extensions =
                    self.explore(segments.clone(), rest, Context::after_kanji(kanji))?;
                let accuracy = check_kanji_accuracy(
                    kanji_readings,
                    used,
                    context.can_be_rendaku,
                    can_be_sokuonbin,
                );
                Some(node(segment, used, extensions, accuracy))
            })
            .collect();
        // no characters left in the reading or no valid continuations
        (!nodes.is_empty()).then_some(nodes)
    }

    fn explore_number<'a, I>(
        &self,
        segment: Segment<'a>,
        number: &'a str,
        segments: Peekable<I>,
        reading: &'a str,
    ) -> Option<Vec<FuriganaNode<'a>>>
    where
        I: Iterator<Item = Segment<'a>> + Clone,
    {
        if matches!(number, "10" | "１０") && reading.starts_with("とお") {
            // とお for 10 as in とおか
            let (matched, rest) = reading.split_at("とお".len());
            let extensions = self.explore(segments, rest, Context::default())?;
            return Some(vec![node(
                segment,
                matched,
                extensions,
                Some(KanjiAccuracy::Accurate),
            )]);
        }

        // byte lengths of the candidate readings for the digits seen so far
        let mut candidates: Vec<usize> = vec![];
        let mut digits_left = number.chars().count();
        for (position, digit) in number.chars().enumerate() {
            digits_left -= 1;
            let digit_readings = utils::digit_readings(digit, digits_left);
            if position == 0 {
                candidates = digit_readings
                    .iter()
                    .filter(|dr| reading.starts_with(*dr))
                    .map(|dr| dr.len())
                    .collect();
                continue;
            }
            let mut extended = vec![];
            for &len in &candidates {
                let remaining = &reading[len..];
                let before = extended.len();
                extended.extend(
                    digit_readings
                        .iter()
                        .filter(|dr| remaining.starts_with(*dr))
                        .map(|dr| len + dr.len()),
                );
                // zeros inside a number are not read
                if extended.len() == before && matches!(digit, '0' | '０') {
                    extended.push(len);
                }
            }
            candidates = extended;
        }
        candidates.sort_unstable();
        candidates.dedup();

        let nodes: Vec<_> = candidates
            .into_iter()
            .filter_map(|len| {
                let (matched, rest) = reading.split_at(len);
                let extensions = self.explore(segments.clone(), rest, Context::default())?;
                Some(node(segment, matched, extensions, None))
            })
            .collect();
        (!nodes.is_empty()).then_some(nodes)
    }
}

fn node<'a>(
    segment: Segment<'a>,
    reading: &'a str,
    extensions: Vec<FuriganaNode<'a>>,
    kanji_accurate: Option<KanjiAccuracy>,
) -> FuriganaNode<'a> {
    FuriganaNode {
        segment,
        reading,
        extensions,
        kanji_accurate,
    }
}

// checks if the actual reading could be the "ideal" reading (according to kanji reading info) with rendaku
fn rendaku_equivalent(ideal_reading: &str, actual_reading: &str) -> bool {
    let mut ideal = ideal_reading.chars();
    let mut actual = actual_reading.chars();
    match (ideal.next(), actual.next()) {
        // rendaku only applies to the first character of the reading
        (Some(i), Some(a)) => {
            (utils::hiragana_char(i) == utils::hiragana_char(a) || utils::is_voiced_form(i, a))
                && utils::kana_equivalent(ideal.as_str(), actual.as_str())
        }
        (None, None) => true,
        _ => false,
    }
}

// checks if the actual reading could be the "ideal" reading with "sokuonbin" (consonant doubling)
fn sokuonbin_equivalent(ideal_reading: &str, actual_reading: &str) -> bool {
    let mut ideal = ideal_reading.chars();
    let mut actual = actual_reading.chars();
    match (ideal.next_back(), actual.next_back()) {
        // sokuonbin only applies to the end of a reading
        (Some(i), Some(a)) => {
            let last_accurate = utils::hiragana_char(i) == utils::hiragana_char(a)
                || matches!(
                    (utils::hiragana_char(i), utils::hiragana_char(a)),
                    ('く' | 'ち' | 'つ', 'っ')
                );
            last_accurate && utils::kana_equivalent(ideal.as_str(), actual.as_str())
        }
        (None, None) => true,
        _ => false,
    }
}

// grades the kanji reading against the known readings, None if nothing is known
fn check_kanji_accuracy(
    kanji_readings: Option<&[String]>,
    kanji_reading: &str,
    can_be_rendaku: bool,
    can_be_sokuonbin: bool,
) -> Option<KanjiAccuracy> {
    let kanji_readings = kanji_readings?;
    let any = |equivalent: fn(&str, &str) -> bool| {
        kanji_readings
            .iter()
            .any(|known| equivalent(known, kanji_reading))
    };
    let accuracy = if any(utils::kana_equivalent) {
        KanjiAccuracy::Accurate
    } else if can_be_rendaku && any(rendaku_equivalent) {
        KanjiAccuracy::AccurateWithRendaku
    } else if can_be_sokuonbin && any(sokuonbin_equivalent) {
        KanjiAccuracy::AccurateWithSokuonbin
    } else {
        KanjiAccuracy::Inaccurate
    };
    Some(accuracy)
}
