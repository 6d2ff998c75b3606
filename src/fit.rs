//! Fitting a reading onto the symbol it annotates.

use crate::{
    error::FitError,
    furigana::Furigana,
    mapping::{self, KanjiReadings, SearchExhausted, DEFAULT_SEARCH_LIMIT},
};

/// Placed between the readings of consecutive segments by default.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Computes how a reading is laid out over its symbol for display.
///
/// Implemented by [`Fitter`] and by any closure `Fn(&str, &str) -> Result<String, E>`.
pub trait Fit {
    type Error: std::error::Error;

    fn fit(&self, symbol: &str, reading: &str) -> Result<String, Self::Error>;
}

impl<F, E> Fit for F
where
    F: Fn(&str, &str) -> Result<String, E>,
    E: std::error::Error,
{
    type Error = E;

    fn fit(&self, symbol: &str, reading: &str) -> Result<String, E> {
        self(symbol, reading)
    }
}

/// Fits readings by mapping them onto the segments of the symbol.
///
/// ```
/// use furigana_markup::Fitter;
///
/// let fitter = Fitter::new().with_separator("・");
/// assert_eq!(fitter.fit_reading("食べる", "たべる").unwrap(), "た・べる");
/// ```
#[derive(Debug, Clone)]
pub struct Fitter {
    kanji_to_readings: Option<KanjiReadings>,
    separator: String,
    strict: bool,
    search_limit: usize,
}

impl Default for Fitter {
    fn default() -> Self {
        Self {
            kanji_to_readings: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            strict: false,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl Fitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranks mappings with known kanji readings instead of mapping naively.
    pub fn with_kanji_readings(mut self, kanji_to_readings: KanjiReadings) -> Self {
        self.kanji_to_readings = Some(kanji_to_readings);
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// A strict fitter fails on readings it cannot map unambiguously
    /// instead of passing them through unchanged.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// How many segment placements to try before treating a reading as unfittable.
    pub fn with_search_limit(mut self, search_limit: usize) -> Self {
        self.search_limit = search_limit;
        self
    }

    pub fn fit_reading(&self, symbol: &str, reading: &str) -> Result<String, FitError> {
        if symbol.is_empty() {
            return Err(FitError::EmptySymbol);
        }
        if reading.is_empty() {
            return Err(FitError::EmptyReading {
                symbol: symbol.to_string(),
            });
        }

        let best = mapping::search(
            symbol,
            reading,
            self.kanji_to_readings.as_ref(),
            self.search_limit,
        )
        .map_err(|SearchExhausted| FitError::SearchLimit {
            symbol: symbol.to_string(),
            reading: reading.to_string(),
            limit: self.search_limit,
        })
        .and_then(|mappings| best_mapping(symbol, reading, mappings));
        match best {
            Ok(best) => {
                let fitted = best.fitted_reading(&self.separator);
                log::debug!("fitted {reading} onto {symbol} as {fitted:?}");
                Ok(fitted)
            }
            Err(err) if !self.strict => {
                log::warn!("{err}, keeping the reading as is");
                Ok(reading.to_string())
            }
            Err(err) => Err(err),
        }
    }
}

impl Fit for Fitter {
    type Error = FitError;

    fn fit(&self, symbol: &str, reading: &str) -> Result<String, FitError> {
        self.fit_reading(symbol, reading)
    }
}

/// Fits the reading onto the symbol with the default [`Fitter`].
pub fn fit(symbol: &str, reading: &str) -> Result<String, FitError> {
    Fitter::default().fit_reading(symbol, reading)
}

// the single most accurate mapping
fn best_mapping<'a>(
    symbol: &str,
    reading: &str,
    mappings: Vec<Furigana<'a>>,
) -> Result<Furigana<'a>, FitError> {
    let Some(top_accuracy) = mappings.iter().map(|m| m.accuracy).max() else {
        return Err(FitError::Unmappable {
            symbol: symbol.to_string(),
            reading: reading.to_string(),
        });
    };
    let mut top: Vec<_> = mappings
        .into_iter()
        .filter(|m| m.accuracy == top_accuracy)
        .collect();
    top.dedup_by(|a, b| a.same_segments(b));
    if top.len() > 1 {
        return Err(FitError::Ambiguous {
            symbol: symbol.to_string(),
            reading: reading.to_string(),
            candidates: top.len(),
        });
    }
    Ok(top.swap_remove(0))
}
