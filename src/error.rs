use thiserror::Error;

/// Why a furigana-annotated string could not be tokenized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error parsing furigana: {message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying failure, without the "Error parsing furigana" prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a reading could not be fitted onto its symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    #[error("cannot fit a reading onto an empty symbol")]
    EmptySymbol,

    #[error("empty reading for {symbol}")]
    EmptyReading { symbol: String },

    #[error("reading {reading} cannot be mapped onto {symbol}")]
    Unmappable { symbol: String, reading: String },

    #[error("gave up mapping reading {reading} onto {symbol} after {limit} placements")]
    SearchLimit {
        symbol: String,
        reading: String,
        limit: usize,
    },

    #[error("reading {reading} maps onto {symbol} in {candidates} equally likely ways")]
    Ambiguous {
        symbol: String,
        reading: String,
        candidates: usize,
    },
}
