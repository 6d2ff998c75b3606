//! Tokenizing text with inline `{symbol|reading}` annotations.

use crate::{
    error::ParseError,
    fit::{Fit, Fitter},
    token::Token,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// The tokens of the input in order of appearance, or why they could not be produced.
pub type ParseResult<'a> = Result<Vec<Token<'a>>, ParseError>;

// a complete `{symbol|reading}` span, anything less stays plain text
static ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^|{}]+)\|([^|{}]+)\}").unwrap());

/// Parses a string containing furigana markup, fitting readings with the default [`Fitter`].
///
/// ```
/// use furigana_markup::{parse, Token};
///
/// let tokens = parse("かり{気|き}まに").unwrap();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Kana("かり"),
///         Token::Kanji { symbol: "気", furigana: "き".to_string() },
///         Token::Kana("まに"),
///     ]
/// );
/// ```
pub fn parse(input: &str) -> ParseResult<'_> {
    parse_with(input, &Fitter::default())
}

/// Parses a string containing furigana markup, fitting readings with `fitter`.
///
/// Fails on the first reading the fitter rejects, without returning the tokens parsed so far.
pub fn parse_with<'a, F: Fit>(input: &'a str, fitter: &F) -> ParseResult<'a> {
    let mut tokens = Vec::new();
    let mut plain_start = 0;

    for captures in ANNOTATION.captures_iter(input) {
        let annotation = captures.get_match();
        let (_, [symbol, reading]) = captures.extract();
        log::trace!(
            "annotation {symbol}|{reading} at {}..{}",
            annotation.start(),
            annotation.end()
        );

        if annotation.start() > plain_start {
            tokens.push(Token::Kana(&input[plain_start..annotation.start()]));
        }
        let furigana = fitter.fit(symbol, reading).map_err(|err| {
            log::debug!("failed to fit {reading} onto {symbol}: {err}");
            ParseError::new(err.to_string())
        })?;
        tokens.push(Token::Kanji { symbol, furigana });
        plain_start = annotation.end();
    }
    if plain_start < input.len() {
        tokens.push(Token::Kana(&input[plain_start..]));
    }

    log::debug!("parsed {} tokens from {} bytes", tokens.len(), input.len());
    Ok(tokens)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{error::FitError, fit::fit};

    fn kanji<'a>(symbol: &'a str, reading: &str) -> Token<'a> {
        Token::Kanji {
            symbol,
            furigana: fit(symbol, reading).unwrap(),
        }
    }

    #[test]
    fn plain_text() {
        assert_eq!(parse("plain text").unwrap(), vec![Token::Kana("plain text")]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse("").unwrap(), vec![]);
    }

    #[test]
    fn single_annotation() {
        assert_eq!(parse("{気|き}").unwrap(), vec![kanji("気", "き")]);
    }

    #[test]
    fn mixed_content() {
        let tokens = parse("かり{気|き}まに{配|くば}にん").unwrap();
        println!("{tokens:?}");
        assert_eq!(
            tokens,
            vec![
                Token::Kana("かり"),
                kanji("気", "き"),
                Token::Kana("まに"),
                kanji("配", "くば"),
                Token::Kana("にん"),
            ]
        );
    }

    #[test]
    fn adjacent_annotations() {
        assert_eq!(
            parse("{気|き}{配|くば}").unwrap(),
            vec![kanji("気", "き"), kanji("配", "くば")]
        );
    }

    #[test]
    fn multi_character_symbols_are_fitted() {
        assert_eq!(
            parse("{食べる|たべる}よ").unwrap(),
            vec![
                Token::Kanji {
                    symbol: "食べる",
                    furigana: "た べる".to_string(),
                },
                Token::Kana("よ"),
            ]
        );
    }

    #[test]
    fn malformed_annotations_stay_plain() {
        for input in ["{気き}", "{気|き", "気|き}", "{|き}", "{気|}", "{{気|き|}}"] {
            assert_eq!(parse(input).unwrap(), vec![Token::Kana(input)], "{input}");
        }
    }

    #[test]
    fn stray_delimiters_around_annotations() {
        assert_eq!(
            parse("{{気|き}}").unwrap(),
            vec![Token::Kana("{"), kanji("気", "き"), Token::Kana("}")]
        );
        assert_eq!(
            parse("a|b {気|き} c}").unwrap(),
            vec![Token::Kana("a|b "), kanji("気", "き"), Token::Kana(" c}")]
        );
    }

    #[test]
    fn repetitive_readings_parse() {
        let symbol = "日の".repeat(10);
        let reading = "の".repeat(40);
        let input = format!("{{{symbol}|{reading}}}");
        assert_eq!(
            parse(&input).unwrap(),
            vec![Token::Kanji {
                symbol: &symbol,
                furigana: reading.clone(),
            }]
        );

        let strict = Fitter::new().strict(true);
        let err = parse_with(&input, &strict).unwrap_err();
        println!("{err}");
        assert!(err.message().starts_with("gave up mapping"));
    }

    #[test]
    fn fit_failure_aborts() {
        let failing = |symbol: &str, reading: &str| -> Result<String, FitError> {
            if symbol == "配" {
                Err(FitError::Unmappable {
                    symbol: symbol.to_string(),
                    reading: reading.to_string(),
                })
            } else {
                Ok(reading.to_string())
            }
        };
        let err = parse_with("かり{気|き}まに{配|くば}にん", &failing).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error parsing furigana: reading くば cannot be mapped onto 配"
        );
        assert_eq!(err.message(), "reading くば cannot be mapped onto 配");

        let strict = Fitter::new().strict(true);
        let err = parse_with("{物の怪|もののけ}", &strict).unwrap_err();
        assert!(err.to_string().starts_with("Error parsing furigana: "));
    }

    #[test]
    fn custom_fitter_output_is_kept() {
        let spaced = |_: &str, reading: &str| -> Result<String, FitError> {
            Ok(reading.chars().map(String::from).collect::<Vec<_>>().join(" "))
        };
        assert_eq!(
            parse_with("{配|くば}", &spaced).unwrap(),
            vec![Token::Kanji {
                symbol: "配",
                furigana: "く ば".to_string(),
            }]
        );
    }
}
