use serde::Serialize;
use std::fmt::Display;

/// A piece of furigana-annotated text.
///
/// Serializes the way the web renderer expects it,
/// `{"_tag":"kana","value":"..."}` or `{"_tag":"kanji","value":{"symbol":"...","furigana":"..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "_tag", content = "value", rename_all = "lowercase")]
pub enum Token<'a> {
    /// Plain text without furigana.
    Kana(&'a str),
    /// Text annotated with its fitted reading.
    Kanji { symbol: &'a str, furigana: String },
}

impl<'a> Token<'a> {
    /// The text this token contributes to the base text stream.
    pub fn base_text(&self) -> &'a str {
        match self {
            Self::Kana(value) => *value,
            Self::Kanji { symbol, .. } => *symbol,
        }
    }

    /// The fitted reading of an annotation, or `None` for plain text.
    pub fn furigana(&self) -> Option<&str> {
        match self {
            Self::Kana(_) => None,
            Self::Kanji { furigana, .. } => Some(furigana.as_str()),
        }
    }
}

/// Prints kana as is and kanji with their furigana using HTML ruby tags.
impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kana(value) => write!(f, "{value}"),
            Self::Kanji { symbol, furigana } => {
                write!(f, "<ruby>{symbol}<rt>{furigana}</rt></ruby>")
            }
        }
    }
}

/// Concatenates the base text of the tokens, which is the annotated input without its readings.
pub fn base_text(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(Token::base_text).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reconstructs_base_text() {
        let tokens = [
            Token::Kana("かり"),
            Token::Kanji {
                symbol: "気",
                furigana: "き".to_string(),
            },
            Token::Kana("まに"),
        ];
        assert_eq!(base_text(&tokens), "かり気まに");
        assert_eq!(tokens[1].furigana(), Some("き"));
        assert_eq!(tokens[0].furigana(), None);
    }

    #[test]
    fn displays_ruby() {
        let tokens = [
            Token::Kanji {
                symbol: "配",
                furigana: "くば".to_string(),
            },
            Token::Kana("る"),
        ];
        let rendered: String = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, "<ruby>配<rt>くば</rt></ruby>る");
    }
}
