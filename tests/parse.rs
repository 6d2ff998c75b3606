use anyhow::Result;

use furigana_markup::{base_text, fit, parse, parse_with, FitError, Fitter, KanjiReadings, Token};

static ANNOTATED: &[&str] = &[
    "",
    "plain text",
    "{気|き}",
    "かり{気|き}まに{配|くば}にん",
    "{気|き}{配|くば}",
    "{気き}",
    "{{気|き}} and {食べる|たべる}、{日々|ひび}",
    "{CDプレイヤー|シーディープレイヤー}を{買|か}った",
];

// removes the annotation syntax the same way a reader would, by hand
fn strip_annotations(input: &str) -> String {
    let mut stripped = String::new();
    let mut rest = input;
    while let Some(open) = rest.find('{') {
        stripped.push_str(&rest[..open]);
        let candidate = &rest[open..];
        let span = candidate.find('}').map(|close| &candidate[1..close]);
        match span.and_then(|span| span.split_once('|')) {
            Some((symbol, reading))
                if !symbol.is_empty()
                    && !reading.is_empty()
                    && !symbol.contains('{')
                    && !reading.contains(['{', '|']) =>
            {
                stripped.push_str(symbol);
                rest = &candidate[symbol.len() + reading.len() + 3..];
            }
            _ => {
                stripped.push('{');
                rest = &candidate[1..];
            }
        }
    }
    stripped.push_str(rest);
    stripped
}

#[test]
fn base_text_reconstructs_input() -> Result<()> {
    for input in ANNOTATED {
        let tokens = parse(input)?;
        assert_eq!(base_text(&tokens), strip_annotations(input), "{input}");
        assert!(
            tokens.iter().all(|t| !matches!(t, Token::Kana(""))),
            "empty kana in {tokens:?}"
        );
    }
    Ok(())
}

#[test]
fn readings_are_fitted() -> Result<()> {
    let tokens = parse("{CDプレイヤー|シーディープレイヤー}を{買|か}った")?;
    assert_eq!(
        tokens,
        vec![
            Token::Kanji {
                symbol: "CDプレイヤー",
                furigana: "シー ディー プレイヤー".to_string(),
            },
            Token::Kana("を"),
            Token::Kanji {
                symbol: "買",
                furigana: fit("買", "か")?,
            },
            Token::Kana("った"),
        ]
    );
    Ok(())
}

#[test]
fn known_readings_flow_into_tokens() -> Result<()> {
    let mut kanji_to_readings = KanjiReadings::new();
    kanji_to_readings.insert("花".to_string(), vec!["はな".to_string()]);
    kanji_to_readings.insert("火".to_string(), vec!["ひ".to_string()]);
    let fitter = Fitter::new()
        .with_separator("|")
        .with_kanji_readings(kanji_to_readings);

    let tokens = parse_with("{花火|はなび}を見る", &fitter)?;
    assert_eq!(tokens[0].furigana(), Some("はな|び"));
    assert_eq!(tokens[1], Token::Kana("を見る"));
    Ok(())
}

#[test]
fn long_annotations_fall_back_to_their_reading() -> Result<()> {
    let symbol = "日の".repeat(10);
    let reading = "の".repeat(40);
    let input = format!("前{{{symbol}|{reading}}}後");
    let tokens = parse(&input)?;
    assert_eq!(base_text(&tokens), format!("前{symbol}後"));
    assert_eq!(tokens[1].furigana(), Some(reading.as_str()));
    Ok(())
}

#[test]
fn errors_carry_no_tokens() {
    let refuse = |symbol: &str, _: &str| -> Result<String, FitError> {
        Err(FitError::Unmappable {
            symbol: symbol.to_string(),
            reading: String::new(),
        })
    };
    let err = parse_with("ok {気|き}", &refuse).unwrap_err();
    assert!(err.to_string().starts_with("Error parsing furigana: "));

    // plain text never reaches the fitter
    assert_eq!(parse_with("ok", &refuse).unwrap(), vec![Token::Kana("ok")]);
}

#[test]
fn serializes_for_the_renderer() -> Result<()> {
    let tokens = parse("かり{気|き}")?;
    assert_eq!(
        serde_json::to_string(&tokens)?,
        r#"[{"_tag":"kana","value":"かり"},{"_tag":"kanji","value":{"symbol":"気","furigana":"き"}}]"#
    );
    Ok(())
}
