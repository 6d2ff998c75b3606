//! `furigana_markup::parse` splits annotated text into plain and annotated tokens.

use std::env;

fn main() {
    let input = env::args()
        .nth(1)
        .unwrap_or_else(|| "かり{気|き}まに{配|くば}にん、{食べる|たべる}".to_string());
    match furigana_markup::parse(&input) {
        Ok(tokens) => {
            for token in &tokens {
                println!("{token:?}");
            }
            let rendered: String = tokens.iter().map(ToString::to_string).collect();
            println!("{rendered}");
            println!("{}", furigana_markup::base_text(&tokens));
        }
        Err(err) => eprintln!("{err}"),
    }
}
