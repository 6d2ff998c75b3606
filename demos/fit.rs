//! Without kanji reading information some word-reading pairs are ambiguous and pass through unchanged,
//! known readings let the fitter pick the most accurate mapping.

use furigana_markup::{Fitter, KanjiReadings};

fn main() {
    println!("{:?}", furigana_markup::fit("物の怪", "もののけ"));

    let mut kanji_to_readings = KanjiReadings::new();
    kanji_to_readings.insert("物".to_string(), vec!["もの".to_string()]);
    kanji_to_readings.insert("怪".to_string(), vec!["け".to_string()]);
    let fitter = Fitter::new()
        .strict(true)
        .with_kanji_readings(kanji_to_readings);
    println!("{:?}", fitter.fit_reading("物の怪", "もののけ"));

    for mapping in furigana_markup::map_naive("物の怪", "もののけ") {
        println!("{mapping}");
    }
}
