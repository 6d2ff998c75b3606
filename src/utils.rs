//! Character classification and kana comparison helpers

use wana_kana::to_hiragana::to_hiragana;

pub fn is_numeric_west(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_numeric_fullwidth(c: char) -> bool {
    ('０'..='９').contains(&c)
}

pub fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || ('Ａ'..='Ｚ').contains(&c) || ('ａ'..='ｚ').contains(&c)
}

pub fn is_hiragana(c: char) -> bool {
    (0x3040..=0x309F).contains(&(c as u32))
}

pub fn is_katakana(c: char) -> bool {
    (0x30A0..=0x30FF).contains(&(c as u32))
}

pub fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

pub fn is_kanji(c: char) -> bool {
    (0x4E00..=0x9FFF).contains(&(c as u32))
}

/// Maps a katakana character to its hiragana counterpart, leaving anything else untouched.
pub fn hiragana_char(c: char) -> char {
    if ('ァ'..='ヶ').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Checks whether the strings are equivalent if ignoring the difference between hiragana and katakana.
/// A `ー` on one side matches a vowel on the other side that extends the previous character.
pub fn kana_equivalent(left: &str, right: &str) -> bool {
    if left.chars().count() != right.chars().count() {
        return false;
    }
    let mut previous: Option<(char, char)> = None;
    for (l, r) in left.chars().zip(right.chars()) {
        let equivalent = if l == 'ー' && r != 'ー' {
            previous.is_some_and(|(_, previous_r)| is_extension(previous_r, r))
        } else if r == 'ー' && l != 'ー' {
            previous.is_some_and(|(previous_l, _)| is_extension(previous_l, l))
        } else {
            hiragana_char(l) == hiragana_char(r)
        };
        if !equivalent {
            return false;
        }
        previous = Some((l, r));
    }
    true
}

/// Like `kana_equivalent`, but also accepts anything wana_kana folds to the same hiragana.
pub fn reading_equivalent(word: &str, reading: &str) -> bool {
    if !word.chars().all(is_kana) {
        return false;
    }
    kana_equivalent(word, reading) || to_hiragana(word) == to_hiragana(reading)
}

// checks if `next` can stand in for a ー after `previous`
fn is_extension(previous: char, next: char) -> bool {
    matches!(
        (unvoiced(previous), hiragana_char(next)),
        ('あ' | 'ぁ' | 'か' | 'さ' | 'た' | 'な' | 'は' | 'ま' | 'や' | 'ゃ' | 'ら' | 'わ', 'あ')
            | ('い' | 'ぃ' | 'き' | 'し' | 'ち' | 'に' | 'ひ' | 'み' | 'り', 'い')
            | ('う' | 'ぅ' | 'く' | 'す' | 'つ' | 'ぬ' | 'ふ' | 'む' | 'ゆ' | 'ゅ' | 'る', 'う')
            | ('え' | 'ぇ' | 'け' | 'せ' | 'て' | 'ね' | 'へ' | 'め' | 'れ', 'え' | 'い')
            | ('お' | 'ぉ' | 'こ' | 'そ' | 'と' | 'の' | 'ほ' | 'も' | 'よ' | 'ょ' | 'ろ', 'お' | 'う')
    )
}

// strips dakuten and handakuten, so that ぱ extends like は
fn unvoiced(c: char) -> char {
    let c = hiragana_char(c);
    (1..=2)
        .filter_map(|distance| (c as u32).checked_sub(distance).and_then(char::from_u32))
        .find(|&plain| is_voiced_form(plain, c))
        .unwrap_or(c)
}

/// Checks whether `voiced` is `plain` with dakuten or handakuten, as happens with rendaku.
pub fn is_voiced_form(plain: char, voiced: char) -> bool {
    let plain = hiragana_char(plain);
    let distance = (hiragana_char(voiced) as u32).wrapping_sub(plain as u32);
    match plain {
        'か' | 'き' | 'く' | 'け' | 'こ' | 'さ' | 'し' | 'す' | 'せ' | 'そ' | 'た' | 'ち' | 'つ'
        | 'て' | 'と' => distance == 1,
        'は' | 'ひ' | 'ふ' | 'へ' | 'ほ' => distance == 1 || distance == 2,
        _ => false,
    }
}

/// The katakana name of a latin letter.
pub fn alphabet_reading(c: char) -> Option<&'static str> {
    // fold full-width letters onto ascii
    let c = if ('Ａ'..='Ｚ').contains(&c) || ('ａ'..='ｚ').contains(&c) {
        char::from_u32(c as u32 - 0xFEE0)?
    } else {
        c
    };
    let reading = match c.to_ascii_uppercase() {
        'A' => "エー",
        'B' => "ビー",
        'C' => "シー",
        'D' => "ディー",
        'E' => "イー",
        'F' => "エフ",
        'G' => "ジー",
        'H' => "エイチ",
        'I' => "アイ",
        'J' => "ジェー",
        'K' => "ケー",
        'L' => "エル",
        'M' => "エム",
        'N' => "エヌ",
        'O' => "オー",
        'P' => "ピー",
        'Q' => "キュー",
        'R' => "アール",
        'S' => "エス",
        'T' => "ティー",
        'U' => "ユー",
        'V' => "ブイ",
        'W' => "ダブリュー",
        'X' => "エックス",
        'Y' => "ワイ",
        'Z' => "ゼット",
        _ => return None,
    };
    Some(reading)
}

/// Position of a digit within a number, deciding which unit is read with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Place {
    Ones,
    Tens,
    Hundreds,
    Thousands,
    TenThousands,
    HundredMillions,
}

impl Place {
    fn from_digits_left(digits_left: usize) -> Self {
        if digits_left == 0 {
            Self::Ones
        } else if digits_left % 8 == 0 {
            Self::HundredMillions
        } else {
            match (digits_left - 1) % 4 {
                0 => Self::Tens,
                1 => Self::Hundreds,
                2 => Self::Thousands,
                _ => Self::TenThousands,
            }
        }
    }
}

/// Valid readings for the digit, given how many digits follow it in the number.
pub fn digit_readings(digit: char, digits_left: usize) -> &'static [&'static str] {
    use Place::*;

    let Some(value) = digit.to_digit(10).or_else(|| {
        is_numeric_fullwidth(digit).then(|| digit as u32 - '０' as u32)
    }) else {
        return &[];
    };
    let place = Place::from_digits_left(digits_left);
    match (value, place) {
        // zero is unread inside a number but may be read on its own
        (0, _) => &["ぜろ", "れい"],

        (1, Ones) => &["いち", "ひと"],
        (1, Tens) => &["じゅう"],
        (1, Hundreds) => &["ひゃく", "いっぴゃく"],
        (1, Thousands) => &["せん", "いっせん"],
        (1, TenThousands) => &["まん", "いちまん"],
        (1, HundredMillions) => &["おく", "いちおく"],

        (2, Ones) => &["に", "ふた"],
        (2, Tens) => &["にじゅう"],
        (2, Hundreds) => &["にひゃく"],
        (2, Thousands) => &["にせん"],
        (2, TenThousands) => &["にまん"],
        (2, HundredMillions) => &["におく"],

        (3, Ones) => &["さん", "みっ"],
        (3, Tens) => &["さんじゅう"],
        (3, Hundreds) => &["さんびゃく"],
        (3, Thousands) => &["さんぜん"],
        (3, TenThousands) => &["さんまん"],
        (3, HundredMillions) => &["さんおく"],

        (4, Ones) => &["し", "よん", "よっ", "よ"],
        (4, Tens) => &["しじゅう", "よんじゅう"],
        (4, Hundreds) => &["しひゃく", "よんひゃく"],
        (4, Thousands) => &["しせん", "よんせん"],
        (4, TenThousands) => &["しまん", "よんまん"],
        (4, HundredMillions) => &["よんおく"],

        (5, Ones) => &["ご", "いつ"],
        (5, Tens) => &["ごじゅう"],
        (5, Hundreds) => &["ごひゃく"],
        (5, Thousands) => &["ごせん"],
        (5, TenThousands) => &["ごまん"],
        (5, HundredMillions) => &["ごおく"],

        (6, Ones) => &["ろく", "むっ"],
        (6, Tens) => &["ろくじゅう"],
        (6, Hundreds) => &["ろっぴゃく"],
        (6, Thousands) => &["ろくせん"],
        (6, TenThousands) => &["ろくまん"],
        (6, HundredMillions) => &["ろくおく"],

        (7, Ones) => &["しち", "なな"],
        (7, Tens) => &["しちじゅう", "ななじゅう"],
        (7, Hundreds) => &["しちひゃく", "ななひゃく"],
        (7, Thousands) => &["しちせん", "ななせん"],
        (7, TenThousands) => &["しちまん", "ななまん"],
        (7, HundredMillions) => &["ななおく"],

        (8, Ones) => &["はち", "やっ", "はっ"],
        (8, Tens) => &["はちじゅう"],
        (8, Hundreds) => &["はっぴゃく"],
        (8, Thousands) => &["はっせん"],
        (8, TenThousands) => &["はちまん"],
        (8, HundredMillions) => &["はちおく"],

        (9, Ones) => &["きゅう", "ここの"],
        (9, Tens) => &["きゅうじゅう"],
        (9, Hundreds) => &["きゅうひゃく"],
        (9, Thousands) => &["きゅうせん"],
        (9, TenThousands) => &["きゅうまん"],
        (9, HundredMillions) => &["きゅうおく"],

        _ => &[],
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kana_equivalence_ignores_script() {
        assert!(kana_equivalent("はなれる", "ハナレル"));
        assert!(kana_equivalent("ヶ", "ゖ"));
        assert!(!kana_equivalent("はな", "はなれ"));
        assert!(!kana_equivalent("はな", "ab"));
    }

    #[test]
    fn kana_equivalence_handles_long_vowels() {
        assert!(kana_equivalent("スーパー", "すうぱあ"));
        assert!(kana_equivalent("すうぱあ", "スーパー"));
        assert!(kana_equivalent("パーティー", "ぱあてぃい"));
        assert!(!kana_equivalent("ーす", "あす"));
        assert!(!kana_equivalent("スーパー", "すかぱあ"));
    }

    #[test]
    fn voiced_forms() {
        assert!(is_voiced_form('か', 'が'));
        assert!(is_voiced_form('ヒ', 'び'));
        assert!(is_voiced_form('ひ', 'ピ'));
        assert!(!is_voiced_form('つ', 'っ'));
        assert!(!is_voiced_form('な', 'に'));
        assert!(!is_voiced_form('か', 'か'));
    }

    #[test]
    fn alphabet() {
        assert_eq!(alphabet_reading('c'), Some("シー"));
        assert_eq!(alphabet_reading('Ｄ'), Some("ディー"));
        assert_eq!(alphabet_reading('ｗ'), Some("ダブリュー"));
        assert_eq!(alphabet_reading('ｱ'), None);
    }

    #[test]
    fn digits_by_place() {
        assert_eq!(digit_readings('1', 0), &["いち", "ひと"]);
        assert_eq!(digit_readings('３', 2), &["さんびゃく"]);
        assert_eq!(digit_readings('1', 4), &["まん", "いちまん"]);
        assert_eq!(digit_readings('9', 8), &["きゅうおく"]);
        assert!(digit_readings('x', 0).is_empty());
    }
}
