//! Unicode script classification for Japanese text.
//!
//! Character-level predicates (`*_char`) over fixed code-point ranges, plus
//! whole-string predicates that hold when every character qualifies. The
//! kana ranges are the exact assigned spans (U+3041..U+3096, U+30A1..U+30FC)
//! rather than full blocks, so unassigned codepoints never classify.

const HIRAGANA_START: char = '\u{3041}';
const HIRAGANA_END: char = '\u{3096}';
const KATAKANA_START: char = '\u{30A1}';
const KATAKANA_END: char = '\u{30FC}';
const KANJI_START: char = '\u{4E00}';
const KANJI_END: char = '\u{9FAF}';

/// ー, the prolonged sound mark. Sits in the katakana block but extends
/// hiragana words too (らーめん), so it classifies as both kana scripts.
const PROLONGED_SOUND_MARK: char = '\u{30FC}';
/// ・, the katakana middle dot.
const KANA_SLASH_DOT: char = '\u{30FB}';

/// Offset between a hiragana character and its katakana counterpart.
const KANA_SHIFT: u32 = 0x60;

pub fn is_long_dash(c: char) -> bool {
    c == PROLONGED_SOUND_MARK
}

pub fn is_slash_dot(c: char) -> bool {
    c == KANA_SLASH_DOT
}

pub fn is_hiragana_char(c: char) -> bool {
    is_long_dash(c) || (HIRAGANA_START..=HIRAGANA_END).contains(&c)
}

pub fn is_katakana_char(c: char) -> bool {
    (KATAKANA_START..=KATAKANA_END).contains(&c)
}

pub fn is_kanji_char(c: char) -> bool {
    (KANJI_START..=KANJI_END).contains(&c)
}

pub fn is_uppercase_char(c: char) -> bool {
    ('\u{41}'..='\u{5A}').contains(&c)
}

pub fn is_lowercase_char(c: char) -> bool {
    ('\u{61}'..='\u{7A}').contains(&c)
}

/// Vowels carrying a Hepburn long-vowel macron (āēīōū, upper and lower).
pub fn is_macron_char(c: char) -> bool {
    matches!(
        c,
        '\u{100}'..='\u{101}'
            | '\u{112}'..='\u{113}'
            | '\u{12A}'..='\u{12B}'
            | '\u{14C}'..='\u{14D}'
            | '\u{16A}'..='\u{16B}'
    )
}

/// Modern English (ASCII) or a Hepburn macron vowel.
pub fn is_romaji_char(c: char) -> bool {
    c <= '\u{7F}' || is_macron_char(c)
}

/// ASCII punctuation plus curly quotation marks.
pub fn is_english_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '\u{20}'..='\u{2F}'
            | '\u{3A}'..='\u{3F}'
            | '\u{5B}'..='\u{60}'
            | '\u{7B}'..='\u{7E}'
            | '\u{2018}'..='\u{2019}'
            | '\u{201C}'..='\u{201D}'
    )
}

fn all_chars(input: &str, pred: impl Fn(char) -> bool) -> bool {
    !input.is_empty() && input.chars().all(pred)
}

/// Every character is hiragana (ー included).
pub fn is_hiragana(input: &str) -> bool {
    all_chars(input, is_hiragana_char)
}

/// Every character is katakana.
pub fn is_katakana(input: &str) -> bool {
    all_chars(input, is_katakana_char)
}

/// Every character is a CJK ideograph.
pub fn is_kanji(input: &str) -> bool {
    all_chars(input, is_kanji_char)
}

/// Every character is romaji (ASCII or macron vowel).
pub fn is_romaji(input: &str) -> bool {
    all_chars(input, is_romaji_char)
}

/// Like [`is_romaji`], but characters satisfying `allowed` also pass.
pub fn is_romaji_with(input: &str, allowed: impl Fn(char) -> bool) -> bool {
    all_chars(input, |c| is_romaji_char(c) || allowed(c))
}

/// Kana and romaji mixed together; kanji is ignored.
pub fn is_mixed(input: &str) -> bool {
    is_mixed_with(input, true)
}

/// Kana and romaji mixed together. With `pass_kanji = false`, any kanji
/// character disqualifies the string.
pub fn is_mixed_with(input: &str, pass_kanji: bool) -> bool {
    let has_kana = input
        .chars()
        .any(|c| is_hiragana_char(c) || is_katakana_char(c));
    let has_romaji = input.chars().any(is_romaji_char);
    let has_kanji = !pass_kanji && input.chars().any(is_kanji_char);
    has_kana && has_romaji && !has_kanji
}

pub fn is_empty(input: &str) -> bool {
    input.is_empty()
}

/// Convert hiragana to katakana by code-point shift.
/// ー and ・ pass through; so does anything outside the hiragana range.
pub fn hiragana_to_katakana(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if is_long_dash(c) || is_slash_dot(c) {
                c
            } else if (HIRAGANA_START..=HIRAGANA_END).contains(&c) {
                char::from_u32(c as u32 + KANA_SHIFT).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert katakana to hiragana by code-point shift.
/// ー and ・ pass through unchanged; the shift covers ァ..ヶ, the span with
/// hiragana counterparts.
pub fn katakana_to_hiragana(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if is_long_dash(c) || is_slash_dot(c) {
                c
            } else if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - KANA_SHIFT).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
