//! Romaji-to-kana transliteration and Japanese script classification.
//!
//! The core is a greedy longest-match tokenizer over a character-indexed
//! prefix tree built from a Hepburn romanization table. `KanaConverter`
//! orchestrates it into `to_kana` / `to_katakana` / `to_hiragana`; the
//! `unicode` module carries the script predicates.

pub mod options;
pub mod romaji;
pub mod unicode;

pub use options::{ImeMode, KanaOptions, Romanization};
pub use romaji::{
    to_hiragana, to_kana, to_katakana, KanaConverter, KanaTableError, KanaTrie, Span,
    TrieLookupResult,
};
