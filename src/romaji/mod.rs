//! Romaji-to-kana conversion engine.
//!
//! A trie-based longest-match tokenizer splits romanized input into spans
//! and the converter renders each span as hiragana or katakana, handling
//! sokuon (っ), hatsuon (ん), yōon (きゃ), and live-typing input where the
//! trailing keystrokes are still ambiguous.

mod convert;
mod table;
mod tokenizer;
mod trie;

pub use convert::{to_hiragana, to_kana, to_katakana, KanaConverter};
pub use table::{build_kana_trie, parse_mapping_toml, KanaTableError, DEFAULT_TOML};
pub use tokenizer::{tokenize, Span};
pub use trie::{KanaTrie, NodeId, TrieLookupResult};
