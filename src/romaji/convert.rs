use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::options::{ImeMode, KanaOptions};
use crate::unicode::{
    hiragana_to_katakana, is_english_punctuation_char, is_mixed, is_romaji, is_uppercase_char,
    katakana_to_hiragana,
};

use super::table::{build_from_table, build_kana_trie, parse_mapping_toml, KanaTableError};
use super::tokenizer::tokenize;
use super::trie::KanaTrie;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Romaji→kana converter: options plus the trie built for them.
///
/// Construct once per configuration and share by reference; conversion
/// itself is pure and lock-free.
pub struct KanaConverter {
    options: KanaOptions,
    trie: KanaTrie,
}

impl KanaConverter {
    /// Build a converter over the embedded Hepburn table.
    pub fn new(options: KanaOptions) -> Result<Self, KanaTableError> {
        let trie = build_kana_trie(&options)?;
        Ok(KanaConverter { options, trie })
    }

    /// Build a converter over a caller-supplied `[mappings]` TOML table.
    pub fn from_table_toml(toml_str: &str, options: KanaOptions) -> Result<Self, KanaTableError> {
        let base = parse_mapping_toml(toml_str)?;
        let trie = build_from_table(&base, &options)?;
        Ok(KanaConverter { options, trie })
    }

    /// Replace the base table used by the shared default converter.
    /// Must be called before the first [`KanaConverter::global`] use.
    pub fn init_custom_table(toml_content: String) -> Result<(), KanaTableError> {
        // Validate eagerly
        parse_mapping_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KanaTableError::AlreadyInitialized)
    }

    /// Get or initialize the shared default-options converter.
    pub fn global() -> &'static KanaConverter {
        static INSTANCE: OnceLock<KanaConverter> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let options = KanaOptions::default();
            match CUSTOM_TOML.get() {
                Some(toml_str) => KanaConverter::from_table_toml(toml_str, options)
                    .expect("custom table TOML must be valid"),
                None => KanaConverter::new(options).expect("embedded table must be valid"),
            }
        })
    }

    pub fn options(&self) -> &KanaOptions {
        &self.options
    }

    pub fn trie(&self) -> &KanaTrie {
        &self.trie
    }

    /// Convert romaji to kana.
    ///
    /// Matching is case-insensitive; the original casing of each matched
    /// slice picks the script: an all-uppercase slice renders as katakana
    /// (unless `ignore_case` or an explicit `ime_mode` script override).
    /// Characters the table does not know pass through unchanged, and in
    /// incremental mode a trailing ambiguous slice stays as typed.
    pub fn to_kana(&self, input: &str) -> String {
        let _span = debug_span!("to_kana", len = input.len()).entered();
        let original: Vec<char> = input.chars().collect();
        // Char-wise ASCII lowering keeps offsets aligned with the original.
        let lowered: String = original.iter().map(|c| c.to_ascii_lowercase()).collect();
        let spans = tokenize(&lowered, &self.trie, !self.options.incremental());
        debug!(spans = spans.len());

        let mut out = String::new();
        for span in &spans {
            let slice = &original[span.start..span.end];
            match &span.value {
                None => out.extend(slice.iter()),
                Some(value) => {
                    if self.render_katakana(slice) {
                        out.push_str(&hiragana_to_katakana(value));
                    } else {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }

    fn render_katakana(&self, original_slice: &[char]) -> bool {
        match self.options.ime_mode {
            ImeMode::ToHiragana => false,
            ImeMode::ToKatakana => true,
            ImeMode::Off | ImeMode::Enabled => {
                !self.options.ignore_case
                    && original_slice.iter().copied().all(is_uppercase_char)
            }
        }
    }

    /// Convert any input to katakana.
    ///
    /// Romaji (pure or mixed with kana) goes through `to_kana` first, then
    /// the whole result is code-shifted; already-kana input is shifted
    /// directly. `pass_romaji` skips conversion and only shifts.
    pub fn to_katakana(&self, input: &str) -> String {
        if self.options.pass_romaji {
            return hiragana_to_katakana(input);
        }
        if is_mixed(input) || is_romaji(input) || all_english_punctuation(input) {
            let hiragana = self.to_kana(&input.to_ascii_lowercase());
            hiragana_to_katakana(&hiragana)
        } else {
            hiragana_to_katakana(input)
        }
    }

    /// Convert any input to hiragana; the mirror of [`Self::to_katakana`].
    pub fn to_hiragana(&self, input: &str) -> String {
        if self.options.pass_romaji {
            return katakana_to_hiragana(input);
        }
        if is_mixed(input) {
            self.to_kana(&katakana_to_hiragana(input).to_ascii_lowercase())
        } else if is_romaji(input) || all_english_punctuation(input) {
            self.to_kana(&input.to_ascii_lowercase())
        } else {
            katakana_to_hiragana(input)
        }
    }
}

fn all_english_punctuation(input: &str) -> bool {
    !input.is_empty() && input.chars().all(is_english_punctuation_char)
}

/// Convert with default options via the shared converter.
pub fn to_kana(input: &str) -> String {
    KanaConverter::global().to_kana(input)
}

/// Convert to katakana with default options via the shared converter.
pub fn to_katakana(input: &str) -> String {
    KanaConverter::global().to_katakana(input)
}

/// Convert to hiragana with default options via the shared converter.
pub fn to_hiragana(input: &str) -> String {
    KanaConverter::global().to_hiragana(input)
}
