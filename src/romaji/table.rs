use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{debug, debug_span};

use crate::options::{KanaOptions, Romanization};

use super::trie::KanaTrie;

/// Embedded Hepburn base table.
pub const DEFAULT_TOML: &str = include_str!("hepburn.toml");

/// Consonants whose doubling spells the sokuon (っ). `n` is absent: a double
/// `n` is the hatsuon ん, never っん.
const SOKUON_CONSONANTS: &str = "bcdfghjkmpqrstvwxyz";

/// Historical kana overlay.
const OBSOLETE_KANA: &[(&str, &str)] = &[("wi", "ゐ"), ("we", "ゑ")];

/// Live-typing overlay: explicit spellings for a standalone ん, so the
/// composition is not stuck waiting for a vowel that never comes.
const IME_KANA: &[(&str, &str)] = &[("nn", "ん"), ("n ", "ん")];

#[derive(Deserialize)]
struct MappingConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("empty romaji sequence in mapping")]
    EmptyKey,
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("default converter already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<romaji, kana>`, validated eagerly.
pub fn parse_mapping_toml(toml_str: &str) -> Result<BTreeMap<String, String>, KanaTableError> {
    let config: MappingConfig =
        toml::from_str(toml_str).map_err(|e| KanaTableError::Parse(e.to_string()))?;
    if config.mappings.is_empty() {
        return Err(KanaTableError::Empty);
    }
    validate_entries(&config.mappings)?;
    Ok(config.mappings)
}

fn validate_entries(table: &BTreeMap<String, String>) -> Result<(), KanaTableError> {
    for (key, value) in table {
        if key.is_empty() {
            return Err(KanaTableError::EmptyKey);
        }
        if value.is_empty() {
            return Err(KanaTableError::EmptyValue(key.clone()));
        }
    }
    Ok(())
}

/// Build the effective trie for `options` from the embedded base table.
pub fn build_kana_trie(options: &KanaOptions) -> Result<KanaTrie, KanaTableError> {
    let base = match options.romanization {
        Romanization::Hepburn => parse_mapping_toml(DEFAULT_TOML)?,
    };
    build_from_table(&base, options)
}

/// Build the effective trie for `options` from a caller-supplied base table.
///
/// Insertion order fixes who wins on overlap: base entries, generated
/// sokuon twins, IME overlay, obsolete-kana overlay, then the custom
/// mapping on top of everything.
pub fn build_from_table(
    base: &BTreeMap<String, String>,
    options: &KanaOptions,
) -> Result<KanaTrie, KanaTableError> {
    let _span = debug_span!("build_kana_trie", entries = base.len()).entered();
    validate_entries(base)?;

    let mut trie = KanaTrie::new();
    for (key, value) in base {
        trie.insert(key, value);
    }
    graft_sokuon(&mut trie);

    if options.incremental() {
        for (key, value) in IME_KANA {
            trie.insert(key, value);
        }
    }
    if options.use_obsolete_kana {
        for (key, value) in OBSOLETE_KANA {
            trie.insert(key, value);
        }
    }
    if let Some(custom) = &options.custom_kana_mapping {
        validate_entries(custom)?;
        for (key, value) in custom {
            trie.insert(key, value);
        }
    }

    debug!(nodes = trie.len(), "kana trie built");
    Ok(trie)
}

/// For every entry `c…` under a doubling consonant `c`, add `cc…` mapping to
/// っ plus the original value. Single level: entries created here are not
/// themselves doubled again.
fn graft_sokuon(trie: &mut KanaTrie) {
    for c in SOKUON_CONSONANTS.chars() {
        let Some(node) = trie.child(KanaTrie::ROOT, c) else {
            continue;
        };
        for (suffix, value) in trie.subtree_entries(node) {
            let key = format!("{c}{c}{suffix}");
            trie.insert(&key, &format!("っ{value}"));
        }
    }
}
