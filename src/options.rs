//! Typed conversion options.
//!
//! Every knob the conversion entry points understand lives here with a
//! documented default; there is no dynamic option map. Options that change
//! the mapping table (`use_obsolete_kana`, `ime_mode`, `custom_kana_mapping`,
//! `romanization`) take effect when a `KanaConverter` is built, so a changed
//! custom mapping means constructing a fresh converter.

use std::collections::BTreeMap;

/// Live-typing (IME composition) behavior.
///
/// Anything other than `Off` leaves trailing ambiguous romaji unconverted so
/// the UI can wait for the next keystroke, and overlays `"nn"` / `"n "` so a
/// standalone ん stays reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImeMode {
    /// One-shot conversion; trailing ambiguity is resolved immediately.
    #[default]
    Off,
    /// Incremental conversion, script chosen per span as usual.
    Enabled,
    /// Incremental, and every resolved span renders as hiragana.
    ToHiragana,
    /// Incremental, and every resolved span renders as katakana.
    ToKatakana,
}

/// Romanization system selecting the base mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Romanization {
    #[default]
    Hepburn,
}

/// Options accepted by [`crate::KanaConverter`].
#[derive(Debug, Clone, Default)]
pub struct KanaOptions {
    /// Map `wi`/`we` to the historical ゐ/ゑ instead of うぃ/うぇ.
    /// Default `false`.
    pub use_obsolete_kana: bool,
    /// In `to_katakana`/`to_hiragana`, leave romaji untouched and only shift
    /// kana between scripts. Default `false`.
    pub pass_romaji: bool,
    /// Ignored by romaji→kana conversion; retained so a single options value
    /// can also configure a kana→romaji consumer. Default `false`.
    pub upcase_katakana: bool,
    /// Strip the meaning of ASCII case: all-uppercase input converts to
    /// hiragana like lowercase input does. Default `false`.
    pub ignore_case: bool,
    /// Live-typing behavior, see [`ImeMode`]. Default [`ImeMode::Off`].
    pub ime_mode: ImeMode,
    /// Base table selection. Default [`Romanization::Hepburn`].
    pub romanization: Romanization,
    /// Extra `romaji → kana` entries inserted after every overlay, replacing
    /// whatever they collide with. Default none.
    pub custom_kana_mapping: Option<BTreeMap<String, String>>,
}

impl KanaOptions {
    /// True when conversion should leave trailing ambiguous input pending.
    pub(crate) fn incremental(&self) -> bool {
        self.ime_mode != ImeMode::Off
    }
}
