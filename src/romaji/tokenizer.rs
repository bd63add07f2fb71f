use tracing::{debug, debug_span};

use super::trie::KanaTrie;

/// One tokenized slice of the input, in character offsets.
///
/// `value` is the resolved kana for `input[start..end]`, or `None` when the
/// slice passes through unconverted: characters with no root entry, a
/// trailing chunk that is still ambiguous in incremental mode, or a trailing
/// dead path that nothing in the table completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub value: Option<String>,
}

/// Greedy longest-match tokenization of `input` against `trie`.
///
/// A cursor walks the trie one character at a time, always extending the
/// current chunk while a child exists. On a dead end the chunk commits with
/// the value of the node the cursor stopped on, and the character that failed
/// to extend starts the next chunk from the root; committed characters are
/// never re-examined.
///
/// `force_resolve_trailing` decides the trailing chunk: `true` (one-shot
/// conversion) commits its terminal value if it has one; `false` (live
/// typing) leaves an ambiguous trailing chunk unresolved so the caller can
/// wait for more input.
pub fn tokenize(input: &str, trie: &KanaTrie, force_resolve_trailing: bool) -> Vec<Span> {
    let chars: Vec<char> = input.chars().collect();
    let _span = debug_span!("tokenize", chars = chars.len(), force_resolve_trailing).entered();

    let mut spans = Vec::new();
    let mut chunk_start = 0usize;
    let mut cursor = 0usize;
    let mut node = KanaTrie::ROOT;

    while cursor < chars.len() {
        // Nothing extends this node: commit and re-root on the next char.
        if cursor > chunk_start && !trie.has_children(node) {
            spans.push(Span {
                start: chunk_start,
                end: cursor,
                value: trie.value(node).map(str::to_owned),
            });
            chunk_start = cursor;
            node = KanaTrie::ROOT;
            continue;
        }
        match trie.child(node, chars[cursor]) {
            Some(next) => {
                node = next;
                cursor += 1;
            }
            None if cursor == chunk_start => {
                // No root entry for this character: single-char identity chunk.
                spans.push(Span {
                    start: chunk_start,
                    end: chunk_start + 1,
                    value: None,
                });
                cursor += 1;
                chunk_start = cursor;
            }
            None => {
                // Mid-chunk dead end: commit whatever the current node holds
                // (absent for a dead ambiguity). The failing character is not
                // skipped; it starts the next chunk.
                spans.push(Span {
                    start: chunk_start,
                    end: cursor,
                    value: trie.value(node).map(str::to_owned),
                });
                chunk_start = cursor;
                node = KanaTrie::ROOT;
            }
        }
    }

    if cursor > chunk_start {
        let unambiguous = !trie.has_children(node);
        let value = trie.value(node).map(str::to_owned);
        if (force_resolve_trailing || unambiguous) && value.is_some() {
            spans.push(Span {
                start: chunk_start,
                end: cursor,
                value,
            });
        } else {
            // Pending ambiguity, or a path nothing completes: pass through.
            spans.push(Span {
                start: chunk_start,
                end: cursor,
                value: None,
            });
        }
    }

    debug!(spans = spans.len());
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::KanaOptions;
    use crate::romaji::table::build_kana_trie;

    fn default_trie() -> KanaTrie {
        build_kana_trie(&KanaOptions::default()).unwrap()
    }

    fn span(start: usize, end: usize, value: &str) -> Span {
        Span {
            start,
            end,
            value: Some(value.to_string()),
        }
    }

    fn pending(start: usize, end: usize) -> Span {
        Span {
            start,
            end,
            value: None,
        }
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("", &default_trie(), true).is_empty());
    }

    #[test]
    fn single_syllable() {
        assert_eq!(tokenize("ka", &default_trie(), true), vec![span(0, 2, "か")]);
    }

    #[test]
    fn longest_match_wins() {
        // "na" must not split into ん + あ
        assert_eq!(tokenize("na", &default_trie(), true), vec![span(0, 2, "な")]);
        assert_eq!(
            tokenize("kya", &default_trie(), true),
            vec![span(0, 3, "きゃ")]
        );
    }

    #[test]
    fn trailing_n_forced_and_pending() {
        assert_eq!(tokenize("n", &default_trie(), true), vec![span(0, 1, "ん")]);
        assert_eq!(tokenize("n", &default_trie(), false), vec![pending(0, 1)]);
    }

    #[test]
    fn trailing_ambiguous_consonant() {
        assert_eq!(tokenize("ky", &default_trie(), false), vec![pending(0, 2)]);
        // forced, but no terminal value exists: best-effort passthrough
        assert_eq!(tokenize("ky", &default_trie(), true), vec![pending(0, 2)]);
    }

    #[test]
    fn dead_end_restarts_at_failing_char() {
        // ん commits on seeing 't'; 't' then starts its own chunk
        assert_eq!(
            tokenize("kanta", &default_trie(), true),
            vec![span(0, 2, "か"), span(2, 3, "ん"), span(3, 5, "た")]
        );
    }

    #[test]
    fn double_n_restart() {
        assert_eq!(
            tokenize("onna", &default_trie(), true),
            vec![span(0, 1, "お"), span(1, 2, "ん"), span(2, 4, "な")]
        );
    }

    #[test]
    fn sokuon_via_grafted_entries() {
        assert_eq!(
            tokenize("kakko", &default_trie(), true),
            vec![span(0, 2, "か"), span(2, 5, "っこ")]
        );
    }

    #[test]
    fn unmatched_chars_become_identity_chunks() {
        assert_eq!(
            tokenize("1%", &default_trie(), true),
            vec![pending(0, 1), pending(1, 2)]
        );
    }

    #[test]
    fn kana_input_passes_through() {
        assert_eq!(
            tokenize("かな", &default_trie(), true),
            vec![pending(0, 1), pending(1, 2)]
        );
    }

    #[test]
    fn mixed_word_with_symbols() {
        assert_eq!(
            tokenize("ra-men", &default_trie(), true),
            vec![
                span(0, 2, "ら"),
                span(2, 3, "ー"),
                span(3, 5, "め"),
                span(5, 6, "ん"),
            ]
        );
    }

    #[test]
    fn ime_overlay_resolves_standalone_n() {
        let options = KanaOptions {
            ime_mode: crate::options::ImeMode::Enabled,
            ..KanaOptions::default()
        };
        let trie = build_kana_trie(&options).unwrap();
        assert_eq!(tokenize("nn", &trie, false), vec![span(0, 2, "ん")]);
        assert_eq!(tokenize("n ", &trie, false), vec![span(0, 2, "ん")]);
        // lone n still waits
        assert_eq!(tokenize("n", &trie, false), vec![pending(0, 1)]);
    }

    mod props {
        use proptest::prelude::*;

        use super::*;

        fn arb_input() -> impl Strategy<Value = String> {
            let ch = prop_oneof![
                3 => prop::sample::select("aiueo".chars().collect::<Vec<_>>()),
                2 => prop::sample::select("kstnhmyrwgzdbpcfjvqxl'".chars().collect::<Vec<_>>()),
                1 => prop::sample::select(" -.,123あンab漢".chars().collect::<Vec<_>>()),
            ];
            proptest::collection::vec(ch, 0..48).prop_map(|v| v.into_iter().collect())
        }

        proptest! {
            // Spans are contiguous, ordered, and cover the input exactly.
            #[test]
            fn spans_cover_input_exactly(input in arb_input(), force in any::<bool>()) {
                let trie = default_trie();
                let spans = tokenize(&input, &trie, force);
                let mut pos = 0;
                for s in &spans {
                    prop_assert_eq!(s.start, pos);
                    prop_assert!(s.end > s.start);
                    pos = s.end;
                }
                prop_assert_eq!(pos, input.chars().count());
            }

            // Resolved spans always carry output.
            #[test]
            fn resolved_spans_are_nonempty(input in arb_input()) {
                let trie = default_trie();
                for s in tokenize(&input, &trie, true) {
                    if let Some(v) = &s.value {
                        prop_assert!(!v.is_empty());
                    }
                }
            }
        }
    }
}
