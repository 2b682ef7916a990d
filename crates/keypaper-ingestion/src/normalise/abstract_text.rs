//! Abstract reconstruction from OpenAlex inverted indexes.

use crate::models::InvertedIndex;

/// Rebuild plain text from a word → positions index.
///
/// Words are laid out by ascending position and joined with single spaces.
/// When two words claim the same position they keep the order in which the
/// index lists them. Non-integer positions are ignored.
pub fn reconstruct_abstract(index: Option<&InvertedIndex>) -> String {
    let Some(index) = index else { return String::new() };

    let mut words: Vec<(u64, &str)> = index
        .iter()
        .flat_map(|(word, positions)| {
            positions
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(|p| p.as_u64())
                .map(move |p| (p, word.as_str()))
        })
        .collect();

    // stable: ties keep encounter order
    words.sort_by_key(|(pos, _)| *pos);
    words.iter().map(|(_, w)| *w).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn index(value: serde_json::Value) -> InvertedIndex {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_absent_or_empty() {
        assert_eq!(reconstruct_abstract(None), "");
        assert_eq!(reconstruct_abstract(Some(&index(json!({})))), "");
    }

    #[test]
    fn test_repeated_words() {
        let idx = index(json!({
            "the": [0, 4],
            "cat": [1],
            "sat": [2],
            "on": [3],
            "mat": [5]
        }));
        assert_eq!(reconstruct_abstract(Some(&idx)), "the cat sat on the mat");
    }

    #[test]
    fn test_resplit_matches_words_by_position() {
        let idx = index(json!({
            "zeta": [3],
            "alpha": [0, 2],
            "mid": [1, 4]
        }));
        let text = reconstruct_abstract(Some(&idx));
        let tokens: Vec<&str> = text.split(' ').collect();
        assert_eq!(tokens, vec!["alpha", "mid", "alpha", "zeta", "mid"]);
    }

    #[test]
    fn test_duplicate_position_keeps_encounter_order() {
        let idx = index(json!({ "second": [1], "b": [0], "a": [0] }));
        assert_eq!(reconstruct_abstract(Some(&idx)), "b a second");
    }

    #[test]
    fn test_gaps_are_collapsed() {
        let idx = index(json!({ "start": [0], "end": [10], "junk": ["x"] }));
        assert_eq!(reconstruct_abstract(Some(&idx)), "start end");
    }
}
