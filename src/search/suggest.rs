use std::collections::HashMap;

/// Upper bound on the suggestion list handed to the search box.
pub const MAX_SUGGESTIONS: usize = 50;

/// One autocomplete option. Value and label are the same candidate string;
/// they are kept apart because the consumer treats them as distinct fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub value: String,
    pub label: String,
}

impl Suggestion {
    fn from_candidate(candidate: &str) -> Self {
        Self {
            value: candidate.to_string(),
            label: candidate.to_string(),
        }
    }
}

/// Bigram-overlap similarity between two strings, in `[0, 1]`.
///
/// Whitespace is stripped before comparison. Identical strings score 1.0;
/// strings too short to form a bigram score 0.0 against anything but
/// themselves. Otherwise the score is the Sørensen–Dice coefficient over
/// character bigrams, counting repeated bigrams with multiplicity.
pub fn similarity(first: &str, second: &str) -> f64 {
    let first: Vec<char> = first.chars().filter(|c| !c.is_whitespace()).collect();
    let second: Vec<char> = second.chars().filter(|c| !c.is_whitespace()).collect();

    if first == second {
        return 1.0;
    }
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    for window in first.windows(2) {
        *bigrams.entry((window[0], window[1])).or_insert(0) += 1;
    }

    let mut shared = 0usize;
    for window in second.windows(2) {
        if let Some(count) = bigrams.get_mut(&(window[0], window[1])) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }

    (2 * shared) as f64 / (first.len() + second.len() - 2) as f64
}

/// Ranks candidates against the typed query, best first, capped at
/// [`MAX_SUGGESTIONS`].
///
/// Total and synchronous: no input errors, an empty candidate list yields an
/// empty result. The sort is stable, so candidates with equal scores keep
/// their source order; with an empty query every score ties and the original
/// order survives.
pub fn rank(query: &str, candidates: &[String]) -> Vec<Suggestion> {
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|candidate| (similarity(query, candidate), candidate))
        .collect();

    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored.truncate(MAX_SUGGESTIONS);

    scored
        .into_iter()
        .map(|(_, candidate)| Suggestion::from_candidate(candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("Diamond", "Diamond"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(similarity("Oak Log", "OakLog"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(similarity("Stone", "Wool"), 0.0);
    }

    #[test]
    fn single_characters_only_match_themselves() {
        assert_eq!(similarity("a", "apple"), 0.0);
        assert_eq!(similarity("a", "a"), 1.0);
    }

    #[test]
    fn repeated_bigrams_count_with_multiplicity() {
        // "aaa" has bigrams {aa, aa}; "aa" has {aa}: 2 * 1 / (2 + 1).
        let score = similarity("aaa", "aa");
        assert!((score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_candidate_list_yields_nothing() {
        assert!(rank("anything", &[]).is_empty());
        assert!(rank("", &[]).is_empty());
    }

    #[test]
    fn empty_query_preserves_source_order() {
        let candidates = names(&["Stone", "Dirt", "Oak Log"]);
        let ranked = rank("", &candidates);
        let values: Vec<&str> = ranked.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["Stone", "Dirt", "Oak Log"]);
    }

    #[test]
    fn output_is_capped() {
        let candidates: Vec<String> = (0..80).map(|i| format!("Item {i}")).collect();
        assert_eq!(rank("", &candidates).len(), MAX_SUGGESTIONS);
        assert_eq!(rank("Item", &candidates).len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn exact_match_ranks_first() {
        let candidates = names(&["Dirt", "Diorite", "Diamond"]);
        let ranked = rank("Diamond", &candidates);
        assert_eq!(ranked[0].value, "Diamond");
        assert_eq!(similarity("Diamond", "Diamond"), 1.0);
    }

    #[test]
    fn shared_bigrams_beat_unrelated_candidates() {
        let candidates = names(&["Diamond", "Dirt", "Diorite"]);
        let ranked = rank("dia", &candidates);

        assert_eq!(ranked.len(), 3);
        let position = |name: &str| {
            ranked
                .iter()
                .position(|s| s.value == name)
                .unwrap_or(usize::MAX)
        };
        // "dia" shares a bigram with "Diamond" but none with "Dirt".
        assert!(position("Diamond") < position("Dirt"));
    }

    #[test]
    fn ties_keep_source_order() {
        let candidates = names(&["Granite", "Andesite", "Gravel"]);
        let ranked = rank("zzzz", &candidates);
        let values: Vec<&str> = ranked.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["Granite", "Andesite", "Gravel"]);
    }
}
