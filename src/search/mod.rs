//! Free-text card search.
//!
//! Matches a query case-insensitively against each card's name and then its
//! description, in corpus order. A card can produce one hit per field.
//! Every hit carries a short window of context around the match for the
//! results dropdown; the jump itself is `Command::SearchJumpTo`.
//!
//! Indices and context widths are counted in characters, not bytes.

use serde::Serialize;

use crate::cards::{CardDefinition, CardRegistry};
use crate::core::SearchConfig;

const ELLIPSIS: &str = "...";

/// Which card field a hit was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MatchField {
    Name,
    Description,
}

/// One search result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchHit<'a> {
    pub card: &'a CardDefinition,
    pub field: MatchField,
    /// Character index of the match within the field.
    pub match_index: usize,
    pub context_before: String,
    pub matched_text: String,
    pub context_after: String,
}

/// Search the corpus.
///
/// Queries shorter than `config.min_query_len` characters return nothing.
///
/// ```
/// use pathology_cards::cards::CardRegistry;
/// use pathology_cards::core::SearchConfig;
/// use pathology_cards::search::{search_cards, MatchField};
///
/// let registry = CardRegistry::builtin().unwrap();
/// let hits = search_cards(&registry, "SYCOPH", &SearchConfig::default());
///
/// assert_eq!(hits[0].card.name, "Sycophancy");
/// assert_eq!(hits[0].field, MatchField::Name);
/// assert_eq!(hits[0].matched_text, "Sycoph");
/// ```
#[must_use]
pub fn search_cards<'a>(
    registry: &'a CardRegistry,
    query: &str,
    config: &SearchConfig,
) -> Vec<SearchHit<'a>> {
    if query.chars().count() < config.min_query_len {
        return Vec::new();
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let mut hits = Vec::new();

    for card in registry.iter() {
        for (field, text) in [
            (MatchField::Name, card.name.as_str()),
            (MatchField::Description, card.description.as_str()),
        ] {
            if let Some(hit) = match_field(card, field, text, &needle, config.context_chars) {
                hits.push(hit);
            }
        }
    }

    log::debug!("search {query:?}: {} hits", hits.len());
    hits
}

fn match_field<'a>(
    card: &'a CardDefinition,
    field: MatchField,
    text: &str,
    needle: &[char],
    context_chars: usize,
) -> Option<SearchHit<'a>> {
    let chars: Vec<char> = text.chars().collect();
    let (start, end) = find_case_insensitive(&chars, needle)?;

    let before_start = start.saturating_sub(context_chars);
    let after_end = (end + context_chars).min(chars.len());

    let mut context_before = String::new();
    if before_start > 0 {
        context_before.push_str(ELLIPSIS);
    }
    context_before.extend(&chars[before_start..start]);

    let mut context_after: String = chars[end..after_end].iter().collect();
    if after_end < chars.len() {
        context_after.push_str(ELLIPSIS);
    }

    Some(SearchHit {
        card,
        field,
        match_index: start,
        context_before,
        matched_text: chars[start..end].iter().collect(),
        context_after,
    })
}

/// Find the first span of `haystack` whose lowercase form equals `needle`.
///
/// Returns character indices `[start, end)`.
fn find_case_insensitive(haystack: &[char], needle: &[char]) -> Option<(usize, usize)> {
    (0..haystack.len()).find_map(|start| {
        let mut pending = needle;
        for (offset, &c) in haystack[start..].iter().enumerate() {
            for lower in c.to_lowercase() {
                match pending.split_first() {
                    Some((&expected, rest)) if expected == lower => pending = rest,
                    _ => return None,
                }
            }
            if pending.is_empty() {
                return Some((start, start + offset + 1));
            }
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Category};

    fn registry() -> CardRegistry {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new(
            CardId::new(1),
            "Prompt Injection",
            "Instructions smuggled into inputs override the operator's intent.",
            Category::InfectiousParasitic,
        ));
        registry.register(CardDefinition::new(
            CardId::new(2),
            "Model Drift",
            "Performance erodes as inputs drift.",
            Category::DegenerativeResource,
        ));
        registry
    }

    #[test]
    fn test_short_query_matches_nothing() {
        let registry = registry();
        assert!(search_cards(&registry, "p", &SearchConfig::default()).is_empty());
        assert!(search_cards(&registry, "", &SearchConfig::default()).is_empty());
    }

    #[test]
    fn test_name_then_description_in_corpus_order() {
        let registry = registry();
        let hits = search_cards(&registry, "drift", &SearchConfig::default());

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].card.id, CardId::new(2));
        assert_eq!(hits[0].field, MatchField::Name);
        assert_eq!(hits[1].field, MatchField::Description);
    }

    #[test]
    fn test_hits_across_cards() {
        let registry = registry();
        let hits = search_cards(&registry, "inputs", &SearchConfig::default());

        let ids: Vec<_> = hits.iter().map(|h| h.card.id.raw()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_context_window() {
        let registry = registry();
        let hits = search_cards(&registry, "OVERRIDE", &SearchConfig::default());

        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.match_index, 34);
        assert_eq!(hit.context_before, "...into inputs ");
        assert_eq!(hit.matched_text, "override");
        assert_eq!(hit.context_after, " the operato...");
    }

    #[test]
    fn test_context_without_truncation() {
        let registry = registry();
        let hits = search_cards(&registry, "prompt", &SearchConfig::default());

        assert_eq!(hits[0].context_before, "");
        assert_eq!(hits[0].matched_text, "Prompt");
        assert_eq!(hits[0].context_after, " Injection");
    }

    #[test]
    fn test_custom_config() {
        let registry = registry();
        let config = SearchConfig {
            min_query_len: 4,
            context_chars: 2,
        };

        assert!(search_cards(&registry, "dri", &config).is_empty());

        let hits = search_cards(&registry, "model", &config);
        assert_eq!(hits[0].context_after, " D...");
    }

    #[test]
    fn test_find_case_insensitive_unicode() {
        let haystack: Vec<char> = "Größe STRASSE".chars().collect();
        let needle: Vec<char> = "größe".chars().collect();

        assert_eq!(find_case_insensitive(&haystack, &needle), Some((0, 5)));

        let missing: Vec<char> = "xyz".chars().collect();
        assert_eq!(find_case_insensitive(&haystack, &missing), None);
    }
}
