//! Typo-tolerant query expansion
//!
//! A query is turned into a set of substring patterns: the query itself,
//! plus (when fuzzy search is on and the query is longer than two
//! characters) every single-character deletion, every adjacent-character
//! swap, and every word of a multi-word query. Wrong-letter typos are not
//! enumerated; substring matching on the other variants covers most of them.

use std::collections::HashSet;

/// Queries this short or shorter are never expanded
const MIN_FUZZY_LENGTH: usize = 2;
/// Words of a multi-word query must be longer than this to become variants
const MIN_WORD_LENGTH: usize = 2;

/// Wrap a term for substring matching
pub fn wrap(term: &str) -> String {
    format!("%{}%", term)
}

/// Ordered substring patterns for one query: primary first, then variants
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    primary: Option<String>,
    variants: Vec<String>,
}

impl PatternSet {
    pub fn expand(text: Option<&str>, fuzzy: bool) -> Self {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Self::default();
        };

        let chars: Vec<char> = text.chars().collect();
        let variants = if fuzzy && chars.len() > MIN_FUZZY_LENGTH {
            Self::fuzzy_variants(text, &chars)
        } else {
            Vec::new()
        };

        Self {
            primary: Some(wrap(text)),
            variants,
        }
    }

    fn fuzzy_variants(text: &str, chars: &[char]) -> Vec<String> {
        let mut candidates = Vec::with_capacity(chars.len() * 2);

        // Missing letter
        for i in 0..chars.len() {
            let term: String = chars[..i].iter().chain(&chars[i + 1..]).collect();
            candidates.push(wrap(&term));
        }

        // Swapped neighbours
        for i in 0..chars.len() - 1 {
            let mut swapped = chars.to_vec();
            swapped.swap(i, i + 1);
            candidates.push(wrap(&swapped.iter().collect::<String>()));
        }

        // Individual words
        if text.contains(' ') {
            candidates.extend(
                text.split(' ')
                    .filter(|word| word.chars().count() > MIN_WORD_LENGTH)
                    .map(wrap),
            );
        }

        let mut seen = HashSet::with_capacity(candidates.len());
        candidates.retain(|candidate| seen.insert(candidate.clone()));
        candidates
    }

    pub fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Primary pattern followed by every variant
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.primary
            .iter()
            .chain(self.variants.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }

    /// Variants without their wildcards, or `None` when nothing was generated
    pub fn alternative_terms(&self) -> Option<Vec<String>> {
        if self.variants.is_empty() {
            return None;
        }
        Some(
            self.variants
                .iter()
                .map(|variant| variant.replace('%', ""))
                .collect(),
        )
    }
}
