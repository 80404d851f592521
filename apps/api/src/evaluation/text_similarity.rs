//! Text similarity: pluggable strategy used by the similarity matcher.
//!
//! Default: `JaccardSimilarity` (lowercase, strip punctuation, drop stop words,
//! Jaccard over the remaining token sets).
//!
//! `AppState` holds an `Arc<dyn TextSimilarity>` so a stemming or embedding
//! backend can be dropped in without touching the matcher's weighting.

use std::collections::HashSet;

/// Characters removed before tokenizing (ASCII and full-width).
const PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'', '/', '\\', '-', '_',
    '、', '。', '！', '？', '「', '」', '『', '』', '（', '）', '・', '：', '；',
];

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "that", "this", "was", "were", "are", "has", "have",
    "had", "of", "to", "in", "on", "at", "an", "or", "as", "by", "is", "it", "be", "my", "we",
    "です", "ます", "した", "して", "こと", "もの", "ため", "など", "として", "について",
];

/// Similarity between two free-text fields, in [0, 1].
pub trait TextSimilarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Token-set Jaccard similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardSimilarity;

impl TextSimilarity for JaccardSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let tokens_a = tokenize(a);
        let tokens_b = tokenize(b);
        jaccard(&tokens_a, &tokens_b)
    }
}

/// Lowercases, strips punctuation and collapses whitespace.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized token set without single-character tokens and stop words.
pub fn tokenize(text: &str) -> HashSet<String> {
    normalize(text)
        .split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .filter(|t| !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// |A ∩ B| / |A ∪ B|; 0 when both sets are empty.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_collapses_whitespace() {
        assert_eq!(normalize("  Hello,   World!  (Sales) "), "hello world sales");
        assert_eq!(normalize("営業、企画。"), "営業企画");
    }

    #[test]
    fn test_punctuation_inside_words_is_removed() {
        assert_eq!(normalize("E-commerce / B2B"), "ecommerce b2b");
        let tokens = tokenize("e-commerce start-up");
        assert!(tokens.contains("ecommerce"));
        assert!(tokens.contains("startup"));
        assert!(!tokens.contains("commerce"));
    }

    #[test]
    fn test_tokenize_drops_short_tokens_and_stop_words() {
        let tokens = tokenize("I led the sales team in a B2B market");
        assert!(tokens.contains("led"));
        assert!(tokens.contains("sales"));
        assert!(tokens.contains("b2b"));
        assert!(!tokens.contains("i"));
        assert!(!tokens.contains("the"));
        assert!(!tokens.contains("in"));
    }

    #[test]
    fn test_identical_text_is_one() {
        let s = JaccardSimilarity;
        let text = "Five years of B2B software sales";
        assert!((s.similarity(text, text) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_text_is_zero() {
        let s = JaccardSimilarity;
        assert_eq!(s.similarity("", "software sales"), 0.0);
        assert_eq!(s.similarity("", ""), 0.0);
        // Only stop words and single characters; no tokens survive.
        assert_eq!(s.similarity("a the of", "a the of"), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let s = JaccardSimilarity;
        let pairs = [
            ("retail store manager", "store manager for apparel retail"),
            ("backend engineer rust", "frontend engineer typescript"),
            ("", "anything here"),
        ];
        for (a, b) in pairs {
            assert_eq!(s.similarity(a, b), s.similarity(b, a));
        }
    }

    #[test]
    fn test_partial_overlap() {
        let s = JaccardSimilarity;
        // {backend, engineer, rust} vs {frontend, engineer, typescript} → 1/5
        let sim = s.similarity("backend engineer rust", "frontend engineer typescript");
        assert!((sim - 0.2).abs() < 1e-9, "sim was {sim}");
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let s = JaccardSimilarity;
        let sim = s.similarity("Economics, Keio University", "economics keio university");
        assert!((sim - 1.0).abs() < f64::EPSILON);
    }
}
