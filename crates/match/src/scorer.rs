use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Utf32String};

/// Match quality oracle consulted once per candidate per query.
///
/// `None` means the abbreviation does not match the candidate as an ordered
/// subsequence; `Some(score)` is the match quality, higher is better. Scores
/// are only comparable between candidates scored against the same
/// abbreviation. Implementations are never consulted for an empty
/// abbreviation: the pipeline treats that as "every candidate matches".
pub trait Scorer {
    fn score(&mut self, candidate: &str, abbrev: &str) -> Option<f64>;
}

/// Default scorer backed by nucleo's fzf-style matching.
///
/// The abbreviation is compiled to a smart-case pattern once and reused for
/// the whole candidate loop.
pub struct NucleoScorer {
    matcher: nucleo_matcher::Matcher,
    compiled: Option<(String, Pattern)>,
}

impl NucleoScorer {
    pub fn new() -> Self {
        Self {
            matcher: nucleo_matcher::Matcher::new(Config::DEFAULT),
            compiled: None,
        }
    }
}

impl Default for NucleoScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer for NucleoScorer {
    fn score(&mut self, candidate: &str, abbrev: &str) -> Option<f64> {
        if !matches!(&self.compiled, Some((cached, _)) if cached == abbrev) {
            let pattern = Pattern::parse(abbrev, CaseMatching::Smart, Normalization::Smart);
            self.compiled = Some((abbrev.to_string(), pattern));
        }
        let (_, pattern) = self.compiled.as_ref()?;
        let haystack = Utf32String::from(candidate);
        pattern
            .score(haystack.slice(..), &mut self.matcher)
            .map(f64::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_subsequence_matches_only() {
        let mut scorer = NucleoScorer::new();
        assert!(scorer.score("src/matcher.rs", "mat").is_some());
        assert!(scorer.score("src/matcher.rs", "smr").is_some());
        assert!(scorer.score("docs/guide.md", "zzz").is_none());
        // Subsequence order matters: "tam" never appears in order.
        assert!(scorer.score("docs/guide.md", "edg").is_none());
    }

    #[test]
    fn word_start_matches_outrank_mid_word_matches() {
        let mut scorer = NucleoScorer::new();
        let at_start = scorer.score("matcher.rs", "mat").unwrap();
        let mid_word = scorer.score("format.rs", "mat").unwrap();
        assert!(at_start > mid_word);
    }

    #[test]
    fn lowercase_abbrev_matches_any_case() {
        let mut scorer = NucleoScorer::new();
        assert!(scorer.score("README.md", "readme").is_some());
    }

    #[test]
    fn compiled_pattern_refreshes_per_abbrev() {
        let mut scorer = NucleoScorer::new();
        assert!(scorer.score("alpha.rs", "al").is_some());
        assert!(scorer.score("beta.rs", "be").is_some());
        assert!(scorer.score("alpha.rs", "be").is_none());
    }
}
