use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::options::SearchOptions;
use crate::query::Query;
use crate::scorer::{NucleoScorer, Scorer};

/// Source of candidate paths.
///
/// `paths` hands out one immutable snapshot; the pipeline reads it exactly
/// once per call and never mutates it. Ordering is whatever the source
/// currently returns, and the pipeline preserves it whenever it is not
/// actively ranking.
pub trait Scanner {
    fn paths(&self) -> Arc<[String]>;
}

/// A fixed candidate list is itself a scanner. Handy for hosts that manage
/// their own enumeration, and for tests.
impl Scanner for Arc<[String]> {
    fn paths(&self) -> Arc<[String]> {
        Arc::clone(self)
    }
}

/// One candidate that survived the abbreviation filter.
///
/// Score and output text are materialized up front so ranking never calls
/// back into the scorer. A `PathMatch` is only meaningful for the
/// abbreviation it was computed against; matches from different queries must
/// not be compared.
#[derive(Debug, Clone)]
pub struct PathMatch {
    path: String,
    score: f64,
}

impl PathMatch {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn into_path(self) -> String {
        self.path
    }
}

impl fmt::Display for PathMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Ranking order: higher score first, ties broken by ascending lexicographic
/// byte order of the path. `str` ordering already places a string before any
/// longer string it prefixes, so the shorter of two equally scored paths with
/// a shared prefix wins. `total_cmp` keeps this a strict total order even for
/// pathological scores.
fn rank(a: &PathMatch, b: &PathMatch) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.path.cmp(&b.path))
}

/// Filters, ranks, and truncates a scanner's candidates per query.
///
/// Stateless between calls apart from the scanner it was built over: every
/// invocation reads one fresh snapshot and returns an independent result.
pub struct Matcher<S> {
    scanner: S,
    scorer: Box<dyn Scorer>,
}

impl<S: Scanner> Matcher<S> {
    /// Build a matcher over `scanner` with the default nucleo-backed scorer.
    pub fn new(scanner: S) -> Self {
        Self::with_scorer(scanner, Box::new(NucleoScorer::new()))
    }

    /// Build a matcher with a caller-supplied scoring strategy.
    pub fn with_scorer(scanner: S, scorer: Box<dyn Scorer>) -> Self {
        Self { scanner, scorer }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub fn scanner_mut(&mut self) -> &mut S {
        &mut self.scanner
    }

    /// Filter the scanner's current snapshot down to the candidates matching
    /// `abbrev`, preserving snapshot order. An empty abbreviation matches
    /// every candidate without consulting the scorer.
    pub fn matches_for(&mut self, abbrev: &str) -> Vec<PathMatch> {
        let paths = self.scanner.paths();
        if abbrev.is_empty() {
            return paths
                .iter()
                .map(|path| PathMatch {
                    path: path.clone(),
                    score: 0.0,
                })
                .collect();
        }

        let matches: Vec<PathMatch> = paths
            .iter()
            .filter_map(|path| {
                self.scorer.score(path, abbrev).map(|score| PathMatch {
                    path: path.clone(),
                    score,
                })
            })
            .collect();
        log::debug!(
            "abbrev {:?}: {} of {} candidates match",
            abbrev,
            matches.len(),
            paths.len()
        );
        matches
    }

    /// Run the full pipeline: filter, rank (iff `abbrev` is non-empty), clamp
    /// to `options.limit`, and project to plain path strings.
    ///
    /// With an empty abbreviation the snapshot order is the output order;
    /// nothing useful distinguishes scores before the user has typed
    /// anything, and hosts expect the plain listing while browsing.
    pub fn sorted_matches_for(&mut self, abbrev: &str, options: &SearchOptions) -> Vec<String> {
        let mut matches = self.matches_for(abbrev);
        if !abbrev.is_empty() {
            // Stable sort: equal (score, path) pairs keep their snapshot
            // order, so reruns are reproducible.
            matches.sort_by(rank);
        }
        matches.truncate(options.effective_limit(matches.len()));
        matches.into_iter().map(PathMatch::into_path).collect()
    }

    /// Entry point for loosely typed hosts; see [`Query::from_value`].
    pub fn run_query(&mut self, query: &Query) -> Vec<String> {
        self.sorted_matches_for(&query.abbrev, &query.options)
    }
}
